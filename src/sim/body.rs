//! Moving circular bodies
//!
//! Pairwise time-of-impact between two circles moving at constant velocity,
//! and the elastic impulse exchanged along their line of centers.

use super::error::SimError;
use super::vector::Vector2;

/// A rigid circle with position, velocity, radius and mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vector2,
    pub vel: Vector2,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Create a body, rejecting non-finite position or velocity and
    /// non-positive or non-finite radius and mass
    pub fn new(pos: Vector2, vel: Vector2, radius: f64, mass: f64) -> Result<Self, SimError> {
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(SimError::NonFiniteState {
                pos: pos.into(),
                vel: vel.into(),
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    #[inline]
    pub fn momentum(&self) -> Vector2 {
        self.vel.scale(self.mass)
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.dot(self.vel)
    }

    /// Where the center will be after `t` seconds at the current velocity
    #[inline]
    pub fn position_at(&self, t: f64) -> Vector2 {
        self.pos + self.vel.scale(t)
    }

    /// Move linearly for `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.pos = self.position_at(dt);
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        let d = self.pos - other.pos;
        let r = self.radius + other.radius;
        d.dot(d) < r * r
    }

    /// True when the two bodies are closing along their line of centers
    pub fn approaching(&self, other: &Body) -> bool {
        let pos = self.pos - other.pos;
        let vel = self.vel - other.vel;
        pos.dot(vel) < 0.0
    }

    /// Time until this body first touches `other`.
    ///
    /// `Some(0.0)` means the bodies already overlap. `None` means they will
    /// not touch while moving at their current velocities: they are
    /// separating, moving in lockstep, or their closest approach misses.
    pub fn collide_time(&self, other: &Body) -> Option<f64> {
        let pos = self.pos - other.pos;
        let vel = self.vel - other.vel;
        let r = self.radius + other.radius;

        if pos.dot(pos) < r * r {
            return Some(0.0);
        }

        let speed_sq = vel.dot(vel);
        if speed_sq == 0.0 {
            return None;
        }

        // Time that minimizes |pos + vel * t|
        let t_min = -vel.dot_ratio(pos);
        if !(t_min >= 0.0) {
            return None;
        }

        let d_min = pos + vel.scale(t_min);
        let len_min = d_min.dot(d_min);
        if len_min > r * r {
            return None;
        }

        // Back off from closest approach to the first touch
        let t_del = ((r * r - len_min) / speed_sq).sqrt();
        Some((t_min - t_del).max(0.0))
    }

    /// Exchange an elastic impulse with `other` along the line of centers.
    ///
    /// Only velocities change. Returns `false` without touching either body
    /// when the centers coincide and no line of centers exists.
    pub fn collide_event(&mut self, other: &mut Body) -> bool {
        let pos = self.pos - other.pos;
        let vel = self.vel - other.vel;

        if pos.dot(pos) == 0.0 {
            log::warn!("Skipping impulse between bodies with coincident centers");
            return false;
        }

        let vel_normal = pos.scale(pos.dot_ratio(vel));
        let total = self.mass + other.mass;
        self.vel = self.vel - vel_normal.scale(2.0 * other.mass / total);
        other.vel = other.vel + vel_normal.scale(2.0 * self.mass / total);
        true
    }
}

/// Advance `body` by `dt` seconds at constant velocity
#[inline]
pub fn advance(body: &mut Body, dt: f64) {
    body.advance(dt);
}
