//! Straight walls
//!
//! A boundary is built from two endpoints but collides as the infinite line
//! through them. The endpoints only fix the line and its normal; impacts are
//! never clipped to the segment.

use super::body::Body;
use super::error::SimError;
use super::vector::Vector2;

/// A wall through `p` and `q` with unit normal `n = perpendicular(p - q)`
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    p: Vector2,
    q: Vector2,
    n: Vector2,
}

impl Boundary {
    pub fn new(p: Vector2, q: Vector2) -> Result<Self, SimError> {
        let n = (p - q)
            .perpendicular()
            .try_normalise()
            .ok_or(SimError::DegenerateBoundary { x: p.x(), y: p.y() })?;
        Ok(Self { p, q, n })
    }

    /// Build from four scalar coordinates `(x1, y1)`-`(x2, y2)`
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, SimError> {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    #[inline]
    pub fn p(&self) -> Vector2 {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Vector2 {
        self.q
    }

    /// Unit normal
    #[inline]
    pub fn normal(&self) -> Vector2 {
        self.n
    }

    /// Signed distance from the line to `point`, positive on the normal side
    #[inline]
    pub fn signed_distance(&self, point: Vector2) -> f64 {
        self.n.dot(point - self.p)
    }

    /// Time until the near edge of `body` reaches the line.
    ///
    /// `None` when the body moves parallel to the wall or the crossing lies
    /// in the past. A body already straddling the line reports `None` too,
    /// since one of its two crossings is behind it.
    pub fn collide_time(&self, body: &Body) -> Option<f64> {
        let vel = self.n.dot(body.vel);
        if vel == 0.0 {
            return None;
        }

        // Offset of the line as seen from the body, along the normal
        let pos = self.n.dot(self.p - body.pos);
        let r = body.radius();

        let t1 = (pos + r) / vel;
        let t2 = (pos - r) / vel;
        let t = t1.min(t2);
        if t >= 0.0 { Some(t) } else { None }
    }

    /// True when `body` already overlaps the line and is still moving
    /// deeper into it
    pub fn penetrating(&self, body: &Body) -> bool {
        let d = self.signed_distance(body.pos);
        d.abs() < body.radius() && d * self.n.dot(body.vel) < 0.0
    }

    /// Reflect the body's velocity off the wall (perfectly elastic, wall of
    /// infinite mass). Applying it twice restores the original velocity.
    pub fn collide_event(&self, body: &mut Body) {
        let vel_n = self.n.scale(2.0 * self.n.dot(body.vel));
        body.vel = body.vel - vel_n;
    }
}
