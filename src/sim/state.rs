//! Simulation state and collision events
//!
//! The state only holds what the stepping loop needs: the bodies, the walls
//! and the simulated clock. Wall-clock time belongs to whoever drives `step`.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::boundary::Boundary;
use super::vector::Vector2;

/// What a body ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionTarget {
    /// Index into `SimulationState::boundaries`
    Boundary(usize),
    /// Index into `SimulationState::bodies`
    Body(usize),
}

/// A resolved collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Simulated time of the impact (seconds since the state was built)
    pub time: f64,
    /// Index of the body whose response was applied
    pub body: usize,
    pub target: CollisionTarget,
}

/// Bodies and walls plus the simulated clock
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub bodies: Vec<Body>,
    pub boundaries: Vec<Boundary>,
    /// Simulated seconds elapsed
    pub elapsed: f64,
    /// Number of completed steps
    pub time_ticks: u64,
}

impl SimulationState {
    pub fn new(bodies: Vec<Body>, boundaries: Vec<Boundary>) -> Self {
        Self {
            bodies,
            boundaries,
            elapsed: 0.0,
            time_ticks: 0,
        }
    }

    pub fn total_momentum(&self) -> Vector2 {
        self.bodies
            .iter()
            .fold(Vector2::ZERO, |acc, b| acc + b.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Move every body linearly for `dt` seconds
    pub fn advance_all(&mut self, dt: f64) {
        for body in &mut self.bodies {
            body.advance(dt);
        }
    }

    /// True if any two bodies overlap
    pub fn has_overlap(&self) -> bool {
        self.bodies.iter().enumerate().any(|(i, a)| {
            self.bodies[i + 1..].iter().any(|b| a.overlaps(b))
        })
    }
}
