//! Bounce Sim - swept collisions for circles in a walled 2D arena
//!
//! Core modules:
//! - `sim`: Collision math (vectors, walls, bodies) and the stepping loop
//! - `scene`: Data-driven scene setup, loaded from JSON or seeded at random
//!
//! The crate never reads wall-clock time or draws anything; a driver owns the
//! clock and calls [`sim::step`] with the elapsed time.

pub mod scene;
pub mod sim;

pub use scene::{ArenaConfig, BodyConfig, SceneConfig};
pub use sim::{Body, Boundary, CollisionEvent, SimError, SimulationState, Vector2};

/// Simulation configuration constants
pub mod consts {
    /// Default fixed simulation timestep (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Default number of steps the driver runs (10 simulated seconds)
    pub const DEFAULT_STEPS: u32 = 1200;
    /// Impacts resolved per step before the rest of the step is advanced
    /// without response
    pub const MAX_EVENTS_PER_STEP: usize = 64;

    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 600.0;
    pub const ARENA_HEIGHT: f64 = 600.0;
    pub const ARENA_MARGIN: f64 = 5.0;

    /// Random scene generation
    pub const RANDOM_MIN_RADIUS: f64 = 10.0;
    pub const RANDOM_MAX_RADIUS: f64 = 40.0;
    pub const RANDOM_MIN_SPEED: f64 = 50.0;
    pub const RANDOM_MAX_SPEED: f64 = 300.0;
    /// Placement tries per requested body before giving up
    pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;
    /// Upper bound on bodies requested from a random scene
    pub const RANDOM_MAX_BODIES: usize = 1024;
}
