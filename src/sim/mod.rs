//! Collision simulation module
//!
//! Pure geometry and physics, evaluated on demand:
//! - No wall-clock time (the caller passes elapsed seconds)
//! - Stable iteration order (by index) so runs are reproducible
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod error;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{Body, advance};
pub use boundary::Boundary;
pub use error::SimError;
pub use state::{CollisionEvent, CollisionTarget, SimulationState};
pub use tick::{next_impact, resolve, step};
pub use vector::Vector2;
