//! Scene configuration
//!
//! A scene is the arena size plus the initial bodies and the fixed timestep
//! the driver should use. Scenes load from JSON; any field left out falls
//! back to the default scene (one ball heading for the right wall of a
//! 600x600 arena).
//!
//! ```json
//! {
//!   "arena": { "width": 600.0, "height": 600.0, "margin": 5.0 },
//!   "bodies": [
//!     { "pos": [100.0, 275.0], "vel": [250.0, 0.0], "radius": 50.0, "mass": 10.0 },
//!     { "pos": [500.0, 325.0], "vel": [-250.0, 0.0], "radius": 50.0, "mass": 10.0 }
//!   ],
//!   "dt": 0.01,
//!   "steps": 1000
//! }
//! ```

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Body, Boundary, SimError, SimulationState, Vector2};

/// Rectangular arena walled in `margin` units from each edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            margin: ARENA_MARGIN,
        }
    }
}

impl ArenaConfig {
    /// Interior bounds `(min, max)` of the walled area
    pub fn interior(&self) -> (Vector2, Vector2) {
        (
            Vector2::new(self.margin, self.margin),
            Vector2::new(self.width - self.margin, self.height - self.margin),
        )
    }

    /// Left, right, top and bottom walls, in that order
    pub fn boundaries(&self) -> Result<Vec<Boundary>, SimError> {
        let (lo, hi) = self.interior();
        if !(lo.x() < hi.x() && lo.y() < hi.y()) {
            return Err(SimError::InvalidArena {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }

        Ok(vec![
            Boundary::from_coords(lo.x(), lo.y(), lo.x(), hi.y())?,
            Boundary::from_coords(hi.x(), lo.y(), hi.x(), hi.y())?,
            Boundary::from_coords(lo.x(), lo.y(), hi.x(), lo.y())?,
            Boundary::from_coords(lo.x(), hi.y(), hi.x(), hi.y())?,
        ])
    }
}

/// Initial state of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub pos: Vector2,
    pub vel: Vector2,
    pub radius: f64,
    pub mass: f64,
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body, SimError> {
        Body::new(self.pos, self.vel, self.radius, self.mass)
    }
}

/// A complete scene: arena, bodies and stepping parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub arena: ArenaConfig,
    pub bodies: Vec<BodyConfig>,
    /// Fixed step length in seconds
    pub dt: f64,
    /// Number of steps the driver runs
    pub steps: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            bodies: vec![BodyConfig {
                pos: Vector2::new(100.0, 275.0),
                vel: Vector2::new(250.0, 0.0),
                radius: 50.0,
                mass: 10.0,
            }],
            dt: SIM_DT,
            steps: DEFAULT_STEPS,
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate up to `count` non-overlapping bodies placed uniformly inside
    /// `arena`. The same seed always yields the same scene. Fewer bodies are
    /// returned if the arena is too crowded to fit them; requests above
    /// `RANDOM_MAX_BODIES` are capped.
    pub fn random(seed: u64, count: usize, arena: ArenaConfig) -> Self {
        if count > RANDOM_MAX_BODIES {
            log::warn!(
                "Requested {} bodies, capping at {}",
                count,
                RANDOM_MAX_BODIES
            );
        }
        let count = count.min(RANDOM_MAX_BODIES);
        let mut rng = Pcg32::seed_from_u64(seed);
        let (lo, hi) = arena.interior();
        let mut bodies: Vec<BodyConfig> = Vec::with_capacity(count);

        let max_radius = RANDOM_MAX_RADIUS
            .min((hi.x() - lo.x()) / 2.0)
            .min((hi.y() - lo.y()) / 2.0);

        if max_radius > RANDOM_MIN_RADIUS {
            let max_attempts = count.saturating_mul(RANDOM_PLACEMENT_ATTEMPTS);
            let mut attempts = 0;
            while bodies.len() < count && attempts < max_attempts {
                attempts += 1;

                let radius = rng.random_range(RANDOM_MIN_RADIUS..max_radius);
                if lo.x() + radius >= hi.x() - radius || lo.y() + radius >= hi.y() - radius {
                    continue;
                }
                let pos = Vector2::new(
                    rng.random_range(lo.x() + radius..hi.x() - radius),
                    rng.random_range(lo.y() + radius..hi.y() - radius),
                );
                let clear = bodies.iter().all(|b| {
                    let d = pos - b.pos;
                    let r = radius + b.radius;
                    d.dot(d) >= r * r
                });
                if !clear {
                    continue;
                }

                let angle = rng.random_range(0.0..std::f64::consts::TAU);
                let speed = rng.random_range(RANDOM_MIN_SPEED..RANDOM_MAX_SPEED);
                bodies.push(BodyConfig {
                    pos,
                    vel: Vector2::new(angle.cos(), angle.sin()).scale(speed),
                    radius,
                    // Mass scales with area, so the default ball (r = 50) weighs 10
                    mass: radius * radius / 250.0,
                });
            }
        }

        if bodies.len() < count {
            log::warn!(
                "Placed only {} of {} bodies in a {}x{} arena",
                bodies.len(),
                count,
                arena.width,
                arena.height
            );
        }

        Self {
            arena,
            bodies,
            ..Self::default()
        }
    }

    /// Validate the scene and turn it into a runnable state
    pub fn build(&self) -> Result<SimulationState, SimError> {
        let boundaries = self.arena.boundaries()?;
        let bodies = self
            .bodies
            .iter()
            .map(BodyConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SimulationState::new(bodies, boundaries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_builds() {
        let state = SceneConfig::default().build().unwrap();
        assert_eq!(state.bodies.len(), 1);
        assert_eq!(state.boundaries.len(), 4);
        assert_eq!(state.bodies[0].mass(), 10.0);
        assert_eq!(state.boundaries[1].p(), Vector2::new(595.0, 5.0));
        assert_eq!(state.boundaries[1].q(), Vector2::new(595.0, 595.0));
    }

    #[test]
    fn test_walls_face_consistent_axes() {
        let walls = ArenaConfig::default().boundaries().unwrap();
        let normals: Vec<_> = walls.iter().map(Boundary::normal).collect();
        assert_eq!(normals[0], Vector2::new(-1.0, 0.0));
        assert_eq!(normals[1], Vector2::new(-1.0, 0.0));
        assert_eq!(normals[2], Vector2::new(0.0, 1.0));
        assert_eq!(normals[3], Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_invalid_arena() {
        let arena = ArenaConfig {
            width: 10.0,
            height: 600.0,
            margin: 5.0,
        };
        assert!(matches!(
            arena.boundaries(),
            Err(SimError::InvalidArena { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let scene = SceneConfig::from_json_str(
            r#"{ "bodies": [ { "pos": [300, 300], "vel": [0, -100], "radius": 20, "mass": 2 } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.arena, ArenaConfig::default());
        assert_eq!(scene.dt, SIM_DT);
        assert_eq!(scene.bodies[0].vel, Vector2::new(0.0, -100.0));
    }

    #[test]
    fn test_json_round_trip() {
        let scene = SceneConfig::random(7, 5, ArenaConfig::default());
        let back = SceneConfig::from_json_str(&scene.to_json().unwrap()).unwrap();
        assert_eq!(scene, back);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = SceneConfig::from_json_str("{ \"dt\": \"fast\" }").unwrap_err();
        assert!(matches!(err, SimError::Parse(_)));
    }

    #[test]
    fn test_bad_body_rejected_at_build() {
        let mut scene = SceneConfig::default();
        scene.bodies[0].radius = -1.0;
        assert!(matches!(scene.build(), Err(SimError::InvalidRadius(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_random_scene_is_deterministic_and_clear() {
        let a = SceneConfig::random(42, 12, ArenaConfig::default());
        let b = SceneConfig::random(42, 12, ArenaConfig::default());
        assert_eq!(a, b);
        assert_eq!(a.bodies.len(), 12);

        let state = a.build().unwrap();
        assert!(!state.has_overlap());
        let (lo, hi) = a.arena.interior();
        for body in &state.bodies {
            let r = body.radius();
            assert!(body.pos.x() - r >= lo.x() && body.pos.x() + r <= hi.x());
            assert!(body.pos.y() - r >= lo.y() && body.pos.y() + r <= hi.y());
        }

        let c = SceneConfig::random(43, 12, ArenaConfig::default());
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_scene_caps_huge_requests() {
        let tiny = ArenaConfig {
            width: 20.0,
            height: 20.0,
            margin: 5.0,
        };
        assert!(SceneConfig::random(1, usize::MAX, tiny).bodies.is_empty());

        let scene = SceneConfig::random(1, usize::MAX, ArenaConfig::default());
        assert!(!scene.bodies.is_empty());
        assert!(scene.bodies.len() <= RANDOM_MAX_BODIES);
        assert!(!scene.build().unwrap().has_overlap());
    }

    #[test]
    fn test_random_scene_in_tiny_arena_is_empty() {
        let arena = ArenaConfig {
            width: 20.0,
            height: 20.0,
            margin: 5.0,
        };
        assert!(SceneConfig::random(1, 3, arena).bodies.is_empty());
    }
}
