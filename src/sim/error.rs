//! Error type for simulation setup
//!
//! Runtime physics queries never fail: a degenerate query answers "no
//! collision". Only construction and scene loading can be rejected.

/// Error type for building bodies, boundaries and scenes.
#[derive(Debug)]
pub enum SimError {
    /// Body radius must be finite and strictly positive
    InvalidRadius(f64),
    /// Body mass must be finite and strictly positive
    InvalidMass(f64),
    /// Body position or velocity has a NaN or infinite component
    NonFiniteState { pos: [f64; 2], vel: [f64; 2] },
    /// Boundary endpoints coincide, so no normal exists
    DegenerateBoundary { x: f64, y: f64 },
    /// Arena dimensions leave no room inside the margin
    InvalidArena { width: f64, height: f64, margin: f64 },
    /// Scene file could not be read
    Io(std::io::Error),
    /// Scene file is not valid JSON for a scene
    Parse(serde_json::Error),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidRadius(r) => write!(f, "Body radius must be positive, got {}", r),
            SimError::InvalidMass(m) => write!(f, "Body mass must be positive, got {}", m),
            SimError::NonFiniteState { pos, vel } => write!(
                f,
                "Body state must be finite, got pos {:?} vel {:?}",
                pos, vel
            ),
            SimError::DegenerateBoundary { x, y } => {
                write!(f, "Boundary endpoints coincide at ({}, {})", x, y)
            }
            SimError::InvalidArena {
                width,
                height,
                margin,
            } => write!(
                f,
                "Arena {}x{} has no interior with margin {}",
                width, height, margin
            ),
            SimError::Io(e) => write!(f, "IO error: {}", e),
            SimError::Parse(e) => write!(f, "Scene parse error: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Parse(err)
    }
}
