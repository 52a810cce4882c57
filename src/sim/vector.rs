//! Immutable 2D vector value type
//!
//! Thin wrapper over `glam::DVec2` that exposes the small, explicit method
//! set the collision math is written in. Every operation returns a new value.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector in double precision
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector2(DVec2);

impl Vector2 {
    pub const ZERO: Self = Self(DVec2::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    #[inline]
    pub fn scale(self, a: f64) -> Self {
        Self(self.0 * a)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// `self·other / self·self`: the factor that scales `self` onto the
    /// projection of `other`. NaN when `self` is zero.
    #[inline]
    pub fn dot_ratio(self, other: Self) -> f64 {
        self.dot(other) / self.dot(self)
    }

    /// Euclidean length
    #[inline]
    pub fn norm(self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction, or zero for a zero vector
    #[inline]
    pub fn normalise(self) -> Self {
        Self(self.0.normalize_or_zero())
    }

    /// Unit vector in the same direction, `None` when the norm is zero or
    /// not finite
    #[inline]
    pub fn try_normalise(self) -> Option<Self> {
        self.0.try_normalize().map(Self)
    }

    /// Rotate by 90°: `(x, y) -> (y, -x)`
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.0.y, -self.0.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.0.x, v.0.y]
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector2::sub(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn test_basic_ops() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);
        assert_eq!(a.add(b), Vector2::new(4.0, 2.0));
        assert_eq!(a.sub(b), Vector2::new(2.0, 6.0));
        assert_eq!(a.scale(2.0), Vector2::new(6.0, 8.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(-a, Vector2::new(-3.0, -4.0));
    }

    #[test]
    fn test_perpendicular_rotates_clockwise() {
        assert_eq!(Vector2::new(1.0, 0.0).perpendicular(), Vector2::new(0.0, -1.0));
        assert_eq!(Vector2::new(0.0, 2.0).perpendicular(), Vector2::new(2.0, 0.0));
    }

    #[test]
    fn test_dot_ratio_projects() {
        let axis = Vector2::new(2.0, 0.0);
        let v = Vector2::new(3.0, 7.0);
        // projection of v onto axis is (3, 0) = axis * 1.5
        assert_eq!(axis.dot_ratio(v), 1.5);
        assert!(Vector2::ZERO.dot_ratio(v).is_nan());
    }

    #[test]
    fn test_normalise_is_unit_length() {
        // Normalising divides by the norm; it does not multiply by it
        let n = Vector2::new(0.0, -590.0).normalise();
        assert_eq!(n, Vector2::new(0.0, -1.0));
        assert!(approx(Vector2::new(3.0, 4.0).normalise().norm(), 1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector2::new(1.0, -2.0).is_finite());
        assert!(!Vector2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vector2::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_normalise_zero() {
        assert_eq!(Vector2::ZERO.normalise(), Vector2::ZERO);
        assert_eq!(Vector2::ZERO.try_normalise(), None);
    }

    #[test]
    fn test_serde_as_pair() {
        let v: Vector2 = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(v, Vector2::new(1.5, -2.0));
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.5,-2.0]");
    }

    proptest! {
        #[test]
        fn add_then_sub_round_trips(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = Vector2::new(ax, ay);
            let b = Vector2::new(bx, by);
            let back = a.add(b).sub(b);
            prop_assert!(approx(back.x(), ax));
            prop_assert!(approx(back.y(), ay));
        }

        #[test]
        fn perpendicular_is_orthogonal(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let a = Vector2::new(x, y);
            prop_assert_eq!(a.perpendicular().dot(a), 0.0);
        }
    }
}
