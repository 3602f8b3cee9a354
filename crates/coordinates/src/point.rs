use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

use derive_more::{Add, Constructor, Neg, Sub};
use euclid::Angle;

use crate::{GeometryError, Number};

/// A position (or offset) on the plane. Compared exactly, no tolerance.
#[derive(Debug, Default, Copy, Clone, PartialEq, Constructor, Add, Sub, Neg)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    pub fn try_div(self, scalar: T) -> Result<Self, GeometryError> {
        if scalar.is_zero() {
            return Err(GeometryError::DivisionByZero);
        }
        self.checked_map(|c| c.checked_shrink(scalar))
    }

    /// Like `* scalar`, but integer overflow is an error rather than a panic.
    pub fn try_mul(self, scalar: T) -> Result<Self, GeometryError> {
        self.checked_map(|c| c.checked_scale(scalar))
    }

    fn checked_map(self, f: impl Fn(T) -> Option<T>) -> Result<Self, GeometryError> {
        match (f(self.x), f(self.y)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(GeometryError::Overflow),
        }
    }

    /// Euclidean distance, always in double precision.
    // Promote before subtracting so integer points neither truncate nor overflow.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x.as_() - other.x.as_();
        let dy = self.y.as_() - other.y.as_();
        (dx * dx + dy * dy).sqrt()
    }

    pub fn to_f64(&self) -> Point<f64> {
        Point::new(self.x.as_(), self.y.as_())
    }
}

impl Point<f64> {
    pub fn from_angle_and_length(angle: Angle<f64>, length: f64) -> Self {
        let (sin, cos) = angle.radians.sin_cos();
        Self::new(length * cos, length * sin)
    }

    pub fn about_eq(&self, other: Self, tolerance: f64) -> bool {
        self.distance(&other) < tolerance
    }
}

// Overflows the way the primitive does; use `try_mul` for untrusted integers.
impl<T: Number> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: Number> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

// Forwards the formatter so `{:.2}` applies to both coordinates
impl<T: Number> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}
