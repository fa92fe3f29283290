//! Planar vector type used for positions, velocities and line endpoints.

use crate::float::Float;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// 2D vector in surface coordinates (x right, y down on most surfaces).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector pointing along `angle` radians.
    pub fn from_angle(angle: F) -> Self { Vec2 { x: angle.cos(), y: angle.sin() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn length(self) -> F { (self.x * self.x + self.y * self.y).sqrt() }

    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Angle of the vector in radians, `atan2(y, x)`.
    pub fn angle(self) -> F { F::atan2(self.y, self.x) }

    /// True when neither component is NaN or infinite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    fn mul_assign(&mut self, rhs: F) { *self = self.scale(rhs); }
}
