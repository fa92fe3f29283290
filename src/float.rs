//! Floating-point abstraction so the chain can run in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// The numeric operations the follow rule and the renderer need.
///
/// Implemented for `f32` and `f64` on top of `libm`, so no `std` is required.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;
    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;
    /// Convert from f64 (for constants and configuration).
    fn from_f64(v: f64) -> Self;
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(v: f64) -> Self { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atan2_quadrants() {
        assert!((<f64 as Float>::atan2(0.0, 1.0)).abs() < 1e-12);
        assert!((<f64 as Float>::atan2(1.0, 0.0) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((<f64 as Float>::atan2(0.0, -1.0) - core::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
    }
}
