//! Configuration for building a chain.

use crate::error::ReptileError;
use crate::float::Float;
use crate::surface::{Color, Stroke};

/// Parameters fixed at chain construction.
///
/// # Builder Pattern
/// ```
/// use reptile::config::ReptileConfig;
///
/// let config: ReptileConfig<f32> = ReptileConfig::new()
///     .with_segment_count(40)
///     .with_segment_length(12.0)
///     .with_follow_speed(0.08)
///     .with_damping(0.95);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ReptileConfig<F: Float> {
    /// Number of segments in the chain. Default: 100.
    pub segment_count: usize,
    /// Drawn length of every segment. Default: 15.
    pub segment_length: F,
    /// Proportional gain pulling a segment toward its target. Default: 0.05.
    pub follow_speed: F,
    /// Velocity multiplier applied every follow call, in [0, 1]. Default: 0.98.
    pub damping: F,
    /// Style every segment is drawn with. Default: white, width 4.
    pub stroke: Stroke<F>,
}

impl<F: Float> ReptileConfig<F> {
    pub const DEFAULT_SEGMENT_COUNT: usize = 100;

    /// Create a new config with default values.
    pub fn new() -> Self {
        ReptileConfig {
            segment_count: Self::DEFAULT_SEGMENT_COUNT,
            segment_length: F::from_f64(15.0),
            follow_speed: F::from_f64(0.05),
            damping: F::from_f64(0.98),
            stroke: Stroke::new(Color::WHITE, F::from_f64(4.0)),
        }
    }

    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_segment_length(mut self, segment_length: F) -> Self {
        self.segment_length = segment_length;
        self
    }

    pub fn with_follow_speed(mut self, follow_speed: F) -> Self {
        self.follow_speed = follow_speed;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke<F>) -> Self {
        self.stroke = stroke;
        self
    }

    /// Check every parameter. Called by `Reptile::new`.
    ///
    /// A gain that is in range but large enough to resonate is accepted.
    pub fn validate(&self) -> Result<(), ReptileError> {
        if self.segment_count == 0 {
            return Err(ReptileError::InvalidSegmentCount);
        }
        if !self.segment_length.is_finite() || self.segment_length < F::zero() {
            return Err(ReptileError::InvalidSegmentLength);
        }
        if !self.follow_speed.is_finite() || self.follow_speed < F::zero() {
            return Err(ReptileError::InvalidFollowSpeed);
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return Err(ReptileError::InvalidDamping);
        }
        if !self.stroke.width.is_finite() || self.stroke.width <= F::zero() {
            return Err(ReptileError::InvalidStrokeWidth);
        }
        Ok(())
    }
}

impl<F: Float> Default for ReptileConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let config: ReptileConfig<f64> = ReptileConfig::default();
        assert_eq!(config.segment_count, 100);
        assert_eq!(config.segment_length, 15.0);
        assert_eq!(config.follow_speed, 0.05);
        assert_eq!(config.damping, 0.98);
        assert_eq!(config.stroke.color, Color::WHITE);
        assert_eq!(config.stroke.width, 4.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_parameters() {
        let base: ReptileConfig<f32> = ReptileConfig::new();
        assert_eq!(
            base.clone().with_segment_count(0).validate(),
            Err(ReptileError::InvalidSegmentCount)
        );
        assert_eq!(
            base.clone().with_segment_length(f32::NAN).validate(),
            Err(ReptileError::InvalidSegmentLength)
        );
        assert_eq!(
            base.clone().with_follow_speed(-0.1).validate(),
            Err(ReptileError::InvalidFollowSpeed)
        );
        assert_eq!(
            base.clone().with_damping(1.5).validate(),
            Err(ReptileError::InvalidDamping)
        );
        assert_eq!(
            base.clone().with_damping(f32::NAN).validate(),
            Err(ReptileError::InvalidDamping)
        );
        assert_eq!(
            base.with_stroke(Stroke::new(Color::WHITE, 0.0)).validate(),
            Err(ReptileError::InvalidStrokeWidth)
        );
    }
}
