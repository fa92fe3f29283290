//! Error types for chain construction.

use core::fmt;

/// Errors reported when a configuration cannot build a chain.
///
/// Updating and rendering a built chain never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ReptileError {
    /// A chain needs at least one segment.
    InvalidSegmentCount,
    /// Segment length must be finite and non-negative.
    InvalidSegmentLength,
    /// Follow speed must be finite and non-negative.
    InvalidFollowSpeed,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Stroke width must be finite and positive.
    InvalidStrokeWidth,
}

impl fmt::Display for ReptileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReptileError::InvalidSegmentCount => write!(f, "chain needs at least one segment"),
            ReptileError::InvalidSegmentLength => {
                write!(f, "segment length must be finite and non-negative")
            }
            ReptileError::InvalidFollowSpeed => {
                write!(f, "follow speed must be finite and non-negative")
            }
            ReptileError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ReptileError::InvalidStrokeWidth => {
                write!(f, "stroke width must be finite and positive")
            }
        }
    }
}
