//! Tick observer trait for monitoring the chain as it updates and draws.

use crate::float::Float;
use crate::segment::Segment;
use crate::vec::Vec2;

/// Trait for observing chain updates and frame ticks.
///
/// Implement this trait to trace the follow order, count frames or profile
/// a front end. All methods have default no-op implementations.
pub trait TickObserver<F: Float> {
    /// Called after segment `index` has followed `target`; `segment` holds
    /// its updated state.
    fn on_follow(&mut self, _index: usize, _target: Vec2<F>, _segment: &Segment<F>) {}

    /// Called once every segment has followed its target.
    fn on_update_complete(&mut self) {}

    /// Called once every segment has been drawn.
    fn on_render_complete(&mut self) {}

    /// Called by the driver when tick number `frame` is fully complete.
    fn on_tick_complete(&mut self, _frame: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl<F: Float> TickObserver<F> for NoOpTickObserver {}
