//! The reptile: a chain of segments where each one chases the one before it.

use crate::config::ReptileConfig;
use crate::error::ReptileError;
use crate::float::Float;
use crate::observer::TickObserver;
use crate::pointer::PointerState;
use crate::segment::Segment;
use crate::surface::{Stroke, Surface};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// An ordered chain of segments. Index 0 is the head and chases the
/// pointer; every other segment chases its predecessor.
///
/// The segment count is fixed when the chain is built.
#[derive(Clone, Debug)]
pub struct Reptile<F: Float> {
    segments: AllocVec<Segment<F>>,
    stroke: Stroke<F>,
}

impl<F: Float> Reptile<F> {
    /// Build a chain with every segment stacked at `origin`.
    pub fn new(origin: Vec2<F>, config: &ReptileConfig<F>) -> Result<Self, ReptileError> {
        config.validate()?;

        let mut segments = AllocVec::with_capacity(config.segment_count);
        for _ in 0..config.segment_count {
            segments.push(Segment::with_motion(
                origin,
                config.segment_length,
                config.follow_speed,
                config.damping,
            ));
        }

        Ok(Reptile { segments, stroke: config.stroke })
    }

    /// Build a chain at the center of `surface`. The surface size is read
    /// once here; later resizes do not move the chain.
    pub fn centered<S: Surface<F> + ?Sized>(
        surface: &S,
        config: &ReptileConfig<F>,
    ) -> Result<Self, ReptileError> {
        Self::new(surface.center(), config)
    }

    /// Advance the whole chain one frame.
    ///
    /// The head follows the pointer, then each segment follows the position
    /// its predecessor reached in this same call.
    pub fn update<O: TickObserver<F>>(&mut self, pointer: &PointerState<F>, observer: &mut O) {
        let mut target = pointer.position();

        for (index, segment) in self.segments.iter_mut().enumerate() {
            segment.follow(target);
            observer.on_follow(index, target, segment);
            target = segment.position();
        }

        observer.on_update_complete();
    }

    /// Draw every segment, head first.
    pub fn render<S: Surface<F> + ?Sized, O: TickObserver<F>>(
        &self,
        surface: &mut S,
        observer: &mut O,
    ) {
        for segment in self.segments.iter() {
            segment.render(surface, &self.stroke);
        }

        observer.on_render_complete();
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.segments.iter().map(|s| s.position()).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment<F>> {
        self.segments.get(index)
    }

    pub fn head(&self) -> &Segment<F> {
        // validate() guarantees at least one segment
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment<F> {
        &self.segments[self.segments.len() - 1]
    }

    pub fn stroke(&self) -> &Stroke<F> {
        &self.stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpTickObserver;
    use crate::surface::RecordingSurface;

    #[test]
    fn builds_configured_count_at_origin() {
        let config = ReptileConfig::new().with_segment_count(7);
        let reptile = Reptile::new(Vec2::new(3.0f32, 4.0), &config).unwrap();
        assert_eq!(reptile.len(), 7);
        assert!(reptile.segments().iter().all(|s| s.position() == Vec2::new(3.0, 4.0)));
        assert!(reptile.segments().iter().all(|s| s.velocity() == Vec2::zero()));
    }

    #[test]
    fn centered_uses_surface_center() {
        let surface = RecordingSurface::new(800.0f64, 600.0);
        let reptile = Reptile::centered(&surface, &ReptileConfig::new()).unwrap();
        assert_eq!(reptile.len(), 100);
        assert_eq!(reptile.tail().position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn rejects_empty_chain() {
        let config = ReptileConfig::<f32>::new().with_segment_count(0);
        assert_eq!(
            Reptile::new(Vec2::zero(), &config).err(),
            Some(ReptileError::InvalidSegmentCount)
        );
    }

    #[test]
    fn pointer_on_origin_keeps_chain_still() {
        let config = ReptileConfig::new().with_segment_count(5);
        let mut reptile = Reptile::new(Vec2::new(10.0f64, 10.0), &config).unwrap();
        let pointer = PointerState::new(Vec2::new(10.0, 10.0));
        for _ in 0..10 {
            reptile.update(&pointer, &mut NoOpTickObserver);
        }
        assert!(reptile.positions().iter().all(|p| *p == Vec2::new(10.0, 10.0)));
    }
}
