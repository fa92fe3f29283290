//! Pointer position handed to the chain every tick.

use crate::float::Float;
use crate::surface::Surface;
use crate::vec::Vec2;

/// Latest known pointer location, in surface coordinates.
///
/// Owned by whoever drives the chain and passed into `Reptile::update`.
/// Front ends write it between ticks; the chain only reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState<F: Float> {
    position: Vec2<F>,
}

impl<F: Float> PointerState<F> {
    pub fn new(position: Vec2<F>) -> Self {
        PointerState { position }
    }

    /// Pointer resting at the center of `surface`, the value used before
    /// any input arrives.
    pub fn centered<S: Surface<F> + ?Sized>(surface: &S) -> Self {
        PointerState { position: surface.center() }
    }

    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    pub fn move_to(&mut self, position: Vec2<F>) {
        self.position = position;
    }
}
