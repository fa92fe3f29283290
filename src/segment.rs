//! A single bone: a damped point-mass that chases a target.

use crate::float::Float;
use crate::surface::{Stroke, Surface};
use crate::vec::Vec2;

/// One link of the chain.
///
/// The segment carries its own velocity across frames, so `follow` acts as a
/// damped spring toward the target rather than snapping to it. Its `length`
/// only affects how it is drawn: nothing keeps consecutive segments
/// `length` apart, and the gap stretches and shrinks with the motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    position: Vec2<F>,
    velocity: Vec2<F>,
    heading: F,
    length: F,
    follow_speed: F,
    damping: F,
}

impl<F: Float> Segment<F> {
    /// Segment at rest at `position`, heading 0, with the default follow
    /// speed (0.05) and damping (0.98).
    pub fn new(position: Vec2<F>, length: F) -> Self {
        Self::with_motion(position, length, F::from_f64(0.05), F::from_f64(0.98))
    }

    pub fn with_motion(position: Vec2<F>, length: F, follow_speed: F, damping: F) -> Self {
        Segment {
            position,
            velocity: Vec2::zero(),
            heading: F::zero(),
            length,
            follow_speed,
            damping,
        }
    }

    /// Advance one frame toward `target`.
    ///
    /// The pull is proportional to the distance, unnormalized and unclamped,
    /// and damping is applied after the pull on every call.
    pub fn follow(&mut self, target: Vec2<F>) {
        let delta = target - self.position;
        self.heading = delta.angle();

        self.velocity += delta * self.follow_speed;
        self.velocity *= self.damping;

        self.position += self.velocity;
    }

    /// Far end of the drawn bone: `length` along `heading` from `position`.
    pub fn endpoint(&self) -> Vec2<F> {
        self.position + Vec2::from_angle(self.heading) * self.length
    }

    /// Draw the bone as one line from `position` to `endpoint()`.
    pub fn render<S: Surface<F> + ?Sized>(&self, surface: &mut S, stroke: &Stroke<F>) {
        surface.draw_line(self.position, self.endpoint(), stroke);
    }

    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    pub fn velocity(&self) -> Vec2<F> {
        self.velocity
    }

    /// Direction toward the last target, in radians.
    pub fn heading(&self) -> F {
        self.heading
    }

    pub fn length(&self) -> F {
        self.length
    }

    pub fn follow_speed(&self) -> F {
        self.follow_speed
    }

    pub fn damping(&self) -> F {
        self.damping
    }
}
