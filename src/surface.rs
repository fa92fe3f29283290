//! Drawing surface boundary and an in-memory recording surface.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// An RGBA color with 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Packed `0RGB`, the framebuffer layout of most software windows.
    pub const fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Line style: color and width in surface units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke<F: Float> {
    pub color: Color,
    pub width: F,
}

impl<F: Float> Stroke<F> {
    pub fn new(color: Color, width: F) -> Self {
        Stroke { color, width }
    }
}

/// Axis-aligned rectangle, `origin` at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<F: Float> {
    pub origin: Vec2<F>,
    pub size: Vec2<F>,
}

impl<F: Float> Rect<F> {
    pub fn new(origin: Vec2<F>, size: Vec2<F>) -> Self {
        Rect { origin, size }
    }
}

/// Something the chain can be drawn on.
///
/// Dimensions may change between frames (a resized window); the chain reads
/// them only when it is built.
pub trait Surface<F: Float> {
    fn width(&self) -> F;

    fn height(&self) -> F;

    /// Erase `region` to the background.
    fn clear(&mut self, region: Rect<F>);

    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, stroke: &Stroke<F>);

    fn center(&self) -> Vec2<F> {
        Vec2::new(self.width() * F::half(), self.height() * F::half())
    }

    /// Erase the whole surface at its current size.
    fn clear_all(&mut self) {
        let region = Rect::new(Vec2::zero(), Vec2::new(self.width(), self.height()));
        self.clear(region);
    }
}

/// A single drawing call, as captured by `RecordingSurface`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Clear(Rect<F>),
    Line {
        from: Vec2<F>,
        to: Vec2<F>,
        stroke: Stroke<F>,
    },
}

/// Surface that records every call instead of drawing.
///
/// Used for snapshot-style tests and by front ends that hand the line list
/// to another renderer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface<F: Float> {
    width: F,
    height: F,
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> RecordingSurface<F> {
    pub fn new(width: F, height: F) -> Self {
        RecordingSurface {
            width,
            height,
            commands: AllocVec::new(),
        }
    }

    pub fn resize(&mut self, width: F, height: F) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    /// Line endpoints in draw order, clears skipped.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            DrawCommand::Clear(_) => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl<F: Float> Surface<F> for RecordingSurface<F> {
    fn width(&self) -> F {
        self.width
    }

    fn height(&self) -> F {
        self.height
    }

    fn clear(&mut self, region: Rect<F>) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, stroke: &Stroke<F>) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_0rgb() {
        assert_eq!(Color::WHITE.to_0rgb(), 0x00FF_FFFF);
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_0rgb(), 0x0012_3456);
        assert_eq!(Color::BLACK.to_0rgb(), 0);
    }

    #[test]
    fn clear_all_covers_current_size() {
        let mut surface = RecordingSurface::new(640.0f32, 480.0);
        surface.resize(800.0, 600.0);
        surface.clear_all();
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Clear(Rect::new(Vec2::zero(), Vec2::new(800.0, 600.0)))]
        );
        assert_eq!(surface.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn lines_skip_clears() {
        let mut surface = RecordingSurface::new(10.0f64, 10.0);
        let stroke = Stroke::new(Color::WHITE, 1.0);
        surface.clear_all();
        surface.draw_line(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), &stroke);
        let lines: AllocVec<_> = surface.lines().collect();
        assert_eq!(lines, [(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))]);
        surface.reset();
        assert!(surface.commands().is_empty());
    }
}
