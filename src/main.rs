use std::process::ExitCode;
use std::time::{Duration, Instant};

use minifb::{Key, MouseMode, Window, WindowOptions};
use reptile::{
    Color, Driver, FrameScheduler, NoOpTickObserver, PointerState, Rect, Reptile, ReptileConfig,
    Stroke, Surface, Vec2,
};

const W: usize = 1024;
const H: usize = 768;
const FRAME: Duration = Duration::from_micros(16_600);

/// Software framebuffer in minifb's `0RGB` layout.
struct Canvas {
    buf: Vec<u32>,
    width: usize,
    height: usize,
    background: u32,
}

impl Canvas {
    fn new(width: usize, height: usize, background: Color) -> Self {
        Canvas {
            buf: vec![background.to_0rgb(); width * height],
            width,
            height,
            background: background.to_0rgb(),
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buf = vec![self.background; width * height];
    }

    /// Square brush of side `size` centered on `pos`, clipped to the buffer.
    fn stamp(&mut self, pos: Vec2<f32>, size: f32, color: u32) {
        let half = size * 0.5;
        let x0 = (pos.x - half).round().max(0.0) as usize;
        let y0 = (pos.y - half).round().max(0.0) as usize;
        let x1 = ((pos.x + half).round().max(0.0) as usize).min(self.width);
        let y1 = ((pos.y + half).round().max(0.0) as usize).min(self.height);
        for y in y0..y1 {
            let row = y * self.width;
            for x in x0..x1 {
                self.buf[row + x] = color;
            }
        }
    }
}

/// Clip the segment `from`-`to` to the box `[-margin, width + margin] x
/// [-margin, height + margin]` (Liang-Barsky). `None` when nothing is left.
///
/// Chain segments can sit far outside the window; clipping first keeps the
/// raster loop bounded by the buffer size.
fn clip_line(
    from: Vec2<f64>,
    to: Vec2<f64>,
    width: f64,
    height: f64,
    margin: f64,
) -> Option<(Vec2<f64>, Vec2<f64>)> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }
    let d = to - from;
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    let edges = [
        (-d.x, from.x + margin),
        (d.x, width + margin - from.x),
        (-d.y, from.y + margin),
        (d.y, height + margin - from.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    // Rounding on long lines can leave a point just past the box.
    let bound = |v: Vec2<f64>| {
        Vec2::new(
            v.x.clamp(-margin, width + margin),
            v.y.clamp(-margin, height + margin),
        )
    };
    Some((bound(from + d * t0), bound(from + d * t1)))
}

impl Surface<f64> for Canvas {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self, region: Rect<f64>) {
        let x0 = (region.origin.x.max(0.0) as usize).min(self.width);
        let y0 = (region.origin.y.max(0.0) as usize).min(self.height);
        let x1 = ((region.origin.x + region.size.x).max(0.0) as usize).min(self.width);
        let y1 = ((region.origin.y + region.size.y).max(0.0) as usize).min(self.height);
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let row = y * self.width;
            self.buf[row + x0..row + x1].fill(self.background);
        }
    }

    fn draw_line(&mut self, from: Vec2<f64>, to: Vec2<f64>, stroke: &Stroke<f64>) {
        let Some((from, to)) =
            clip_line(from, to, self.width(), self.height(), stroke.width)
        else {
            return;
        };
        // Pixel space from here on.
        let from = Vec2::new(from.x as f32, from.y as f32);
        let to = Vec2::new(to.x as f32, to.y as f32);
        let color = stroke.color.to_0rgb();
        let steps = (to - from).length().ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(from + (to - from) * t, stroke.width as f32, color);
        }
    }
}

struct WindowHost {
    window: Window,
    canvas: Canvas,
    drawn: bool,
}

impl FrameScheduler<f64> for WindowHost {
    type Surface = Canvas;

    fn next_frame(&mut self, pointer: &mut PointerState<f64>) -> Option<&mut Canvas> {
        if self.drawn {
            let canvas = &self.canvas;
            if let Err(e) = self
                .window
                .update_with_buffer(&canvas.buf, canvas.width, canvas.height)
            {
                eprintln!("failed to present frame: {e}");
                return None;
            }
        } else {
            self.window.update();
            self.drawn = true;
        }

        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return None;
        }

        // The chain keeps its geometry; only the framebuffer follows the window.
        let (width, height) = self.window.get_size();
        if (width, height) != (self.canvas.width, self.canvas.height) {
            self.canvas.resize(width, height);
        }

        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
            pointer.move_to(Vec2::new(x as f64, y as f64));
        }

        Some(&mut self.canvas)
    }
}

fn main() -> ExitCode {
    let options = WindowOptions {
        resize: true,
        ..WindowOptions::default()
    };
    let mut window = match Window::new("Reptile", W, H, options) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("failed to open window: {e}");
            return ExitCode::FAILURE;
        }
    };
    window.limit_update_rate(Some(FRAME));

    let canvas = Canvas::new(W, H, Color::BLACK);
    let config: ReptileConfig<f64> = ReptileConfig::new();
    let reptile = match Reptile::centered(&canvas, &config) {
        Ok(reptile) => reptile,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let pointer = PointerState::centered(&canvas);
    println!("segments {}", reptile.len());

    let mut driver = Driver::new(reptile, pointer);
    let mut host = WindowHost {
        window,
        canvas,
        drawn: false,
    };

    let before = Instant::now();
    let frames = driver.run(&mut host, &mut NoOpTickObserver);
    let secs = before.elapsed().as_secs_f32();
    println!(
        "Ran {} frames in {:.1} seconds ({:.1} fps)",
        frames,
        secs,
        frames as f32 / secs.max(f32::EPSILON)
    );

    ExitCode::SUCCESS
}
