use reptile::{NoOpTickObserver, PointerState, RecordingSurface, Reptile, ReptileConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Reptile Demo ----

/// Chain driven from JavaScript: the page forwards pointer moves and draws
/// the returned line list on its own canvas every animation frame.
///
/// Runs in `f64` like the JS numbers it exchanges; the tail of a long chain
/// can travel far beyond what `f32` holds.
#[wasm_bindgen]
pub struct ReptileDemo {
    reptile: Reptile<f64>,
    pointer: PointerState<f64>,
    surface: RecordingSurface<f64>,
}

#[wasm_bindgen]
impl ReptileDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<ReptileDemo, JsError> {
        Self::build(width, height, ReptileConfig::new())
    }

    pub fn with_segments(
        width: f64,
        height: f64,
        count: usize,
        length: f64,
    ) -> Result<ReptileDemo, JsError> {
        let config = ReptileConfig::new()
            .with_segment_count(count)
            .with_segment_length(length);
        Self::build(width, height, config)
    }

    fn build(width: f64, height: f64, config: ReptileConfig<f64>) -> Result<ReptileDemo, JsError> {
        let surface = RecordingSurface::new(width, height);
        let reptile =
            Reptile::centered(&surface, &config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ReptileDemo {
            reptile,
            pointer: PointerState::centered(&surface),
            surface,
        })
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(Vec2::new(x, y));
    }

    pub fn update(&mut self) {
        self.reptile.update(&self.pointer, &mut NoOpTickObserver);
    }

    /// Returns flat [x0, y0, x1, y1, ...] line endpoints, head first.
    /// The page clears its own canvas before drawing them.
    pub fn lines(&mut self) -> Vec<f64> {
        self.surface.reset();
        self.reptile.render(&mut self.surface, &mut NoOpTickObserver);

        let mut out = Vec::with_capacity(self.reptile.len() * 4);
        for (from, to) in self.surface.lines() {
            out.extend_from_slice(&[from.x, from.y, to.x, to.y]);
        }
        out
    }

    pub fn segment_count(&self) -> usize {
        self.reptile.len()
    }

    pub fn stroke_width(&self) -> f64 {
        self.reptile.stroke().width
    }

    /// Stroke color as a CSS `rgb(...)` string.
    pub fn stroke_color(&self) -> String {
        let c = self.reptile.stroke().color;
        format!("rgb({}, {}, {})", c.r, c.g, c.b)
    }
}
