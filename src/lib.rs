//! Pointer-following bone chains for snake and reptile trails.
//!
//! `reptile` moves a chain of segments ("bones") after a pointer. Each
//! segment is a damped point-mass chasing the segment in front of it, so the
//! body lags, stretches and settles instead of snapping into place.
//!
//! # Features
//!
//! - **Damped pursuit**: proportional pull plus velocity damping, O(1) per segment
//! - **Strict head-to-tail update**: each segment chases its predecessor's new position
//! - **Injectable input**: the pointer is a plain value passed into `update`
//! - **Stoppable frame loop**: `Driver` with a `FrameScheduler` host and a `StopHandle`
//! - **Observable**: trace follows and ticks via the `TickObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use reptile::{NoOpTickObserver, PointerState, RecordingSurface, Reptile, ReptileConfig, Vec2};
//!
//! let mut surface = RecordingSurface::new(640.0f32, 480.0);
//! let mut reptile = Reptile::centered(&surface, &ReptileConfig::new()).unwrap();
//! let pointer = PointerState::new(Vec2::new(600.0, 40.0));
//!
//! reptile.update(&pointer, &mut NoOpTickObserver);
//! reptile.render(&mut surface, &mut NoOpTickObserver);
//! assert_eq!(surface.lines().count(), 100);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod segment;
pub mod chain;
pub mod pointer;
pub mod surface;
pub mod driver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use segment::Segment;
pub use chain::Reptile;
pub use pointer::PointerState;
pub use surface::{Color, DrawCommand, Rect, RecordingSurface, Stroke, Surface};
pub use driver::{Driver, FrameScheduler, StopHandle};
pub use observer::{NoOpTickObserver, TickObserver};
pub use config::ReptileConfig;
pub use error::ReptileError;
