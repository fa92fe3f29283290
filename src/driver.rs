//! Frame loop: clear, update, render, once per display refresh.

use crate::chain::Reptile;
use crate::float::Float;
use crate::observer::TickObserver;
use crate::pointer::PointerState;
use crate::surface::Surface;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// Host side of the frame loop.
///
/// Implementors present whatever was drawn in the previous frame, wait for
/// the next display refresh and write the latest pointer position before
/// handing back the surface to draw on.
pub trait FrameScheduler<F: Float> {
    type Surface: Surface<F> + ?Sized;

    /// `None` once the host can no longer show frames (window closed).
    fn next_frame(&mut self, pointer: &mut PointerState<F>) -> Option<&mut Self::Surface>;
}

/// Shared flag that ends `Driver::run` before its next tick.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Owns the chain and the pointer state and runs ticks against a host.
pub struct Driver<F: Float> {
    reptile: Reptile<F>,
    pointer: PointerState<F>,
    stop: StopHandle,
    frame: u64,
}

impl<F: Float> Driver<F> {
    pub fn new(reptile: Reptile<F>, pointer: PointerState<F>) -> Self {
        Driver {
            reptile,
            pointer,
            stop: StopHandle::new(),
            frame: 0,
        }
    }

    /// One full frame. The chain finishes updating before anything is drawn.
    pub fn tick<S: Surface<F> + ?Sized, O: TickObserver<F>>(
        &mut self,
        surface: &mut S,
        observer: &mut O,
    ) {
        surface.clear_all();
        self.reptile.update(&self.pointer, observer);
        self.reptile.render(surface, observer);

        self.frame += 1;
        observer.on_tick_complete(self.frame);
    }

    /// Tick once per frame the scheduler hands out until the stop flag is
    /// raised or the host goes away. Returns the number of ticks run.
    pub fn run<H: FrameScheduler<F>, O: TickObserver<F>>(
        &mut self,
        scheduler: &mut H,
        observer: &mut O,
    ) -> u64 {
        let start = self.frame;
        while !self.stop.is_stopped() {
            let Some(surface) = scheduler.next_frame(&mut self.pointer) else {
                break;
            };
            self.tick(surface, observer);
        }
        self.frame - start
    }

    /// Handle that stops `run` from elsewhere, including another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn reptile(&self) -> &Reptile<F> {
        &self.reptile
    }

    pub fn pointer(&self) -> &PointerState<F> {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState<F> {
        &mut self.pointer
    }

    /// Ticks completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
