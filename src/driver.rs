//! Host-facing frame scheduling.
//!
//! The engine never schedules itself. A windowed host implements [`RedrawScheduler`] on top of
//! its own invalidate/vsync mechanism and calls [`FrameDriver::tick`] from its paint callback;
//! an offline host uses [`FrameLoop`] instead.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::{FrameReport, ResizeOutcome, RingEngine};
use crate::foundation::error::{RingfieldError, RingfieldResult};
use crate::render::sink::RenderSink;

/// Host hook that asks for another frame to be delivered later.
pub trait RedrawScheduler {
    /// Schedule the next frame callback.
    fn request_redraw(&mut self);
}

/// Scheduler that only counts requests; useful for hosts that poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountingScheduler {
    /// Number of redraws requested so far.
    pub requests: u64,
}

impl RedrawScheduler for CountingScheduler {
    fn request_redraw(&mut self) {
        self.requests += 1;
    }
}

/// Glue between an engine and a host scheduler.
pub struct FrameDriver<S> {
    scheduler: S,
}

impl<S: RedrawScheduler> FrameDriver<S> {
    /// Wrap a host scheduler.
    pub fn new(scheduler: S) -> Self {
        Self { scheduler }
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Render one frame, then request the next one.
    ///
    /// The redraw is requested even when the frame fails, so a transient sink error does not
    /// stall the animation.
    pub fn tick(
        &mut self,
        engine: &mut RingEngine,
        sink: &mut dyn RenderSink,
    ) -> RingfieldResult<FrameReport> {
        let out = engine.on_frame(sink);
        self.scheduler.request_redraw();
        out
    }
}

/// Iterative frame loop for offline hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    limit: Option<u64>,
}

/// Whether [`FrameLoop::run`] should keep going after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Render another frame.
    Continue,
    /// Stop after this frame.
    Stop,
}

impl FrameLoop {
    /// Loop until the callback stops it.
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// Loop for at most `frames` frames.
    pub fn with_limit(frames: u64) -> Self {
        Self {
            limit: Some(frames),
        }
    }

    /// Drive `engine` into `sink`, calling `after_frame` once per rendered frame.
    ///
    /// Returns the number of frames rendered.
    pub fn run<K, F>(
        &self,
        engine: &mut RingEngine,
        sink: &mut K,
        mut after_frame: F,
    ) -> RingfieldResult<u64>
    where
        K: RenderSink,
        F: FnMut(&mut K, &FrameReport) -> RingfieldResult<LoopControl>,
    {
        let mut rendered = 0u64;
        while self.limit.is_none_or(|limit| rendered < limit) {
            let report = engine.on_frame(sink)?;
            rendered += 1;
            if after_frame(sink, &report)? == LoopControl::Stop {
                break;
            }
        }
        Ok(rendered)
    }
}

/// Engine shared between a resize thread and a frame thread.
///
/// Resize replaces the ring list under the lock, so a frame always sees either the old list
/// or the new one.
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<RingEngine>>,
}

impl SharedEngine {
    /// Take ownership of an engine.
    pub fn new(engine: RingEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Lock the engine for direct access.
    pub fn lock(&self) -> RingfieldResult<MutexGuard<'_, RingEngine>> {
        self.inner
            .lock()
            .map_err(|_| RingfieldError::render("ring engine lock poisoned"))
    }

    /// Forward to [`RingEngine::on_resize`].
    pub fn on_resize(&self, width: f64, height: f64) -> RingfieldResult<ResizeOutcome> {
        Ok(self.lock()?.on_resize(width, height))
    }

    /// Forward to [`RingEngine::on_frame`].
    pub fn on_frame(&self, sink: &mut dyn RenderSink) -> RingfieldResult<FrameReport> {
        self.lock()?.on_frame(sink)
    }
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
