//! Frame timing and cancellation shared by every effect loop.

use std::cell::Cell;
use std::rc::Rc;

/// Cloneable liveness flag. Every scheduled frame checks it before touching
/// its surface, so a frame already queued when the effect is torn down
/// becomes a no-op.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Converts animation-frame timestamps (milliseconds) into elapsed and
/// delta seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
    frames: u64,
}

/// Timing for one tick. Times are relative to the first tick so they keep
/// full `f32` precision however long the page has been open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first tick.
    pub elapsed_sec: f32,
    /// Seconds since the previous tick (0 on the first one).
    pub dt_sec: f32,
    pub frame: u64,
}

// A frame gap longer than this (hidden tab) is treated as a single frame.
const MAX_DT_SEC: f64 = 0.25;

impl FrameClock {
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let dt_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        let frame = self.frames;
        self.frames += 1;
        FrameTime {
            elapsed_sec: ((now_ms - origin).max(0.0) / 1000.0) as f32,
            dt_sec: (dt_ms / 1000.0).min(MAX_DT_SEC) as f32,
            frame,
        }
    }
}
