//! Input state written by event listeners and read by the frame loop.
//!
//! Both sides live on the UI thread, so the front-end shares these through
//! `Rc<RefCell<_>>`; writes are last-write-wins between frames.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last pointer position in surface pixels; `None` until the first move.
    pub position: Option<Vec2>,
    pub pressed: bool,
}

impl PointerState {
    pub fn moved_to(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.position = Some(Vec2::new(x, y));
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Normalized [0, 1] scroll progress.
    pub progress: f32,
}

impl ScrollState {
    pub fn set_progress(&mut self, p: f32) {
        self.progress = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
    }
}

/// Viewport or surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}
