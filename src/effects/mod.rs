//! Mounted effects.
//!
//! Each effect owns its surface and simulation state and implements
//! [`FrameEffect`]; mounting wires its listeners and starts an
//! [`AnimationLoop`]. Dropping the returned [`Mounted`] tears all of it down.

use crate::events::Listeners;
use crate::frame::{AnimationLoop, FrameEffect};
use std::cell::RefCell;
use std::rc::Rc;

pub mod dot_grid;
pub mod lightning;
pub mod particles;
pub mod scroll_indicator;
pub mod tracing_beam;

pub struct Mounted {
    name: &'static str,
    animation: AnimationLoop,
    listeners: Listeners,
}

impl Mounted {
    pub fn start(name: &'static str, effect: Rc<RefCell<dyn FrameEffect>>, listeners: Listeners) -> Self {
        log::info!("[{name}] mounted ({} listeners)", listeners.len());
        Self {
            name,
            animation: AnimationLoop::start(effect),
            listeners,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        // stop first so no frame runs against a half-removed effect
        self.animation.stop();
        self.listeners.clear();
        log::info!("[{}] unmounted", self.name);
    }
}
