//! Event listener wiring.
//!
//! Every listener is held by a [`Listener`] guard that unregisters itself
//! when dropped, so tearing an effect down is a matter of dropping its
//! guards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;
mod resize;
mod scroll;

pub use pointer::wire_pointer;
pub use resize::wire_resize;
pub use scroll::{wire_source, wire_window_scroll, ScrollSource};

pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] could not listen for {event}: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Guards for every listener an effect registered.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Option<Listener>) {
        self.0.extend(listener);
    }

    pub fn extend(&mut self, listeners: impl IntoIterator<Item = Option<Listener>>) {
        self.0.extend(listeners.into_iter().flatten());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
