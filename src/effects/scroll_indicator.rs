use super::Mounted;
use crate::constants::{CSS_MOUSE_X, CSS_MOUSE_Y, CSS_SCROLL_POSITION};
use crate::dom::{self, set_style};
use crate::events::{self, Listeners, ScrollSource};
use crate::frame::FrameEffect;
use crate::render::indicator::IndicatorDom;
use fx_core::indicator::{px_css, top_css};
use fx_core::progress::PageHeight;
use fx_core::{FrameTime, PointerState, ScrollIndicatorConfig, ScrollState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ScrollIndicator {
    dom: IndicatorDom,
    light: Option<web::Element>,
    mouse: Option<web::Element>,
    scroll: Rc<RefCell<ScrollState>>,
    pointer: Rc<RefCell<PointerState>>,
    shown_progress: Option<f32>,
    shown_pointer: Option<Vec2>,
}

impl FrameEffect for ScrollIndicator {
    // Styles are only written when the value changed since the last frame.
    fn frame(&mut self, _time: FrameTime) {
        let progress = self.scroll.borrow().progress;
        if self.shown_progress != Some(progress) {
            let top = top_css(progress);
            self.dom.set_top(&top);
            if let Some(light) = &self.light {
                set_style(light, CSS_SCROLL_POSITION, &top);
            }
            self.shown_progress = Some(progress);
        }

        let pointer = self.pointer.borrow().position;
        if pointer.is_some() && pointer != self.shown_pointer {
            if let (Some(el), Some(p)) = (&self.mouse, pointer) {
                set_style(el, CSS_MOUSE_X, &px_css(p.x));
                set_style(el, CSS_MOUSE_Y, &px_css(p.y));
            }
            self.shown_pointer = pointer;
        }
    }
}

impl Drop for ScrollIndicator {
    fn drop(&mut self) {
        self.dom.remove();
    }
}

fn optional_element(selector: Option<&str>, what: &str) -> Option<web::Element> {
    let selector = selector?;
    let found = dom::query(selector);
    if found.is_none() {
        log::warn!("[scroll-indicator] no {what} element matches {selector:?}");
    }
    found
}

/// Thunderbolt indicator inside the track element `track_id`.
pub fn mount(track_id: &str, config: ScrollIndicatorConfig) -> anyhow::Result<Mounted> {
    let track = dom::element_by_id(track_id)?;
    let indicator = IndicatorDom::build(&track)?;

    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let source =
        ScrollSource::from_selector(config.container_selector.as_deref(), PageHeight::Root);

    let mut listeners = Listeners::default();
    listeners.push(events::wire_source(source, &scroll));

    let mouse = optional_element(config.mouse_selector.as_deref(), "mouse");
    if mouse.is_some() {
        listeners.extend(events::wire_pointer(&pointer, None));
    }

    let effect = Rc::new(RefCell::new(ScrollIndicator {
        dom: indicator,
        light: optional_element(config.light_selector.as_deref(), "light"),
        mouse,
        scroll,
        pointer,
        shown_progress: None,
        shown_pointer: None,
    }));

    Ok(Mounted::start("scroll-indicator", effect, listeners))
}
