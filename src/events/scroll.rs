use super::Listener;
use fx_core::progress::{scroll_progress, window_scroll_progress, PageHeight};
use fx_core::ScrollState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Where scroll progress is sampled from.
#[derive(Clone)]
pub enum ScrollSource {
    Window(PageHeight),
    Container(web::Element),
}

impl ScrollSource {
    /// The matching element, or the window measured by `page` when there is none.
    pub fn from_selector(selector: Option<&str>, page: PageHeight) -> Self {
        match selector.and_then(crate::dom::query) {
            Some(el) => ScrollSource::Container(el),
            None => ScrollSource::Window(page),
        }
    }

    pub fn target(&self) -> Option<web::EventTarget> {
        match self {
            ScrollSource::Window(_) => web::window().map(Into::into),
            ScrollSource::Container(el) => Some(el.clone().into()),
        }
    }

    /// Current normalized progress; 0 when nothing can scroll.
    pub fn sample(&self) -> f32 {
        match self {
            ScrollSource::Container(el) => scroll_progress(
                el.scroll_top() as f64,
                el.scroll_height() as f64,
                el.client_height() as f64,
            ),
            ScrollSource::Window(page) => {
                let Some(w) = web::window() else {
                    return 0.0;
                };
                let scroll_y = w.scroll_y().unwrap_or(0.0);
                let viewport_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let doc_h = w.document().map_or(0.0, |d| {
                    page.pick(
                        d.body().map(|b| b.scroll_height() as f64),
                        d.document_element().map(|e| e.scroll_height() as f64),
                    )
                });
                window_scroll_progress(scroll_y, doc_h, viewport_h)
            }
        }
    }
}

fn wire(source: ScrollSource, state: &Rc<RefCell<ScrollState>>) -> Option<Listener> {
    let target = source.target()?;
    state.borrow_mut().set_progress(source.sample());
    let state = state.clone();
    Listener::new(&target, "scroll", move |_ev: web::Event| {
        state.borrow_mut().set_progress(source.sample());
    })
}

pub fn wire_window_scroll(state: &Rc<RefCell<ScrollState>>) -> Option<Listener> {
    wire(ScrollSource::Window(PageHeight::Body), state)
}

/// Listen on an already-resolved source.
pub fn wire_source(source: ScrollSource, state: &Rc<RefCell<ScrollState>>) -> Option<Listener> {
    wire(source, state)
}
