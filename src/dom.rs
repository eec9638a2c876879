use anyhow::{anyhow, Context};
use fx_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> anyhow::Result<web::Document> {
    window_document().ok_or_else(|| anyhow!("no document"))
}

pub fn element_by_id(id: &str) -> anyhow::Result<web::Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

/// First element matching `selector`, or `None` (invalid selectors included).
pub fn query(selector: &str) -> Option<web::Element> {
    window_document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{id} is not a canvas"))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))
}

/// Inner size of the browser window in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// Give the canvas a backing store of `width` x `height` pixels.
pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}

pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property(property, value);
    }
}

pub fn offset_height(element: &web::Element) -> Option<f32> {
    element
        .dyn_ref::<web::HtmlElement>()
        .map(|el| el.offset_height() as f32)
}
