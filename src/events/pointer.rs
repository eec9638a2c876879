use super::Listener;
use fx_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to `surface` (in its backing-store pixels), or
/// in client coordinates when there is no surface.
#[inline]
pub fn pointer_surface_px(ev: &web::MouseEvent, surface: Option<&web::HtmlCanvasElement>) -> (f32, f32) {
    let (cx, cy) = (ev.client_x() as f32, ev.client_y() as f32);
    let Some(canvas) = surface else {
        return (cx, cy);
    };
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return (cx, cy);
    }
    let sx = (cx - rect.left() as f32) / w * canvas.width() as f32;
    let sy = (cy - rect.top() as f32) / h * canvas.height() as f32;
    (sx, sy)
}

/// Track pointer move/down/up on the window into `state`.
pub fn wire_pointer(
    state: &Rc<RefCell<PointerState>>,
    surface: Option<web::HtmlCanvasElement>,
) -> Vec<Option<Listener>> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let target: &web::EventTarget = window.as_ref();

    let move_state = state.clone();
    let on_move = Listener::new(target, "pointermove", move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            let (x, y) = pointer_surface_px(me, surface.as_ref());
            move_state.borrow_mut().moved_to(x, y);
        }
    });

    let down_state = state.clone();
    let on_down = Listener::new(target, "pointerdown", move |_ev: web::Event| {
        down_state.borrow_mut().pressed = true;
    });

    let up_state = state.clone();
    let on_up = Listener::new(target, "pointerup", move |_ev: web::Event| {
        up_state.borrow_mut().pressed = false;
    });

    vec![on_move, on_down, on_up]
}
