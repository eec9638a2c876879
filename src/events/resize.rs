use super::Listener;
use fx_core::Viewport;
use web_sys as web;

/// Call `on_resize` with the new viewport whenever the window resizes.
pub fn wire_resize(mut on_resize: impl FnMut(Viewport) + 'static) -> Option<Listener> {
    let window = web::window()?;
    Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        on_resize(crate::dom::viewport());
    })
}
