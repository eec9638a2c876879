use fx_core::{CancelToken, FrameClock, FrameTime};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something redrawn once per animation frame.
pub trait FrameEffect {
    fn frame(&mut self, time: FrameTime);
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owns a self-rescheduling `requestAnimationFrame` loop.
///
/// Dropping the loop (or calling [`AnimationLoop::stop`]) cancels the pending
/// frame request, trips the cancellation token and releases the tick closure.
pub struct AnimationLoop {
    token: CancelToken,
    handle: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AnimationLoop {
    pub fn start(effect: Rc<RefCell<dyn FrameEffect>>) -> Self {
        let token = CancelToken::new();
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let token_tick = token.clone();
        let handle_tick = handle.clone();
        let mut clock = FrameClock::default();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            handle_tick.set(None);
            if token_tick.is_cancelled() {
                return;
            }
            effect.borrow_mut().frame(clock.tick(now_ms));
            if token_tick.is_cancelled() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                handle_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = tick.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        Self {
            token,
            handle,
            tick,
        }
    }

    pub fn stop(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
