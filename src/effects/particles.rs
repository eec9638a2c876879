use super::Mounted;
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::FrameEffect;
use crate::render::particles::draw_field;
use crate::render::{clear, Ctx};
use fx_core::particles::ParticleField;
use fx_core::{FrameTime, ParticleConfig, PointerState, Rgba, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParticleEffect {
    canvas: web::HtmlCanvasElement,
    ctx: Ctx,
    field: ParticleField,
    color: Rgba,
    pointer: Rc<RefCell<PointerState>>,
}

impl ParticleEffect {
    fn resize(&mut self, vp: Viewport) {
        dom::set_canvas_size(&self.canvas, vp.width as u32, vp.height as u32);
        self.field.resize(vp.width, vp.height);
    }
}

impl FrameEffect for ParticleEffect {
    fn frame(&mut self, _time: FrameTime) {
        let pointer = self.pointer.borrow().position;
        self.field.advance(pointer);
        draw_field(
            &self.ctx,
            &self.field,
            self.color,
            self.field.width() as f64,
            self.field.height() as f64,
        );
    }
}

impl Drop for ParticleEffect {
    fn drop(&mut self) {
        self.field.clear();
        clear(&self.ctx, self.canvas.width() as f64, self.canvas.height() as f64);
    }
}

/// Drifting particle field on the canvas `canvas_id`, sized to the window.
pub fn mount(canvas_id: &str, config: ParticleConfig) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let vp = dom::viewport();
    dom::set_canvas_size(&canvas, vp.width as u32, vp.height as u32);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let effect = Rc::new(RefCell::new(ParticleEffect {
        canvas: canvas.clone(),
        ctx,
        field: ParticleField::new(&config, vp.width, vp.height),
        color: Rgba::parse_or(&config.color, Rgba::WHITE.with_alpha(0.7)),
        pointer: pointer.clone(),
    }));

    let mut listeners = Listeners::default();
    listeners.extend(events::wire_pointer(&pointer, Some(canvas)));
    let on_resize = effect.clone();
    listeners.push(events::wire_resize(move |vp| on_resize.borrow_mut().resize(vp)));

    log::info!("[particles] {} particles on #{canvas_id}", config.count);
    Ok(Mounted::start("particles", effect, listeners))
}
