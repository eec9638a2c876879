use super::Mounted;
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::FrameEffect;
use crate::render::grid::draw_grid;
use crate::render::{clear, Ctx};
use fx_core::grid::DotGrid;
use fx_core::{DotGridConfig, FrameTime, PointerState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct DotGridEffect {
    canvas: web::HtmlCanvasElement,
    ctx: Ctx,
    grid: DotGrid,
    size: Viewport,
    pointer: Rc<RefCell<PointerState>>,
}

impl DotGridEffect {
    fn resize(&mut self, vp: Viewport) {
        dom::set_canvas_size(&self.canvas, vp.width as u32, vp.height as u32);
        self.grid.resize(vp.width, vp.height);
        self.size = vp;
    }
}

impl FrameEffect for DotGridEffect {
    fn frame(&mut self, _time: FrameTime) {
        let pointer = *self.pointer.borrow();
        let Viewport { width, height } = self.size;
        let speckles = if pointer.pressed {
            self.grid.noise(width, height)
        } else {
            Vec::new()
        };
        draw_grid(&self.ctx, &self.grid, pointer, &speckles, width as f64, height as f64);
    }
}

impl Drop for DotGridEffect {
    fn drop(&mut self) {
        clear(&self.ctx, self.size.width as f64, self.size.height as f64);
    }
}

/// Neon dot grid on the canvas `canvas_id`, lit around the pointer.
pub fn mount(canvas_id: &str, config: DotGridConfig) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let vp = dom::viewport();
    dom::set_canvas_size(&canvas, vp.width as u32, vp.height as u32);

    let grid = DotGrid::new(&config, vp.width, vp.height);
    log::info!(
        "[dot-grid] {}x{} dots on #{canvas_id}",
        grid.cols(),
        grid.rows()
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let effect = Rc::new(RefCell::new(DotGridEffect {
        canvas: canvas.clone(),
        ctx,
        grid,
        size: vp,
        pointer: pointer.clone(),
    }));

    let mut listeners = Listeners::default();
    listeners.extend(events::wire_pointer(&pointer, Some(canvas)));
    let on_resize = effect.clone();
    listeners.push(events::wire_resize(move |vp| on_resize.borrow_mut().resize(vp)));

    Ok(Mounted::start("dot-grid", effect, listeners))
}
