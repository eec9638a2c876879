use super::Mounted;
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::FrameEffect;
use crate::render::lightning::draw_bolt;
use crate::render::{clear, Ctx};
use fx_core::lightning::{canvas_width, LightningFrame};
use fx_core::rng::{make_rng, FxRng};
use fx_core::{FrameTime, LightningConfig, Rgba, ScrollState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct LightningEffect {
    canvas: web::HtmlCanvasElement,
    ctx: Ctx,
    config: LightningConfig,
    colors: (Rgba, Rgba),
    height: f32,
    rng: FxRng,
    scroll: Rc<RefCell<ScrollState>>,
}

impl LightningEffect {
    fn width(&self) -> f32 {
        canvas_width(self.config.is_divider) as f32
    }

    fn resize(&mut self, vp: Viewport) {
        self.height = vp.height;
        dom::set_canvas_size(&self.canvas, self.width() as u32, vp.height as u32);
    }
}

impl FrameEffect for LightningEffect {
    fn frame(&mut self, time: FrameTime) {
        let progress = self.scroll.borrow().progress;
        let width = self.width();
        let frame = LightningFrame::compute(
            &self.config,
            self.colors,
            (width, self.height),
            progress,
            time.elapsed_sec,
            &mut self.rng,
        );
        draw_bolt(&self.ctx, &frame, width as f64, self.height as f64);
    }
}

impl Drop for LightningEffect {
    fn drop(&mut self) {
        clear(&self.ctx, self.width() as f64, self.height as f64);
    }
}

/// Scroll-tracking lightning bolt on the canvas `canvas_id`.
pub fn mount(canvas_id: &str, config: LightningConfig) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let colors = (
        Rgba::parse_or(&config.color, Rgba::new(0, 255, 255, 1.0)),
        Rgba::parse_or(&config.glow_color, Rgba::WHITE.with_alpha(0.8)),
    );
    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    let mut effect = LightningEffect {
        canvas,
        ctx,
        rng: make_rng(config.seed),
        config,
        colors,
        height: 0.0,
        scroll: scroll.clone(),
    };
    effect.resize(dom::viewport());
    log::info!(
        "[lightning] {}x{} on #{canvas_id}{}",
        effect.width(),
        effect.height,
        if effect.config.is_divider { " (divider)" } else { "" }
    );
    let effect = Rc::new(RefCell::new(effect));

    let mut listeners = Listeners::default();
    listeners.push(events::wire_window_scroll(&scroll));
    let on_resize = effect.clone();
    listeners.push(events::wire_resize(move |vp| on_resize.borrow_mut().resize(vp)));

    Ok(Mounted::start("lightning", effect, listeners))
}
