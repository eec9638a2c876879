use super::Mounted;
use crate::constants::{BEAM_DASH_SPRING, BEAM_GRADIENT_SPRING, BEAM_ID_PREFIX, BEAM_PULSE_SPRING};
use crate::dom;
use crate::events::{self, Listeners, ScrollSource};
use crate::frame::FrameEffect;
use crate::render::beam::{BeamFrame, BeamSvg};
use fx_core::beam::{
    compute_path, dash_offset_target, key_points, marker_wave, pulse_target, spinner_angle,
    step_positions, step_states, svg_height, traveler_fraction, viewbox_height, BeamPath, TRAVELERS,
};
use fx_core::progress::PageHeight;
use fx_core::spring::Spring;
use fx_core::{FrameTime, ScrollState, TracingBeamConfig, Viewport};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

struct TracingBeamEffect {
    svg: BeamSvg,
    config: TracingBeamConfig,
    scroll: Rc<RefCell<ScrollState>>,
    path: BeamPath,
    length: f32,
    height: f32,
    dash: Spring,
    gradient: Spring,
    pulse: Spring,
    laid_out: bool,
}

impl TracingBeamEffect {
    /// Recompute the path for the current sidebar (or viewport) height.
    fn layout(&mut self, vp: Viewport) {
        let sidebar = dom::query(&self.config.sidebar_selector)
            .as_ref()
            .and_then(dom::offset_height);
        let height = svg_height(sidebar, vp.height);
        self.path = compute_path(height);
        self.length = self.path.arc_length();
        self.height = height;
        let positions = step_positions(self.config.steps.len(), &key_points(height));
        self.svg
            .set_geometry(viewbox_height(height), &self.path, self.length, positions);

        let progress = self.scroll.borrow().progress;
        if !self.laid_out {
            // first layout starts settled instead of animating in from 0
            self.dash.snap(dash_offset_target(self.length, progress));
            self.gradient.snap(progress * height);
            self.laid_out = true;
        }
        log::debug!(
            "[tracing-beam] height {height:.0}, path length {:.1}",
            self.length
        );
    }
}

impl FrameEffect for TracingBeamEffect {
    fn frame(&mut self, time: FrameTime) {
        let progress = self.scroll.borrow().progress;
        let elapsed = time.elapsed_sec;

        self.dash.set_target(dash_offset_target(self.length, progress));
        self.gradient.set_target(progress * self.height);
        self.pulse.set_target(pulse_target(elapsed));
        let dash_offset = self.dash.step(time.dt_sec);
        let gradient_y = self.gradient.step(time.dt_sec);
        let pulse_scale = self.pulse.step(time.dt_sec);

        let states = step_states(&self.config.steps, progress);
        let travelers: SmallVec<[Option<Vec2>; TRAVELERS]> = (0..TRAVELERS)
            .map(|i| traveler_fraction(i, elapsed).map(|f| self.path.point_at_fraction(f)))
            .collect();

        self.svg.update(&BeamFrame {
            dash_offset,
            gradient_y,
            states: &states,
            pulse_scale,
            ring_wave: marker_wave(elapsed),
            spinner_angle: spinner_angle(elapsed),
            travelers: &travelers,
        });
    }
}

impl Drop for TracingBeamEffect {
    fn drop(&mut self) {
        self.svg.remove();
    }
}

fn spring((stiffness, damping): (f32, f32), value: f32) -> Spring {
    Spring::new(value, stiffness, damping)
}

/// Tracing beam inside the `<svg>` element `svg_id`.
pub fn mount(svg_id: &str, config: TracingBeamConfig) -> anyhow::Result<Mounted> {
    let root = dom::element_by_id(svg_id)?;
    let svg = BeamSvg::build(&root, &format!("{BEAM_ID_PREFIX}-{svg_id}"), &config.steps)?;

    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    let source =
        ScrollSource::from_selector(Some(config.scroll_selector.as_str()), PageHeight::Body);
    if matches!(source, ScrollSource::Window(_)) {
        log::warn!(
            "[tracing-beam] no element matches {:?}; following the window",
            config.scroll_selector
        );
    }

    let mut listeners = Listeners::default();
    listeners.push(events::wire_source(source, &scroll));

    let mut effect = TracingBeamEffect {
        svg,
        scroll: scroll.clone(),
        path: compute_path(0.0),
        length: 0.0,
        height: 0.0,
        dash: spring(BEAM_DASH_SPRING, 0.0),
        gradient: spring(BEAM_GRADIENT_SPRING, 0.0),
        pulse: spring(BEAM_PULSE_SPRING, 1.0),
        laid_out: false,
        config,
    };
    effect.layout(dom::viewport());
    log::info!(
        "[tracing-beam] {} steps on #{svg_id}",
        effect.config.steps.len()
    );
    let effect = Rc::new(RefCell::new(effect));

    let on_resize = effect.clone();
    listeners.push(events::wire_resize(move |vp| on_resize.borrow_mut().layout(vp)));

    Ok(Mounted::start("tracing-beam", effect, listeners))
}
