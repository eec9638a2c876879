//! SVG rendering of the tracing beam.
//!
//! The element tree is built once per mount; frames only rewrite attributes.

use super::svg::{set, svg_el};
use fx_core::beam::{checkmark_d, dash_array, BeamPath, StepState, TRAVELERS};
use fx_core::config::StepConfig;
use fx_core::constants::BEAM_VIEWBOX_WIDTH;
use glam::Vec2;
use web_sys as web;

struct MarkerEls {
    group: web::Element,
    ring: web::Element,
    main: web::Element,
    inner: web::Element,
    check: web::Element,
    spinner: web::Element,
}

/// Per-frame inputs for [`BeamSvg::update`].
pub struct BeamFrame<'a> {
    pub dash_offset: f32,
    pub gradient_y: f32,
    pub states: &'a [StepState],
    pub pulse_scale: f32,
    pub ring_wave: f32,
    pub spinner_angle: f32,
    pub travelers: &'a [Option<Vec2>],
}

pub struct BeamSvg {
    root: web::Element,
    paths: [web::Element; 3],
    progress_path: web::Element,
    gradient: web::Element,
    travelers: Vec<web::Element>,
    markers: Vec<MarkerEls>,
    positions: Vec<Vec2>,
    created: Vec<web::Element>,
}

impl BeamSvg {
    /// Build the beam inside `root` (an `<svg>` element). `id_prefix` keeps
    /// filter and gradient ids unique when several beams share a page.
    pub fn build(root: &web::Element, id_prefix: &str, steps: &[StepConfig]) -> anyhow::Result<Self> {
        let doc = crate::dom::document()?;
        let glow_id = format!("{id_prefix}-glow");
        let grad_id = format!("{id_prefix}-progress");

        let defs = svg_el(&doc, root, "defs", &[])?;
        let filter = svg_el(&doc, &defs, "filter", &[("id", &glow_id)])?;
        svg_el(
            &doc,
            &filter,
            "feGaussianBlur",
            &[("stdDeviation", "3"), ("result", "coloredBlur")],
        )?;
        let merge = svg_el(&doc, &filter, "feMerge", &[])?;
        svg_el(&doc, &merge, "feMergeNode", &[("in", "coloredBlur")])?;
        svg_el(&doc, &merge, "feMergeNode", &[("in", "SourceGraphic")])?;
        let gradient = svg_el(
            &doc,
            &defs,
            "linearGradient",
            &[
                ("id", &grad_id),
                ("x1", "0"),
                ("x2", "0"),
                ("y1", "0"),
                ("y2", "0"),
                ("gradientUnits", "userSpaceOnUse"),
            ],
        )?;
        for (offset, opacity) in [("0", "1"), ("0.5", "0.8"), ("1", "0.3")] {
            svg_el(
                &doc,
                &gradient,
                "stop",
                &[("offset", offset), ("stop-color", "#ffffff"), ("stop-opacity", opacity)],
            )?;
        }

        let glow_filter = format!("url(#{glow_id})");
        let glow_path = svg_el(
            &doc,
            root,
            "path",
            &[
                ("stroke", "rgba(255, 255, 255, 0.3)"),
                ("stroke-width", "6"),
                ("fill", "none"),
                ("opacity", "0.4"),
                ("filter", &glow_filter),
            ],
        )?;
        let track_path = svg_el(
            &doc,
            root,
            "path",
            &[
                ("stroke", "rgba(255, 255, 255, 0.1)"),
                ("stroke-width", "2"),
                ("fill", "none"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ],
        )?;
        let grad_stroke = format!("url(#{grad_id})");
        let progress_path = svg_el(
            &doc,
            root,
            "path",
            &[
                ("stroke", &grad_stroke),
                ("stroke-width", "2"),
                ("fill", "none"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
                ("style", "filter: drop-shadow(0 0 3px rgba(255, 255, 255, 0.4))"),
            ],
        )?;

        let travelers = (0..TRAVELERS)
            .map(|_| {
                svg_el(
                    &doc,
                    root,
                    "circle",
                    &[
                        ("r", "1"),
                        ("fill", "rgba(255, 255, 255, 0.8)"),
                        ("visibility", "hidden"),
                        ("style", "filter: drop-shadow(0 0 2px rgba(255, 255, 255, 0.6))"),
                    ],
                )
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let markers = steps
            .iter()
            .map(|step| -> anyhow::Result<MarkerEls> {
                let group = svg_el(&doc, root, "g", &[])?;
                if !step.title.is_empty() {
                    let title = svg_el(&doc, &group, "title", &[])?;
                    title.set_text_content(Some(&step.title));
                }
                let circle = |r: &str, extra: &[(&str, &str)]| -> anyhow::Result<web::Element> {
                    let el = svg_el(&doc, &group, "circle", &[("r", r)])?;
                    for (k, v) in extra {
                        _ = el.set_attribute(k, v);
                    }
                    Ok(el)
                };
                let ring = circle("10", &[("fill", "none"), ("stroke-width", "1")])?;
                let main = circle("6", &[("stroke-width", "1")])?;
                let inner = circle("2", &[])?;
                let check = svg_el(
                    &doc,
                    &group,
                    "path",
                    &[
                        ("stroke", "rgba(0, 0, 0, 0.8)"),
                        ("stroke-width", "2"),
                        ("fill", "none"),
                        ("stroke-linecap", "round"),
                        ("stroke-linejoin", "round"),
                        ("visibility", "hidden"),
                    ],
                )?;
                let spinner = circle(
                    "5",
                    &[
                        ("fill", "none"),
                        ("stroke", "rgba(255, 255, 255, 0.6)"),
                        ("stroke-width", "1"),
                        ("stroke-linecap", "round"),
                        ("stroke-dasharray", "15.71"),
                        ("visibility", "hidden"),
                    ],
                )?;
                Ok(MarkerEls {
                    group,
                    ring,
                    main,
                    inner,
                    check,
                    spinner,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut created = vec![defs, glow_path.clone(), track_path.clone(), progress_path.clone()];
        created.extend(travelers.iter().cloned());
        created.extend(markers.iter().map(|m| m.group.clone()));

        Ok(Self {
            root: root.clone(),
            paths: [glow_path, track_path, progress_path.clone()],
            progress_path,
            gradient,
            travelers,
            markers,
            positions: Vec::new(),
            created,
        })
    }

    /// Apply a new height: path data, dash pattern and marker positions.
    pub fn set_geometry(&mut self, view_height: f32, path: &BeamPath, length: f32, positions: Vec<Vec2>) {
        let h = view_height.round();
        set(&self.root, "viewBox", format!("0 0 {BEAM_VIEWBOX_WIDTH} {h}"));
        set(&self.root, "width", BEAM_VIEWBOX_WIDTH);
        set(&self.root, "height", h);
        set(&self.root, "preserveAspectRatio", "none");
        _ = self.root.set_attribute("style", "overflow: visible");

        let d = path.to_svg_d();
        for p in &self.paths {
            set(p, "d", &d);
        }
        set(&self.progress_path, "stroke-dasharray", dash_array(length));

        for (m, pos) in self.markers.iter().zip(&positions) {
            for c in [&m.ring, &m.main, &m.inner, &m.spinner] {
                set(c, "cx", pos.x);
                set(c, "cy", pos.y);
            }
            set(&m.check, "d", checkmark_d(*pos));
        }
        self.positions = positions;
    }

    pub fn update(&self, frame: &BeamFrame<'_>) {
        set(&self.progress_path, "stroke-dashoffset", frame.dash_offset);
        set(&self.gradient, "y2", frame.gradient_y);

        for (el, pos) in self.travelers.iter().zip(frame.travelers) {
            match pos {
                Some(p) => {
                    set(el, "cx", p.x);
                    set(el, "cy", p.y);
                    set(el, "visibility", "visible");
                }
                None => set(el, "visibility", "hidden"),
            }
        }

        for ((m, state), pos) in self.markers.iter().zip(frame.states).zip(&self.positions) {
            let style = state.style();
            let scale = if state.active { frame.pulse_scale } else { 1.0 };
            set(&m.group, "transform", scale_about(*pos, scale));

            let ring_scale = if state.active { 1.0 + 0.1 * frame.ring_wave } else { 1.0 };
            set(&m.ring, "stroke", style.ring.to_css());
            set(&m.ring, "opacity", if state.active { 1.0 } else { 0.5 });
            set(&m.ring, "transform", scale_about(*pos, ring_scale));

            set(&m.main, "fill", style.fill.to_css());
            set(&m.main, "stroke", style.stroke.to_css());
            let glow = if style.glow {
                "filter: drop-shadow(0 0 6px rgba(255, 255, 255, 0.4))"
            } else {
                "filter: none"
            };
            set(&m.main, "style", glow);

            set(&m.inner, "fill", style.inner.to_css());
            let inner_opacity = if state.active { 0.6 + 0.4 * frame.ring_wave } else { 0.8 };
            set(&m.inner, "opacity", inner_opacity);

            set(&m.check, "visibility", visibility(style.checkmark));
            set(&m.spinner, "visibility", visibility(style.spinner));
            if style.spinner {
                set(
                    &m.spinner,
                    "transform",
                    format!("rotate({} {} {})", frame.spinner_angle, pos.x, pos.y),
                );
            }
        }
    }

    /// Remove everything this beam added to the page.
    pub fn remove(&self) {
        for el in &self.created {
            el.remove();
        }
    }
}

fn visibility(shown: bool) -> &'static str {
    if shown {
        "visible"
    } else {
        "hidden"
    }
}

fn scale_about(center: Vec2, scale: f32) -> String {
    format!(
        "translate({} {}) scale({}) translate({} {})",
        center.x, center.y, scale, -center.x, -center.y
    )
}
