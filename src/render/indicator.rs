//! DOM for the thunderbolt scroll indicator: a glyph and a glow blob
//! positioned inside a track element.

use super::svg::svg_el;
use crate::constants::*;
use crate::dom::set_style;
use anyhow::anyhow;
use fx_core::indicator::{THUNDERBOLT_COLOR, THUNDERBOLT_D, THUNDERBOLT_LAYERS, THUNDERBOLT_VIEWBOX};
use web_sys as web;

pub struct IndicatorDom {
    glyph: web::Element,
    glow: web::Element,
}

fn div(doc: &web::Document, parent: &web::Element) -> anyhow::Result<web::Element> {
    let el = doc
        .create_element("div")
        .map_err(|e| anyhow!("create <div> failed: {:?}", e))?;
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("append <div> failed: {:?}", e))?;
    Ok(el)
}

fn place(el: &web::Element, width: u32, height: u32) {
    set_style(el, "position", "absolute");
    set_style(el, "left", "50%");
    set_style(el, "top", "0%");
    set_style(el, "width", &format!("{width}px"));
    set_style(el, "height", &format!("{height}px"));
    set_style(el, "transform", "translate(-50%, -50%)");
    set_style(el, "pointer-events", "none");
}

impl IndicatorDom {
    pub fn build(track: &web::Element) -> anyhow::Result<Self> {
        let doc = crate::dom::document()?;

        let glow = div(&doc, track)?;
        place(&glow, THUNDERBOLT_GLOW_PX, THUNDERBOLT_GLOW_PX);
        set_style(&glow, "border-radius", "50%");
        set_style(&glow, "background", THUNDERBOLT_GLOW_COLOR);
        set_style(&glow, "opacity", &THUNDERBOLT_GLOW_OPACITY.to_string());
        set_style(&glow, "filter", &format!("blur({THUNDERBOLT_GLOW_BLUR_PX}px)"));

        let glyph = div(&doc, track)?;
        place(&glyph, THUNDERBOLT_WIDTH_PX, THUNDERBOLT_HEIGHT_PX);
        set_style(&glyph, "transition", THUNDERBOLT_TRANSITION);

        let svg = svg_el(
            &doc,
            &glyph,
            "svg",
            &[
                ("viewBox", THUNDERBOLT_VIEWBOX),
                ("width", "100%"),
                ("height", "100%"),
                ("fill", "none"),
                ("stroke", THUNDERBOLT_COLOR),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ],
        )?;
        for (width, opacity, blur) in THUNDERBOLT_LAYERS {
            let path = svg_el(
                &doc,
                &svg,
                "path",
                &[
                    ("d", THUNDERBOLT_D),
                    ("stroke-width", &width.to_string()),
                    ("stroke-opacity", &opacity.to_string()),
                ],
            )?;
            if blur > 0.0 {
                _ = path.set_attribute("style", &format!("filter: blur({blur}px)"));
            }
        }

        Ok(Self { glyph, glow })
    }

    /// Move glyph and glow to `top` (a CSS length).
    pub fn set_top(&self, top: &str) {
        set_style(&self.glyph, "top", top);
        set_style(&self.glow, "top", top);
    }

    pub fn remove(&self) {
        self.glyph.remove();
        self.glow.remove();
    }
}
