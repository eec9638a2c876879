//! Thunderbolt scroll indicator: a glyph riding a thin track at the scroll
//! position.

use crate::progress::as_percentage;

/// Glyph path in a 24x100 view box.
pub const THUNDERBOLT_D: &str = "M12,0 L8,30 L16,40 L4,70 L20,60 L12,100";
pub const THUNDERBOLT_VIEWBOX: &str = "0 0 24 100";

/// Stroke layers of the glyph, drawn in order: (stroke width, opacity, blur px).
pub const THUNDERBOLT_LAYERS: [(f32, f32, f32); 3] = [(1.5, 1.0, 0.0), (3.0, 0.6, 2.0), (5.0, 0.3, 4.0)];

pub const THUNDERBOLT_COLOR: &str = "rgba(79, 70, 229, 0.9)";

/// CSS `top` value for the glyph and its glow.
pub fn top_css(progress: f32) -> String {
    format!("{:.2}%", as_percentage(progress))
}

/// Pointer coordinate as a CSS pixel length.
pub fn px_css(v: f32) -> String {
    format!("{}px", v.round())
}
