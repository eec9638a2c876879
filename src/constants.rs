/// Paint and DOM constants of the browser front-end.
///
/// Geometry and simulation tuning lives in `fx_core::constants`; what is
/// here only matters once something reaches a canvas or the page.
// Particle canvas is faded, not cleared, so motion leaves streaks
pub const PARTICLE_FADE_ALPHA: f32 = 0.1;

// Star glow: second fill through a blurred shadow
pub const STAR_SHADOW_BLUR: f64 = 5.0;
pub const STAR_SHADOW_COLOR: &str = "rgba(255, 255, 255, 0.8)";

// Canvas composite operations
pub const COMPOSITE_DEFAULT: &str = "source-over";
pub const COMPOSITE_SCREEN: &str = "screen";
pub const COMPOSITE_LIGHTER: &str = "lighter";

// Tracing beam springs as (stiffness, damping)
pub const BEAM_DASH_SPRING: (f32, f32) = (60.0, 20.0);
pub const BEAM_GRADIENT_SPRING: (f32, f32) = (50.0, 15.0);
pub const BEAM_PULSE_SPRING: (f32, f32) = (100.0, 10.0);

// Prefix of generated SVG ids (filters, gradients)
pub const BEAM_ID_PREFIX: &str = "fx-beam";

// Layout custom properties driven by the scroll indicator
pub const CSS_SCROLL_POSITION: &str = "--scroll-position";
pub const CSS_MOUSE_X: &str = "--mouse-x";
pub const CSS_MOUSE_Y: &str = "--mouse-y";

// Thunderbolt glyph box and its glow blob, CSS pixels
pub const THUNDERBOLT_WIDTH_PX: u32 = 24;
pub const THUNDERBOLT_HEIGHT_PX: u32 = 48;
pub const THUNDERBOLT_GLOW_PX: u32 = 48;
pub const THUNDERBOLT_GLOW_COLOR: &str = "#4f46e5";
pub const THUNDERBOLT_GLOW_OPACITY: f32 = 0.2;
pub const THUNDERBOLT_GLOW_BLUR_PX: u32 = 24;
// Easing of the glyph's `top` changes
pub const THUNDERBOLT_TRANSITION: &str = "top 300ms ease-out";
