//! Scroll-tracking lightning bolt geometry.
//!
//! [`LightningFrame::compute`] produces everything the painter needs for one
//! frame: the jittered bolt, the scroll glow, the per-anchor glows and the
//! random branches.

use crate::color::Rgba;
use crate::config::LightningConfig;
use crate::constants::*;
use crate::rng::FxRng;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

pub const ANCHORS: usize = 7;

/// Anchor layout: x offsets from the centre line and their height fractions.
struct Layout {
    offsets: [f32; 5],
    heights: [f32; 5],
    branch_at: &'static [usize],
    branch_len: (f32, f32),
    branch_width_div: f32,
    branch_core_div: f32,
    glow_radius: f32,
    anchor_glow_radius: f32,
}

const FULL: Layout = Layout {
    offsets: [-25.0, 15.0, -30.0, 20.0, -15.0],
    heights: [0.15, 0.3, 0.5, 0.65, 0.85],
    branch_at: &[1, 3, 5],
    branch_len: (30.0, 20.0),
    branch_width_div: 3.0,
    branch_core_div: 6.0,
    glow_radius: LIGHTNING_GLOW_RADIUS,
    anchor_glow_radius: LIGHTNING_ANCHOR_GLOW_RADIUS,
};

const DIVIDER: Layout = Layout {
    offsets: [-8.0, 5.0, -10.0, 8.0, -5.0],
    heights: [0.15, 0.3, 0.5, 0.7, 0.85],
    branch_at: &[2, 4],
    branch_len: (15.0, 10.0),
    branch_width_div: 4.0,
    branch_core_div: 8.0,
    glow_radius: LIGHTNING_DIVIDER_GLOW_RADIUS,
    anchor_glow_radius: LIGHTNING_DIVIDER_ANCHOR_GLOW_RADIUS,
};

fn layout(divider: bool) -> &'static Layout {
    if divider {
        &DIVIDER
    } else {
        &FULL
    }
}

/// Canvas backing width for the bolt.
pub fn canvas_width(divider: bool) -> u32 {
    if divider {
        LIGHTNING_DIVIDER_WIDTH
    } else {
        LIGHTNING_CANVAS_WIDTH
    }
}

/// Slow horizontal wobble applied to the anchors.
pub fn jitter(time_sec: f32) -> f32 {
    (time_sec * 2.0).sin() * 2.0
}

/// Breathing factor of the scroll glow.
pub fn pulse_intensity(time_sec: f32, glow_intensity: f32) -> f32 {
    ((time_sec * 3.0).sin() * 0.2 + 0.8) * glow_intensity
}

/// The seven bolt anchors for a canvas of `width` x `height`.
pub fn anchors(width: f32, height: f32, jitter: f32, divider: bool) -> SmallVec<[Vec2; ANCHORS]> {
    let l = layout(divider);
    let cx = width / 2.0;
    let mut pts = SmallVec::new();
    pts.push(Vec2::new(cx, 0.0));
    for (i, (off, frac)) in l.offsets.iter().zip(l.heights).enumerate() {
        // jitter alternates sign so neighbouring anchors sway in opposition
        let j = if i % 2 == 0 { jitter } else { -jitter };
        pts.push(Vec2::new(cx + off + j, height * frac));
    }
    pts.push(Vec2::new(cx, height));
    pts
}

/// Brightness of the glow around an anchor, fading with vertical distance
/// from the scroll glow. Zero on a zero-height canvas.
pub fn anchor_glow_opacity(anchor_y: f32, glow_y: f32, height: f32, glow_intensity: f32) -> f32 {
    if height <= 0.0 || !height.is_finite() {
        return 0.0;
    }
    let distance = (anchor_y - glow_y).abs() / height;
    (1.0 - distance * 2.0).max(0.0) * glow_intensity
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: Vec2,
    pub radius: f32,
    pub stops: SmallVec<[(f32, Rgba); 3]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub core_width: f32,
}

/// One stroke pass over the bolt polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeLayer {
    pub width: f32,
    pub color: Rgba,
    pub shadow_blur: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightningFrame {
    pub anchors: SmallVec<[Vec2; ANCHORS]>,
    /// Blurred underlay then solid mid layer; painted additively.
    pub underlay: StrokeLayer,
    pub body: StrokeLayer,
    pub glow: RadialGlow,
    pub anchor_glows: SmallVec<[RadialGlow; ANCHORS]>,
    pub core: StrokeLayer,
    pub branches: SmallVec<[Branch; 3]>,
    pub bolt_color: Rgba,
}

impl LightningFrame {
    pub fn compute(
        config: &LightningConfig,
        colors: (Rgba, Rgba),
        size: (f32, f32),
        progress: f32,
        time_sec: f32,
        rng: &mut FxRng,
    ) -> Self {
        let (bolt_color, glow_color) = colors;
        let (width, height) = size;
        let l = layout(config.is_divider);
        let anchors = anchors(width, height, jitter(time_sec), config.is_divider);
        let glow_y = progress.clamp(0.0, 1.0) * height;
        let pulse = pulse_intensity(time_sec, config.glow_intensity);
        let cx = width / 2.0;

        let glow = RadialGlow {
            center: Vec2::new(cx, glow_y),
            radius: l.glow_radius,
            stops: SmallVec::from_buf([
                (0.0, glow_color.with_alpha(pulse * 0.8)),
                (0.5, glow_color.with_alpha(pulse * 0.3)),
                (1.0, glow_color.with_alpha(0.0)),
            ]),
        };

        let anchor_glows = anchors[1..ANCHORS - 1]
            .iter()
            .map(|p| {
                let opacity = anchor_glow_opacity(p.y, glow_y, height, config.glow_intensity);
                let mut stops = SmallVec::new();
                stops.push((0.0, glow_color.with_alpha(opacity * 0.7)));
                stops.push((1.0, glow_color.with_alpha(0.0)));
                RadialGlow {
                    center: *p,
                    radius: l.anchor_glow_radius,
                    stops,
                }
            })
            .collect();

        let w = config.width;
        let branches = l
            .branch_at
            .iter()
            .filter(|&&i| i < ANCHORS - 1)
            .map(|&i| {
                let length = l.branch_len.0 + rng.gen::<f32>() * l.branch_len.1;
                let angle = rng.gen::<f32>() * std::f32::consts::PI;
                let from = anchors[i];
                Branch {
                    from,
                    to: from + Vec2::new(angle.cos(), angle.sin()) * length,
                    width: w / l.branch_width_div,
                    core_width: w / l.branch_core_div,
                }
            })
            .collect();

        Self {
            anchors,
            underlay: StrokeLayer {
                width: w + 4.0,
                color: bolt_color.with_alpha(0.5),
                shadow_blur: LIGHTNING_UNDERLAY_BLUR,
            },
            body: StrokeLayer {
                width: w,
                color: bolt_color,
                shadow_blur: 0.0,
            },
            glow,
            anchor_glows,
            core: StrokeLayer {
                width: w / 2.0,
                color: Rgba::WHITE,
                shadow_blur: 0.0,
            },
            branches,
            bolt_color,
        }
    }
}
