//! Tracing beam: a zigzag path down the sidebar that fills with scroll
//! progress, with step markers placed along it.

use crate::color::Rgba;
use crate::config::StepConfig;
use crate::constants::*;
use glam::Vec2;
use std::fmt::Write as _;

/// One cubic Bézier segment; the start is the previous segment's end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BeamPath {
    pub start: Vec2,
    pub segments: Vec<CubicSegment>,
}

fn zigzag_point(progress: f32, height: f32) -> Vec2 {
    use std::f32::consts::PI;
    let envelope = 0.7 + (progress * PI * 2.0).sin() * 0.3;
    let offset = (progress * PI * 6.0).sin() * BEAM_AMPLITUDE * envelope;
    Vec2::new(BEAM_BASE_X + offset, height * progress)
}

/// `BEAM_SEGMENTS + 1` vertices of the zigzag, top to bottom.
pub fn key_points(height: f32) -> Vec<Vec2> {
    let height = sanitize_height(height);
    (0..=BEAM_SEGMENTS)
        .map(|i| zigzag_point(i as f32 / BEAM_SEGMENTS as f32, height))
        .collect()
}

/// Cubic path through the key points, control points at 30% and 70% of
/// each segment's span.
pub fn compute_path(height: f32) -> BeamPath {
    let points = key_points(height);
    let segments = points
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            CubicSegment {
                c1: a.lerp(b, BEAM_CP1),
                c2: a.lerp(b, BEAM_CP2),
                end: b,
            }
        })
        .collect();
    BeamPath {
        start: points[0],
        segments,
    }
}

impl BeamPath {
    pub fn end(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// SVG path data (`M x y C c1x c1y, c2x c2y, x y ...`).
    pub fn to_svg_d(&self) -> String {
        let mut d = format!("M {} {}", fmt_num(self.start.x), fmt_num(self.start.y));
        for s in &self.segments {
            let _ = write!(
                d,
                " C {} {}, {} {}, {} {}",
                fmt_num(s.c1.x),
                fmt_num(s.c1.y),
                fmt_num(s.c2.x),
                fmt_num(s.c2.y),
                fmt_num(s.end.x),
                fmt_num(s.end.y)
            );
        }
        d
    }

    /// Polyline approximation, `samples` points per segment plus the start.
    pub fn flatten(&self, samples: usize) -> Vec<Vec2> {
        let samples = samples.max(1);
        let mut out = Vec::with_capacity(self.segments.len() * samples + 1);
        out.push(self.start);
        let mut p0 = self.start;
        for s in &self.segments {
            for k in 1..=samples {
                out.push(cubic_point(p0, s, k as f32 / samples as f32));
            }
            p0 = s.end;
        }
        out
    }

    pub fn arc_length(&self) -> f32 {
        self.flatten(BEAM_ARC_SAMPLES)
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Point at `fraction` (0..=1) of the path's arc length.
    pub fn point_at_fraction(&self, fraction: f32) -> Vec2 {
        let pts = self.flatten(BEAM_ARC_SAMPLES);
        let total: f32 = pts.windows(2).map(|w| w[0].distance(w[1])).sum();
        if total <= 0.0 || !fraction.is_finite() {
            return self.start;
        }
        let mut remaining = fraction.clamp(0.0, 1.0) * total;
        for w in pts.windows(2) {
            let len = w[0].distance(w[1]);
            if remaining <= len {
                return if len > 0.0 {
                    w[0].lerp(w[1], remaining / len)
                } else {
                    w[0]
                };
            }
            remaining -= len;
        }
        self.end()
    }
}

fn cubic_point(p0: Vec2, s: &CubicSegment, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + s.c1 * (3.0 * u * u * t) + s.c2 * (3.0 * u * t * t) + s.end * (t * t * t)
}

fn fmt_num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn sanitize_height(height: f32) -> f32 {
    if height.is_finite() {
        height.max(0.0)
    } else {
        0.0
    }
}

/// Normalized position of step `index` out of `count`: `i / max(count - 1, 1)`.
pub fn step_parameter(index: usize, count: usize) -> f32 {
    index as f32 / count.saturating_sub(1).max(1) as f32
}

/// Interpolation index (segment plus fraction) of a normalized position
/// along `key_count` key points. The last segment is clamped so an index
/// of 1.0 lands on its far end.
pub fn interpolation_index(progress: f32, key_count: usize) -> (usize, f32) {
    let last_seg = key_count.saturating_sub(2);
    let scaled = progress * key_count.saturating_sub(1) as f32;
    let seg = (scaled.floor().max(0.0) as usize).min(last_seg);
    (seg, scaled - seg as f32)
}

/// Marker positions for `count` steps, linearly interpolated between the two
/// nearest key points.
pub fn step_positions(count: usize, key_points: &[Vec2]) -> Vec<Vec2> {
    if key_points.len() < 2 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let (seg, t) = interpolation_index(step_parameter(i, count), key_points.len());
            key_points[seg].lerp(key_points[seg + 1], t)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepState {
    pub completed: bool,
    pub active: bool,
    pub passing: bool,
}

impl StepState {
    /// State of a step at normalized `position` for the current scroll progress.
    /// A completed step is always active.
    pub fn evaluate(completed: bool, position: f32, progress: f32) -> Self {
        let reached = progress >= position;
        Self {
            completed,
            active: completed || reached,
            passing: progress > position + BEAM_PASSING_BAND,
        }
    }

    pub fn style(self) -> MarkerStyle {
        let white = Rgba::WHITE;
        let black = Rgba::BLACK;
        if self.completed {
            MarkerStyle {
                ring: white.with_alpha(0.3),
                fill: white.with_alpha(0.9),
                stroke: white,
                inner: black.with_alpha(0.8),
                checkmark: true,
                spinner: false,
                glow: true,
            }
        } else if self.active {
            MarkerStyle {
                ring: white.with_alpha(0.3),
                fill: white.with_alpha(0.8),
                stroke: white.with_alpha(0.9),
                inner: black.with_alpha(0.6),
                checkmark: false,
                spinner: true,
                glow: true,
            }
        } else {
            MarkerStyle {
                ring: white.with_alpha(0.08),
                fill: white.with_alpha(0.3),
                stroke: white.with_alpha(0.4),
                inner: white.with_alpha(0.8),
                checkmark: false,
                spinner: false,
                glow: false,
            }
        }
    }
}

/// Colours and decorations of one step marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub ring: Rgba,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub inner: Rgba,
    pub checkmark: bool,
    pub spinner: bool,
    pub glow: bool,
}

pub fn step_states(steps: &[StepConfig], progress: f32) -> Vec<StepState> {
    steps
        .iter()
        .enumerate()
        .map(|(i, s)| StepState::evaluate(s.completed, step_parameter(i, steps.len()), progress))
        .collect()
}

/// Drawable height for a sidebar of `sidebar_height`, or for the viewport
/// below the header when no sidebar is present.
pub fn svg_height(sidebar_height: Option<f32>, viewport_height: f32) -> f32 {
    let base = sidebar_height.unwrap_or(viewport_height - BEAM_HEADER_HEIGHT);
    sanitize_height(base - BEAM_SIDEBAR_INSET)
}

pub fn viewbox_height(svg_height: f32) -> f32 {
    svg_height.max(BEAM_MIN_VIEWBOX_HEIGHT)
}

/// `stroke-dasharray` for a path of `length`: 2% dash, 1% gap.
pub fn dash_array(length: f32) -> String {
    format!("{} {}", fmt_num(length * 0.02), fmt_num(length * 0.01))
}

/// Dash offset target: full length hidden at progress 0, none at 1.
pub fn dash_offset_target(length: f32, progress: f32) -> f32 {
    length * (1.0 - progress.clamp(0.0, 1.0))
}

/// Small dots travelling along the path on staggered loops.
pub const TRAVELERS: usize = 3;

/// Arc-length fraction of traveler `index` at `elapsed_sec`, or `None`
/// before its start delay has passed.
pub fn traveler_fraction(index: usize, elapsed_sec: f32) -> Option<f32> {
    let duration = 8.0 + index as f32 * 2.0;
    let t = elapsed_sec - index as f32 * 1.6;
    (t >= 0.0).then(|| (t % duration) / duration)
}

/// Length of one marker animation loop (ring breathing, spinner turn).
pub const MARKER_CYCLE_SEC: f32 = 2.0;

/// Triangle wave 0 -> 1 -> 0 over one marker cycle.
pub fn marker_wave(elapsed_sec: f32) -> f32 {
    let phase = (elapsed_sec.max(0.0) / MARKER_CYCLE_SEC).fract();
    1.0 - (2.0 * phase - 1.0).abs()
}

/// Spinner rotation in degrees.
pub fn spinner_angle(elapsed_sec: f32) -> f32 {
    (elapsed_sec.max(0.0) / MARKER_CYCLE_SEC).fract() * 360.0
}

/// Active markers kick to 1.05 every cycle and relax back after 200 ms.
pub fn pulse_target(elapsed_sec: f32) -> f32 {
    if elapsed_sec >= MARKER_CYCLE_SEC && elapsed_sec % MARKER_CYCLE_SEC < 0.2 {
        1.05
    } else {
        1.0
    }
}

/// Checkmark stroke for a completed marker centred at `center`.
pub fn checkmark_d(center: Vec2) -> String {
    let origin = center - Vec2::splat(15.0);
    let pts = [Vec2::new(10.0, 14.0), Vec2::new(13.0, 17.0), Vec2::new(18.0, 12.0)]
        .map(|p| origin + p * 0.4);
    format!(
        "M {} {} L {} {} L {} {}",
        fmt_num(pts[0].x),
        fmt_num(pts[0].y),
        fmt_num(pts[1].x),
        fmt_num(pts[1].y),
        fmt_num(pts[2].x),
        fmt_num(pts[2].y)
    )
}
