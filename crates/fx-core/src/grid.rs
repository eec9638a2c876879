//! Neon dot grid that brightens around the pointer.

use crate::color::Rgba;
use crate::config::{DotGridConfig, MIN_DOT_SPACING};
use crate::constants::*;
use crate::rng::{derive_seed, make_rng, FxRng};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDot {
    pub position: Vec2,
    pub base_brightness: f32,
    pub size: f32,
}

/// Per-frame paint instruction for one dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotShade {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Halo circle (twice the radius) for dots brighter than the threshold.
    pub halo: Option<Rgba>,
}

/// Pointer glow parameters for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowSpec {
    pub center: Vec2,
    pub radius: f32,
    /// Gradient stops as (offset, colour).
    pub stops: [(f32, Rgba); 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speckle {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

pub struct DotGrid {
    pub dots: Vec<GridDot>,
    cols: usize,
    rows: usize,
    spacing: f32,
    dot_size: f32,
    glow_intensity: f32,
    dot_color: Rgba,
    glow_color: Rgba,
    rng: FxRng,
    noise_rng: FxRng,
}

impl DotGrid {
    pub fn new(config: &DotGridConfig, width: f32, height: f32) -> Self {
        let noise_seed = config.seed.map(|s| derive_seed(s, 1));
        let mut grid = Self {
            dots: Vec::new(),
            cols: 0,
            rows: 0,
            spacing: config.dot_spacing.max(MIN_DOT_SPACING),
            dot_size: config.dot_size,
            glow_intensity: config.glow_intensity,
            dot_color: Rgba::parse_or(&config.dot_color, Rgba::WHITE.with_alpha(0.2)),
            glow_color: Rgba::parse_or(&config.glow_color, Rgba::WHITE.with_alpha(0.8)),
            rng: make_rng(config.seed),
            noise_rng: make_rng(noise_seed),
        };
        grid.resize(width, height);
        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rebuild the lattice for a new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        let (cols, rows) = grid_dimensions(width, height, self.spacing);
        self.cols = cols;
        self.rows = rows;
        self.dots.clear();
        self.dots.reserve(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                self.dots.push(GridDot {
                    position: Vec2::new(i as f32 * self.spacing, j as f32 * self.spacing),
                    base_brightness: GRID_BASE_BRIGHTNESS
                        + self.rng.gen::<f32>() * GRID_BRIGHTNESS_SPAN,
                    size: self.dot_size * (GRID_SIZE_MIN + self.rng.gen::<f32>() * GRID_SIZE_SPAN),
                });
            }
        }
        log::debug!("[grid] rebuilt {}x{} dots", cols, rows);
    }

    /// Glow radius and strength for the current pressed state.
    pub fn glow_params(&self, pressed: bool) -> (f32, f32) {
        if pressed {
            (
                GRID_GLOW_RADIUS_PRESSED,
                self.glow_intensity * GRID_PRESSED_GLOW_BOOST,
            )
        } else {
            (GRID_GLOW_RADIUS, self.glow_intensity)
        }
    }

    /// Shade every dot for one frame.
    pub fn shade(&self, pointer: Option<Vec2>, pressed: bool) -> impl Iterator<Item = DotShade> + '_ {
        let (radius, glow) = self.glow_params(pressed);
        self.dots.iter().map(move |dot| {
            let brightness = dot_brightness(dot, pointer, radius, glow);
            let drawn = dot.size * (1.0 + brightness * 0.5);
            let color = self.dot_color.scale_alpha(brightness);
            DotShade {
                position: dot.position,
                radius: drawn,
                color,
                halo: (brightness > GRID_HALO_THRESHOLD).then(|| color.scale_alpha(0.2)),
            }
        })
    }

    pub fn glow(&self, pointer: Vec2, pressed: bool) -> GlowSpec {
        let (radius, _) = self.glow_params(pressed);
        let (inner, mid) = if pressed { (0.5, 0.3) } else { (0.3, 0.15) };
        GlowSpec {
            center: pointer,
            radius,
            stops: [
                (0.0, self.glow_color.with_alpha(inner)),
                (0.5, self.glow_color.with_alpha(mid)),
                (1.0, self.glow_color.with_alpha(0.0)),
            ],
        }
    }

    /// Random faint speckles drawn while the pointer is pressed.
    pub fn noise(&mut self, width: f32, height: f32) -> Vec<Speckle> {
        let rng = &mut self.noise_rng;
        (0..GRID_NOISE_SPECKLES)
            .map(|_| Speckle {
                position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                radius: rng.gen::<f32>() + 0.5,
                alpha: rng.gen::<f32>() * 0.05,
            })
            .collect()
    }
}

/// Lattice size covering the surface: `ceil(width / spacing)` by
/// `ceil(height / spacing)`.
pub fn grid_dimensions(width: f32, height: f32, spacing: f32) -> (usize, usize) {
    let spacing = spacing.max(1.0);
    let count = |extent: f32| {
        if extent.is_finite() && extent > 0.0 {
            (extent / spacing).ceil() as usize
        } else {
            0
        }
    };
    (count(width), count(height))
}

/// Brightness of a dot given the pointer, falling off linearly to the glow radius.
pub fn dot_brightness(dot: &GridDot, pointer: Option<Vec2>, radius: f32, glow: f32) -> f32 {
    let Some(ptr) = pointer else {
        return dot.base_brightness;
    };
    let distance = ptr.distance(dot.position);
    if distance < radius {
        let intensity = 1.0 - distance / radius;
        (dot.base_brightness + intensity * glow).min(1.0)
    } else {
        dot.base_brightness
    }
}
