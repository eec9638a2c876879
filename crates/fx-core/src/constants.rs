//! Tuning constants shared by the simulations.
//!
//! Each group mirrors one effect. Values are in CSS pixels unless noted.

// Particle field
pub const PARTICLE_STAR_PROBABILITY: f32 = 0.3;
pub const PARTICLE_TRAIL_PROBABILITY: f32 = 0.3; // only stars carry trails
pub const PARTICLE_TRAIL_MIN: u32 = 3;
pub const PARTICLE_TRAIL_MAX: u32 = 7;
pub const PARTICLE_DOT_RADIUS: (f32, f32) = (0.5, 1.5);
pub const PARTICLE_STAR_RADIUS: (f32, f32) = (1.5, 2.5);
pub const PARTICLE_PULSE_MIN: f32 = 0.01;
pub const PARTICLE_PULSE_SPAN: f32 = 0.02;
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.7;
pub const REPULSION_RADIUS: f32 = 150.0;
pub const REPULSION_STRENGTH: f32 = 0.02;
pub const MAX_SPEED_FACTOR: f32 = 2.0; // max speed = factor * configured speed
pub const TRAIL_SPACING: f32 = 2.0;
pub const TRAIL_ALPHA: f32 = 0.4;
pub const STAR_SPIKES: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.4;
pub const PARTICLE_HALO_SCALE: f32 = 3.0;
pub const PARTICLE_HALO_ALPHA: f32 = 0.2;

// Dot grid
pub const GRID_BASE_BRIGHTNESS: f32 = 0.1;
pub const GRID_BRIGHTNESS_SPAN: f32 = 0.1;
pub const GRID_SIZE_MIN: f32 = 0.8;
pub const GRID_SIZE_SPAN: f32 = 0.4;
pub const GRID_GLOW_RADIUS: f32 = 150.0;
pub const GRID_GLOW_RADIUS_PRESSED: f32 = 200.0;
pub const GRID_PRESSED_GLOW_BOOST: f32 = 1.5;
pub const GRID_HALO_THRESHOLD: f32 = 0.5;
pub const GRID_NOISE_SPECKLES: usize = 100;

// Tracing beam
pub const BEAM_SEGMENTS: usize = 12;
pub const BEAM_AMPLITUDE: f32 = 20.0;
pub const BEAM_BASE_X: f32 = 15.0;
pub const BEAM_CP1: f32 = 0.3;
pub const BEAM_CP2: f32 = 0.7;
pub const BEAM_PASSING_BAND: f32 = 0.1;
pub const BEAM_ARC_SAMPLES: usize = 16; // per cubic segment
pub const BEAM_SIDEBAR_INSET: f32 = 40.0;
pub const BEAM_HEADER_HEIGHT: f32 = 56.0;
pub const BEAM_MIN_VIEWBOX_HEIGHT: f32 = 100.0;
pub const BEAM_VIEWBOX_WIDTH: f32 = 60.0;

// Lightning
pub const LIGHTNING_CANVAS_WIDTH: u32 = 150;
pub const LIGHTNING_DIVIDER_WIDTH: u32 = 50;
pub const LIGHTNING_GLOW_RADIUS: f32 = 150.0;
pub const LIGHTNING_DIVIDER_GLOW_RADIUS: f32 = 80.0;
pub const LIGHTNING_ANCHOR_GLOW_RADIUS: f32 = 40.0;
pub const LIGHTNING_DIVIDER_ANCHOR_GLOW_RADIUS: f32 = 25.0;
pub const LIGHTNING_UNDERLAY_BLUR: f32 = 15.0;
