//! Drifting particle field with pointer repulsion.
//!
//! Motion uses fixed per-frame deltas: `advance` is meant to be called once
//! per animation frame, so apparent speed scales with the display's refresh
//! rate.

use crate::config::ParticleConfig;
use crate::constants::*;
use crate::rng::{make_rng, FxRng};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Dot,
    Star,
}

impl ParticleKind {
    /// Inclusive radius band the pulse oscillates within.
    pub fn radius_band(self) -> (f32, f32) {
        match self {
            ParticleKind::Dot => PARTICLE_DOT_RADIUS,
            ParticleKind::Star => PARTICLE_STAR_RADIUS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub pulse_step: f32,
    pub pulse_direction: f32,
    pub opacity: f32,
    pub kind: ParticleKind,
    pub trail: bool,
    pub trail_length: u32,
}

/// One ghost circle of a particle's trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailGhost {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    fn random(rng: &mut FxRng, width: f32, height: f32, speed: f32) -> Self {
        let kind = if rng.gen::<f32>() < PARTICLE_STAR_PROBABILITY {
            ParticleKind::Star
        } else {
            ParticleKind::Dot
        };
        let (min_r, max_r) = kind.radius_band();
        let axis_speed =
            |rng: &mut FxRng| (rng.gen::<f32>() - 0.5) * speed * (1.0 + rng.gen::<f32>());
        let velocity = Vec2::new(axis_speed(rng), axis_speed(rng));
        let trail = kind == ParticleKind::Star && rng.gen::<f32>() < PARTICLE_TRAIL_PROBABILITY;
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity,
            radius: min_r + rng.gen::<f32>() * (max_r - min_r),
            pulse_step: PARTICLE_PULSE_MIN + rng.gen::<f32>() * PARTICLE_PULSE_SPAN,
            pulse_direction: 1.0,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            kind,
            trail,
            trail_length: rng.gen_range(PARTICLE_TRAIL_MIN..=PARTICLE_TRAIL_MAX),
        }
    }

    /// Ghost circles trailing behind the particle, oldest last.
    pub fn trail_ghosts(&self) -> impl Iterator<Item = TrailGhost> + '_ {
        let len = if self.trail { self.trail_length } else { 0 };
        let base_alpha = self.opacity * TRAIL_ALPHA;
        (1..=len).filter_map(move |i| {
            let fi = i as f32;
            let flen = len as f32;
            let radius = self.radius * (1.0 - fi / (flen * 1.5));
            (radius > 0.0).then(|| TrailGhost {
                position: self.position - self.velocity * fi * TRAIL_SPACING,
                radius,
                alpha: base_alpha * (1.0 - fi / flen),
            })
        })
    }

    fn pulse(&mut self) {
        let (min_r, max_r) = self.kind.radius_band();
        self.radius += self.pulse_step * self.pulse_direction;
        if self.radius >= max_r {
            self.radius = max_r;
            self.pulse_direction = -1.0;
        } else if self.radius <= min_r {
            self.radius = min_r;
            self.pulse_direction = 1.0;
        }
    }
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
    speed: f32,
    count: usize,
    rng: FxRng,
}

impl ParticleField {
    pub fn new(config: &ParticleConfig, width: f32, height: f32) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width: width.max(0.0),
            height: height.max(0.0),
            speed: config.speed,
            count: config.count,
            rng: make_rng(config.seed),
        };
        field.populate();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Drop every particle and scatter a fresh set over the new surface.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.populate();
        log::debug!(
            "[particles] resized to {}x{} ({} particles)",
            self.width,
            self.height,
            self.particles.len()
        );
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn populate(&mut self) {
        let (w, h, speed) = (self.width, self.height, self.speed);
        self.particles.clear();
        self.particles
            .extend((0..self.count).map(|_| Particle::random(&mut self.rng, w, h, speed)));
    }

    /// Step every particle by one frame.
    pub fn advance(&mut self, pointer: Option<Vec2>) {
        let max_speed = self.speed * MAX_SPEED_FACTOR;
        let r2 = REPULSION_RADIUS * REPULSION_RADIUS;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position = wrap(p.position, self.width, self.height);

            if let Some(ptr) = pointer {
                let away = p.position - ptr;
                let d2 = away.length_squared();
                if d2 < r2 {
                    let distance = d2.sqrt();
                    let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
                    // a particle sitting exactly on the pointer has no direction to flee
                    let dir = away.try_normalize().unwrap_or(Vec2::ZERO);
                    p.velocity += dir * force * REPULSION_STRENGTH;
                    let speed = p.velocity.length();
                    if speed > max_speed && speed > 0.0 {
                        p.velocity *= max_speed / speed;
                    }
                }
            }

            p.pulse();
        }
    }
}

/// Wrap a position that left the surface onto the opposite edge.
pub fn wrap(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        pos.x = width;
    } else if pos.x > width {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = height;
    } else if pos.y > height {
        pos.y = 0.0;
    }
    pos
}

/// Vertices of a five-point star polygon, starting at the top spike.
pub fn star_vertices(center: Vec2, outer_radius: f32) -> [Vec2; STAR_SPIKES * 2] {
    let inner_radius = outer_radius * STAR_INNER_RATIO;
    let step = std::f32::consts::PI / STAR_SPIKES as f32;
    let mut rot = std::f32::consts::FRAC_PI_2 * 3.0;
    let mut out = [Vec2::ZERO; STAR_SPIKES * 2];
    for (i, v) in out.iter_mut().enumerate() {
        let r = if i % 2 == 0 { outer_radius } else { inner_radius };
        *v = center + Vec2::new(rot.cos(), rot.sin()) * r;
        rot += step;
    }
    out
}
