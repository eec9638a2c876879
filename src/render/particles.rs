use super::helpers::{fill_circle, fill_rect, trace_polygon, Ctx};
use crate::constants::{PARTICLE_FADE_ALPHA, STAR_SHADOW_BLUR, STAR_SHADOW_COLOR};
use fx_core::constants::{PARTICLE_HALO_ALPHA, PARTICLE_HALO_SCALE};
use fx_core::particles::{star_vertices, Particle, ParticleField, ParticleKind};
use fx_core::Rgba;

/// Fade the previous frame, then paint every particle and its trail.
pub fn draw_field(ctx: &Ctx, field: &ParticleField, color: Rgba, width: f64, height: f64) {
    fill_rect(ctx, Rgba::BLACK.with_alpha(PARTICLE_FADE_ALPHA), width, height);
    for p in &field.particles {
        match p.kind {
            ParticleKind::Star => draw_star(ctx, p, color),
            ParticleKind::Dot => draw_dot(ctx, p, color),
        }
        for ghost in p.trail_ghosts() {
            fill_circle(ctx, ghost.position, ghost.radius, color.with_alpha(ghost.alpha));
        }
    }
}

fn draw_dot(ctx: &Ctx, p: &Particle, color: Rgba) {
    fill_circle(ctx, p.position, p.radius, color.with_alpha(p.opacity));
    if p.radius > 1.0 {
        fill_circle(
            ctx,
            p.position,
            p.radius * PARTICLE_HALO_SCALE,
            color.with_alpha(p.opacity * PARTICLE_HALO_ALPHA),
        );
    }
}

fn draw_star(ctx: &Ctx, p: &Particle, color: Rgba) {
    let vertices = star_vertices(p.position, p.radius * 2.0);
    trace_polygon(ctx, &vertices);
    ctx.set_fill_style_str(&color.with_alpha(p.opacity).to_css());
    ctx.fill();
    // second fill through a shadow gives the soft glow
    ctx.set_shadow_color(STAR_SHADOW_COLOR);
    ctx.set_shadow_blur(STAR_SHADOW_BLUR);
    ctx.fill();
    ctx.set_shadow_blur(0.0);
}
