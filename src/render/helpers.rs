use crate::constants::COMPOSITE_DEFAULT;
use fx_core::Rgba;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

pub type Ctx = web::CanvasRenderingContext2d;

pub fn clear(ctx: &Ctx, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

pub fn fill_rect(ctx: &Ctx, color: Rgba, width: f64, height: f64) {
    ctx.set_fill_style_str(&color.to_css());
    ctx.fill_rect(0.0, 0.0, width, height);
}

pub fn fill_circle(ctx: &Ctx, center: Vec2, radius: f32, color: Rgba) {
    if radius <= 0.0 {
        return;
    }
    ctx.begin_path();
    _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    ctx.set_fill_style_str(&color.to_css());
    ctx.fill();
}

pub fn trace_polyline(ctx: &Ctx, points: &[Vec2]) {
    ctx.begin_path();
    if let Some((first, rest)) = points.split_first() {
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
    }
}

pub fn trace_polygon(ctx: &Ctx, points: &[Vec2]) {
    trace_polyline(ctx, points);
    ctx.close_path();
}

/// Stroke the current path with round caps and joins.
pub fn stroke(ctx: &Ctx, width: f32, color: Rgba) {
    ctx.set_line_width(width as f64);
    ctx.set_stroke_style_str(&color.to_css());
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.stroke();
}

/// Fill a square around `center` with a radial gradient fading out at `radius`.
pub fn radial_glow(ctx: &Ctx, center: Vec2, radius: f32, stops: &[(f32, Rgba)]) {
    if radius <= 0.0 {
        return;
    }
    let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
    let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
        Ok(g) => g,
        Err(e) => {
            log::debug!("radial gradient unavailable: {:?}", e);
            return;
        }
    };
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset, &color.to_css());
    }
    #[allow(deprecated)]
    ctx.set_fill_style(&gradient);
    ctx.fill_rect(x - r, y - r, r * 2.0, r * 2.0);
}

/// Run `draw` with a temporary composite operation.
pub fn with_composite(ctx: &Ctx, op: &str, draw: impl FnOnce(&Ctx)) {
    _ = ctx.set_global_composite_operation(op);
    draw(ctx);
    _ = ctx.set_global_composite_operation(COMPOSITE_DEFAULT);
}
