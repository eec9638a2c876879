use super::helpers::{clear, radial_glow, stroke, trace_polyline, with_composite, Ctx};
use crate::constants::{COMPOSITE_LIGHTER, COMPOSITE_SCREEN};
use fx_core::lightning::{LightningFrame, StrokeLayer};
use fx_core::Rgba;

fn stroke_bolt(ctx: &Ctx, frame: &LightningFrame, layer: StrokeLayer) {
    trace_polyline(ctx, &frame.anchors);
    stroke(ctx, layer.width, layer.color);
}

pub fn draw_bolt(ctx: &Ctx, frame: &LightningFrame, width: f64, height: f64) {
    clear(ctx, width, height);

    // additive underlay with blur, then the solid body
    _ = ctx.set_global_composite_operation(COMPOSITE_LIGHTER);
    ctx.set_shadow_color(&frame.bolt_color.to_css());
    ctx.set_shadow_blur(frame.underlay.shadow_blur as f64);
    stroke_bolt(ctx, frame, frame.underlay);
    ctx.set_shadow_blur(0.0);
    stroke_bolt(ctx, frame, frame.body);

    with_composite(ctx, COMPOSITE_SCREEN, |ctx| {
        radial_glow(ctx, frame.glow.center, frame.glow.radius, &frame.glow.stops);
        for g in &frame.anchor_glows {
            radial_glow(ctx, g.center, g.radius, &g.stops);
        }
    });

    stroke_bolt(ctx, frame, frame.core);

    for b in &frame.branches {
        trace_polyline(ctx, &[b.from, b.to]);
        stroke(ctx, b.width, frame.bolt_color);
        stroke(ctx, b.core_width, Rgba::WHITE);
    }
}
