use super::helpers::{clear, fill_circle, radial_glow, with_composite, Ctx};
use crate::constants::COMPOSITE_SCREEN;
use fx_core::grid::{DotGrid, Speckle};
use fx_core::{PointerState, Rgba};

/// Paint order: clear, dots (with halos), pointer glow, then noise speckles
/// while the pointer is held down.
pub fn draw_grid(
    ctx: &Ctx,
    grid: &DotGrid,
    pointer: PointerState,
    speckles: &[Speckle],
    width: f64,
    height: f64,
) {
    clear(ctx, width, height);

    for shade in grid.shade(pointer.position, pointer.pressed) {
        fill_circle(ctx, shade.position, shade.radius, shade.color);
        if let Some(halo) = shade.halo {
            fill_circle(ctx, shade.position, shade.radius * 2.0, halo);
        }
    }

    if let Some(pos) = pointer.position {
        let glow = grid.glow(pos, pointer.pressed);
        with_composite(ctx, COMPOSITE_SCREEN, |ctx| {
            radial_glow(ctx, glow.center, glow.radius, &glow.stops);
        });
    }

    for s in speckles {
        fill_circle(ctx, s.position, s.radius, Rgba::WHITE.with_alpha(s.alpha));
    }
}
