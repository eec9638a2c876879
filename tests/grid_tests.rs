// Host-side tests for the neon dot grid.

use fx_core::grid::{dot_brightness, grid_dimensions, DotGrid, GridDot};
use fx_core::DotGridConfig;
use glam::Vec2;

fn config(spacing: f32) -> DotGridConfig {
    DotGridConfig {
        dot_spacing: spacing,
        seed: Some(99),
        ..DotGridConfig::default()
    }
}

#[test]
fn dimensions_round_up() {
    assert_eq!(grid_dimensions(100.0, 60.0, 30.0), (4, 2));
    assert_eq!(grid_dimensions(90.0, 90.0, 30.0), (3, 3));
    assert_eq!(grid_dimensions(0.0, 500.0, 30.0), (0, 17));
    assert_eq!(grid_dimensions(-5.0, f32::NAN, 30.0), (0, 0));
}

#[test]
fn rebuild_gives_ceil_product_of_dots() {
    let mut grid = DotGrid::new(&config(30.0), 1280.0, 720.0);
    assert_eq!(grid.dots.len(), 43 * 24);
    grid.resize(301.0, 59.0);
    assert_eq!((grid.cols(), grid.rows()), (11, 2));
    assert_eq!(grid.dots.len(), 22);
    assert!(grid.dots.iter().any(|d| d.position == Vec2::new(300.0, 30.0)));
}

#[test]
fn base_brightness_and_size_are_in_range() {
    let cfg = DotGridConfig {
        dot_size: 2.0,
        ..config(25.0)
    };
    let grid = DotGrid::new(&cfg, 500.0, 500.0);
    for d in &grid.dots {
        assert!((0.1..=0.2).contains(&d.base_brightness));
        assert!((1.6..=2.4).contains(&d.size));
    }
}

#[test]
fn brightness_falls_off_to_glow_radius() {
    let dot = GridDot {
        position: Vec2::ZERO,
        base_brightness: 0.1,
        size: 1.0,
    };
    assert_eq!(dot_brightness(&dot, None, 150.0, 0.8), 0.1);
    assert!((dot_brightness(&dot, Some(Vec2::ZERO), 150.0, 0.8) - 0.9).abs() < 1e-6);
    assert!((dot_brightness(&dot, Some(Vec2::new(75.0, 0.0)), 150.0, 0.8) - 0.5).abs() < 1e-6);
    assert_eq!(dot_brightness(&dot, Some(Vec2::new(150.0, 0.0)), 150.0, 0.8), 0.1);
    // capped at full brightness
    assert_eq!(dot_brightness(&dot, Some(Vec2::ZERO), 150.0, 5.0), 1.0);
}

#[test]
fn pressing_widens_and_strengthens_glow() {
    let grid = DotGrid::new(&config(30.0), 100.0, 100.0);
    assert_eq!(grid.glow_params(false), (150.0, 0.8));
    let (r, g) = grid.glow_params(true);
    assert_eq!(r, 200.0);
    assert!((g - 1.2).abs() < 1e-6);

    let idle = grid.glow(Vec2::new(10.0, 10.0), false);
    let held = grid.glow(Vec2::new(10.0, 10.0), true);
    assert!((idle.stops[0].1.a - 0.3).abs() < 1e-6);
    assert!((held.stops[0].1.a - 0.5).abs() < 1e-6);
    assert_eq!(idle.stops[2].1.a, 0.0);
    assert_eq!(held.radius, 200.0);
}

#[test]
fn lit_dots_grow_and_get_a_halo() {
    let grid = DotGrid::new(&config(30.0), 300.0, 300.0);
    let shades: Vec<_> = grid.shade(Some(Vec2::ZERO), false).collect();
    assert_eq!(shades.len(), grid.dots.len());
    let at_pointer = shades
        .iter()
        .zip(&grid.dots)
        .find(|(_, d)| d.position == Vec2::ZERO)
        .map(|(s, d)| (*s, *d));
    let Some((shade, dot)) = at_pointer else {
        panic!("no dot at the origin");
    };
    assert!(shade.radius > dot.size);
    assert!(shade.halo.is_some());

    let unlit: Vec<_> = grid.shade(None, false).collect();
    assert!(unlit.iter().all(|s| s.halo.is_none()));
}

#[test]
fn noise_is_faint() {
    let mut grid = DotGrid::new(&config(30.0), 200.0, 100.0);
    let speckles = grid.noise(200.0, 100.0);
    assert_eq!(speckles.len(), 100);
    for s in &speckles {
        assert!(s.alpha < 0.05);
        assert!((0.5..=1.5).contains(&s.radius));
        assert!(s.position.x <= 200.0 && s.position.y <= 100.0);
    }
}

#[test]
fn dense_spacing_is_floored() {
    // 1 px spacing on a 4K surface would mean ~8M dots per frame
    let grid = DotGrid::new(&config(1.0), 3840.0, 2160.0);
    assert_eq!((grid.cols(), grid.rows()), (960, 540));
    assert_eq!(grid.dots.len(), 960 * 540);
}
