// Host-side tests for lightning bolt geometry.

use fx_core::lightning::*;
use fx_core::rng::make_rng;
use fx_core::{LightningConfig, Rgba};
use glam::Vec2;

fn colors() -> (Rgba, Rgba) {
    (Rgba::new(0, 255, 255, 1.0), Rgba::WHITE.with_alpha(0.8))
}

#[test]
fn canvas_is_narrow_for_dividers() {
    assert_eq!(canvas_width(false), 150);
    assert_eq!(canvas_width(true), 50);
}

#[test]
fn anchors_run_top_to_bottom_on_centre_line_ends() {
    let pts = anchors(150.0, 1000.0, 0.0, false);
    assert_eq!(pts.len(), ANCHORS);
    assert_eq!(pts[0], Vec2::new(75.0, 0.0));
    assert_eq!(pts[6], Vec2::new(75.0, 1000.0));
    let expected = [(50.0, 150.0), (90.0, 300.0), (45.0, 500.0), (95.0, 650.0), (60.0, 850.0)];
    for (p, (x, y)) in pts[1..6].iter().zip(expected) {
        assert!((p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-3, "{p:?}");
    }
}

#[test]
fn divider_layout_is_tighter() {
    let pts = anchors(50.0, 100.0, 0.0, true);
    assert!((pts[1] - Vec2::new(17.0, 15.0)).length() < 1e-4);
    assert!((pts[4].y - 70.0).abs() < 1e-4);
    assert!(pts.iter().all(|p| (p.x - 25.0).abs() <= 10.0));
}

#[test]
fn jitter_sways_neighbours_in_opposition() {
    let still = anchors(150.0, 100.0, 0.0, false);
    let moved = anchors(150.0, 100.0, 2.0, false);
    assert_eq!(moved[1].x - still[1].x, 2.0);
    assert_eq!(moved[2].x - still[2].x, -2.0);
    assert_eq!(moved[0], still[0]);
    assert_eq!(moved[6], still[6]);
    assert!(jitter(0.0).abs() < 1e-6);
    assert!(jitter(1000.0).abs() <= 2.0);
}

#[test]
fn glow_pulse_stays_within_intensity_band() {
    for i in 0..100 {
        let p = pulse_intensity(i as f32 * 0.37, 0.8);
        assert!(p >= 0.6 * 0.8 - 1e-6 && p <= 0.8 + 1e-6);
    }
}

#[test]
fn anchor_glow_fades_with_distance_from_scroll_glow() {
    assert!((anchor_glow_opacity(500.0, 500.0, 1000.0, 0.8) - 0.8).abs() < 1e-6);
    assert!((anchor_glow_opacity(250.0, 500.0, 1000.0, 1.0) - 0.5).abs() < 1e-6);
    assert_eq!(anchor_glow_opacity(0.0, 1000.0, 1000.0, 1.0), 0.0);
    assert_eq!(anchor_glow_opacity(10.0, 0.0, 0.0, 1.0), 0.0);
}

#[test]
fn frame_layers_follow_configured_width() {
    let cfg = LightningConfig::default();
    let mut rng = make_rng(Some(1));
    let f = LightningFrame::compute(&cfg, colors(), (150.0, 800.0), 0.5, 0.0, &mut rng);
    assert_eq!(f.underlay.width, 9.0);
    assert!((f.underlay.color.a - 0.5).abs() < 1e-6);
    assert_eq!(f.underlay.shadow_blur, 15.0);
    assert_eq!(f.body.width, 5.0);
    assert_eq!(f.core.width, 2.5);
    assert_eq!(f.core.color, Rgba::WHITE);
    assert_eq!(f.glow.center, Vec2::new(75.0, 400.0));
    assert_eq!(f.glow.radius, 150.0);
    assert_eq!(f.anchor_glows.len(), ANCHORS - 2);
}

#[test]
fn branches_hang_off_fixed_anchors() {
    let mut rng = make_rng(Some(3));
    let cfg = LightningConfig::default();
    let f = LightningFrame::compute(&cfg, colors(), (150.0, 600.0), 0.2, 1.0, &mut rng);
    assert_eq!(f.branches.len(), 3);
    for (b, i) in f.branches.iter().zip([1, 3, 5]) {
        assert_eq!(b.from, f.anchors[i]);
        let len = b.from.distance(b.to);
        assert!((30.0 - 1e-3..=50.0 + 1e-3).contains(&len), "length {len}");
        // angle in [0, pi): branches never point upward
        assert!(b.to.y >= b.from.y - 1e-3);
        assert!((b.width - 5.0 / 3.0).abs() < 1e-6);
    }

    let divider = LightningConfig {
        is_divider: true,
        ..LightningConfig::default()
    };
    let f = LightningFrame::compute(&divider, colors(), (50.0, 600.0), 0.2, 1.0, &mut rng);
    assert_eq!(f.branches.len(), 2);
    assert_eq!(f.glow.radius, 80.0);
    for b in &f.branches {
        let len = b.from.distance(b.to);
        assert!((15.0 - 1e-3..=25.0 + 1e-3).contains(&len));
        assert!((b.core_width - 5.0 / 8.0).abs() < 1e-6);
    }
}

#[test]
fn zero_height_canvas_has_no_anchor_glow() {
    let mut rng = make_rng(Some(5));
    let f = LightningFrame::compute(
        &LightningConfig::default(),
        colors(),
        (150.0, 0.0),
        1.0,
        0.0,
        &mut rng,
    );
    assert!(f.anchor_glows.iter().all(|g| g.stops[0].1.a == 0.0));
}
