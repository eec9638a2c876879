// Host-side tests for tracing-beam geometry and step state.

use fx_core::beam::*;
use fx_core::config::StepConfig;
use glam::Vec2;

fn step(completed: bool) -> StepConfig {
    StepConfig {
        title: String::new(),
        completed,
    }
}

#[test]
fn key_points_span_the_height() {
    let pts = key_points(600.0);
    assert_eq!(pts.len(), 13);
    assert_eq!(pts[0].y, 0.0);
    assert!((pts[12].y - 600.0).abs() < 1e-3);
    assert!((pts[0].x - 15.0).abs() < 1e-4, "zigzag starts on the base line");
    for w in pts.windows(2) {
        assert!(w[1].y > w[0].y);
    }
    // amplitude never exceeds 20 px around the base line
    assert!(pts.iter().all(|p| (p.x - 15.0).abs() <= 20.0 + 1e-4));
}

#[test]
fn path_has_one_cubic_per_segment_with_inner_controls() {
    let path = compute_path(480.0);
    assert_eq!(path.segments.len(), 12);
    let pts = key_points(480.0);
    let mut prev = path.start;
    for (seg, end) in path.segments.iter().zip(&pts[1..]) {
        assert_eq!(seg.end, *end);
        assert!((seg.c1 - prev.lerp(*end, 0.3)).length() < 1e-4);
        assert!((seg.c2 - prev.lerp(*end, 0.7)).length() < 1e-4);
        prev = seg.end;
    }
}

#[test]
fn zero_height_path_starts_and_ends_at_top() {
    let path = compute_path(0.0);
    assert_eq!(path.start.y, 0.0);
    assert_eq!(path.end().y, 0.0);
    assert_eq!(compute_path(f32::NAN).end().y, 0.0);
}

#[test]
fn svg_d_starts_with_move_and_lists_cubics() {
    let d = compute_path(120.0).to_svg_d();
    assert!(d.starts_with("M 15 0 C "), "{d}");
    assert_eq!(d.matches(" C ").count(), 12);
    assert!(!d.contains("NaN"));
}

#[test]
fn step_positions_follow_interpolation_order() {
    let pts = key_points(1000.0);
    let positions = step_positions(7, &pts);
    assert_eq!(positions.len(), 7);
    assert_eq!(positions[0], pts[0]);
    assert!((positions[6] - pts[12]).length() < 1e-3);
    for w in positions.windows(2) {
        assert!(w[1].y > w[0].y, "markers must descend in order");
    }
}

#[test]
fn step_positions_edge_cases() {
    let pts = key_points(100.0);
    assert!(step_positions(0, &pts).is_empty());
    assert!(step_positions(3, &pts[..1]).is_empty());
    // a single step sits at the top
    assert_eq!(step_positions(1, &pts), vec![pts[0]]);
}

#[test]
fn interpolation_index_clamps_last_segment() {
    assert_eq!(interpolation_index(0.0, 13), (0, 0.0));
    let (seg, t) = interpolation_index(1.0, 13);
    assert_eq!(seg, 11);
    assert!((t - 1.0).abs() < 1e-6);
    let (seg, t) = interpolation_index(0.5, 13);
    assert_eq!(seg, 6);
    assert!(t.abs() < 1e-6);
}

#[test]
fn completed_step_and_reached_step_at_full_progress() {
    let states = step_states(&[step(true), step(false)], 1.0);
    assert!(states[0].completed && states[0].active);
    assert!(!states[1].completed && states[1].active);
}

#[test]
fn completed_implies_active_at_any_progress() {
    for progress in [0.0, 0.2, 0.5, 1.0] {
        for position in [0.0, 0.5, 1.0] {
            let s = StepState::evaluate(true, position, progress);
            assert!(s.active);
        }
    }
}

#[test]
fn passing_needs_a_margin_past_the_step() {
    assert!(!StepState::evaluate(false, 0.5, 0.55).passing);
    assert!(StepState::evaluate(false, 0.5, 0.65).passing);
    let idle = StepState::evaluate(false, 0.5, 0.3);
    assert!(!idle.active && !idle.passing);
}

#[test]
fn marker_styles_per_state() {
    let done = StepState::evaluate(true, 0.5, 0.0).style();
    assert!(done.checkmark && !done.spinner && done.glow);
    let active = StepState::evaluate(false, 0.5, 0.6).style();
    assert!(!active.checkmark && active.spinner && active.glow);
    let idle = StepState::evaluate(false, 0.5, 0.1).style();
    assert!(!idle.checkmark && !idle.spinner && !idle.glow);
    assert!(idle.fill.a < active.fill.a);
}

#[test]
fn svg_height_prefers_sidebar_and_floors_at_zero() {
    assert_eq!(svg_height(Some(700.0), 900.0), 660.0);
    assert_eq!(svg_height(None, 900.0), 900.0 - 56.0 - 40.0);
    assert_eq!(svg_height(Some(10.0), 900.0), 0.0);
    assert_eq!(viewbox_height(20.0), 100.0);
    assert_eq!(viewbox_height(640.0), 640.0);
}

#[test]
fn arc_length_exceeds_straight_drop() {
    let path = compute_path(500.0);
    let len = path.arc_length();
    assert!(len > 500.0, "zigzag must be longer than its height, got {len}");
}

#[test]
fn point_at_fraction_walks_the_path() {
    let path = compute_path(300.0);
    assert_eq!(path.point_at_fraction(0.0), path.start);
    assert!((path.point_at_fraction(1.0) - path.end()).length() < 1e-3);
    let mut prev_y = -1.0;
    for i in 0..=20 {
        let p = path.point_at_fraction(i as f32 / 20.0);
        assert!(p.y >= prev_y - 1e-3);
        prev_y = p.y;
    }
    assert_eq!(path.point_at_fraction(f32::NAN), path.start);
}

#[test]
fn dash_offset_hides_path_at_zero_progress() {
    assert_eq!(dash_offset_target(400.0, 0.0), 400.0);
    assert_eq!(dash_offset_target(400.0, 1.0), 0.0);
    assert_eq!(dash_offset_target(400.0, 2.0), 0.0);
    assert_eq!(dash_array(1000.0), "20 10");
}

#[test]
fn travelers_start_staggered_and_loop() {
    assert_eq!(traveler_fraction(0, 0.0), Some(0.0));
    assert_eq!(traveler_fraction(1, 1.0), None);
    assert_eq!(traveler_fraction(2, 3.0), None);
    let f = traveler_fraction(0, 12.0).unwrap_or(-1.0);
    assert!((f - 0.5).abs() < 1e-5, "8 s loop, 12 s in is halfway: {f}");
    let f = traveler_fraction(1, 1.6 + 5.0).unwrap_or(-1.0);
    assert!((f - 0.5).abs() < 1e-4);
}

#[test]
fn marker_animation_cycles() {
    assert_eq!(marker_wave(0.0), 0.0);
    assert!((marker_wave(1.0) - 1.0).abs() < 1e-6);
    assert!((spinner_angle(0.5) - 90.0).abs() < 1e-4);
    assert_eq!(pulse_target(0.1), 1.0, "no pulse before the first cycle");
    assert_eq!(pulse_target(2.1), 1.05);
    assert_eq!(pulse_target(2.5), 1.0);
}

#[test]
fn checkmark_is_centred_on_marker() {
    let d = checkmark_d(Vec2::new(15.0, 15.0));
    assert_eq!(d, "M 4 5.6 L 5.2 6.8 L 7.2 4.8");
}
