// Host-side tests for frame timing, cancellation, springs and scroll math.

use fx_core::indicator::{px_css, top_css};
use fx_core::beam::traveler_fraction;
use fx_core::lightning::jitter;
use fx_core::progress::{as_percentage, scroll_progress, window_scroll_progress, PageHeight};
use fx_core::spring::Spring;
use fx_core::*;

#[test]
fn clock_reports_elapsed_and_capped_delta() {
    let mut clock = FrameClock::default();
    let t0 = clock.tick(1000.0);
    assert_eq!(t0.frame, 0);
    assert_eq!(t0.elapsed_sec, 0.0);
    assert_eq!(t0.dt_sec, 0.0);

    let t1 = clock.tick(1016.0);
    assert_eq!(t1.frame, 1);
    assert!((t1.dt_sec - 0.016).abs() < 1e-6);
    assert!((t1.elapsed_sec - 0.016).abs() < 1e-6);

    // a hidden tab resumes after 5 s: one capped step, elapsed keeps counting
    let t2 = clock.tick(6016.0);
    assert!((t2.dt_sec - 0.25).abs() < 1e-6);
    assert!((t2.elapsed_sec - 5.016).abs() < 1e-4);

    // timestamps never run backwards into negative deltas
    let t3 = clock.tick(6000.0);
    assert_eq!(t3.dt_sec, 0.0);
}

#[test]
fn late_mount_keeps_full_timing_precision() {
    // ten hours after page load
    let late = 36_000_000.0;
    let mut fresh = FrameClock::default();
    let mut aged = FrameClock::default();
    for i in 0..120 {
        let offset = i as f64 * 16.0;
        assert_eq!(fresh.tick(offset), aged.tick(late + offset));
    }

    let mut clock = FrameClock::default();
    let times: Vec<f32> = (0..4)
        .map(|i| clock.tick(late + i as f64 * 16.0).elapsed_sec)
        .collect();
    let sway: Vec<f32> = times.iter().map(|&t| jitter(t)).collect();
    assert!(sway.windows(2).all(|w| w[0] != w[1]), "{sway:?}");

    // animations are timed from the mount, not from page load
    assert_eq!(traveler_fraction(0, times[0]), Some(0.0));
    assert_eq!(traveler_fraction(1, times[3]), None);
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let seen_by_frame = token.clone();
    assert!(!seen_by_frame.is_cancelled());
    token.cancel();
    assert!(seen_by_frame.is_cancelled());
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn spring_settles_on_target() {
    let mut s = Spring::new(0.0, 60.0, 20.0);
    s.set_target(100.0);
    for _ in 0..600 {
        s.step(1.0 / 60.0);
    }
    assert!(s.is_at_rest());
    assert_eq!(s.value, 100.0);
}

#[test]
fn spring_is_frame_rate_independent() {
    let mut fast = Spring::new(0.0, 50.0, 15.0);
    let mut slow = fast;
    fast.set_target(1.0);
    slow.set_target(1.0);
    for _ in 0..120 {
        fast.step(1.0 / 120.0);
    }
    for _ in 0..30 {
        slow.step(1.0 / 30.0);
    }
    assert!((fast.value - slow.value).abs() < 2e-3, "{} vs {}", fast.value, slow.value);
}

#[test]
fn underdamped_pulse_overshoots() {
    let mut s = Spring::new(1.0, 100.0, 10.0);
    s.set_target(1.05);
    let peak = (0..60).map(|_| s.step(1.0 / 60.0)).fold(0.0_f32, f32::max);
    assert!(peak > 1.05);
}

#[test]
fn spring_ignores_bad_input() {
    let mut s = Spring::new(2.0, 60.0, 20.0);
    s.set_target(f32::NAN);
    assert_eq!(s.target, 2.0);
    assert_eq!(s.step(f32::NAN), 2.0);
    assert_eq!(s.step(-1.0), 2.0);
    s.snap(7.0);
    assert_eq!((s.value, s.target, s.velocity), (7.0, 7.0, 0.0));
}

#[test]
fn no_scroll_range_means_zero_progress() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(50.0, 600.0, 800.0), 0.0);
    assert_eq!(window_scroll_progress(10.0, 0.0, 0.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 1000.0, 500.0), 0.0);
}

#[test]
fn window_progress_measures_the_chosen_page_height() {
    let (body, root) = (Some(1200.0), Some(1600.0));
    assert_eq!(PageHeight::default(), PageHeight::Body);
    assert_eq!(PageHeight::Body.pick(body, root), 1200.0);
    assert_eq!(PageHeight::Root.pick(body, root), 1600.0);
    assert_eq!(PageHeight::Root.pick(body, None), 0.0);
    assert_eq!(
        window_scroll_progress(300.0, PageHeight::Root.pick(body, root), 400.0),
        0.25
    );
    assert_eq!(
        window_scroll_progress(300.0, PageHeight::Body.pick(body, root), 400.0),
        0.375
    );
}

#[test]
fn progress_is_normalized_and_clamped() {
    assert_eq!(scroll_progress(250.0, 1000.0, 500.0), 0.5);
    assert_eq!(scroll_progress(900.0, 1000.0, 500.0), 1.0);
    assert_eq!(scroll_progress(-30.0, 1000.0, 500.0), 0.0);
    assert_eq!(window_scroll_progress(300.0, 1600.0, 400.0), 0.25);
    assert_eq!(as_percentage(0.5), 50.0);
    assert_eq!(as_percentage(f32::INFINITY), 0.0);
}

#[test]
fn shared_state_rejects_non_finite_values() {
    let mut pointer = PointerState::default();
    assert_eq!(pointer.position, None);
    pointer.moved_to(f32::NAN, 3.0);
    assert_eq!(pointer.position, None);
    pointer.moved_to(4.0, 3.0);
    assert_eq!(pointer.position, Some(glam::Vec2::new(4.0, 3.0)));

    let mut scroll = ScrollState::default();
    scroll.set_progress(1.5);
    assert_eq!(scroll.progress, 1.0);
    scroll.set_progress(f32::NAN);
    assert_eq!(scroll.progress, 0.0);

    assert_eq!(Viewport::new(-10.0, 20.0), Viewport { width: 0.0, height: 20.0 });
}

#[test]
fn indicator_css_values() {
    assert_eq!(top_css(0.0), "0.00%");
    assert_eq!(top_css(0.4567), "45.67%");
    assert_eq!(top_css(2.0), "100.00%");
    assert_eq!(px_css(12.4), "12px");
}
