// Host-side tests for colour parsing and mount configuration.

use fx_core::config::{from_json, from_json_or_default, MAX_PARTICLES, MIN_DOT_SPACING};
use fx_core::*;

#[test]
fn parses_css_colour_forms() {
    assert_eq!("#fff".parse::<Rgba>().ok(), Some(Rgba::WHITE));
    assert_eq!("#00ffff".parse::<Rgba>().ok(), Some(Rgba::new(0, 255, 255, 1.0)));
    assert_eq!("rgb(79, 70, 229)".parse::<Rgba>().ok(), Some(Rgba::new(79, 70, 229, 1.0)));
    let c: Rgba = "rgba(255, 255, 255, 0.7)".parse().unwrap_or(Rgba::BLACK);
    assert_eq!((c.r, c.g, c.b), (255, 255, 255));
    assert!((c.a - 0.7).abs() < 1e-6);
    assert_eq!(" RGBA(1,2,3,2) ".parse::<Rgba>().ok(), Some(Rgba::new(1, 2, 3, 1.0)));
}

#[test]
fn rejects_malformed_colours() {
    assert!(matches!("tomato".parse::<Rgba>(), Err(ColorError::Syntax(_))));
    assert!(matches!("#abcd".parse::<Rgba>(), Err(ColorError::Arity(..))));
    assert!(matches!("#ggg".parse::<Rgba>(), Err(ColorError::Component(_))));
    assert!(matches!("rgb(1, 2)".parse::<Rgba>(), Err(ColorError::Arity(..))));
    assert!(matches!("rgba(1, 2, x, 1)".parse::<Rgba>(), Err(ColorError::Component(_))));
    let fallback = Rgba::new(1, 2, 3, 0.5);
    assert_eq!(Rgba::parse_or("nope", fallback), fallback);
}

#[test]
fn css_output_round_trips_alpha() {
    let c = Rgba::new(10, 20, 30, 1.0).with_alpha(0.25);
    assert_eq!(c.to_css(), "rgba(10, 20, 30, 0.250)");
    assert_eq!(Rgba::WHITE.with_alpha(f32::NAN).a, 0.0);
    assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
    assert!((Rgba::WHITE.with_alpha(0.8).scale_alpha(0.5).a - 0.4).abs() < 1e-6);
}

#[test]
fn empty_config_means_defaults() {
    let p: ParticleConfig = from_json("").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(p, ParticleConfig::default());
    assert_eq!(p.count, 100);
    assert_eq!(p.speed, 0.5);
    assert_eq!(p.color, "rgba(255, 255, 255, 0.7)");

    let g: DotGridConfig = from_json("{}").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(g.dot_spacing, 30.0);
    assert_eq!(g.glow_intensity, 0.8);

    let l: LightningConfig = from_json("  ").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(l.color, "#00ffff");
    assert_eq!(l.width, 5.0);
    assert!(!l.is_divider);

    let b: TracingBeamConfig = from_json("").unwrap_or_else(|e| panic!("{e}"));
    assert!(b.steps.is_empty());
    assert_eq!(b.scroll_selector, ".content-scroll-container");
    assert_eq!(b.sidebar_selector, ".sidebar-container");
}

#[test]
fn camel_case_fields_are_read() {
    let g: DotGridConfig =
        from_json(r#"{"dotSize": 1.2, "dotSpacing": 24, "glowIntensity": 1.0, "seed": 7}"#)
            .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(g.dot_size, 1.2);
    assert_eq!(g.dot_spacing, 24.0);
    assert_eq!(g.seed, Some(7));
    assert_eq!(g.dot_color, DotGridConfig::default().dot_color);

    let l: LightningConfig = from_json(r##"{"isDivider": true, "glowColor": "#fff"}"##)
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(l.is_divider);
    assert_eq!(l.glow_color, "#fff");

    let b: TracingBeamConfig = from_json(
        r#"{"steps": [{"title": "Install", "completed": true}, {"title": "Use"}]}"#,
    )
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(b.steps.len(), 2);
    assert!(b.steps[0].completed);
    assert!(!b.steps[1].completed);
    assert_eq!(b.steps[1].title, "Use");

    let s: ScrollIndicatorConfig =
        from_json(r#"{"containerSelector": ".content", "lightSelector": ".flickering-light"}"#)
            .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(s.container_selector.as_deref(), Some(".content"));
    assert_eq!(s.light_selector.as_deref(), Some(".flickering-light"));
    assert_eq!(s.mouse_selector, None);
}

#[test]
fn invalid_json_is_an_error_or_defaults() {
    assert!(matches!(
        from_json::<ParticleConfig>("{count: 3}"),
        Err(ConfigError::Json(_))
    ));
    let p: ParticleConfig = from_json_or_default(r#"{"count": "many"}"#);
    assert_eq!(p, ParticleConfig::default());
}

#[test]
fn sanitize_clamps_nonsense() {
    let p = ParticleConfig {
        count: 1_000_000,
        speed: -3.0,
        ..ParticleConfig::default()
    }
    .sanitize();
    assert_eq!(p.count, MAX_PARTICLES);
    assert_eq!(p.speed, 0.0);

    let g = DotGridConfig {
        dot_spacing: 0.0,
        dot_size: f32::NAN,
        ..DotGridConfig::default()
    }
    .sanitize();
    assert_eq!(g.dot_spacing, MIN_DOT_SPACING);
    assert_eq!(g.dot_size, 1.0);

    let dense = DotGridConfig {
        dot_spacing: 1.0,
        ..DotGridConfig::default()
    }
    .sanitize();
    assert_eq!(dense.dot_spacing, 4.0);

    let l = LightningConfig {
        width: f32::INFINITY,
        glow_intensity: -1.0,
        ..LightningConfig::default()
    }
    .sanitize();
    assert_eq!(l.width, 5.0);
    assert_eq!(l.glow_intensity, 0.0);
}
