//! Per-mount effect configuration.
//!
//! The page passes a JSON object per effect; every field is optional and
//! field names follow the page's camelCase convention.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid effect configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub const MAX_PARTICLES: usize = 2000;
/// Closest dot spacing allowed; bounds the dots shaded per frame.
pub const MIN_DOT_SPACING: f32 = 4.0;

/// Parse a config object, treating an empty string as "all defaults".
pub fn from_json<T>(json: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(json)?)
}

/// Like [`from_json`] but logs and falls back to defaults on error.
pub fn from_json_or_default<T>(json: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    from_json(json).unwrap_or_else(|e| {
        log::warn!("[config] {e}; using defaults");
        T::default()
    })
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: usize,
    pub speed: f32,
    pub color: String,
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            speed: 0.5,
            color: "rgba(255, 255, 255, 0.7)".to_string(),
            seed: None,
        }
    }
}

impl ParticleConfig {
    pub fn sanitize(mut self) -> Self {
        self.count = self.count.min(MAX_PARTICLES);
        self.speed = finite_non_negative(self.speed, 0.5);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DotGridConfig {
    pub dot_color: String,
    pub dot_size: f32,
    pub dot_spacing: f32,
    pub glow_color: String,
    pub glow_intensity: f32,
    pub seed: Option<u64>,
}

impl Default for DotGridConfig {
    fn default() -> Self {
        Self {
            dot_color: "rgba(255, 255, 255, 0.2)".to_string(),
            dot_size: 1.0,
            dot_spacing: 30.0,
            glow_color: "rgba(255, 255, 255, 0.8)".to_string(),
            glow_intensity: 0.8,
            seed: None,
        }
    }
}

impl DotGridConfig {
    pub fn sanitize(mut self) -> Self {
        self.dot_size = finite_non_negative(self.dot_size, 1.0);
        self.dot_spacing = finite_non_negative(self.dot_spacing, 30.0).max(MIN_DOT_SPACING);
        self.glow_intensity = finite_non_negative(self.glow_intensity, 0.8);
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LightningConfig {
    pub color: String,
    pub glow_color: String,
    pub width: f32,
    pub glow_intensity: f32,
    pub is_divider: bool,
    pub seed: Option<u64>,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            color: "#00ffff".to_string(),
            glow_color: "rgba(255, 255, 255, 0.8)".to_string(),
            width: 5.0,
            glow_intensity: 0.8,
            is_divider: false,
            seed: None,
        }
    }
}

impl LightningConfig {
    pub fn sanitize(mut self) -> Self {
        self.width = finite_non_negative(self.width, 5.0);
        self.glow_intensity = finite_non_negative(self.glow_intensity, 0.8);
        self
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StepConfig {
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TracingBeamConfig {
    pub steps: Vec<StepConfig>,
    pub scroll_selector: String,
    pub sidebar_selector: String,
}

impl Default for TracingBeamConfig {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            scroll_selector: ".content-scroll-container".to_string(),
            sidebar_selector: ".sidebar-container".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollIndicatorConfig {
    /// Scroll container; the window when absent.
    pub container_selector: Option<String>,
    /// Element receiving `--scroll-position`.
    pub light_selector: Option<String>,
    /// Element receiving `--mouse-x` / `--mouse-y`.
    pub mouse_selector: Option<String>,
}

fn finite_non_negative(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        fallback
    }
}
