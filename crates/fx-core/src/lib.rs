//! Platform-free core of the docs-fx effects.
//!
//! Everything here is plain numeric state and geometry; the web front-end
//! owns the canvas, the DOM and the animation-frame loop and calls into these
//! types once per frame.

pub mod beam;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod grid;
pub mod indicator;
pub mod lightning;
pub mod particles;
pub mod progress;
pub mod rng;
pub mod spring;
pub mod state;

pub use color::{ColorError, Rgba};
pub use config::{
    ConfigError, DotGridConfig, LightningConfig, ParticleConfig, ScrollIndicatorConfig,
    StepConfig, TracingBeamConfig,
};
pub use driver::{CancelToken, FrameClock, FrameTime};
pub use state::{PointerState, ScrollState, Viewport};
