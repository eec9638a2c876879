//! Painting: Canvas 2D for the particle field, dot grid and lightning bolt,
//! SVG attribute updates for the tracing beam and scroll indicator.

pub mod beam;
pub mod grid;
mod helpers;
pub mod indicator;
pub mod lightning;
pub mod particles;
mod svg;

pub use helpers::{clear, Ctx};
