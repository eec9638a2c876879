//! Minimal CSS colour handling.
//!
//! Effects are configured with CSS colour strings and repaint them at many
//! different alphas per frame, so colours are parsed once into [`Rgba`] and
//! re-serialised with the alpha each draw call needs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unsupported colour syntax: {0:?}")]
    Syntax(String),
    #[error("colour {0:?} expects {1} components")]
    Arity(String, usize),
    #[error("invalid colour component {0:?}")]
    Component(String),
}

/// 8-bit RGB with a floating alpha, as CSS `rgba()` expresses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same channels, alpha replaced (clamped to [0, 1]).
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { a, ..self }
    }

    /// Same channels, alpha multiplied by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Parse, falling back to `fallback` when the string is not understood.
    pub fn parse_or(s: &str, fallback: Rgba) -> Rgba {
        match s.parse() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[color] {e}; using {fallback}");
                fallback
            }
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(s, hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            let (rgb, alpha) = match parts.as_slice() {
                [r, g, b] => ([*r, *g, *b], None),
                [r, g, b, a] => ([*r, *g, *b], Some(*a)),
                _ => return Err(ColorError::Arity(s.to_string(), 4)),
            };
            let mut channels = [0u8; 3];
            for (slot, part) in channels.iter_mut().zip(rgb) {
                let v: f32 = part
                    .parse()
                    .map_err(|_| ColorError::Component(part.to_string()))?;
                *slot = v.round().clamp(0.0, 255.0) as u8;
            }
            let a = match alpha {
                Some(a) => a
                    .parse::<f32>()
                    .map_err(|_| ColorError::Component(a.to_string()))?,
                None => 1.0,
            };
            return Ok(Rgba::new(channels[0], channels[1], channels[2], 1.0).with_alpha(a));
        }
        Err(ColorError::Syntax(s.to_string()))
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgba, ColorError> {
    let digit = |c: char| {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| ColorError::Component(c.to_string()))
    };
    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        3 => {
            let r = digit(chars[0])?;
            let g = digit(chars[1])?;
            let b = digit(chars[2])?;
            Ok(Rgba::new(r * 17, g * 17, b * 17, 1.0))
        }
        6 => {
            let byte = |i: usize| -> Result<u8, ColorError> {
                Ok(digit(chars[i])? * 16 + digit(chars[i + 1])?)
            };
            Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 1.0))
        }
        _ => Err(ColorError::Arity(input.to_string(), 6)),
    }
}
