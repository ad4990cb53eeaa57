//! Severity colors for the pain level input.
//!
//! # Invariants
//! - `blend` only accepts factors in `[0, 1]`.
//! - Channels are interpolated independently and rounded half away from zero.

use crate::model::entry::MAX_LEVEL;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Self = Self::new(255, 0, 0, 255);
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs as `0xAARRGGBB`, the layout Flutter's `Color(int)` expects.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    FactorOutOfRange { factor: f32 },
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactorOutOfRange { factor } => {
                write!(f, "blend factor {factor} is outside [0, 1]")
            }
        }
    }
}

impl Error for ColorError {}

/// Linear interpolation `t * a + (1 - t) * b` per channel.
///
/// `t = 1` yields `a`, `t = 0` yields `b`.
///
/// # Errors
/// - `FactorOutOfRange` when `t` is NaN or outside `[0, 1]`. Callers derive
///   `t` themselves, so this signals a caller bug.
pub fn blend(a: Rgba, b: Rgba, t: f32) -> Result<Rgba, ColorError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(ColorError::FactorOutOfRange { factor: t });
    }
    let mix = |ca: u8, cb: u8| -> u8 {
        let value = t * f32::from(ca) + (1.0 - t) * f32::from(cb);
        value.round().clamp(0.0, 255.0) as u8
    };
    Ok(Rgba::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a)))
}

/// Slider color for `level`: green at 0, red at 10.
pub fn severity_color(level: f32) -> Result<Rgba, ColorError> {
    blend(Rgba::RED, Rgba::GREEN, level / MAX_LEVEL as f32)
}
