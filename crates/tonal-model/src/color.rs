use serde::{Deserialize, Serialize};
use std::fmt;

/// Clamp a value into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Normalize a hue angle into `[0, 360)`.
///
/// `rem_euclid` alone can round up to exactly 360.0 for values a few ulp
/// below zero; the extra check keeps the half-open interval honest.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A color in the perceptually uniform lightness/chroma/hue space (OKLCH).
///
/// Invariants, enforced on construction and on every `with_*` transform:
/// `l` in `[0, 1]`, `c` in `[0, 0.4]`, `h` in `[0, 360)`. No component of
/// the engine may observe an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plch {
    /// Perceptual lightness, 0 = black, 1 = white.
    pub l: f64,
    /// Chroma (colorfulness), 0 = achromatic.
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Plch {
    /// Construct a color, clamping lightness and chroma and normalizing hue.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: clamp(l, 0.0, 1.0),
            c: clamp(c, 0.0, 0.4),
            h: normalize_hue(h),
        }
    }

    /// Return a copy with the given lightness (clamped).
    pub fn with_l(self, l: f64) -> Self {
        Self::new(l, self.c, self.h)
    }

    /// Return a copy with the given chroma (clamped).
    pub fn with_c(self, c: f64) -> Self {
        Self::new(self.l, c, self.h)
    }

    /// Return a copy with the given hue (normalized).
    pub fn with_h(self, h: f64) -> Self {
        Self::new(self.l, self.c, h)
    }
}

impl fmt::Display for Plch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

/// Linear-light sRGB. Channels are unbounded reals: conversions out of
/// OKLCH may land outside `[0, 1]` for out-of-gamut colors, and callers
/// clamp at the device boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB quantized to 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An 8-bit RGBA sample, as handed over by an image decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// HSL with hue in degrees `[0, 360)` and saturation/lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CIE LCh(ab) under D65: `l` in `[0, 100]`, `c` unbounded chroma,
/// `h` in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CieLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}
