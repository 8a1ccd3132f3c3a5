//! sRGB gamma encoding, 8-bit quantization, and hex serialization.

use thiserror::Error;
use tonal_model::color::clamp;
use tonal_model::{LinearRgb, Plch, Rgb8};

use crate::oklab::{from_linear_rgb, to_linear_rgb};

/// Linear value below which the sRGB transfer curve is a straight slope.
const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;
/// Encoded value below which the inverse curve is a straight slope.
const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
const SRGB_LINEAR_SLOPE: f64 = 12.92;
const SRGB_GAMMA: f64 = 2.4;

/// Gamma-encoded sRGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Encode one linear channel into gamma sRGB.
fn linear_to_srgb(value: f64) -> f64 {
    if value <= SRGB_ENCODE_THRESHOLD {
        SRGB_LINEAR_SLOPE * value
    } else {
        1.055 * value.powf(1.0 / SRGB_GAMMA) - 0.055
    }
}

/// Decode one gamma sRGB channel into linear light.
fn srgb_to_linear(value: f64) -> f64 {
    if value <= SRGB_DECODE_THRESHOLD {
        value / SRGB_LINEAR_SLOPE
    } else {
        ((value + 0.055) / 1.055).powf(SRGB_GAMMA)
    }
}

/// Convert to gamma sRGB, clamping channel-wise into `[0, 1]`. This is a
/// plain clamp, not gamut mapping: extreme chroma desaturates toward the
/// gamut boundary, which is accepted and documented behavior.
pub fn to_srgb(color: Plch) -> Srgb {
    let rgb = to_linear_rgb(color);
    Srgb {
        r: clamp(linear_to_srgb(rgb.r), 0.0, 1.0),
        g: clamp(linear_to_srgb(rgb.g), 0.0, 1.0),
        b: clamp(linear_to_srgb(rgb.b), 0.0, 1.0),
    }
}

/// Quantize to 8 bits per channel.
pub fn to_rgb8(color: Plch) -> Rgb8 {
    let srgb = to_srgb(color);
    Rgb8 {
        r: (srgb.r * 255.0).round() as u8,
        g: (srgb.g * 255.0).round() as u8,
        b: (srgb.b * 255.0).round() as u8,
    }
}

/// Inverse of [`to_rgb8`]: decode 8-bit sRGB back into OKLCH. Used for
/// image color extraction and CVD round-trips.
pub fn from_rgb8(rgb: Rgb8) -> Plch {
    let linear = LinearRgb {
        r: srgb_to_linear(f64::from(rgb.r) / 255.0),
        g: srgb_to_linear(f64::from(rgb.g) / 255.0),
        b: srgb_to_linear(f64::from(rgb.b) / 255.0),
    };
    from_linear_rgb(linear)
}

/// Lowercase `#rrggbb` string.
pub fn to_hex(color: Plch) -> String {
    let rgb = to_rgb8(color);
    format!("#{}", hex::encode([rgb.r, rgb.g, rgb.b]))
}

/// Failure to parse a hex color string.
#[derive(Debug, Error)]
pub enum ParseHexError {
    #[error("hex color must have 3 or 6 digits: {0}")]
    Length(String),
    #[error("invalid hex digit in color: {0}")]
    Digit(String),
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex(value: &str) -> Result<Rgb8, ParseHexError> {
    let digits = value.trim().trim_start_matches('#');
    let expanded = match digits.len() {
        3 => digits
            .chars()
            .flat_map(|ch| [ch, ch])
            .collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(ParseHexError::Length(value.to_string())),
    };
    let bytes = hex::decode(&expanded).map_err(|_| ParseHexError::Digit(value.to_string()))?;
    Ok(Rgb8 {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_hex() {
        assert_eq!(to_hex(Plch::new(1.0, 0.0, 0.0)), "#ffffff");
        assert_eq!(to_hex(Plch::new(0.0, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn parse_hex_accepts_short_and_long_forms() {
        let long = parse_hex("#3a6bd0").expect("long form");
        assert_eq!(long, Rgb8 { r: 0x3a, g: 0x6b, b: 0xd0 });
        let short = parse_hex("fff").expect("short form");
        assert_eq!(short, Rgb8 { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn from_rgb8_red_lands_near_reference() {
        // sRGB red is ~oklch(0.628 0.258 29.2).
        let red = from_rgb8(Rgb8 { r: 255, g: 0, b: 0 });
        assert!((red.l - 0.628).abs() < 5e-3);
        assert!((red.c - 0.258).abs() < 5e-3);
        assert!((red.h - 29.2).abs() < 0.5);
    }

    #[test]
    fn hex_round_trip_preserves_bytes() {
        let rgb = Rgb8 { r: 18, g: 52, b: 86 };
        let color = from_rgb8(rgb);
        assert_eq!(to_rgb8(color), rgb);
    }
}
