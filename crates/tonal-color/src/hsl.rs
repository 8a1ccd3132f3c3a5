//! Device HSL, derived from clamped gamma sRGB.

use tonal_model::{Hsl, Plch};

use crate::srgb::to_srgb;

/// Convert to HSL. Hue is in degrees `[0, 360)`; saturation and lightness
/// are fractions in `[0, 1]`.
pub fn to_hsl(color: Plch) -> Hsl {
    let srgb = to_srgb(color);
    let max = srgb.r.max(srgb.g).max(srgb.b);
    let min = srgb.r.min(srgb.g).min(srgb.b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta < 1e-12 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: lightness,
        };
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == srgb.r {
        ((srgb.g - srgb.b) / delta).rem_euclid(6.0)
    } else if max == srgb.g {
        (srgb.b - srgb.r) / delta + 2.0
    } else {
        (srgb.r - srgb.g) / delta + 4.0
    };

    Hsl {
        h: (hue * 60.0).rem_euclid(360.0),
        s: saturation,
        l: lightness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srgb::from_rgb8;
    use tonal_model::Rgb8;

    #[test]
    fn gray_has_zero_saturation() {
        let gray = to_hsl(Plch::new(0.5, 0.0, 0.0));
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.h, 0.0);
    }

    #[test]
    fn pure_red_is_hue_zero() {
        let red = to_hsl(from_rgb8(Rgb8 { r: 255, g: 0, b: 0 }));
        assert!(red.h < 1.0 || red.h > 359.0);
        assert!((red.s - 1.0).abs() < 1e-2);
        assert!((red.l - 0.5).abs() < 1e-2);
    }
}
