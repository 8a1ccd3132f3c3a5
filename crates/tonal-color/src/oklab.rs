//! OKLCH ⇄ linear sRGB through the OKLab LMS model.

use tonal_model::{LinearRgb, Plch};

/// OKLab → LMS' mixing coefficients (applied before cubing).
const OKLAB_TO_LMS: [[f64; 2]; 3] = [
    [0.3963377774, 0.2158037573],
    [-0.1055613458, -0.0638541728],
    [-0.0894841775, -1.291485548],
];

/// Cubed LMS → linear sRGB.
const LMS_TO_LINEAR_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.707614701],
];

/// Linear sRGB → LMS (inverse direction).
const LINEAR_RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS → OKLab.
const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

fn plch_to_oklab(color: Plch) -> (f64, f64, f64) {
    let h_rad = color.h.to_radians();
    (color.l, color.c * h_rad.cos(), color.c * h_rad.sin())
}

/// Convert to linear-light sRGB. Channels are deliberately NOT clamped:
/// out-of-gamut colors yield values outside `[0, 1]` and the device
/// boundary decides how to clamp them.
pub fn to_linear_rgb(color: Plch) -> LinearRgb {
    let (lum, a, b) = plch_to_oklab(color);

    let l_ = lum + OKLAB_TO_LMS[0][0] * a + OKLAB_TO_LMS[0][1] * b;
    let m_ = lum + OKLAB_TO_LMS[1][0] * a + OKLAB_TO_LMS[1][1] * b;
    let s_ = lum + OKLAB_TO_LMS[2][0] * a + OKLAB_TO_LMS[2][1] * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: LMS_TO_LINEAR_RGB[0][0] * l + LMS_TO_LINEAR_RGB[0][1] * m + LMS_TO_LINEAR_RGB[0][2] * s,
        g: LMS_TO_LINEAR_RGB[1][0] * l + LMS_TO_LINEAR_RGB[1][1] * m + LMS_TO_LINEAR_RGB[1][2] * s,
        b: LMS_TO_LINEAR_RGB[2][0] * l + LMS_TO_LINEAR_RGB[2][1] * m + LMS_TO_LINEAR_RGB[2][2] * s,
    }
}

/// Exact inverse of [`to_linear_rgb`] for in-range results. Achromatic
/// inputs come back with hue 0.
pub fn from_linear_rgb(rgb: LinearRgb) -> Plch {
    let l = LINEAR_RGB_TO_LMS[0][0] * rgb.r
        + LINEAR_RGB_TO_LMS[0][1] * rgb.g
        + LINEAR_RGB_TO_LMS[0][2] * rgb.b;
    let m = LINEAR_RGB_TO_LMS[1][0] * rgb.r
        + LINEAR_RGB_TO_LMS[1][1] * rgb.g
        + LINEAR_RGB_TO_LMS[1][2] * rgb.b;
    let s = LINEAR_RGB_TO_LMS[2][0] * rgb.r
        + LINEAR_RGB_TO_LMS[2][1] * rgb.g
        + LINEAR_RGB_TO_LMS[2][2] * rgb.b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let lum = LMS_TO_OKLAB[0][0] * l_ + LMS_TO_OKLAB[0][1] * m_ + LMS_TO_OKLAB[0][2] * s_;
    let a = LMS_TO_OKLAB[1][0] * l_ + LMS_TO_OKLAB[1][1] * m_ + LMS_TO_OKLAB[1][2] * s_;
    let b = LMS_TO_OKLAB[2][0] * l_ + LMS_TO_OKLAB[2][1] * m_ + LMS_TO_OKLAB[2][2] * s_;

    let chroma = a.hypot(b);
    let hue = if chroma < 1e-9 {
        0.0
    } else {
        b.atan2(a).to_degrees()
    };

    Plch::new(lum, chroma, hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_maps_to_unit_channels() {
        let rgb = to_linear_rgb(Plch::new(1.0, 0.0, 0.0));
        assert!((rgb.r - 1.0).abs() < 1e-6);
        assert!((rgb.g - 1.0).abs() < 1e-6);
        assert!((rgb.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn black_maps_to_zero_channels() {
        let rgb = to_linear_rgb(Plch::new(0.0, 0.0, 0.0));
        assert!(rgb.r.abs() < 1e-9);
        assert!(rgb.g.abs() < 1e-9);
        assert!(rgb.b.abs() < 1e-9);
    }

    #[test]
    fn extreme_chroma_exceeds_gamut() {
        // A saturated mid-lightness green lands outside [0, 1] pre-clamp.
        let rgb = to_linear_rgb(Plch::new(0.5, 0.37, 145.0));
        assert!(rgb.r < 0.0 || rgb.g > 1.0 || rgb.b < 0.0);
    }

    #[test]
    fn inverse_recovers_forward() {
        let original = Plch::new(0.62, 0.11, 240.0);
        let round = from_linear_rgb(to_linear_rgb(original));
        assert!((round.l - original.l).abs() < 1e-9);
        assert!((round.c - original.c).abs() < 1e-9);
        assert!((round.h - original.h).abs() < 1e-6);
    }
}
