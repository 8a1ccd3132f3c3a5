//! CIE LCh(ab) under the D65 illuminant, for the `lch` token format.

use tonal_model::{CieLch, Plch};

use crate::oklab::to_linear_rgb;
use tonal_model::color::clamp;

/// Linear sRGB → CIE XYZ, D65.
const LINEAR_RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// D65 reference white.
const WHITE_D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// CIE Lab nonlinearity knot, (6/29)^3.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// Convert to CIE LCh. Channels clamp into gamut first, so extreme-chroma
/// OKLCH inputs report the boundary color they would display as.
pub fn to_cielch(color: Plch) -> CieLch {
    let rgb = to_linear_rgb(color);
    let r = clamp(rgb.r, 0.0, 1.0);
    let g = clamp(rgb.g, 0.0, 1.0);
    let b = clamp(rgb.b, 0.0, 1.0);

    let x = LINEAR_RGB_TO_XYZ[0][0] * r + LINEAR_RGB_TO_XYZ[0][1] * g + LINEAR_RGB_TO_XYZ[0][2] * b;
    let y = LINEAR_RGB_TO_XYZ[1][0] * r + LINEAR_RGB_TO_XYZ[1][1] * g + LINEAR_RGB_TO_XYZ[1][2] * b;
    let z = LINEAR_RGB_TO_XYZ[2][0] * r + LINEAR_RGB_TO_XYZ[2][1] * g + LINEAR_RGB_TO_XYZ[2][2] * b;

    let fx = lab_f(x / WHITE_D65[0]);
    let fy = lab_f(y / WHITE_D65[1]);
    let fz = lab_f(z / WHITE_D65[2]);

    let lightness = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let lab_b = 200.0 * (fy - fz);

    let chroma = a.hypot(lab_b);
    let hue = if chroma < 1e-9 {
        0.0
    } else {
        lab_b.atan2(a).to_degrees().rem_euclid(360.0)
    };

    CieLch {
        l: lightness,
        c: chroma,
        h: hue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_l100_achromatic() {
        let white = to_cielch(Plch::new(1.0, 0.0, 0.0));
        assert!((white.l - 100.0).abs() < 0.1);
        assert!(white.c < 0.1);
    }

    #[test]
    fn black_is_l0() {
        let black = to_cielch(Plch::new(0.0, 0.0, 0.0));
        assert!(black.l.abs() < 0.1);
    }
}
