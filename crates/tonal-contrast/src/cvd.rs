//! Color-vision-deficiency simulation.
//!
//! Fixed 3×3 transforms after Brettel, Viénot and Mollon (CVIU 1997),
//! applied in device RGB. The round-trip through RGB is intentional: the
//! matrices model cone response in RGB space, not in the perceptual space
//! the rest of the engine works in.

use tonal_color::{from_rgb8, to_rgb8};
use tonal_model::{CvdKind, Plch, Rgb8};

/// Protanopia (red-blind): missing L-cones.
const PROTANOPIA_MATRIX: [[f64; 3]; 3] = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

/// Deuteranopia (green-blind): missing M-cones.
const DEUTERANOPIA_MATRIX: [[f64; 3]; 3] = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

/// Tritanopia (blue-blind): missing S-cones.
const TRITANOPIA_MATRIX: [[f64; 3]; 3] = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

fn apply_matrix(rgb: Rgb8, matrix: &[[f64; 3]; 3]) -> Rgb8 {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let channel = |row: &[f64; 3]| -> u8 {
        let value = (row[0] * r + row[1] * g + row[2] * b) * 255.0;
        value.clamp(0.0, 255.0).round() as u8
    };

    Rgb8 {
        r: channel(&matrix[0]),
        g: channel(&matrix[1]),
        b: channel(&matrix[2]),
    }
}

/// Simulate how `color` appears under a color vision deficiency.
/// `Normal` is the identity.
pub fn simulate_cvd(color: Plch, kind: CvdKind) -> Plch {
    let matrix = match kind {
        CvdKind::Normal => return color,
        CvdKind::Protanopia => &PROTANOPIA_MATRIX,
        CvdKind::Deuteranopia => &DEUTERANOPIA_MATRIX,
        CvdKind::Tritanopia => &TRITANOPIA_MATRIX,
    };

    let transformed = apply_matrix(to_rgb8(color), matrix);
    from_rgb8(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_identity() {
        let color = Plch::new(0.55, 0.18, 25.0);
        assert_eq!(simulate_cvd(color, CvdKind::Normal), color);
    }

    #[test]
    fn protanopia_shifts_red_toward_yellow_brown() {
        // A saturated red-ish primary must move substantially: the
        // missing L-cone collapses the red/green axis.
        let red = Plch::new(0.55, 0.18, 25.0);
        let simulated = simulate_cvd(red, CvdKind::Protanopia);
        assert_ne!(simulated, red);
        // Hue lands in the yellow/brown region, chroma collapses.
        assert!(simulated.h > 60.0 && simulated.h < 120.0);
        assert!(simulated.c < red.c * 0.7);
    }

    #[test]
    fn deuteranopia_preserves_blue_axis() {
        let blue = Plch::new(0.5, 0.15, 260.0);
        let simulated = simulate_cvd(blue, CvdKind::Deuteranopia);
        // Blue survives mostly intact for a green-blind observer.
        let hue_gap = (simulated.h - blue.h).abs();
        let hue_gap = hue_gap.min(360.0 - hue_gap);
        assert!(hue_gap < 40.0);
    }

    #[test]
    fn achromatic_colors_stay_achromatic() {
        let gray = Plch::new(0.6, 0.0, 0.0);
        for kind in [CvdKind::Protanopia, CvdKind::Deuteranopia, CvdKind::Tritanopia] {
            let simulated = simulate_cvd(gray, kind);
            assert!(simulated.c < 0.02, "{kind} should keep gray near-neutral");
        }
    }
}
