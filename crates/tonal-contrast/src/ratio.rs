//! WCAG 2.1 relative luminance and contrast ratio.

use tonal_color::to_linear_rgb;
use tonal_model::color::clamp;
use tonal_model::{ContrastLevel, Plch};

/// Near-white reference text color.
pub const LIGHT_TEXT: Plch = Plch {
    l: 0.98,
    c: 0.02,
    h: 90.0,
};

/// Near-black reference text color.
pub const DARK_TEXT: Plch = Plch {
    l: 0.14,
    c: 0.02,
    h: 90.0,
};

/// WCAG relative luminance: `0.2126 R + 0.7152 G + 0.0722 B` over linear
/// channels clamped into `[0, 1]`.
pub fn relative_luminance(color: Plch) -> f64 {
    let rgb = to_linear_rgb(color);
    let r = clamp(rgb.r, 0.0, 1.0);
    let g = clamp(rgb.g, 0.0, 1.0);
    let b = clamp(rgb.b, 0.0, 1.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(foreground: Plch, background: Plch) -> f64 {
    let lum_a = relative_luminance(foreground);
    let lum_b = relative_luminance(background);
    let light = lum_a.max(lum_b);
    let dark = lum_a.min(lum_b);
    (light + 0.05) / (dark + 0.05)
}

/// Three-way badge classification used by the studio UI. Large-text
/// nuance lives in [`crate::evaluate_contrast`]; this never returns
/// [`ContrastLevel::AaLarge`].
pub fn contrast_level(ratio: f64) -> ContrastLevel {
    if ratio >= 7.0 {
        ContrastLevel::Aaa
    } else if ratio >= 4.5 {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    }
}

/// A chosen text color and the ratio it achieves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPick {
    pub color: Plch,
    pub ratio: f64,
}

/// Choose between the light and dark reference text colors by higher
/// contrast against `background`. The default text-on-color selection
/// whenever no repair is requested.
pub fn pick_text_color(background: Plch) -> TextPick {
    let light_ratio = contrast_ratio(LIGHT_TEXT, background);
    let dark_ratio = contrast_ratio(DARK_TEXT, background);
    if light_ratio >= dark_ratio {
        TextPick {
            color: LIGHT_TEXT,
            ratio: light_ratio,
        }
    } else {
        TextPick {
            color: DARK_TEXT,
            ratio: dark_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Plch::new(0.0, 0.0, 0.0), Plch::new(1.0, 0.0, 0.0));
        assert!((ratio - 21.0).abs() < 1e-6);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Plch::new(0.3, 0.1, 40.0);
        let b = Plch::new(0.8, 0.05, 210.0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn identical_colors_are_ratio_one() {
        let color = Plch::new(0.5, 0.12, 150.0);
        assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dark_background_picks_light_text() {
        let pick = pick_text_color(Plch::new(0.2, 0.05, 260.0));
        assert_eq!(pick.color, LIGHT_TEXT);
        assert!(pick.ratio > 4.5);
    }

    #[test]
    fn light_background_picks_dark_text() {
        let pick = pick_text_color(Plch::new(0.95, 0.02, 90.0));
        assert_eq!(pick.color, DARK_TEXT);
    }
}
