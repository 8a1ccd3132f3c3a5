//! Dual-theme derivation: a coherent dark counterpart for a light
//! palette, and vice versa.

use serde::Serialize;
use tracing::debug;

use tonal_contrast::{adjust_for_contrast, contrast_ratio};
use tonal_model::color::clamp;
use tonal_model::{DualTheme, Palette, Plch, ThemeMode};

/// Chroma multiplier applied to every role when deriving dark mode.
/// Slightly desaturated color reads better on dark surfaces.
const DARK_CHROMA_FACTOR: f64 = 0.9;

/// A palette is light when its background sits in the upper half of the
/// lightness range.
pub fn detect_theme_mode(palette: &Palette) -> ThemeMode {
    if palette.background.l > 0.5 {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

fn invert_lightness(color: Plch) -> Plch {
    color.with_l(1.0 - color.l)
}

fn scale_chroma_for_dark(color: Plch) -> Plch {
    color.with_c(clamp(color.c * DARK_CHROMA_FACTOR, 0.0, 0.4))
}

/// Derive a dark palette from a light one.
///
/// Background, surface, text, and muted invert fully. Primary and accent
/// keep hue and chroma and only remap lightness when they sit on the
/// wrong side for a dark surface (`l < 0.5`). All roles then lose 10% of
/// their chroma, and the result passes through the same contrast floor a
/// freshly generated palette gets.
pub fn derive_dark(light: &Palette) -> Palette {
    let mut primary = light.primary;
    if primary.l < 0.5 {
        primary = primary.with_l(clamp(1.0 - primary.l + 0.1, 0.5, 0.8));
    }
    let mut accent = light.accent;
    if accent.l < 0.5 {
        accent = accent.with_l(clamp(1.0 - accent.l + 0.1, 0.5, 0.8));
    }

    let palette = Palette {
        background: scale_chroma_for_dark(invert_lightness(light.background)),
        surface: scale_chroma_for_dark(invert_lightness(light.surface)),
        primary: scale_chroma_for_dark(primary),
        accent: scale_chroma_for_dark(accent),
        text: scale_chroma_for_dark(invert_lightness(light.text)),
        muted: scale_chroma_for_dark(invert_lightness(light.muted)),
    };

    ensure_theme_contrast(&palette, ThemeMode::Dark)
}

/// Derive a light palette from a dark one. Symmetric to [`derive_dark`]:
/// primary and accent remap only when too bright for a light surface
/// (`l > 0.6`), and chroma is left as-is.
pub fn derive_light(dark: &Palette) -> Palette {
    let mut primary = dark.primary;
    if primary.l > 0.6 {
        primary = primary.with_l(clamp(1.0 - primary.l - 0.1, 0.3, 0.6));
    }
    let mut accent = dark.accent;
    if accent.l > 0.6 {
        accent = accent.with_l(clamp(1.0 - accent.l - 0.1, 0.3, 0.6));
    }

    let palette = Palette {
        background: invert_lightness(dark.background),
        surface: invert_lightness(dark.surface),
        primary,
        accent,
        text: invert_lightness(dark.text),
        muted: invert_lightness(dark.muted),
    };

    ensure_theme_contrast(&palette, ThemeMode::Light)
}

/// Contrast floor for derived themes: text ≥ 4.5 against the background,
/// a small surface nudge when text-on-surface still misses, and muted
/// ≥ 3.0 against the background. Conditions test the palette as derived;
/// fixes are applied on the copy.
fn ensure_theme_contrast(palette: &Palette, mode: ThemeMode) -> Palette {
    let mut result = *palette;

    let text_bg = contrast_ratio(palette.text, palette.background);
    if text_bg < 4.5 {
        debug!(mode = %mode, ratio = text_bg, "repairing text/background contrast");
        result.text = adjust_for_contrast(palette.text, palette.background, 4.5);
    }

    let text_surface = contrast_ratio(palette.text, palette.surface);
    if text_surface < 4.5 {
        let nudge = match mode {
            ThemeMode::Light => -0.05,
            ThemeMode::Dark => 0.05,
        };
        result.surface = palette.surface.with_l(clamp(palette.surface.l + nudge, 0.0, 1.0));
    }

    let muted_bg = contrast_ratio(palette.muted, palette.background);
    if muted_bg < 3.0 {
        result.muted = adjust_for_contrast(palette.muted, palette.background, 3.0);
    }

    result
}

/// Detect the source mode and return the source palette paired with its
/// derived counterpart.
pub fn dual_theme(source: &Palette) -> DualTheme {
    match detect_theme_mode(source) {
        ThemeMode::Light => DualTheme {
            light: *source,
            dark: derive_dark(source),
        },
        ThemeMode::Dark => DualTheme {
            light: derive_light(source),
            dark: *source,
        },
    }
}

/// The three audited ratios for one mode of a dual theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeContrast {
    pub text_bg: f64,
    pub text_surface: f64,
    pub muted_bg: f64,
}

/// Side-by-side contrast ratios for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeContrastComparison {
    pub light: ModeContrast,
    pub dark: ModeContrast,
}

fn mode_contrast(palette: &Palette) -> ModeContrast {
    ModeContrast {
        text_bg: contrast_ratio(palette.text, palette.background),
        text_surface: contrast_ratio(palette.text, palette.surface),
        muted_bg: contrast_ratio(palette.muted, palette.background),
    }
}

/// Compare the key contrast ratios of both theme modes.
pub fn compare_theme_contrast(theme: &DualTheme) -> ThemeContrastComparison {
    ThemeContrastComparison {
        light: mode_contrast(&theme.light),
        dark: mode_contrast(&theme.dark),
    }
}

/// Validation outcome for one mode: human-readable issues, empty when
/// the mode meets the accessibility floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeValidation {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// Validation of both modes of a dual theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualThemeValidation {
    pub light: ModeValidation,
    pub dark: ModeValidation,
}

fn validate_mode(palette: &Palette) -> ModeValidation {
    let mut issues = Vec::new();

    let text_bg = contrast_ratio(palette.text, palette.background);
    if text_bg < 4.5 {
        issues.push(format!(
            "Text/background contrast too low: {text_bg:.2}:1 (needs 4.5:1)"
        ));
    }

    let text_surface = contrast_ratio(palette.text, palette.surface);
    if text_surface < 4.5 {
        issues.push(format!(
            "Text/surface contrast too low: {text_surface:.2}:1 (needs 4.5:1)"
        ));
    }

    let muted_bg = contrast_ratio(palette.muted, palette.background);
    if muted_bg < 3.0 {
        issues.push(format!(
            "Muted/background contrast too low: {muted_bg:.2}:1 (needs 3.0:1)"
        ));
    }

    ModeValidation {
        valid: issues.is_empty(),
        issues,
    }
}

/// Check that both modes independently satisfy the accessibility floor.
pub fn validate_dual_theme(theme: &DualTheme) -> DualThemeValidation {
    DualThemeValidation {
        light: validate_mode(&theme.light),
        dark: validate_mode(&theme.dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::build_palette;
    use crate::pair::generate_pair;
    use tonal_model::Controls;

    fn light_palette() -> Palette {
        Palette {
            background: Plch::new(0.95, 0.02, 100.0),
            surface: Plch::new(0.91, 0.03, 100.0),
            primary: Plch::new(0.45, 0.15, 250.0),
            accent: Plch::new(0.55, 0.2, 262.0),
            text: Plch::new(0.2, 0.05, 250.0),
            muted: Plch::new(0.45, 0.03, 250.0),
        }
    }

    #[test]
    fn derived_dark_mode_detects_as_dark() {
        let dark = derive_dark(&light_palette());
        assert_eq!(detect_theme_mode(&dark), ThemeMode::Dark);
    }

    #[test]
    fn derived_light_mode_detects_as_light() {
        let dark = derive_dark(&light_palette());
        let light = derive_light(&dark);
        assert_eq!(detect_theme_mode(&light), ThemeMode::Light);
    }

    #[test]
    fn dark_primary_is_lifted_onto_the_right_side() {
        let dark = derive_dark(&light_palette());
        // A light-mode primary at 0.45 must land in [0.5, 0.8] for dark.
        assert!(dark.primary.l >= 0.5 && dark.primary.l <= 0.8);
        // Hue survives the remap.
        assert_eq!(dark.primary.h, light_palette().primary.h);
    }

    #[test]
    fn dark_mode_scales_chroma_down() {
        let source = light_palette();
        let dark = derive_dark(&source);
        assert!((dark.background.c - source.background.c * 0.9).abs() < 1e-12);
    }

    #[test]
    fn derived_themes_meet_the_contrast_floor() {
        let theme = dual_theme(&light_palette());
        let validation = validate_dual_theme(&theme);
        assert!(validation.dark.valid, "issues: {:?}", validation.dark.issues);
    }

    #[test]
    fn generated_palettes_round_trip_through_dual_theme() {
        let palette = build_palette(&generate_pair(&Controls::new(45.0, 35.0)));
        let theme = dual_theme(&palette);
        assert_eq!(detect_theme_mode(&theme.light), ThemeMode::Light);
        assert_eq!(detect_theme_mode(&theme.dark), ThemeMode::Dark);
    }
}
