//! Tonal ramps and Material-style color schemes.

use tonal_model::color::clamp;
use tonal_model::{ColorScheme, Plch, RampKind, SchemeRamps, SchemeRole, TonalRamp, STANDARD_TONES};

/// Minimum chroma kept in a ramp so even near-neutral seeds retain a
/// trace of color identity.
pub const DEFAULT_MIN_CHROMA: f64 = 0.02;

/// Chroma multiplier for tones at or below 10.
const DARK_TONE_CHROMA_FACTOR: f64 = 0.7;
/// Chroma multiplier for tones at or above 95.
const LIGHT_TONE_CHROMA_FACTOR: f64 = 0.5;

/// Expand a seed color into the 13-stop tonal ramp. Hue is constant,
/// lightness is `tone / 100`, and chroma falls off at both extremes to
/// avoid gamut artifacts in near-black and near-white stops. The falloff
/// factors (×0.7 below tone 10, ×0.5 above tone 95) are part of the
/// ramp's visual contract.
pub fn tonal_ramp(seed: Plch, min_chroma: f64) -> TonalRamp {
    let chroma = seed.c.max(min_chroma);
    let stops = STANDARD_TONES.map(|tone| {
        let lightness = clamp(f64::from(tone) / 100.0, 0.0, 1.0);
        let adjusted_chroma = if tone <= 10 {
            chroma * DARK_TONE_CHROMA_FACTOR
        } else if tone >= 95 {
            chroma * LIGHT_TONE_CHROMA_FACTOR
        } else {
            chroma
        };
        Plch::new(lightness, clamp(adjusted_chroma, 0.0, 0.4), seed.h)
    });
    TonalRamp::from_stops(stops)
}

/// One row of the scheme tone table: which ramp a role selects from, and
/// the tone it takes in each mode.
struct ToneSelection {
    role: SchemeRole,
    ramp: RampKind,
    light: u8,
    dark: u8,
}

/// The complete Material-style role table. The light column is the
/// standard assignment; the dark column is its structural mirror. These
/// are fixed lookup constants, reproduced exactly, not computed.
const SCHEME_TONES: [ToneSelection; 24] = [
    ToneSelection { role: SchemeRole::Primary, ramp: RampKind::Primary, light: 40, dark: 80 },
    ToneSelection { role: SchemeRole::OnPrimary, ramp: RampKind::Primary, light: 100, dark: 20 },
    ToneSelection { role: SchemeRole::PrimaryContainer, ramp: RampKind::Primary, light: 90, dark: 30 },
    ToneSelection { role: SchemeRole::OnPrimaryContainer, ramp: RampKind::Primary, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::Secondary, ramp: RampKind::Secondary, light: 40, dark: 80 },
    ToneSelection { role: SchemeRole::OnSecondary, ramp: RampKind::Secondary, light: 100, dark: 20 },
    ToneSelection { role: SchemeRole::SecondaryContainer, ramp: RampKind::Secondary, light: 90, dark: 30 },
    ToneSelection { role: SchemeRole::OnSecondaryContainer, ramp: RampKind::Secondary, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::Tertiary, ramp: RampKind::Tertiary, light: 40, dark: 80 },
    ToneSelection { role: SchemeRole::OnTertiary, ramp: RampKind::Tertiary, light: 100, dark: 20 },
    ToneSelection { role: SchemeRole::TertiaryContainer, ramp: RampKind::Tertiary, light: 90, dark: 30 },
    ToneSelection { role: SchemeRole::OnTertiaryContainer, ramp: RampKind::Tertiary, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::Error, ramp: RampKind::Error, light: 40, dark: 80 },
    ToneSelection { role: SchemeRole::OnError, ramp: RampKind::Error, light: 100, dark: 20 },
    ToneSelection { role: SchemeRole::ErrorContainer, ramp: RampKind::Error, light: 90, dark: 30 },
    ToneSelection { role: SchemeRole::OnErrorContainer, ramp: RampKind::Error, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::Background, ramp: RampKind::Neutral, light: 99, dark: 10 },
    ToneSelection { role: SchemeRole::OnBackground, ramp: RampKind::Neutral, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::Surface, ramp: RampKind::Neutral, light: 99, dark: 10 },
    ToneSelection { role: SchemeRole::OnSurface, ramp: RampKind::Neutral, light: 10, dark: 90 },
    ToneSelection { role: SchemeRole::SurfaceVariant, ramp: RampKind::Neutral, light: 90, dark: 30 },
    ToneSelection { role: SchemeRole::OnSurfaceVariant, ramp: RampKind::Neutral, light: 30, dark: 80 },
    ToneSelection { role: SchemeRole::Outline, ramp: RampKind::Neutral, light: 50, dark: 60 },
    ToneSelection { role: SchemeRole::OutlineVariant, ramp: RampKind::Neutral, light: 80, dark: 30 },
];

/// Assemble a complete scheme by reading the tone table against the five
/// ramps.
pub fn color_scheme(ramps: &SchemeRamps, is_dark: bool) -> ColorScheme {
    let pick = |role: SchemeRole| -> Plch {
        let selection = SCHEME_TONES
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| {
                let tone = if is_dark { entry.dark } else { entry.light };
                ramps.get(entry.ramp).nearest(tone)
            });
        // Every scheme role has a table row; the fallback is unreachable
        // but keeps the lookup total.
        selection.unwrap_or(Plch { l: 0.0, c: 0.0, h: 0.0 })
    };

    ColorScheme {
        primary: pick(SchemeRole::Primary),
        on_primary: pick(SchemeRole::OnPrimary),
        primary_container: pick(SchemeRole::PrimaryContainer),
        on_primary_container: pick(SchemeRole::OnPrimaryContainer),
        secondary: pick(SchemeRole::Secondary),
        on_secondary: pick(SchemeRole::OnSecondary),
        secondary_container: pick(SchemeRole::SecondaryContainer),
        on_secondary_container: pick(SchemeRole::OnSecondaryContainer),
        tertiary: pick(SchemeRole::Tertiary),
        on_tertiary: pick(SchemeRole::OnTertiary),
        tertiary_container: pick(SchemeRole::TertiaryContainer),
        on_tertiary_container: pick(SchemeRole::OnTertiaryContainer),
        error: pick(SchemeRole::Error),
        on_error: pick(SchemeRole::OnError),
        error_container: pick(SchemeRole::ErrorContainer),
        on_error_container: pick(SchemeRole::OnErrorContainer),
        background: pick(SchemeRole::Background),
        on_background: pick(SchemeRole::OnBackground),
        surface: pick(SchemeRole::Surface),
        on_surface: pick(SchemeRole::OnSurface),
        surface_variant: pick(SchemeRole::SurfaceVariant),
        on_surface_variant: pick(SchemeRole::OnSurfaceVariant),
        outline: pick(SchemeRole::Outline),
        outline_variant: pick(SchemeRole::OutlineVariant),
    }
}

/// Approximate a WCAG contrast ratio from a tone difference. OKLCH
/// lightness is perceptually linear, so tone distance predicts contrast
/// well enough for layout-time decisions: 40 tones ≈ 3.0:1, 50 ≈ 4.5:1,
/// 60 ≈ 7:1.
pub fn estimate_contrast_from_tones(tone_a: u8, tone_b: u8) -> f64 {
    let diff = f64::from(tone_a.abs_diff(tone_b));
    if diff >= 60.0 {
        7.0
    } else if diff >= 50.0 {
        4.5
    } else if diff >= 40.0 {
        3.0
    } else {
        1.0 + (diff / 60.0) * 6.0
    }
}

/// Find the nearest tone that clears a minimum contrast against a base
/// tone, preferring the lighter or darker direction as requested.
pub fn find_contrasting_tone(base_tone: u8, min_contrast: f64, prefer_dark: bool) -> u8 {
    let required_diff: u8 = if min_contrast >= 7.0 {
        60
    } else if min_contrast >= 4.5 {
        50
    } else if min_contrast >= 3.0 {
        40
    } else {
        (min_contrast * 10.0).ceil() as u8
    };

    if prefer_dark {
        match base_tone.checked_sub(required_diff) {
            // Round to the nearest multiple of 10 like the ramp expects.
            Some(dark) => (dark + 5) / 10 * 10,
            None => (base_tone + required_diff).min(100),
        }
    } else {
        let light = base_tone.saturating_add(required_diff);
        if light <= 100 {
            (light + 5) / 10 * 10
        } else {
            base_tone.saturating_sub(required_diff)
        }
    }
}

/// Human-readable label for a tone value.
pub fn tone_name(tone: u8) -> &'static str {
    match tone {
        0 => "Black",
        100 => "White",
        1..=20 => "Very Dark",
        21..=40 => "Dark",
        41..=60 => "Medium",
        61..=80 => "Light",
        _ => "Very Light",
    }
}
