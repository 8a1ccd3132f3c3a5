//! Palette derivation: the fixed role-offset table, and the extended
//! palette that adds tonal ramps and light/dark schemes.

use tonal_model::color::clamp;
use tonal_model::{ColorScheme, Pair, Palette, Plch, SchemeRamps};

use crate::tonal::{color_scheme, tonal_ramp, DEFAULT_MIN_CHROMA};

/// Role lightness range. Slightly inside the global PLCH range so no role
/// renders as pure black or white.
const ROLE_L_MIN: f64 = 0.04;
const ROLE_L_MAX: f64 = 0.98;

/// The fixed error seed: Material-style red, independent of the pair.
const ERROR_SEED: Plch = Plch {
    l: 0.55,
    c: 0.2,
    h: 25.0,
};

/// Neutral ramps stay close to achromatic regardless of the source color.
const NEUTRAL_CHROMA_CAP: f64 = 0.04;

fn role_color(l: f64, c: f64, h: f64) -> Plch {
    Plch::new(clamp(l, ROLE_L_MIN, ROLE_L_MAX), c, h)
}

/// Derive the six semantic roles from a pair through the fixed offset
/// table. Deliberately a linear transform, not a search: the palette must
/// stay visually traceable back to the A/B pair.
pub fn build_palette(pair: &Pair) -> Palette {
    let a = pair.a;
    let b = pair.b;

    let background = role_color(a.l + 0.06, a.c * 0.5, a.h);
    let surface = role_color(a.l - 0.02, a.c * 0.85 + 0.01, a.h);
    let primary = role_color(b.l + 0.08, b.c + 0.06, b.h);
    let accent = role_color(b.l + 0.12, b.c + 0.12, b.h + 12.0);
    let text = role_color(b.l - 0.22, b.c * 0.4, b.h);
    let muted = role_color(text.l + 0.2, text.c * 0.6, text.h);

    Palette {
        background,
        surface,
        primary,
        accent,
        text,
        muted,
    }
}

/// A palette together with its five tonal ramps and both scheme modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedPalette {
    pub palette: Palette,
    pub ramps: SchemeRamps,
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

/// Seed the five scheme ramps from a derived palette: primary and accent
/// carry the brand ramps, the tertiary ramp rotates primary by 60°, the
/// neutral ramp is the background with chroma capped near gray, and the
/// error ramp always grows from the fixed red seed.
pub fn ramps_from_palette(palette: &Palette) -> SchemeRamps {
    let primary = palette.primary;
    SchemeRamps {
        primary: tonal_ramp(primary, DEFAULT_MIN_CHROMA),
        secondary: tonal_ramp(palette.accent, DEFAULT_MIN_CHROMA),
        tertiary: tonal_ramp(primary.with_h(primary.h + 60.0), DEFAULT_MIN_CHROMA),
        neutral: tonal_ramp(
            palette.background.with_c(palette.background.c.min(NEUTRAL_CHROMA_CAP)),
            DEFAULT_MIN_CHROMA,
        ),
        error: tonal_ramp(ERROR_SEED, DEFAULT_MIN_CHROMA),
    }
}

/// Seed the five scheme ramps from a single source color, Material
/// Design 3 style: secondary at a third of the chroma, tertiary rotated
/// +60° at half chroma, neutral near-gray, error fixed.
pub fn ramps_from_seed(seed: Plch) -> SchemeRamps {
    SchemeRamps {
        primary: tonal_ramp(seed, DEFAULT_MIN_CHROMA),
        secondary: tonal_ramp(seed.with_c(seed.c / 3.0), DEFAULT_MIN_CHROMA),
        tertiary: tonal_ramp(
            seed.with_h(seed.h + 60.0).with_c(seed.c / 2.0),
            DEFAULT_MIN_CHROMA,
        ),
        neutral: tonal_ramp(seed.with_c(seed.c.min(NEUTRAL_CHROMA_CAP)), DEFAULT_MIN_CHROMA),
        error: tonal_ramp(ERROR_SEED, DEFAULT_MIN_CHROMA),
    }
}

/// Build the full extended palette for a pair: six roles, five ramps,
/// and both scheme modes.
pub fn build_extended_palette(pair: &Pair) -> ExtendedPalette {
    let palette = build_palette(pair);
    let ramps = ramps_from_palette(&palette);
    let light = color_scheme(&ramps, false);
    let dark = color_scheme(&ramps, true);

    ExtendedPalette {
        palette,
        ramps,
        light,
        dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::generate_pair;
    use tonal_model::Controls;

    fn fixture_pair() -> Pair {
        generate_pair(&Controls::new(45.0, 35.0))
    }

    #[test]
    fn offsets_follow_the_role_table() {
        let pair = fixture_pair();
        let palette = build_palette(&pair);

        assert!((palette.background.l - (pair.a.l + 0.06)).abs() < 1e-9);
        assert!((palette.background.c - pair.a.c * 0.5).abs() < 1e-9);
        assert!((palette.surface.l - (pair.a.l - 0.02)).abs() < 1e-9);
        assert!((palette.primary.c - (pair.b.c + 0.06)).abs() < 1e-9);
        assert!((palette.accent.h - (pair.b.h + 12.0).rem_euclid(360.0)).abs() < 1e-9);
        assert!((palette.text.l - (pair.b.l - 0.22)).abs() < 1e-9);
        // Muted chains off the derived text color, not off B directly.
        assert!((palette.muted.l - (palette.text.l + 0.2)).abs() < 1e-9);
        assert!((palette.muted.c - palette.text.c * 0.6).abs() < 1e-9);
    }

    #[test]
    fn every_role_respects_the_role_lightness_range() {
        for (energy, tension) in [(0.0, 0.0), (100.0, 100.0), (0.0, 100.0), (100.0, 0.0)] {
            let palette = build_palette(&generate_pair(&Controls::new(energy, tension)));
            for (_, color) in palette.iter() {
                assert!(color.l >= ROLE_L_MIN && color.l <= ROLE_L_MAX);
                assert!(color.c <= 0.4);
            }
        }
    }

    #[test]
    fn extended_palette_spans_both_modes() {
        let extended = build_extended_palette(&fixture_pair());
        // Light background sits near white, dark near black.
        assert!(extended.light.background.l > 0.9);
        assert!(extended.dark.background.l < 0.2);
        // Error ramp ignores the pair entirely.
        assert_eq!(
            extended.ramps.error.nearest(50),
            tonal_ramp(ERROR_SEED, DEFAULT_MIN_CHROMA).nearest(50)
        );
    }
}
