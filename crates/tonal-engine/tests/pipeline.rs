//! End-to-end properties of the generation pipeline.

use proptest::prelude::*;
use tonal_contrast::{contrast_ratio, fix_palette, fix_palette_basic};
use tonal_engine::{build_palette, detect_theme_mode, dual_theme, generate_pair};
use tonal_model::{Controls, RepairTier, ThemeMode};

#[test]
fn fixture_palette_meets_aa_after_basic_fix() {
    // The studio's default position: energy 45, tension 35, automatic hue.
    let pair = generate_pair(&Controls::new(45.0, 35.0));
    let palette = build_palette(&pair);
    let outcome = fix_palette_basic(&palette);

    let worst_text = contrast_ratio(outcome.palette.text, outcome.palette.background)
        .min(contrast_ratio(outcome.palette.text, outcome.palette.surface));
    assert!(worst_text >= 4.5, "text contrast {worst_text} below AA");
    assert!(contrast_ratio(outcome.primary_text, outcome.palette.primary) >= 4.5);
}

proptest! {
    /// Every color anywhere in the pipeline stays inside the legal PLCH
    /// ranges, whatever the inputs.
    #[test]
    fn pipeline_respects_clamp_invariant(
        energy in -50.0f64..=150.0,
        tension in -50.0f64..=150.0,
        hue in proptest::option::of(-720.0f64..=720.0),
    ) {
        let mut controls = Controls::new(energy, tension);
        if let Some(hue) = hue {
            controls = controls.with_hue_base(hue);
        }
        let pair = generate_pair(&controls);
        let palette = build_palette(&pair);
        let repaired = fix_palette(&palette, RepairTier::Advanced);
        let theme = dual_theme(&repaired.palette);

        for color in [pair.a, pair.b] {
            prop_assert!((0.0..=1.0).contains(&color.l));
            prop_assert!((0.0..=0.4).contains(&color.c));
            prop_assert!((0.0..360.0).contains(&color.h));
        }
        for palette in [&repaired.palette, &theme.light, &theme.dark] {
            for (_, color) in palette.iter() {
                prop_assert!((0.0..=1.0).contains(&color.l));
                prop_assert!((0.0..=0.4).contains(&color.c));
                prop_assert!((0.0..360.0).contains(&color.h));
            }
        }
    }

    /// The whole pipeline is bitwise deterministic in its inputs.
    #[test]
    fn pipeline_is_deterministic(
        energy in 0.0f64..=100.0,
        tension in 0.0f64..=100.0,
    ) {
        let controls = Controls::new(energy, tension);
        let first = build_palette(&generate_pair(&controls));
        let second = build_palette(&generate_pair(&controls));
        for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.l.to_bits(), b.l.to_bits());
            prop_assert_eq!(a.c.to_bits(), b.c.to_bits());
            prop_assert_eq!(a.h.to_bits(), b.h.to_bits());
        }
    }

    /// Dual-theme derivation lands on the opposite mode, from any
    /// generated palette.
    #[test]
    fn dual_theme_modes_are_opposite(
        energy in 0.0f64..=100.0,
        tension in 0.0f64..=100.0,
    ) {
        let palette = build_palette(&generate_pair(&Controls::new(energy, tension)));
        let theme = dual_theme(&palette);
        prop_assert_eq!(detect_theme_mode(&theme.light), ThemeMode::Light);
        prop_assert_eq!(detect_theme_mode(&theme.dark), ThemeMode::Dark);
    }
}
