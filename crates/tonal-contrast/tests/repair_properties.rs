//! Properties of the lightness repair scan.

use proptest::prelude::*;
use tonal_contrast::{adjust_lightness_for_targets, contrast_ratio};
use tonal_model::Plch;

fn arb_color() -> impl Strategy<Value = Plch> {
    (0.0f64..=1.0, 0.0f64..=0.3, 0.0f64..360.0).prop_map(|(l, c, h)| Plch::new(l, c, h))
}

proptest! {
    /// Whenever the scan reports success (some sample met the target),
    /// the returned color actually meets it against the worst background.
    #[test]
    fn success_implies_target_met(
        color in arb_color(),
        bg in arb_color(),
        target in 1.5f64..=7.0,
    ) {
        let repaired = adjust_lightness_for_targets(color, &[bg], target);
        let achieved = contrast_ratio(repaired, bg);

        // Determine feasibility the same way the scan does.
        let feasible = (0..=200).any(|i| {
            let candidate = color.with_l(f64::from(i) / 200.0);
            contrast_ratio(candidate, bg) >= target
        });

        if feasible {
            prop_assert!(achieved >= target - 1e-9);
        }
    }

    /// Among all samples meeting the target, the scan returns the one
    /// whose lightness is closest to the original: the smallest edit that
    /// achieves compliance.
    #[test]
    fn repair_is_minimal(
        color in arb_color(),
        bg_a in arb_color(),
        bg_b in arb_color(),
        target in 1.5f64..=7.0,
    ) {
        let backgrounds = [bg_a, bg_b];
        let repaired = adjust_lightness_for_targets(color, &backgrounds, target);
        let repaired_distance = (repaired.l - color.l).abs();

        for i in 0..=200u32 {
            let candidate = color.with_l(f64::from(i) / 200.0);
            let min_ratio = backgrounds
                .iter()
                .map(|bg| contrast_ratio(candidate, *bg))
                .fold(f64::INFINITY, f64::min);
            if min_ratio >= target {
                let distance = (candidate.l - color.l).abs();
                prop_assert!(repaired_distance <= distance + 1e-12);
            }
        }
    }

    /// The repair never touches hue or chroma.
    #[test]
    fn repair_preserves_hue_and_chroma(
        color in arb_color(),
        bg in arb_color(),
        target in 1.5f64..=7.0,
    ) {
        let repaired = adjust_lightness_for_targets(color, &[bg], target);
        prop_assert_eq!(repaired.c, color.c);
        prop_assert_eq!(repaired.h, color.h);
    }

    /// Determinism: two identical calls produce bit-identical results.
    #[test]
    fn repair_is_deterministic(
        color in arb_color(),
        bg in arb_color(),
        target in 1.5f64..=7.0,
    ) {
        let first = adjust_lightness_for_targets(color, &[bg], target);
        let second = adjust_lightness_for_targets(color, &[bg], target);
        prop_assert_eq!(first, second);
    }
}
