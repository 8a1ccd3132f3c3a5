//! Threshold classification per WCAG 2.1.

use tonal_model::{ContrastLevel, ContrastPasses, ContrastResult, Plch};

use crate::ratio::contrast_ratio;

const AA_LARGE_MIN: f64 = 3.0;
const AA_MIN: f64 = 4.5;
const AAA_MIN: f64 = 7.0;

/// Classify a ratio. Thresholds are inclusive: exactly 4.5 is AA and
/// exactly 7.0 is AAA. The AA-large level only applies when the text is
/// large (18pt+, or 14pt+ bold).
pub fn evaluate_contrast(ratio: f64, is_large_text: bool) -> ContrastResult {
    let passes = ContrastPasses {
        aa: ratio >= AA_MIN,
        aaa: ratio >= AAA_MIN,
        aa_large: ratio >= AA_LARGE_MIN,
    };

    let level = if passes.aaa {
        ContrastLevel::Aaa
    } else if passes.aa {
        ContrastLevel::Aa
    } else if is_large_text && passes.aa_large {
        ContrastLevel::AaLarge
    } else {
        ContrastLevel::Fail
    };

    ContrastResult {
        ratio,
        level,
        passes,
    }
}

/// True when a color pair clears the requested minimum level.
/// `min_level` of [`ContrastLevel::Aaa`] requires 7.0; anything else is
/// treated as the AA rule (4.5, or 3.0 for large text).
pub fn meets_accessibility(
    foreground: Plch,
    background: Plch,
    min_level: ContrastLevel,
    is_large_text: bool,
) -> bool {
    let result = evaluate_contrast(contrast_ratio(foreground, background), is_large_text);
    match min_level {
        ContrastLevel::Aaa => result.passes.aaa,
        _ => result.passes.aa || (is_large_text && result.passes.aa_large),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_are_inclusive() {
        assert_eq!(evaluate_contrast(4.5, false).level, ContrastLevel::Aa);
        assert_eq!(evaluate_contrast(7.0, false).level, ContrastLevel::Aaa);
    }

    #[test]
    fn just_below_aa_fails() {
        let result = evaluate_contrast(4.49999, false);
        assert_eq!(result.level, ContrastLevel::Fail);
        assert!(!result.passes.aa);
        assert!(result.passes.aa_large);
    }

    #[test]
    fn aa_large_needs_the_large_text_flag() {
        assert_eq!(evaluate_contrast(3.2, false).level, ContrastLevel::Fail);
        assert_eq!(evaluate_contrast(3.2, true).level, ContrastLevel::AaLarge);
    }

    #[test]
    fn meets_accessibility_distinguishes_aa_from_aaa() {
        let black = Plch::new(0.0, 0.0, 0.0);
        let white = Plch::new(1.0, 0.0, 0.0);
        // Luminance 0.62^3 ~ 0.24 gives a ratio near 3.6 on white.
        let mid = Plch::new(0.62, 0.0, 0.0);

        assert!(meets_accessibility(black, white, ContrastLevel::Aaa, false));
        // A mid gray on white clears neither level for normal text.
        assert!(!meets_accessibility(mid, white, ContrastLevel::Aa, false));
        // But large text only needs 3.0.
        assert!(meets_accessibility(mid, white, ContrastLevel::Aa, true));
    }
}
