//! Palette-wide contrast analysis and accessible alternatives.

use serde::Serialize;

use tonal_model::{ContrastResult, Palette, PaletteRole, Plch};

use crate::evaluate::evaluate_contrast;
use crate::ratio::contrast_ratio;
use crate::repair::adjust_for_contrast;

/// The foreground/background combinations worth auditing in a six-role
/// palette. The two inverted pairs cover text-on-primary and
/// text-on-accent button surfaces.
const AUDIT_PAIRS: [(PaletteRole, PaletteRole); 8] = [
    (PaletteRole::Text, PaletteRole::Background),
    (PaletteRole::Text, PaletteRole::Surface),
    (PaletteRole::Muted, PaletteRole::Background),
    (PaletteRole::Muted, PaletteRole::Surface),
    (PaletteRole::Primary, PaletteRole::Background),
    (PaletteRole::Accent, PaletteRole::Background),
    (PaletteRole::Background, PaletteRole::Primary),
    (PaletteRole::Background, PaletteRole::Accent),
];

/// AA and AAA variants of a color that fails its check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendations {
    pub aa: Plch,
    pub aaa: Plch,
}

/// One audited foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairAnalysis {
    pub foreground_role: PaletteRole,
    pub background_role: PaletteRole,
    pub foreground: Plch,
    pub background: Plch,
    pub contrast: ContrastResult,
    /// Present only when the pair misses AA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

/// Audit the standard text/background combinations of a palette. Pairs
/// that miss AA carry repaired alternatives for both AA and AAA.
pub fn analyze_palette_pairs(palette: &Palette) -> Vec<PairAnalysis> {
    AUDIT_PAIRS
        .into_iter()
        .map(|(fg_role, bg_role)| {
            let foreground = palette.get(fg_role);
            let background = palette.get(bg_role);
            let ratio = contrast_ratio(foreground, background);
            let contrast = evaluate_contrast(ratio, false);

            let recommendations = if contrast.passes.aa {
                None
            } else {
                Some(Recommendations {
                    aa: adjust_for_contrast(foreground, background, 4.5),
                    aaa: adjust_for_contrast(foreground, background, 7.0),
                })
            };

            PairAnalysis {
                foreground_role: fg_role,
                background_role: bg_role,
                foreground,
                background,
                contrast,
                recommendations,
            }
        })
        .collect()
}

/// A color with its AA- and AAA-compliant variants against one background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessibleAlternatives {
    pub original: Plch,
    pub aa: Plch,
    pub aaa: Plch,
    pub original_contrast: ContrastResult,
    pub aa_contrast: ContrastResult,
    pub aaa_contrast: ContrastResult,
}

/// Generate AA and AAA alternatives for a color against a background.
pub fn accessible_alternatives(color: Plch, background: Plch) -> AccessibleAlternatives {
    let aa = adjust_for_contrast(color, background, 4.5);
    let aaa = adjust_for_contrast(color, background, 7.0);

    AccessibleAlternatives {
        original: color,
        aa,
        aaa,
        original_contrast: evaluate_contrast(contrast_ratio(color, background), false),
        aa_contrast: evaluate_contrast(contrast_ratio(aa, background), false),
        aaa_contrast: evaluate_contrast(contrast_ratio(aaa, background), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_covers_all_eight_pairs() {
        let palette = Palette {
            background: Plch::new(0.96, 0.02, 90.0),
            surface: Plch::new(0.9, 0.03, 90.0),
            primary: Plch::new(0.55, 0.15, 250.0),
            accent: Plch::new(0.65, 0.2, 262.0),
            text: Plch::new(0.2, 0.04, 250.0),
            muted: Plch::new(0.45, 0.03, 250.0),
        };
        let report = analyze_palette_pairs(&palette);
        assert_eq!(report.len(), 8);
        assert!(report
            .iter()
            .any(|pair| pair.foreground_role == PaletteRole::Background
                && pair.background_role == PaletteRole::Primary));
    }

    #[test]
    fn failing_pairs_get_recommendations() {
        let palette = Palette {
            background: Plch::new(0.9, 0.02, 90.0),
            surface: Plch::new(0.88, 0.02, 90.0),
            primary: Plch::new(0.85, 0.1, 250.0),
            accent: Plch::new(0.88, 0.1, 262.0),
            // Deliberately unreadable light-on-light text.
            text: Plch::new(0.8, 0.02, 250.0),
            muted: Plch::new(0.82, 0.02, 250.0),
        };
        let report = analyze_palette_pairs(&palette);
        let text_bg = report
            .iter()
            .find(|pair| {
                pair.foreground_role == PaletteRole::Text
                    && pair.background_role == PaletteRole::Background
            })
            .expect("text/background pair");
        assert!(!text_bg.contrast.passes.aa);
        let recs = text_bg.recommendations.expect("recommendations");
        assert!(contrast_ratio(recs.aa, palette.background) >= 4.4);
    }
}
