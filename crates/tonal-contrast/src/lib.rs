//! Accessibility engine: WCAG 2.1 contrast measurement, automatic
//! contrast repair, and color-vision-deficiency simulation.
//!
//! - **ratio**: relative luminance, contrast ratio, default text picking
//! - **evaluate**: threshold classification against AA/AAA/AA-large
//! - **repair**: the lightness search that makes a palette compliant
//!   while preserving hue and chroma
//! - **analyze**: palette-wide contrast reports and recommendations
//! - **cvd**: protanopia/deuteranopia/tritanopia simulation
//!
//! Every function here is total: impossible contrast targets degrade to
//! a best-effort result the caller can observe via [`evaluate_contrast`],
//! never to an error.

pub mod analyze;
pub mod cvd;
pub mod evaluate;
pub mod ratio;
pub mod repair;

pub use analyze::{
    accessible_alternatives, analyze_palette_pairs, AccessibleAlternatives, PairAnalysis,
    Recommendations,
};
pub use cvd::simulate_cvd;
pub use evaluate::{evaluate_contrast, meets_accessibility};
pub use ratio::{
    contrast_level, contrast_ratio, pick_text_color, relative_luminance, TextPick, DARK_TEXT,
    LIGHT_TEXT,
};
pub use repair::{
    adjust_for_contrast, adjust_lightness_for_targets, apply_locks, fix_palette,
    fix_palette_advanced, fix_palette_basic, fix_primary_for_contrast, PrimaryFix, RepairOutcome,
};
