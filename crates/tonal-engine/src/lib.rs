//! Deterministic palette generation pipeline.
//!
//! The engine maps two scalar controls (energy, tension) into an OKLCH
//! color pair and expands it into everything the studio shows:
//!
//! - **pair**: the (energy, tension) → color pair generator
//! - **hue**: hue anchor strategies, including spectrum mode
//! - **palette**: the fixed role-offset table and the extended palette
//! - **tonal**: Material-style tonal ramps and light/dark schemes
//! - **theme**: dual light/dark theme derivation
//! - **extract**: dominant-color extraction from decoded pixels
//! - **shuffle**: seeded control generation for reproducible shuffles
//! - **presets** and **variations**: the studio's fixed starting points
//!   and the 3×3 neighbor grid
//! - **hierarchy**: 60-30-10 proportion guidance per kit size
//!
//! Everything is a pure function of its inputs. Identical inputs produce
//! bit-identical outputs; shareable URLs and parameter persistence depend
//! on that, so treat determinism as a contract, not an optimization.

pub mod extract;
pub mod hierarchy;
pub mod hue;
pub mod pair;
pub mod palette;
pub mod presets;
pub mod shuffle;
pub mod theme;
pub mod tonal;
pub mod variations;

pub use extract::{extract_dominant_colors, map_extracted_to_roles};
pub use hierarchy::{filter_palette, hierarchy, KitSize, RoleWeight};
pub use hue::{controls_with_strategy, resolve_hue_base, HueStrategy};
pub use pair::generate_pair;
pub use palette::{build_extended_palette, build_palette, ramps_from_palette, ramps_from_seed, ExtendedPalette};
pub use presets::{Preset, PRESETS};
pub use shuffle::{controls_from_seed, Mulberry32, SeededControls};
pub use theme::{
    compare_theme_contrast, derive_dark, derive_light, detect_theme_mode, dual_theme,
    validate_dual_theme, DualThemeValidation, ModeContrast, ModeValidation, ThemeContrastComparison,
};
pub use tonal::{
    color_scheme, estimate_contrast_from_tones, find_contrasting_tone, tonal_ramp, tone_name,
    DEFAULT_MIN_CHROMA,
};
pub use variations::{variation_grid, Variation};
