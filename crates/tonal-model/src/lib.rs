//! Core value types for the Tonal Field color engine.
//!
//! Everything in this crate is an immutable value type with no I/O and no
//! shared state. The generation, contrast, and export crates all consume
//! these shapes; transformations return new values rather than mutating.

pub mod color;
pub mod contrast;
pub mod error;
pub mod pair;
pub mod palette;
pub mod params;
pub mod tags;
pub mod tonal;

pub use color::{CieLch, Hsl, LinearRgb, Plch, Rgb8, Rgba8};
pub use contrast::{ContrastLevel, ContrastPasses, ContrastResult, CvdKind, RepairTier};
pub use error::ParseError;
pub use pair::{Controls, Metrics, Pair};
pub use palette::{Palette, PaletteRole, RoleLocks, FULL_ROLES, PREVIEW_ROLES};
pub use params::PaletteParams;
pub use tags::{MoodTag, StyleTag};
pub use tonal::{
    ColorScheme, DualTheme, RampKind, SchemeRamps, SchemeRole, ThemeMode, TonalRamp,
    STANDARD_TONES,
};
