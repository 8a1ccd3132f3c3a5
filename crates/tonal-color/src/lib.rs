//! Color space conversion and serialization.
//!
//! Bidirectional conversion between the perceptual OKLCH space the engine
//! works in and device color spaces:
//!
//! - **oklab**: OKLCH ⇄ linear sRGB through the OKLab LMS nonlinearity
//! - **srgb**: gamma encoding, 8-bit quantization, hex strings
//! - **hsl**: device HSL for token export
//! - **cielch**: CIE LCh(ab) under D65 for token export
//! - **css**: `oklch()` CSS serialization
//!
//! All conversions are pure functions. The matrix and gamma constants are
//! load-bearing for visual fidelity and must match the reference values
//! digit for digit; do not round or "tidy" them.

pub mod cielch;
pub mod css;
pub mod hsl;
pub mod oklab;
pub mod srgb;

pub use cielch::to_cielch;
pub use css::{to_css, to_css_rounded};
pub use hsl::to_hsl;
pub use oklab::{from_linear_rgb, to_linear_rgb};
pub use srgb::{from_rgb8, parse_hex, to_hex, to_rgb8, to_srgb, ParseHexError, Srgb};
