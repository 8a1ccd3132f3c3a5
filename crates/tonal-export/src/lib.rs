//! Export formatters: pure string and structure builders over
//! already-computed palette values.
//!
//! Downstream tooling parses these outputs, so every format has a stable
//! textual schema: lowercase `#rrggbb` hex, `oklch(L% C H)` with
//! integer-rounded percent lightness, 3-decimal chroma and integer hue,
//! and fixed key order in emitted JSON. Treat any change here as a
//! breaking schema change.

pub mod css;
pub mod design_tools;
pub mod json;
pub mod kind;
pub mod mui;
pub mod tailwind;
pub mod token;

pub use css::{css_variables, css_variables_extended, tonal_css_variables};
pub use design_tools::{apple_color_list, figma_plugin, sketch_palette, vscode_theme};
pub use json::{json_tokens, material3_json, plugin_payload};
pub use kind::{export_filename, ExportKind};
pub use mui::mui_theme;
pub use tailwind::{tailwind_config, tonal_tailwind_config};
pub use token::{color_tokens, token_value, ColorToken, TokenFormat};
