//! Export kinds and their download filenames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every export target the studio offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    Css,
    Json,
    Tailwind,
    Mui,
    Plugin,
    Material3,
    TonalCss,
    TonalTailwind,
    Figma,
    Sketch,
    Vscode,
    AppleClr,
}

impl ExportKind {
    pub const ALL: [ExportKind; 12] = [
        ExportKind::Css,
        ExportKind::Json,
        ExportKind::Tailwind,
        ExportKind::Mui,
        ExportKind::Plugin,
        ExportKind::Material3,
        ExportKind::TonalCss,
        ExportKind::TonalTailwind,
        ExportKind::Figma,
        ExportKind::Sketch,
        ExportKind::Vscode,
        ExportKind::AppleClr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Css => "css",
            ExportKind::Json => "json",
            ExportKind::Tailwind => "tailwind",
            ExportKind::Mui => "mui",
            ExportKind::Plugin => "plugin",
            ExportKind::Material3 => "material3",
            ExportKind::TonalCss => "tonal-css",
            ExportKind::TonalTailwind => "tonal-tailwind",
            ExportKind::Figma => "figma",
            ExportKind::Sketch => "sketch",
            ExportKind::Vscode => "vscode",
            ExportKind::AppleClr => "apple-clr",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The download filename for each export kind.
pub fn export_filename(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Css | ExportKind::TonalCss => "tonal-field.css",
        ExportKind::Json | ExportKind::Material3 | ExportKind::Plugin => "tonal-field.json",
        ExportKind::Tailwind | ExportKind::TonalTailwind => "tailwind.config.js",
        ExportKind::Mui => "theme.ts",
        ExportKind::Figma => "tonal-field-figma.json",
        ExportKind::Sketch => "tonal-field.sketch.json",
        ExportKind::Vscode => "tonal-field-theme.json",
        ExportKind::AppleClr => "tonal-field.clr.json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_carry_the_right_extensions() {
        assert_eq!(export_filename(ExportKind::Css), "tonal-field.css");
        assert_eq!(export_filename(ExportKind::Tailwind), "tailwind.config.js");
        assert_eq!(export_filename(ExportKind::Mui), "theme.ts");
        assert_eq!(export_filename(ExportKind::AppleClr), "tonal-field.clr.json");
    }
}
