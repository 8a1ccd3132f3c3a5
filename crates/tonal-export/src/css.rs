//! CSS custom property exports.

use tonal_color::{to_css_rounded, to_hex};
use tonal_model::{Palette, PaletteRole, Plch, SchemeRamps};

/// The compact form: one `--tf-<role>` hex property per role.
pub fn css_variables(palette: &Palette, roles: &[PaletteRole]) -> String {
    let lines = roles
        .iter()
        .map(|&role| format!("  --tf-{}: {};", role, to_hex(palette.get(role))))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{lines}\n}}\n")
}

/// The extended form: hex and `oklch()` properties per role, plus the
/// committed primary text color when one is available.
pub fn css_variables_extended(
    palette: &Palette,
    roles: &[PaletteRole],
    primary_text: Option<Plch>,
) -> String {
    let mut lines = Vec::new();
    for &role in roles {
        let color = palette.get(role);
        lines.push(format!("  --tf-{}: {};", role, to_hex(color)));
        lines.push(format!("  --tf-{}-oklch: {};", role, to_css_rounded(color)));
    }
    if let Some(text) = primary_text {
        lines.push(format!("  --tf-primary-text: {};", to_hex(text)));
        lines.push(format!("  --tf-primary-text-oklch: {};", to_css_rounded(text)));
    }
    format!(":root {{\n{}\n}}\n", lines.join("\n"))
}

/// Tonal form: one property per ramp stop, `--tf-<ramp>-<tone>`.
pub fn tonal_css_variables(ramps: &SchemeRamps) -> String {
    let mut lines = Vec::new();
    for (kind, ramp) in ramps.iter() {
        for (tone, color) in ramp.iter() {
            lines.push(format!("  --tf-{kind}-{tone}: {};", to_hex(color)));
        }
    }
    format!(":root {{\n{}\n}}\n", lines.join("\n"))
}
