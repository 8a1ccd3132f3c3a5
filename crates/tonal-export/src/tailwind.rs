//! Tailwind config fragments.

use tonal_color::to_hex;
use tonal_model::{Palette, PaletteRole, SchemeRamps};

/// Flat `tf-<role>` color keys under `theme.extend.colors`.
pub fn tailwind_config(palette: &Palette, roles: &[PaletteRole]) -> String {
    let lines = roles
        .iter()
        .map(|&role| format!("        \"tf-{}\": \"{}\",", role, to_hex(palette.get(role))))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{lines}\n      }},\n    }},\n  }},\n}};\n"
    )
}

/// Nested `tf-<ramp>` scales with one entry per tone, Tailwind's
/// conventional shape for tonal color scales.
pub fn tonal_tailwind_config(ramps: &SchemeRamps) -> String {
    let mut blocks = Vec::new();
    for (kind, ramp) in ramps.iter() {
        let tones = ramp
            .iter()
            .map(|(tone, color)| format!("          \"{tone}\": \"{}\",", to_hex(color)))
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(format!("        \"tf-{kind}\": {{\n{tones}\n        }},"));
    }

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}\n      }},\n    }},\n  }},\n}};\n",
        blocks.join("\n")
    )
}
