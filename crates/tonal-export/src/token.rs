//! Per-role token lists in the five display formats.

use serde::{Deserialize, Serialize};

use tonal_color::{to_cielch, to_css_rounded, to_hex, to_hsl, to_rgb8};
use tonal_model::{Palette, PaletteRole, Plch};

/// Textual format for a single color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    #[default]
    Hex,
    Oklch,
    Rgb,
    Hsl,
    Lch,
}

impl TokenFormat {
    pub const ALL: [TokenFormat; 5] = [
        TokenFormat::Hex,
        TokenFormat::Oklch,
        TokenFormat::Rgb,
        TokenFormat::Hsl,
        TokenFormat::Lch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenFormat::Hex => "hex",
            TokenFormat::Oklch => "oklch",
            TokenFormat::Rgb => "rgb",
            TokenFormat::Hsl => "hsl",
            TokenFormat::Lch => "lch",
        }
    }

    /// Uppercase label for format pickers.
    pub fn label(&self) -> &'static str {
        match self {
            TokenFormat::Hex => "HEX",
            TokenFormat::Oklch => "OKLCH",
            TokenFormat::Rgb => "RGB",
            TokenFormat::Hsl => "HSL",
            TokenFormat::Lch => "LCH",
        }
    }
}

/// One exported token: a role, its display label, and the formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub role: PaletteRole,
    pub label: &'static str,
    pub value: String,
}

/// Format a single color. The schemas are stable:
/// `#rrggbb`, `oklch(62% 0.117 240)`, `rgb(61, 107, 176)`,
/// `hsl(216, 49%, 46%)`, `lch(45% 42 271)`.
pub fn token_value(color: Plch, format: TokenFormat) -> String {
    match format {
        TokenFormat::Hex => to_hex(color),
        TokenFormat::Oklch => to_css_rounded(color),
        TokenFormat::Rgb => {
            let rgb = to_rgb8(color);
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        }
        TokenFormat::Hsl => {
            let hsl = to_hsl(color);
            format!(
                "hsl({}, {}%, {}%)",
                hsl.h.round() as i64,
                (hsl.s * 100.0).round() as i64,
                (hsl.l * 100.0).round() as i64
            )
        }
        TokenFormat::Lch => {
            let lch = to_cielch(color);
            format!(
                "lch({}% {} {})",
                lch.l.round() as i64,
                lch.c.round() as i64,
                lch.h.round() as i64
            )
        }
    }
}

/// Token list for the requested roles, in role order.
pub fn color_tokens(palette: &Palette, roles: &[PaletteRole], format: TokenFormat) -> Vec<ColorToken> {
    roles
        .iter()
        .map(|&role| ColorToken {
            role,
            label: role.label(),
            value: token_value(palette.get(role), format),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Plch = Plch { l: 1.0, c: 0.0, h: 0.0 };
    const BLACK: Plch = Plch { l: 0.0, c: 0.0, h: 0.0 };

    #[test]
    fn formats_have_their_documented_shapes() {
        assert_eq!(token_value(WHITE, TokenFormat::Hex), "#ffffff");
        assert_eq!(token_value(WHITE, TokenFormat::Oklch), "oklch(100% 0.000 0)");
        assert_eq!(token_value(WHITE, TokenFormat::Rgb), "rgb(255, 255, 255)");
        assert_eq!(token_value(WHITE, TokenFormat::Hsl), "hsl(0, 0%, 100%)");
        assert_eq!(token_value(BLACK, TokenFormat::Lch), "lch(0% 0 0)");
    }

    #[test]
    fn token_list_preserves_role_order() {
        let palette = Palette {
            background: WHITE,
            surface: WHITE,
            primary: BLACK,
            accent: BLACK,
            text: BLACK,
            muted: BLACK,
        };
        let tokens = color_tokens(&palette, &tonal_model::FULL_ROLES, TokenFormat::Hex);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].role, PaletteRole::Background);
        assert_eq!(tokens[0].label, "Background");
        assert_eq!(tokens[2].value, "#000000");
    }
}
