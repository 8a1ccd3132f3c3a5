//! JSON exports: token trees, the generic plugin payload, and the
//! Material-3 bundle.

use serde_json::{json, Map, Value};

use tonal_color::{to_css_rounded, to_hex};
use tonal_model::{ColorScheme, Palette, PaletteRole, SchemeRamps};

fn pretty(value: &Value) -> String {
    // Serialization of an in-memory value cannot fail; fall back to the
    // compact form rather than panicking if it ever does.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `{"colors": {role: "#hex"}}`, pretty-printed with 2-space indent and
/// keys in role order.
pub fn json_tokens(palette: &Palette, roles: &[PaletteRole]) -> String {
    let mut colors = Map::new();
    for &role in roles {
        colors.insert(role.to_string(), Value::String(to_hex(palette.get(role))));
    }
    pretty(&json!({ "colors": colors }))
}

/// Generic plugin payload: role entries with both hex and oklch values,
/// consumed by the design-tool import plugins.
pub fn plugin_payload(palette: &Palette, roles: &[PaletteRole]) -> String {
    let colors: Vec<Value> = roles
        .iter()
        .map(|&role| {
            let color = palette.get(role);
            json!({
                "role": role.as_str(),
                "label": role.label(),
                "hex": to_hex(color),
                "oklch": to_css_rounded(color),
            })
        })
        .collect();

    pretty(&json!({
        "name": "Tonal Field palette",
        "version": 1,
        "colors": colors,
    }))
}

fn scheme_map(scheme: &ColorScheme) -> Map<String, Value> {
    let mut map = Map::new();
    for (role, color) in scheme.iter() {
        map.insert(role.to_string(), Value::String(to_hex(color)));
    }
    map
}

fn ramp_map(ramps: &SchemeRamps) -> Map<String, Value> {
    let mut map = Map::new();
    for (kind, ramp) in ramps.iter() {
        let mut tones = Map::new();
        for (tone, color) in ramp.iter() {
            tones.insert(tone.to_string(), Value::String(to_hex(color)));
        }
        map.insert(kind.to_string(), Value::Object(tones));
    }
    map
}

/// Material-3 bundle: both scheme modes plus the five tonal palettes.
pub fn material3_json(light: &ColorScheme, dark: &ColorScheme, ramps: &SchemeRamps) -> String {
    pretty(&json!({
        "description": "Material 3 scheme generated by Tonal Field",
        "schemes": {
            "light": scheme_map(light),
            "dark": scheme_map(dark),
        },
        "palettes": ramp_map(ramps),
    }))
}
