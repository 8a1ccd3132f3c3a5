//! Design-tool exports: Figma, Sketch, VS Code, and Apple color list.

use serde_json::{json, Map, Value};

use tonal_color::{to_hex, to_srgb};
use tonal_model::{Palette, PaletteRole, Plch, SchemeRamps, ThemeMode};

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Round a unit-interval channel to 4 decimals for design-tool JSON.
fn channel(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn unit_rgb(color: Plch) -> (f64, f64, f64) {
    let srgb = to_srgb(color);
    (channel(srgb.r), channel(srgb.g), channel(srgb.b))
}

/// Figma plugin payload: paint styles for the six roles plus one style
/// per ramp stop. Figma expects unit-interval channels.
pub fn figma_plugin(palette: &Palette, roles: &[PaletteRole], ramps: &SchemeRamps) -> String {
    let mut styles: Vec<Value> = roles
        .iter()
        .map(|&role| {
            let (r, g, b) = unit_rgb(palette.get(role));
            json!({
                "name": format!("tonal-field/{role}"),
                "color": { "r": r, "g": g, "b": b },
            })
        })
        .collect();

    for (kind, ramp) in ramps.iter() {
        for (tone, color) in ramp.iter() {
            let (r, g, b) = unit_rgb(color);
            styles.push(json!({
                "name": format!("tonal-field/{kind}/{tone}"),
                "color": { "r": r, "g": g, "b": b },
            }));
        }
    }

    pretty(&json!({
        "name": "Tonal Field",
        "styles": styles,
    }))
}

/// Sketch shared-palette document.
pub fn sketch_palette(palette: &Palette, roles: &[PaletteRole]) -> String {
    let colors: Vec<Value> = roles
        .iter()
        .map(|&role| {
            let (red, green, blue) = unit_rgb(palette.get(role));
            json!({
                "name": role.label(),
                "red": red,
                "green": green,
                "blue": blue,
                "alpha": 1.0,
            })
        })
        .collect();

    pretty(&json!({
        "compatibleVersion": "2.0",
        "pluginVersion": "2.22",
        "colors": colors,
    }))
}

/// A minimal VS Code color theme bound to the palette roles.
pub fn vscode_theme(palette: &Palette, mode: ThemeMode) -> String {
    let mut colors = Map::new();
    let mut set = |key: &str, color: Plch| {
        colors.insert(key.to_string(), Value::String(to_hex(color)));
    };
    set("editor.background", palette.background);
    set("editor.foreground", palette.text);
    set("sideBar.background", palette.surface);
    set("sideBar.foreground", palette.text);
    set("activityBar.background", palette.surface);
    set("statusBar.background", palette.primary);
    set("button.background", palette.primary);
    set("badge.background", palette.accent);
    set("descriptionForeground", palette.muted);

    pretty(&json!({
        "name": "Tonal Field",
        "type": mode.as_str(),
        "colors": colors,
    }))
}

/// Apple color list (`.clr`) content as JSON: named colors with
/// unit-interval components, ready for `NSColorList` import tooling.
pub fn apple_color_list(palette: &Palette, roles: &[PaletteRole]) -> String {
    let colors: Vec<Value> = roles
        .iter()
        .map(|&role| {
            let (red, green, blue) = unit_rgb(palette.get(role));
            json!({
                "name": role.label(),
                "red": red,
                "green": green,
                "blue": blue,
                "alpha": 1.0,
                "hex": to_hex(palette.get(role)),
            })
        })
        .collect();

    pretty(&json!({
        "name": "Tonal Field",
        "colors": colors,
    }))
}
