//! Terminal rendering of palettes, contrast reports, and schemes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tonal_color::{to_css_rounded, to_hex};
use tonal_contrast::{contrast_ratio, PairAnalysis};
use tonal_engine::Variation;
use tonal_model::{ColorScheme, ContrastLevel, CvdKind, Pair, PaletteRole, Plch, TonalRamp};
use tonal_store::SavedPalette;

use crate::commands::PaletteOutcome;

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Print the generated pair with its fit metrics.
pub fn print_pair(pair: &Pair) {
    println!("A: {}  {}", to_hex(pair.a), to_css_rounded(pair.a));
    println!("B: {}  {}", to_hex(pair.b), to_css_rounded(pair.b));
    let metrics = &pair.metrics;
    println!(
        "fit: energy {:.2}, tension {:.2}, score {:.2} (hue gap {:.0}°, vibration {:.2})",
        metrics.energy_fit, metrics.tension_fit, metrics.score, metrics.hue_diff, metrics.vibration
    );
}

/// Print the six-role palette with per-role contrast against background.
pub fn print_palette(outcome: &PaletteOutcome) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Hex"),
        header_cell("OKLCH"),
        header_cell("vs Background"),
        header_cell("Lock"),
    ]);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let background = outcome.palette.background;
    for (role, color) in outcome.palette.iter() {
        let ratio = contrast_ratio(color, background);
        let ratio_cell = if role == PaletteRole::Background {
            Cell::new("-")
        } else {
            Cell::new(format!("{ratio:.2}:1"))
        };
        let lock_cell = if outcome.locks.get(role).is_some() {
            Cell::new("locked").fg(Color::Yellow)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(role.label()),
            Cell::new(to_hex(color)),
            Cell::new(to_css_rounded(color)),
            ratio_cell,
            lock_cell,
        ]);
    }
    println!("{table}");
    println!(
        "primary text: {} ({:.2}:1 on primary)",
        to_hex(outcome.primary_text),
        contrast_ratio(outcome.primary_text, outcome.palette.primary)
    );
}

fn level_cell(level: ContrastLevel) -> Cell {
    match level {
        ContrastLevel::Aaa => Cell::new("AAA").fg(Color::Green),
        ContrastLevel::Aa => Cell::new("AA").fg(Color::Green),
        ContrastLevel::AaLarge => Cell::new("AA-large").fg(Color::Yellow),
        ContrastLevel::Fail => Cell::new("fail").fg(Color::Red),
    }
}

/// Print the contrast audit. A failing row is the visible signal for
/// repair non-convergence; it is data, not an error.
pub fn print_check(report: &[PairAnalysis]) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Foreground"),
        header_cell("Background"),
        header_cell("Ratio"),
        header_cell("Level"),
        header_cell("AA fix"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut failures = 0usize;
    for pair in report {
        if !pair.contrast.passes.aa {
            failures += 1;
        }
        let recommendation = pair
            .recommendations
            .as_ref()
            .map(|recs| to_hex(recs.aa))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(pair.foreground_role.label()),
            Cell::new(pair.background_role.label()),
            Cell::new(format!("{:.2}:1", pair.contrast.ratio)),
            level_cell(pair.contrast.level),
            Cell::new(recommendation),
        ]);
    }
    println!("{table}");
    if failures > 0 {
        println!("{failures} pair(s) below AA");
    } else {
        println!("all pairs meet AA");
    }
}

/// Print a full color scheme.
pub fn print_scheme(scheme: &ColorScheme, is_dark: bool) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Hex"),
        header_cell("OKLCH"),
    ]);
    for (role, color) in scheme.iter() {
        table.add_row(vec![
            Cell::new(role.as_str()),
            Cell::new(to_hex(color)),
            Cell::new(to_css_rounded(color)),
        ]);
    }
    println!("{} scheme", if is_dark { "dark" } else { "light" });
    println!("{table}");
}

/// Print CVD simulations of one color.
pub fn print_simulations(original: Plch, simulations: &[(CvdKind, Plch)]) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Vision"),
        header_cell("Hex"),
        header_cell("OKLCH"),
    ]);
    for (kind, color) in simulations {
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(to_hex(*color)),
            Cell::new(to_css_rounded(*color)),
        ]);
    }
    println!("original: {}", to_hex(original));
    println!("{table}");
}

/// Print a tonal ramp.
pub fn print_ramp(ramp: &TonalRamp) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Tone"),
        header_cell("Hex"),
        header_cell("OKLCH"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (tone, color) in ramp.iter() {
        table.add_row(vec![
            Cell::new(tone),
            Cell::new(to_hex(color)),
            Cell::new(to_css_rounded(color)),
        ]);
    }
    println!("{table}");
}

/// Print the 3x3 variation grid around the current control position.
pub fn print_variations(grid: &[Variation]) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Energy"),
        header_cell("Tension"),
        header_cell("A"),
        header_cell("B"),
        header_cell("Score"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for cell in grid {
        table.add_row(vec![
            Cell::new(format!("{:.0}", cell.energy)),
            Cell::new(format!("{:.0}", cell.tension)),
            Cell::new(to_hex(cell.pair.a)),
            Cell::new(to_hex(cell.pair.b)),
            Cell::new(format!("{:.2}", cell.pair.metrics.score)),
        ]);
    }
    println!("{table}");
}

/// Print the saved palette list, newest first.
pub fn print_saved(records: &[SavedPalette]) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Energy"),
        header_cell("Tension"),
        header_cell("Hue"),
        header_cell("Auto-fix"),
        header_cell("Saved"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for record in records {
        let hue = match record.params.hue_base {
            Some(hue) => format!("{hue:.0}"),
            None => "auto".to_string(),
        };
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(format!("{:.0}", record.params.energy)),
            Cell::new(format!("{:.0}", record.params.tension)),
            Cell::new(hue),
            Cell::new(if record.params.auto_fix { "on" } else { "off" }),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("{table}");
}
