//! Command implementations.

use std::fs;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use tonal_color::{from_rgb8, parse_hex};
use tonal_contrast::{
    analyze_palette_pairs, apply_locks, fix_palette, pick_text_color, simulate_cvd, PairAnalysis,
};
use tonal_engine::{
    build_extended_palette, build_palette, color_scheme, controls_from_seed,
    controls_with_strategy, detect_theme_mode, generate_pair, presets::preset_by_id,
    ramps_from_seed, tonal_ramp, variation_grid, HueStrategy,
};
use tonal_export::{
    apple_color_list, color_tokens, css_variables_extended, export_filename, figma_plugin,
    json_tokens, material3_json, mui_theme, plugin_payload, sketch_palette, tailwind_config,
    tonal_css_variables, tonal_tailwind_config, vscode_theme, ExportKind, TokenFormat,
};
use tonal_model::{
    CvdKind, Pair, Palette, PaletteParams, PaletteRole, Plch, RepairTier, RoleLocks, FULL_ROLES,
};
use tonal_store::{JsonFileStore, PaletteStore, SavedPalette, StoreLimits};

use crate::cli::{
    CvdArg, ExportArgs, ExportKindArg, GenerateArgs, LoadArgs, PalettesCommand, RampArgs, SaveArgs,
    SchemeArgs, SimulateArgs, StoreArgs, TierArg, TokenFormatArg,
};
use crate::summary;

/// The default manual hue anchor, matching the studio's initial state.
const DEFAULT_HUE_ANCHOR: f64 = 220.0;

/// Everything a palette-producing command needs to print or export.
pub struct PaletteOutcome {
    pub pair: Pair,
    pub palette: Palette,
    pub primary_text: Plch,
    pub params: PaletteParams,
    pub locks: RoleLocks,
}

/// The resolved control position: energy, tension, and hue strategy,
/// after presets and seeded shuffles are taken into account.
struct ControlPosition {
    energy: f64,
    tension: f64,
    strategy: HueStrategy,
    spectrum: bool,
}

fn control_position(args: &GenerateArgs) -> Result<ControlPosition> {
    let (energy, tension, seeded_hue) = if let Some(id) = &args.preset {
        let preset = preset_by_id(id).ok_or_else(|| {
            let known = tonal_engine::PRESETS
                .iter()
                .map(|preset| preset.id)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow!("unknown preset: {id} (known presets: {known})")
        })?;
        (preset.energy, preset.tension, None)
    } else if let Some(seed) = args.seed {
        let controls = controls_from_seed(seed);
        (controls.energy, controls.tension, Some(controls.hue_base))
    } else {
        (args.energy, args.tension, None)
    };

    let anchor = args.hue.or(seeded_hue);
    let strategy = if args.spectrum {
        HueStrategy::Spectrum {
            fallback: anchor.unwrap_or(DEFAULT_HUE_ANCHOR),
        }
    } else if args.hue_auto {
        HueStrategy::Auto
    } else {
        match anchor {
            Some(hue) => HueStrategy::Manual(hue),
            None => HueStrategy::Auto,
        }
    };

    Ok(ControlPosition {
        energy,
        tension,
        strategy,
        spectrum: args.spectrum,
    })
}

fn repair_tier(tier: TierArg) -> RepairTier {
    match tier {
        TierArg::Basic => RepairTier::Basic,
        TierArg::Advanced => RepairTier::Advanced,
    }
}

/// Parse repeated `--lock role=#hex` arguments into role locks.
pub fn parse_locks(entries: &[String]) -> Result<RoleLocks> {
    let mut locks = RoleLocks::new();
    for entry in entries {
        let (role_part, color_part) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("lock must look like role=#hex, got: {entry}"))?;
        let role: PaletteRole = role_part
            .parse()
            .with_context(|| format!("in lock argument: {entry}"))?;
        let rgb = parse_hex(color_part).with_context(|| format!("in lock argument: {entry}"))?;
        locks.lock(role, from_rgb8(rgb));
    }
    Ok(locks)
}

/// Build the generating parameters recorded for persistence and sharing.
pub fn params_from_args(args: &GenerateArgs) -> Result<PaletteParams> {
    let position = control_position(args)?;
    Ok(PaletteParams {
        energy: position.energy,
        tension: position.tension,
        hue_base: match position.strategy {
            HueStrategy::Manual(hue) => Some(hue),
            HueStrategy::Spectrum { fallback } => Some(fallback),
            HueStrategy::Auto => None,
        },
        hue_auto: matches!(position.strategy, HueStrategy::Auto),
        spectrum_mode: position.spectrum,
        auto_fix: !args.no_auto_fix,
    })
}

/// Run the full generation flow: pair, palette, optional repair, locks.
///
/// Locks are applied both before repair (so repairs see the pinned
/// values as context) and after (so a lock always wins verbatim).
pub fn resolve_palette(args: &GenerateArgs) -> Result<PaletteOutcome> {
    let locks = parse_locks(&args.locks)?;
    let position = control_position(args)?;

    let mut controls =
        controls_with_strategy(position.energy, position.tension, &position.strategy);
    if let Some(chroma) = args.chroma_override {
        controls = controls.with_chroma_override(chroma);
    }

    let pair = generate_pair(&controls);
    let base = apply_locks(build_palette(&pair), &locks);

    let (palette, primary_text) = if args.no_auto_fix {
        (base, pick_text_color(base.primary).color)
    } else {
        let outcome = fix_palette(&base, repair_tier(args.tier));
        let palette = apply_locks(outcome.palette, &locks);
        let primary_text = match locks.get(PaletteRole::Primary) {
            Some(locked) => pick_text_color(locked).color,
            None => outcome.primary_text,
        };
        (palette, primary_text)
    };

    info!(
        energy = position.energy,
        tension = position.tension,
        auto_fix = !args.no_auto_fix,
        locks = locks.len(),
        "resolved palette"
    );

    Ok(PaletteOutcome {
        pair,
        palette,
        primary_text,
        params: params_from_args(args)?,
        locks,
    })
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let outcome = resolve_palette(args)?;
    summary::print_pair(&outcome.pair);
    summary::print_palette(&outcome);
    if args.variations {
        let position = control_position(args)?;
        let grid = variation_grid(position.energy, position.tension, &position.strategy);
        summary::print_variations(&grid);
    }
    if args.share {
        println!("share: ?{}", outcome.params.share_query());
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let outcome = resolve_palette(&args.generate)?;
    let extended = build_extended_palette(&outcome.pair);
    let mode = detect_theme_mode(&outcome.palette);
    let palette = &outcome.palette;

    let (content, filename) = match args.format {
        ExportKindArg::Css => (
            css_variables_extended(palette, &FULL_ROLES, Some(outcome.primary_text)),
            export_filename(ExportKind::Css),
        ),
        ExportKindArg::Json => (
            json_tokens(palette, &FULL_ROLES),
            export_filename(ExportKind::Json),
        ),
        ExportKindArg::Tailwind => (
            tailwind_config(palette, &FULL_ROLES),
            export_filename(ExportKind::Tailwind),
        ),
        ExportKindArg::Mui => (mui_theme(palette, mode), export_filename(ExportKind::Mui)),
        ExportKindArg::Plugin => (
            plugin_payload(palette, &FULL_ROLES),
            export_filename(ExportKind::Plugin),
        ),
        ExportKindArg::Material3 => (
            material3_json(&extended.light, &extended.dark, &extended.ramps),
            export_filename(ExportKind::Material3),
        ),
        ExportKindArg::TonalCss => (
            tonal_css_variables(&extended.ramps),
            export_filename(ExportKind::TonalCss),
        ),
        ExportKindArg::TonalTailwind => (
            tonal_tailwind_config(&extended.ramps),
            export_filename(ExportKind::TonalTailwind),
        ),
        ExportKindArg::Figma => (
            figma_plugin(palette, &FULL_ROLES, &extended.ramps),
            export_filename(ExportKind::Figma),
        ),
        ExportKindArg::Sketch => (
            sketch_palette(palette, &FULL_ROLES),
            export_filename(ExportKind::Sketch),
        ),
        ExportKindArg::Vscode => (
            vscode_theme(palette, mode),
            export_filename(ExportKind::Vscode),
        ),
        ExportKindArg::AppleClr => (
            apple_color_list(palette, &FULL_ROLES),
            export_filename(ExportKind::AppleClr),
        ),
        ExportKindArg::Tokens => {
            let format = token_format(args.tokens);
            let lines = color_tokens(palette, &FULL_ROLES, format)
                .into_iter()
                .map(|token| format!("{}: {}", token.label, token.value))
                .collect::<Vec<_>>()
                .join("\n");
            (format!("{lines}\n"), "tonal-field-tokens.txt")
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("writing export to {}", path.display()))?;
            println!("wrote {} ({})", path.display(), filename);
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn token_format(arg: TokenFormatArg) -> TokenFormat {
    match arg {
        TokenFormatArg::Hex => TokenFormat::Hex,
        TokenFormatArg::Oklch => TokenFormat::Oklch,
        TokenFormatArg::Rgb => TokenFormat::Rgb,
        TokenFormatArg::Hsl => TokenFormat::Hsl,
        TokenFormatArg::Lch => TokenFormat::Lch,
    }
}

pub fn run_check(args: &GenerateArgs) -> Result<Vec<PairAnalysis>> {
    let outcome = resolve_palette(args)?;
    let report = analyze_palette_pairs(&outcome.palette);
    summary::print_check(&report);
    Ok(report)
}

pub fn run_scheme(args: &SchemeArgs) -> Result<()> {
    let seed = from_rgb8(parse_hex(&args.seed).context("parsing --seed")?);
    let ramps = ramps_from_seed(seed);
    let scheme = color_scheme(&ramps, args.dark);
    summary::print_scheme(&scheme, args.dark);
    Ok(())
}

pub fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let color = from_rgb8(parse_hex(&args.color).context("parsing --color")?);
    let kinds: Vec<CvdKind> = match args.kind {
        Some(kind) => vec![cvd_kind(kind)],
        None => CvdKind::ALL.to_vec(),
    };
    let simulations: Vec<(CvdKind, Plch)> = kinds
        .into_iter()
        .map(|kind| (kind, simulate_cvd(color, kind)))
        .collect();
    summary::print_simulations(color, &simulations);
    Ok(())
}

fn cvd_kind(arg: CvdArg) -> CvdKind {
    match arg {
        CvdArg::Normal => CvdKind::Normal,
        CvdArg::Protanopia => CvdKind::Protanopia,
        CvdArg::Deuteranopia => CvdKind::Deuteranopia,
        CvdArg::Tritanopia => CvdKind::Tritanopia,
    }
}

pub fn run_ramp(args: &RampArgs) -> Result<()> {
    let seed = from_rgb8(parse_hex(&args.color).context("parsing --color")?);
    let ramp = tonal_ramp(seed, args.min_chroma);
    summary::print_ramp(&ramp);
    Ok(())
}

fn open_store(args: &StoreArgs) -> JsonFileStore {
    let limits = if args.pro {
        StoreLimits::pro()
    } else {
        StoreLimits::free()
    };
    JsonFileStore::new(&args.store, limits)
}

pub fn run_palettes(command: &PalettesCommand) -> Result<()> {
    match command {
        PalettesCommand::Save(args) => run_save(args),
        PalettesCommand::List(store) => run_list(store),
        PalettesCommand::Load(args) => run_load(args),
        PalettesCommand::Delete(args) => run_delete(args),
    }
}

fn run_save(args: &SaveArgs) -> Result<()> {
    let mut store = open_store(&args.store);
    let record = SavedPalette::new(params_from_args(&args.generate)?);
    let id = record.id.clone();
    store.save(record).context("saving palette")?;
    println!("saved palette {id}");
    Ok(())
}

fn run_list(args: &StoreArgs) -> Result<()> {
    let store = open_store(args);
    let records = store.list().context("listing palettes")?;
    if records.is_empty() {
        println!("no saved palettes in {}", args.store.display());
        return Ok(());
    }
    summary::print_saved(&records);
    Ok(())
}

fn run_load(args: &LoadArgs) -> Result<()> {
    let store = open_store(&args.store);
    match store.load(&args.id).context("loading palette")? {
        Some(record) => {
            println!("share: ?{}", record.params.share_query());
            Ok(())
        }
        None => Err(anyhow!("no saved palette with id {}", args.id)),
    }
}

fn run_delete(args: &LoadArgs) -> Result<()> {
    let mut store = open_store(&args.store);
    if store.delete(&args.id).context("deleting palette")? {
        println!("deleted palette {}", args.id);
        Ok(())
    } else {
        Err(anyhow!("no saved palette with id {}", args.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> GenerateArgs {
        GenerateArgs {
            energy: 45.0,
            tension: 35.0,
            preset: None,
            seed: None,
            hue: None,
            hue_auto: false,
            spectrum: false,
            chroma_override: None,
            no_auto_fix: false,
            tier: TierArg::Basic,
            locks: Vec::new(),
            share: false,
            variations: false,
        }
    }

    #[test]
    fn lock_parsing_accepts_role_and_hex() {
        let locks = parse_locks(&["accent=#e8590c".to_string()]).expect("parse lock");
        assert!(locks.get(PaletteRole::Accent).is_some());
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn lock_parsing_rejects_malformed_specs() {
        assert!(parse_locks(&["accent".to_string()]).is_err());
        assert!(parse_locks(&["nosuchrole=#ffffff".to_string()]).is_err());
        assert!(parse_locks(&["accent=#zz".to_string()]).is_err());
    }

    #[test]
    fn locked_roles_survive_repair_verbatim() {
        let mut args = base_args();
        args.locks = vec!["text=#102030".to_string()];
        let outcome = resolve_palette(&args).expect("resolve");
        let expected = from_rgb8(parse_hex("#102030").expect("hex"));
        assert_eq!(outcome.palette.text, expected);
    }

    #[test]
    fn params_record_the_hue_strategy() {
        let mut args = base_args();
        args.hue = Some(220.0);
        let params = params_from_args(&args).expect("params");
        assert_eq!(params.hue_base, Some(220.0));
        assert!(!params.hue_auto);

        args.hue = None;
        args.hue_auto = true;
        let auto = params_from_args(&args).expect("params");
        assert!(auto.hue_auto);
        assert_eq!(auto.hue_base, None);
    }

    #[test]
    fn presets_and_seeds_replace_raw_controls() {
        let mut args = base_args();
        args.preset = Some("sharp-ink".to_string());
        let params = params_from_args(&args).expect("params");
        assert_eq!(params.energy, 62.0);
        assert_eq!(params.tension, 78.0);

        let mut args = base_args();
        args.seed = Some(4242);
        let seeded = params_from_args(&args).expect("params");
        let expected = controls_from_seed(4242);
        assert_eq!(seeded.energy, expected.energy);
        assert_eq!(seeded.hue_base, Some(expected.hue_base));

        let mut args = base_args();
        args.preset = Some("nope".to_string());
        assert!(params_from_args(&args).is_err());
    }

    #[test]
    fn no_auto_fix_leaves_the_built_palette_untouched() {
        let mut args = base_args();
        args.no_auto_fix = true;
        let outcome = resolve_palette(&args).expect("resolve");
        let raw = build_palette(&outcome.pair);
        assert_eq!(outcome.palette, raw);
    }

    #[test]
    fn save_then_delete_round_trips_through_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store_args = StoreArgs {
            store: dir.path().join("palettes.json"),
            pro: true,
        };
        let save_args = SaveArgs {
            generate: base_args(),
            store: store_args.clone(),
        };
        run_save(&save_args).expect("save");

        let store = open_store(&store_args);
        let records = store.list().expect("list");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].params.energy, 45.0);

        let delete_args = LoadArgs {
            id: records[0].id.clone(),
            store: store_args,
        };
        run_delete(&delete_args).expect("delete");
        assert!(store.list().expect("list after delete").is_empty());
    }

    #[test]
    fn free_store_enforces_the_save_cap() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store_args = StoreArgs {
            store: dir.path().join("palettes.json"),
            pro: false,
        };
        let save_args = SaveArgs {
            generate: base_args(),
            store: store_args,
        };
        run_save(&save_args).expect("first save");
        run_save(&save_args).expect("second save");
        assert!(run_save(&save_args).is_err());
    }
}
