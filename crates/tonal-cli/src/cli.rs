//! CLI argument definitions for the Tonal Field studio.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tonal-field",
    version,
    about = "Tonal Field - Generate accessible UI color palettes",
    long_about = "Generate UI color palettes from two controls (Energy and Tension).\n\n\
                  Derives semantic role palettes, Material-style tonal schemes,\n\
                  WCAG contrast reports with automatic repair, and token exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a palette and print its roles, metrics, and swatches.
    Generate(GenerateArgs),

    /// Export a palette in a target format (CSS, JSON, Tailwind, ...).
    Export(ExportArgs),

    /// Audit the contrast of every text/background pair in a palette.
    Check(GenerateArgs),

    /// Build a Material-style color scheme from a seed color.
    Scheme(SchemeArgs),

    /// Simulate how a color appears under color vision deficiencies.
    Simulate(SimulateArgs),

    /// Expand a seed color into its 13-stop tonal ramp.
    Ramp(RampArgs),

    /// Save, list, load, and delete palette parameters.
    #[command(subcommand)]
    Palettes(PalettesCommand),
}

/// Controls shared by every palette-producing subcommand.
#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Energy control, 0 (calm) to 100 (vivid).
    #[arg(long, default_value_t = 45.0)]
    pub energy: f64,

    /// Tension control, 0 (soft) to 100 (sharp).
    #[arg(long, default_value_t = 35.0)]
    pub tension: f64,

    /// Start from a named preset instead of raw controls.
    #[arg(long, value_name = "ID", conflicts_with_all = ["energy", "tension", "seed"])]
    pub preset: Option<String>,

    /// Shuffle: draw energy, tension, and hue from a reproducible seed.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["energy", "tension"])]
    pub seed: Option<u32>,

    /// Manual hue anchor in degrees (otherwise the hue is automatic).
    #[arg(long, value_name = "DEGREES", conflicts_with = "hue_auto")]
    pub hue: Option<f64>,

    /// Force automatic hue selection.
    #[arg(long)]
    pub hue_auto: bool,

    /// Spectrum mode: map the control position onto the full hue wheel.
    #[arg(long)]
    pub spectrum: bool,

    /// Override the energy-driven chroma (spectrum workflows).
    #[arg(long, value_name = "CHROMA")]
    pub chroma_override: Option<f64>,

    /// Skip automatic contrast repair.
    #[arg(long)]
    pub no_auto_fix: bool,

    /// Repair tier: which roles auto-fix may adjust.
    #[arg(long, value_enum, default_value = "basic")]
    pub tier: TierArg,

    /// Lock a role to a fixed color, e.g. --lock accent=#e8590c.
    /// Locks always win over auto-fix. Repeatable.
    #[arg(long = "lock", value_name = "ROLE=HEX")]
    pub locks: Vec<String>,

    /// Print the shareable parameter query string.
    #[arg(long)]
    pub share: bool,

    /// Also print the 3x3 grid of neighboring pairs.
    #[arg(long)]
    pub variations: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Export format.
    #[arg(long, value_enum, default_value = "css")]
    pub format: ExportKindArg,

    /// Token value format for token-list output.
    #[arg(long, value_enum, default_value = "hex")]
    pub tokens: TokenFormatArg,

    /// Write to a file instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SchemeArgs {
    /// Seed color as hex, e.g. "#6750a4".
    #[arg(long, value_name = "HEX")]
    pub seed: String,

    /// Generate the dark-mode scheme instead of light.
    #[arg(long)]
    pub dark: bool,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Color to simulate, as hex.
    #[arg(long, value_name = "HEX")]
    pub color: String,

    /// Deficiency to simulate; omit to show all of them.
    #[arg(long, value_enum)]
    pub kind: Option<CvdArg>,
}

#[derive(Args)]
pub struct RampArgs {
    /// Seed color as hex.
    #[arg(long, value_name = "HEX")]
    pub color: String,

    /// Minimum chroma kept along the ramp.
    #[arg(long, default_value_t = 0.02)]
    pub min_chroma: f64,
}

#[derive(Subcommand)]
pub enum PalettesCommand {
    /// Save the generating parameters of a palette.
    Save(SaveArgs),

    /// List saved palettes, newest first.
    List(StoreArgs),

    /// Print the share query of a saved palette.
    Load(LoadArgs),

    /// Delete a saved palette.
    Delete(LoadArgs),
}

#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Record id, as shown by `palettes list`.
    pub id: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Clone)]
pub struct StoreArgs {
    /// Path of the palette store file.
    #[arg(long, value_name = "PATH", default_value = "tonal-field-palettes.json")]
    pub store: PathBuf,

    /// Lift the free-tier save cap.
    #[arg(long)]
    pub pro: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TierArg {
    Basic,
    Advanced,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKindArg {
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
    /// Plain token list in the --tokens format.
    Tokens,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TokenFormatArg {
    Hex,
    Oklch,
    Rgb,
    Hsl,
    Lch,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CvdArg {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
