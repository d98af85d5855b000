// SPDX-License-Identifier: MIT
//
// prism — command-line palette designer.
//
// This is the binary that wires the two library crates to a terminal:
//
//   prism-color   → hex / RGB / HSL color model
//   prism-palette → harmonies, contrast, naming, roles, export, suggestions
//
// Every subcommand is a single pass: parse flags, layer them over the
// config file defaults, run one engine operation, print the result.
//
//   prism generate --base '#3B82F6' --harmony triadic --count 5 --export css
//   prism contrast '#111827' '#FFFFFF'
//   prism check '#3B82F6' '#EF4444' '#10B981'
//   prism suggest prompt --strategy brand.json
//   prism suggest parse response.txt

mod config;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prism_color::Color;
use prism_palette::adjust::ColorAdjustment;
use prism_palette::contrast::{self, AccessibilityReport};
use prism_palette::export::{self, ExportFormat};
use prism_palette::harmony::HarmonyType;
use prism_palette::naming::generate_palette_name;
use prism_palette::palette::{Palette, PaletteRequest};
use prism_palette::roles::{PreviewTheme, RoleAssignment};
use prism_palette::studio::Studio;
use prism_palette::suggest::{self, BrandStrategy};

use crate::config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

/// Color palette designer: harmonies, accessibility checks and export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette from a base color
    Generate(GenerateArgs),
    /// Contrast ratio and WCAG level of a foreground/background pair
    Contrast {
        foreground: Color,
        background: Color,
    },
    /// Accessibility report for a set of colors
    Check {
        #[arg(required = true)]
        colors: Vec<Color>,
        /// Explicit foreground to check against --background
        #[arg(long, requires = "background")]
        foreground: Option<Color>,
        #[arg(long, requires = "foreground")]
        background: Option<Color>,
    },
    /// Print a random color
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Name a palette without generating it
    Name {
        base: Color,
        #[arg(long, default_value = "analogous")]
        harmony: HarmonyType,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show how colors map onto brand-preview roles
    Roles {
        #[arg(required = true)]
        colors: Vec<Color>,
        #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
        theme: ThemeArg,
    },
    /// AI suggestion helpers (prompt building and response parsing)
    #[command(subcommand)]
    Suggest(SuggestCommand),
    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Base color as #RRGGBB (default from config)
    #[arg(short, long)]
    base: Option<Color>,
    #[arg(short = 'H', long)]
    harmony: Option<HarmonyType>,
    #[arg(short, long)]
    count: Option<usize>,
    /// Hue offset in degrees applied to the base
    #[arg(long, allow_hyphen_values = true)]
    hue: Option<f64>,
    /// Saturation delta in adjustment steps
    #[arg(long, allow_hyphen_values = true)]
    saturation: Option<f64>,
    /// Lightness delta in adjustment steps (negative darkens)
    #[arg(long, allow_hyphen_values = true)]
    lightness: Option<f64>,
    /// Start from a random base color
    #[arg(long, conflicts_with = "base")]
    random: bool,
    /// Render in an export format instead of the summary
    #[arg(short, long)]
    export: Option<ExportFormat>,
    /// Write the export to this file, or into this directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Print the palette record as JSON
    #[arg(long, conflicts_with = "export")]
    json: bool,
    /// Seed for the name and random base
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum SuggestCommand {
    /// Print the request prompt for a brand strategy (JSON file)
    Prompt {
        #[arg(long, value_name = "FILE")]
        strategy: PathBuf,
        /// Build the enhancement prompt for these colors instead
        #[arg(long, num_args = 1..)]
        enhance: Vec<Color>,
    },
    /// Parse a service response (file or stdin) into a palette
    Parse {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Treat the input as an enhancement answer (bare hex list)
        #[arg(long)]
        enhance: bool,
    },
    /// Report whether the suggestion service is configured
    Status,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for PreviewTheme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Generate(args) => generate(&config, &args),
        Command::Contrast { foreground, background } => {
            print_contrast(foreground, background);
            Ok(())
        }
        Command::Check { colors, foreground, background } => {
            check(&colors, foreground.zip(background));
            Ok(())
        }
        Command::Random { seed } => {
            let color = Color::random_with(&mut rng(seed));
            println!("{}", describe(color));
            Ok(())
        }
        Command::Name { base, harmony, seed } => {
            println!("{}", generate_palette_name(harmony, base, &mut rng(seed)));
            Ok(())
        }
        Command::Roles { colors, theme } => {
            print_roles(&colors, theme.into());
            Ok(())
        }
        Command::Suggest(cmd) => run_suggest(&config, cmd),
        Command::Config(cmd) => run_config(&config, cli.config.as_deref(), cmd),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

// ─── generate ───────────────────────────────────────────────────────────────

fn generate(config: &Config, args: &GenerateArgs) -> Result<()> {
    let mut rng = rng(args.seed);
    let defaults = config.request()?;

    let base_color = if args.random {
        Color::random_with(&mut rng)
    } else {
        args.base.unwrap_or(defaults.base_color)
    };
    let request = PaletteRequest {
        base_color,
        harmony: args.harmony.unwrap_or(defaults.harmony),
        count: args.count.unwrap_or(defaults.count),
        adjustment: ColorAdjustment {
            hue: args.hue,
            saturation: args.saturation,
            lightness: args.lightness,
        },
    };

    let palette = Palette::generate(&request, &mut rng)?;
    info!(name = palette.name(), harmony = %palette.harmony(), "generated palette");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    let format = match (args.export, &args.output) {
        (Some(format), _) => format,
        (None, Some(_)) => config.export.format,
        (None, None) => {
            print_palette(&palette);
            return Ok(());
        }
    };
    let rendered = export::export(&palette, format)?;
    match &args.output {
        Some(path) => {
            let path = output_path(path, format, &palette);
            fs::write(&path, rendered + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} ({})", path.display(), format.label());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn output_path(path: &Path, format: ExportFormat, palette: &Palette) -> PathBuf {
    if path.is_dir() { path.join(format.file_name(palette)) } else { path.to_path_buf() }
}

// ─── Printing ───────────────────────────────────────────────────────────────

fn describe(color: Color) -> String {
    let rgb = color.rgb();
    let hsl = color.hsl();
    format!(
        "{}  rgb({}, {}, {})  hsl({}, {}%, {}%)",
        color.hex(),
        rgb.r,
        rgb.g,
        rgb.b,
        hsl.h,
        hsl.s,
        hsl.l
    )
}

fn print_palette(palette: &Palette) {
    println!("{}  ({}, base {})", palette.name(), palette.harmony(), palette.base_color());
    for (i, color) in palette.colors().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, describe(*color));
    }
}

fn print_contrast(foreground: Color, background: Color) {
    let result = contrast::contrast(foreground, background);
    println!("{foreground} on {background}");
    println!("  ratio     {:.2}:1", result.ratio);
    println!("  level     {} ({})", result.level, result.level.description());
    println!("  readable  {}", if result.is_readable { "yes" } else { "no" });
}

fn check(colors: &[Color], selected: Option<(Color, Color)>) {
    let report = AccessibilityReport::analyze(colors, selected);
    println!(
        "Color-blind safe: {}",
        if report.color_blind_safe { "yes" } else { "no" }
    );
    for check in &report.checks {
        println!(
            "  {} on {}  {:>5.2}:1  {}",
            check.foreground, check.background, check.result.ratio, check.result.level
        );
    }
    if !report.recommendations.is_empty() {
        println!("Recommendations:");
        for tip in &report.recommendations {
            println!("  - {tip}");
        }
    }
}

fn print_roles(colors: &[Color], theme: PreviewTheme) {
    let roles = RoleAssignment::from_palette(colors, theme);
    for (role, color) in roles.iter() {
        println!("  {:<16} {}  {}", role.label(), color, role.description());
    }
}

// ─── suggest ────────────────────────────────────────────────────────────────

fn run_suggest(config: &Config, cmd: SuggestCommand) -> Result<()> {
    match cmd {
        SuggestCommand::Prompt { strategy, enhance } => {
            let strategy = read_strategy(&strategy)?;
            if enhance.is_empty() {
                println!("{}", suggest::suggestion_prompt(&strategy));
            } else {
                println!("{}", suggest::enhancement_prompt(&enhance, &strategy));
            }
            Ok(())
        }
        SuggestCommand::Parse { input, enhance } => {
            let content = read_input(input.as_deref())?;
            if enhance {
                for color in suggest::extract_hex_colors(&content) {
                    println!("{}", describe(color));
                }
                return Ok(());
            }
            let mut studio = Studio::new(config.suggestion_config());
            let analysis = studio.apply_suggestion(&content);
            if analysis.is_fallback() {
                eprintln!("warning: response was not usable, showing fallback palette");
            }
            print_palette(studio.palette());
            if !analysis.suggestion.reasoning.is_empty() {
                println!("\n{}", analysis.suggestion.reasoning);
            }
            for tip in &analysis.recommendations {
                println!("  - {tip}");
            }
            Ok(())
        }
        SuggestCommand::Status => {
            match config.suggestion_config().available() {
                Ok(()) => println!("AI suggestions available"),
                Err(reason) => println!("{reason}"),
            }
            Ok(())
        }
    }
}

fn read_strategy(path: &Path) -> Result<BrandStrategy> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read brand strategy: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse brand strategy: {}", path.display()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

// ─── config ─────────────────────────────────────────────────────────────────

fn run_config(config: &Config, explicit: Option<&Path>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let path = match explicit {
                Some(path) => path.to_path_buf(),
                None => Config::config_path()?,
            };
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let existing = match explicit {
                Some(path) => path.to_path_buf(),
                None => Config::config_path()?,
            };
            if existing.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", existing.display());
            }
            let written = match explicit {
                Some(path) => Config::default().save_to(path).map(|()| path.to_path_buf())?,
                None => Config::default().save()?,
            };
            println!("Wrote {}", written.display());
            Ok(())
        }
    }
}
