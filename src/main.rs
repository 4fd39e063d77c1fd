use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitmix::assets::AssetLoader;
use bitmix::models::{parse_rgb_list, AppConfig, BitMixer, OutputFormat};
use bitmix::services::{BasicNamer, ColorReport};
use hsl_harmony::{hsl_to_rgb, rgb_to_hsl, HarmonyRule, Hsl, Rgb};

const CONFIG_ENV: &str = "BITMIX_CONFIG";

#[derive(Parser)]
#[command(name = "bitmix")]
#[command(about = "Bitmix - compose RGB colors from 24 bit switches and derive harmony palettes")]
#[command(version)]
struct Cli {
    /// Path to config.yaml (falls back to BITMIX_CONFIG, then the embedded default)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everything about one color
    Mix {
        #[command(flatten)]
        color: ColorArgs,

        /// Harmony rule (defaults to the configured rule)
        #[arg(long)]
        rule: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the five palette colors as comma-separated hex codes
    Palette {
        /// Harmony rule
        rule: String,

        #[command(flatten)]
        color: ColorArgs,
    },
    /// Flip every switch at random, then report the result
    Random {
        /// Seed for a reproducible result
        #[arg(long)]
        seed: Option<u64>,

        /// Harmony rule (defaults to the configured rule)
        #[arg(long)]
        rule: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Convert an RGB triple to HSL
    ToHsl { r: u8, g: u8, b: u8 },
    /// Convert HSL to an RGB triple
    ToRgb {
        /// Hue in degrees (any finite angle)
        #[arg(allow_negative_numbers = true)]
        h: f64,
        /// Saturation, 0 to 100
        s: f64,
        /// Lightness, 0 to 100
        l: f64,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Exactly one way of giving the input color
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ColorArgs {
    /// Decimal channels, e.g. "51,102,153"
    #[arg(long)]
    rgb: Option<String>,

    /// Hex color, e.g. "#336699" or "369"
    #[arg(long)]
    hex: Option<String>,

    /// 24 switch states, red then green then blue, e.g. "00110011_01100110_10011001"
    #[arg(long)]
    bits: Option<String>,
}

impl ColorArgs {
    fn resolve(&self) -> anyhow::Result<Rgb> {
        if let Some(ref s) = self.rgb {
            return Ok(parse_rgb_list(s)?);
        }
        if let Some(ref s) = self.hex {
            return Ok(s.parse::<Rgb>()?);
        }
        if let Some(ref s) = self.bits {
            return Ok(BitMixer::from_bit_string(s)?.color());
        }
        anyhow::bail!("one of --rgb, --hex or --bits is required")
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI, on stderr so reports stay pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitmix=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let loader = AssetLoader::new(config_file);

    match cli.command {
        Some(Commands::Mix {
            color,
            rule,
            format,
        }) => {
            let config = AppConfig::load(&loader)?;
            let rgb = color.resolve()?;
            print_report(&config, rgb, rule.as_deref(), format)
        }
        Some(Commands::Palette { rule, color }) => {
            let config = AppConfig::load(&loader)?;
            let rgb = color.resolve()?;
            run_palette_command(&config, rgb, &rule)
        }
        Some(Commands::Random { seed, rule, format }) => {
            let config = AppConfig::load(&loader)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut mixer = BitMixer::default();
            mixer.randomize(&mut rng);
            println!("{}\n", mixer.bit_string());
            print_report(&config, mixer.color(), rule.as_deref(), format)
        }
        Some(Commands::ToHsl { r, g, b }) => {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            println!("{h}, {s}, {l}");
            Ok(())
        }
        Some(Commands::ToRgb { h, s, l }) => {
            let hsl = Hsl::try_new(h, s, l)?;
            let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
            println!("{r}, {g}, {b}");
            Ok(())
        }
        Some(Commands::Init { force }) => run_init_command(&loader, force),
        None => run_status_command(&loader),
    }
}

fn print_report(
    config: &AppConfig,
    rgb: Rgb,
    rule: Option<&str>,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let rule = config.resolve_rule(rule);
    let report = ColorReport::build(rgb, rule, config.unknown_rule, &BasicNamer)?;

    match format.unwrap_or(config.format) {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_palette_command(config: &AppConfig, rgb: Rgb, rule: &str) -> anyhow::Result<()> {
    let report = ColorReport::build(rgb, rule, config.unknown_rule, &BasicNamer)?;
    println!("{}", report.palette_hex_list());
    Ok(())
}

fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init_config(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Bitmix v{VERSION}");
    println!("Compose RGB colors from 24 bit switches\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    println!("  Source:       {}", loader.config_source());
    let config = AppConfig::load(loader)?;
    println!("  Default rule: {}", config.default_rule);
    println!("  Unknown rule: {:?}", config.unknown_rule);
    println!("  Format:       {:?}", config.format);

    println!("\nHarmony Rules:");
    for rule in HarmonyRule::ALL {
        println!("  {rule}");
    }

    println!("\nEmbedded Assets:");
    for f in AssetLoader::list_embedded() {
        println!("  {f}");
    }

    println!("\nRun 'bitmix --help' for commands.");
    Ok(())
}
