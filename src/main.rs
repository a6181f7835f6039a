use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use versecard::assets::AssetLoader;
use versecard::models::{AppConfig, Measurement, MeasurementKey, ScaleLadder, ScalePreset, Swatch};
use versecard::services::{segment, MeasurementBoard, PaletteSynthesizer};

#[derive(Parser)]
#[command(name = "versecard")]
#[command(about = "Derive themes, scales and passage highlights for lyric cards")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a theme from swatches and print it as JSON
    Theme {
        /// Swatches by descending prominence, as "#rrggbb" or "#rrggbb:weight"
        #[arg(required = true)]
        swatches: Vec<Swatch>,

        /// Sort swatches by weight before synthesizing
        #[arg(long)]
        sort: bool,
    },
    /// Split lyrics into lines and mark the highlighted passage
    Segment {
        /// Lyrics file, or "-" for stdin
        #[arg(short, long)]
        lyrics: PathBuf,

        /// Passage to highlight
        #[arg(short, long)]
        excerpt: String,
    },
    /// Replay content-height reports and print each scale transition
    Scale {
        /// Content identity
        #[arg(long, default_value = "content")]
        content: String,

        /// Display context sharing the height budget
        #[arg(long, default_value = "default")]
        context: String,

        /// Height budget of the context
        #[arg(long)]
        max_height: f32,

        /// Measured content heights, in report order (e.g. "640,520,410")
        #[arg(long, value_delimiter = ',', required = true)]
        heights: Vec<f32>,

        /// Replace the configured ladder with uniform presets, largest first
        #[arg(long, value_delimiter = ',')]
        text_sizes: Vec<f32>,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Serialize)]
struct ScaleReplay<'a> {
    ladder: &'a ScaleLadder,
    steps: Vec<ScaleStep>,
}

#[derive(Serialize)]
struct ScaleStep {
    reported_height: f32,
    preset: String,
    #[serde(flatten)]
    measurement: Measurement,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "versecard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }

    match cli.command {
        Some(Commands::Theme { swatches, sort }) => run_theme_command(&loader, swatches, sort),
        Some(Commands::Segment { lyrics, excerpt }) => run_segment_command(&lyrics, &excerpt),
        Some(Commands::Scale {
            content,
            context,
            max_height,
            heights,
            text_sizes,
        }) => {
            let key = MeasurementKey::new(content, context);
            run_scale_command(&loader, &key, max_height, &heights, &text_sizes)
        }
        Some(Commands::Init { force, list }) => run_init_command(&loader, force, list),
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_theme_command(
    loader: &AssetLoader,
    mut swatches: Vec<Swatch>,
    sort: bool,
) -> anyhow::Result<()> {
    if sort {
        Swatch::sort_by_prominence(&mut swatches);
    }
    let config = AppConfig::load_from_assets(loader);
    let theme = PaletteSynthesizer::new(config.palette)
        .synthesize(&swatches)
        .context("Failed to synthesize theme")?;
    print_json(&theme)
}

fn run_segment_command(lyrics: &Path, excerpt: &str) -> anyhow::Result<()> {
    let text = if lyrics.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read lyrics from stdin")?;
        buf
    } else {
        std::fs::read_to_string(lyrics)
            .with_context(|| format!("Failed to read lyrics from {}", lyrics.display()))?
    };

    print_json(&segment(&text, excerpt))
}

fn run_scale_command(
    loader: &AssetLoader,
    key: &MeasurementKey,
    max_height: f32,
    heights: &[f32],
    text_sizes: &[f32],
) -> anyhow::Result<()> {
    let mut config = AppConfig::load_from_assets(loader);
    if !text_sizes.is_empty() {
        let presets = text_sizes
            .iter()
            .map(|&size| ScalePreset::uniform(format!("{size}"), size))
            .collect();
        config = config
            .with_scale_presets(presets)
            .context("Invalid --text-sizes ladder")?;
    }

    let mut board = MeasurementBoard::new(config.scale_ladder);
    board.report_max_height(&key.context, max_height);

    let mut steps = Vec::with_capacity(heights.len());
    for &height in heights {
        let measurement = board.report_content_height(key, height);
        steps.push(ScaleStep {
            reported_height: height,
            preset: board.preset(key).name.clone(),
            measurement,
        });
    }

    print_json(&ScaleReplay {
        ladder: board.ladder(),
        steps,
    })
}

/// Extract the embedded config to the filesystem
fn run_init_command(loader: &AssetLoader, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let report = loader.init(force).context("Failed to extract config")?;

    for f in &report.written {
        println!("  + {f}");
    }
    for f in &report.skipped {
        println!("  - {f} (exists, use --force to overwrite)");
    }
    Ok(())
}

/// Display configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = AppConfig::load_from_assets(loader);

    println!("Versecard v{VERSION}\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!("\nConfig: {}", loader.config_source());

    println!("\nScale ladder:");
    for (index, preset) in config.scale_ladder.iter().enumerate() {
        println!(
            "  {index}: {:<8} text {:>4}  line {:>4}  image {:>4}  padding {:>4}",
            preset.name, preset.text_size, preset.line_height, preset.image_size, preset.padding
        );
    }

    let palette = config.palette;
    println!("\nPalette tuning:");
    println!("  min_contrast    = {}", palette.min_contrast);
    println!("  dedupe_distance = {}", palette.dedupe_distance);
    println!("  background_step = {}", palette.background_step);
    println!("  lightness_step  = {}", palette.lightness_step);
    println!("  max_text_colors = {}", palette.max_text_colors);

    println!("\nCommands:");
    println!("  versecard theme     Synthesize a theme from swatches");
    println!("  versecard segment   Mark a passage in lyrics");
    println!("  versecard scale     Replay scale fitting for one card");
    println!("  versecard init      Extract embedded config");
    println!("\nRun 'versecard --help' for more details.");
}
