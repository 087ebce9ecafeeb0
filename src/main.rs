use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allcolors::recipe::{ColorSource, Mode, Recipe};
use allcolors::run::run_recipe;

#[derive(Parser)]
#[command(name = "allcolors")]
#[command(about = "Generative images that spend every color in a palette exactly once")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grow one region, placing each color next to its best-matching filled neighbors
    Nearest {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Source image whose pixels supply the color list (defaults to the
        /// full 15-bit palette on a 256x128 canvas)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Start cell as ROW,COL (random if omitted)
        #[arg(long)]
        start: Option<String>,

        /// Start color as an index into the color list (random if omitted)
        #[arg(long)]
        start_color: Option<usize>,

        /// Integer nearest-neighbor upscale factor
        #[arg(long, default_value_t = 1)]
        scale: u32,

        /// Match against all eight neighbors instead of up/down/left/right
        #[arg(long)]
        full_neighborhood: bool,
    },
    /// Fill the canvas with chained random walks through a distance-sorted palette
    Walk {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Source image whose pixels supply the color list (defaults to the
        /// full 15-bit palette on a 256x128 canvas)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Start cell as ROW,COL (random if omitted)
        #[arg(long)]
        start: Option<String>,

        /// Start color as an index into the color list (random if omitted)
        #[arg(long)]
        start_color: Option<usize>,

        /// Integer nearest-neighbor upscale factor
        #[arg(long, default_value_t = 1)]
        scale: u32,
    },
    /// Let a bug wander the canvas writing one color per step, revisits allowed
    Bug {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Source image whose pixels supply the color list
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Comma-separated hex colors, e.g. "#112233,#445566"
        #[arg(long, conflicts_with = "input")]
        colors: Option<String>,

        /// Side length of the square canvas
        #[arg(long, default_value_t = 128)]
        size: usize,

        /// Step cap (defaults to the color count)
        #[arg(long)]
        maxiters: Option<usize>,

        /// Walk the color list as given instead of sorting by distance to a
        /// random start color
        #[arg(long)]
        in_order: bool,

        /// Write an animated PNG of the walk to this path
        #[arg(long)]
        animate: Option<PathBuf>,

        /// Capture every n-th step in the animation
        #[arg(long, default_value_t = 1)]
        snapshot_every: usize,

        /// Animation frame delay in milliseconds
        #[arg(long, default_value_t = 100)]
        frame_delay: u16,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Start cell as ROW,COL (random if omitted)
        #[arg(long)]
        start: Option<String>,

        /// Integer nearest-neighbor upscale factor
        #[arg(long, default_value_t = 1)]
        scale: u32,
    },
    /// Run a generation job described by a YAML recipe
    Run {
        /// Recipe file path
        #[arg(short, long)]
        recipe: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allcolors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let recipe = recipe_from_command(cli.command)?;
    run_recipe(&recipe)?;
    Ok(())
}

/// Flag runs and recipe runs share one execution path; flags are folded
/// into a recipe here.
fn recipe_from_command(command: Commands) -> anyhow::Result<Recipe> {
    match command {
        Commands::Nearest {
            output,
            input,
            seed,
            start,
            start_color,
            scale,
            full_neighborhood,
        } => Ok(Recipe {
            mode: Mode::Nearest,
            source: source_from_input(input),
            width: None,
            height: None,
            seed,
            start: start.as_deref().map(parse_start).transpose()?,
            start_color,
            full_neighborhood,
            output,
            scale,
            maxiters: None,
            shuffle_colors: true,
            animation: None,
            snapshot_every: 1,
            frame_delay_ms: 100,
        }),
        Commands::Walk {
            output,
            input,
            seed,
            start,
            start_color,
            scale,
        } => Ok(Recipe {
            mode: Mode::Walk,
            source: source_from_input(input),
            width: None,
            height: None,
            seed,
            start: start.as_deref().map(parse_start).transpose()?,
            start_color,
            full_neighborhood: false,
            output,
            scale,
            maxiters: None,
            shuffle_colors: true,
            animation: None,
            snapshot_every: 1,
            frame_delay_ms: 100,
        }),
        Commands::Bug {
            output,
            input,
            colors,
            size,
            maxiters,
            in_order,
            animate,
            snapshot_every,
            frame_delay,
            seed,
            start,
            scale,
        } => {
            let source = match (input, colors) {
                (Some(path), _) => ColorSource::Image { path },
                (None, Some(list)) => ColorSource::List {
                    colors: list.split(',').map(|s| s.trim().to_string()).collect(),
                },
                (None, None) => ColorSource::FifteenBit,
            };
            Ok(Recipe {
                mode: Mode::Bug,
                source,
                width: Some(size),
                height: Some(size),
                seed,
                start: start.as_deref().map(parse_start).transpose()?,
                start_color: None,
                full_neighborhood: false,
                output,
                scale,
                maxiters,
                shuffle_colors: !in_order,
                animation: animate,
                snapshot_every,
                frame_delay_ms: frame_delay,
            })
        }
        Commands::Run { recipe } => Ok(Recipe::load(&recipe)?),
    }
}

fn source_from_input(input: Option<PathBuf>) -> ColorSource {
    match input {
        Some(path) => ColorSource::Image { path },
        None => ColorSource::FifteenBit,
    }
}

/// Parse a `ROW,COL` start cell.
fn parse_start(s: &str) -> anyhow::Result<[usize; 2]> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("start must be ROW,COL, got '{s}'"))?;
    Ok([row.trim().parse()?, col.trim().parse()?])
}
