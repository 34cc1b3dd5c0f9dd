use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{Cell, DungeonGenerator, GenerationConfig};
use tracing::Level;

mod render;

use render::{GlyphPicker, LayoutSummary, render_ascii, room_glyphs};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generation parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    corridors: Option<u32>,
    #[arg(long)]
    room_steps: Option<u32>,
    #[arg(long)]
    room_fraction: Option<f64>,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start_x: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start_y: i32,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
            None => GenerationConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(corridors) = self.corridors {
            config.corridor_count = corridors;
        }
        if let Some(steps) = self.room_steps {
            config.room_walk_steps = steps;
        }
        if let Some(fraction) = self.room_fraction {
            config.room_fraction = fraction;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    let config = args.resolve_config()?;
    let generator = DungeonGenerator::new(config).context("Invalid generation parameters")?;
    let result = generator
        .generate(Cell::new(args.start_x, args.start_y))
        .context("Start cell is too close to the edge of the grid")?;

    match args.format {
        OutputFormat::Ascii => {
            let glyphs = room_glyphs(&result, &mut GlyphPicker::new(result.seed));
            print!("{}", render_ascii(&result, &glyphs));
            println!("Seed: {}", result.seed);
            println!("Floor cells: {}", result.floor.len());
            println!("Rooms: {}", result.rooms.len());
            println!("Fingerprint: {:016x}", result.fingerprint());
        }
        OutputFormat::Json => {
            let summary = LayoutSummary::from_result(&result);
            let json = serde_json::to_string_pretty(&summary)
                .with_context(|| "Failed to serialize layout JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
