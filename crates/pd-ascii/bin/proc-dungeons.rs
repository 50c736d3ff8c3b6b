//! Procedural dungeon generator
//!
//! Generates one dungeon and prints it as ASCII or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pd_ascii::{AsciiRenderer, room_summary};
use pd_core::dungeon::{RoomShape, ShapeSet};
use pd_core::{Generator, GeneratorConfig};

/// Procedural dungeon generator
#[derive(Parser, Debug)]
#[command(name = "proc-dungeons")]
#[command(author, version, about = "Generate a room-and-corridor dungeon", long_about = None)]
struct Args {
    /// JSON config file; flags override its values
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Grid half width (grid spans -x..=x)
    #[arg(short = 'x', long = "half-width", allow_negative_numbers = true)]
    half_width: Option<i32>,

    /// Grid half height (grid spans -y..=y)
    #[arg(short = 'y', long = "half-height", allow_negative_numbers = true)]
    half_height: Option<i32>,

    /// Maximum number of rooms
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Enabled room shapes (e.g., rectangle,circle,square,triangle)
    #[arg(long = "shapes", value_delimiter = ',')]
    shapes: Option<Vec<RoomShape>>,

    /// Corridor width in cells
    #[arg(short = 'w', long = "corridor-width", allow_negative_numbers = true)]
    corridor_width: Option<i32>,

    /// Distance corridors keep from rooms
    #[arg(short = 'b', long = "buffer", allow_negative_numbers = true)]
    buffer: Option<i32>,

    /// Random seed (0 uses the clock)
    #[arg(short = 's', long = "seed", allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Print the dungeon as JSON instead of ASCII
    #[arg(long = "json")]
    json: bool,

    /// Colored output
    #[arg(long = "color")]
    color: bool,

    /// Omit the outer frame
    #[arg(long = "no-border")]
    no_border: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut GeneratorConfig) {
        if let Some(v) = self.half_width {
            config.grid_half_width = v;
        }
        if let Some(v) = self.half_height {
            config.grid_half_height = v;
        }
        if let Some(v) = self.rooms {
            config.max_rooms = v;
        }
        if let Some(ref shapes) = self.shapes {
            config.room_shapes = shapes.iter().copied().collect::<ShapeSet>();
        }
        if let Some(v) = self.corridor_width {
            config.corridor_width = v;
        }
        if let Some(v) = self.buffer {
            config.corridor_buffer = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match args.config {
        Some(ref path) => GeneratorConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    args.apply_to(&mut config);
    log::debug!("effective config: {config:?}");

    let mut generator = Generator::new(config).context("invalid generator settings")?;
    eprintln!("seed: {}", generator.seed());
    let dungeon = generator.generate();

    if args.json {
        let json = serde_json::to_string_pretty(&dungeon).context("serializing dungeon")?;
        println!("{json}");
        return Ok(());
    }

    let renderer = AsciiRenderer::new(args.color, !args.no_border);
    print!("{}", renderer.render(&dungeon));
    print!("{}", room_summary(&dungeon));
    Ok(())
}
