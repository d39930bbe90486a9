//! Lumen - render a sphere scene to an image file.
//!
//! Writes PPM to stdout by default, or to `--output` with the format picked
//! from the file extension.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_renderer::output::{save_image, write_ppm};
use lumen_renderer::{render, NoProgress, Progress, ScenePreset, StderrProgress};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

/// Scene preset selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SceneArg {
    /// Field of random small spheres around glass, matte and mirror spheres
    Cover,
    /// Matte, hollow glass and fuzzy metal spheres in a row
    Materials,
    /// Two touching spheres through a 90 degree lens
    Wide,
    /// One grey sphere over the ground
    Single,
}

impl From<SceneArg> for ScenePreset {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Cover => ScenePreset::Cover,
            SceneArg::Materials => ScenePreset::Materials,
            SceneArg::Wide => ScenePreset::Wide,
            SceneArg::Single => ScenePreset::Single,
        }
    }
}

/// lumen - a small offline path tracer
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Cli {
    /// Scene preset to render
    #[arg(short, long, value_enum, default_value_t = SceneArg::Cover)]
    scene: SceneArg,

    /// Output file (.ppm, .png, .jpg, .bmp, .tga). PPM goes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels; height follows the preset's aspect ratio
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Samples per pixel
    #[arg(long)]
    samples: Option<u32>,

    /// Maximum ray bounce depth
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for the random stream; seeded from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the scanline counter
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let preset = ScenePreset::from(cli.scene);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let world = preset.build(&mut rng);
    log::info!(
        "Scene '{}' built with {} objects in {:?}",
        preset.name(),
        world.len(),
        start.elapsed()
    );

    let mut camera = preset.camera();
    if let Some(width) = cli.width {
        camera.image_width = width;
    }
    if let Some(samples) = cli.samples {
        camera.samples_per_pixel = samples;
    }
    if let Some(depth) = cli.depth {
        camera.max_depth = depth;
    }

    let mut progress: Box<dyn Progress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(StderrProgress::stderr())
    };
    let image = render(&camera, &world, &mut rng, progress.as_mut());

    match &cli.output {
        Some(path) => save_image(&image, path)
            .with_context(|| format!("Failed to save image to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            write_ppm(&image, &mut BufWriter::new(stdout.lock()))
                .context("Failed to write image to stdout")?;
        }
    }

    Ok(())
}
