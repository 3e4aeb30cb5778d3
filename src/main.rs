//! hexplot command-line runner (default binary).
//!
//! Reads a state dump (or a puzzle problem file), renders every state into a
//! numbered PNG frame, and optionally assembles the frames into a GIF.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hexplot::anim::Sequencer;
use hexplot::config::AppConfig;
use hexplot::core::{dump, Problem, State};
use hexplot::render::FrameView;

/// Render hexagonal-grid puzzle states into numbered image frames
#[derive(Parser)]
#[command(name = "hexplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (JSON)
    input: PathBuf,

    /// Output directory for frames
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Hexagon edge length in pixels
    #[arg(short, long)]
    edge: Option<u32>,

    /// Primary label font file
    #[arg(long)]
    font: Option<PathBuf>,

    /// Fallback label font file
    #[arg(long)]
    fallback_font: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to interpret the input file
    #[arg(long, value_enum, default_value = "state")]
    input_format: InputFormat,

    /// For problem files: deal units with this source seed instead of listing each unit once
    #[arg(long)]
    seed_index: Option<usize>,

    /// Also write the sequence as an animated GIF
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Render frames in parallel
    #[arg(long)]
    parallel: bool,

    /// Fail when states have different board dimensions
    #[arg(long)]
    strict: bool,

    /// Write the loaded states back out as a state dump
    #[arg(long)]
    dump_states: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// A state object or an array of state objects
    State,
    /// A puzzle problem file
    Problem,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let mut config = config.apply_env().context("reading environment")?;

    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    if let Some(edge) = cli.edge {
        config.edge = edge;
    }
    if let Some(font) = &cli.font {
        config.fonts.primary = font.clone();
    }
    if let Some(font) = &cli.fallback_font {
        config.fonts.fallback = font.clone();
    }
    config.parallel |= cli.parallel;
    config.strict_dimensions |= cli.strict;

    config.validate()?;
    Ok(config)
}

fn load_input(cli: &Cli) -> Result<Vec<State>> {
    let states = match cli.input_format {
        InputFormat::State => dump::load_states(&cli.input)?,
        InputFormat::Problem => {
            let problem = Problem::load(&cli.input)?;
            info!(
                id = problem.id,
                units = problem.units.len(),
                seeds = problem.source_seeds.len(),
                "loaded problem"
            );
            match cli.seed_index {
                Some(seed_index) => problem.source_states(seed_index)?,
                None => problem.unit_gallery()?,
            }
        }
    };
    Ok(states)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;

    let states =
        load_input(&cli).with_context(|| format!("reading {}", cli.input.display()))?;
    info!(states = states.len(), input = %cli.input.display(), "loaded states");

    if let Some(path) = &cli.dump_states {
        fs::write(path, dump::to_json_string(&states)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let font = config.fonts.load()?;
    info!(
        path = %font.path.display(),
        fallback = font.used_fallback,
        "label font ready"
    );

    let view = FrameView::new(config.edge, font.font)?
        .with_palette(config.palette)
        .with_label_scale(config.label_scale);
    let sequencer = Sequencer::new(view, &config.output_dir)
        .with_parallel(config.parallel)
        .with_strict_dimensions(config.strict_dimensions);

    let written = sequencer
        .render_sequence(&states)
        .with_context(|| format!("rendering into {}", config.output_dir.display()))?;

    if let Some(gif) = &cli.gif {
        sequencer.write_gif(&states, gif, config.gif_delay_ms)?;
    }

    println!(
        "{} frames written to {}",
        written,
        config.output_dir.display()
    );
    Ok(())
}
