//! `ci-overlap` binary: opens the interactive window, or prints statistics.

use std::path::PathBuf;

use ci_overlap::{compute_overlap, ConfigError, OverlapConfig, SceneConfig, Theme};
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Drag two confidence intervals and watch their overlap statistics.
#[derive(Parser, Debug)]
#[command(name = "ci-overlap", version, about, long_about = None)]
struct Cli {
    /// Scene configuration (YAML). Defaults are used for missing fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the dark theme.
    #[arg(long)]
    dark: bool,

    /// Start with the density plot hidden.
    #[arg(long)]
    no_densities: bool,

    /// Print the statistics for four endpoints as JSON and exit.
    #[arg(long, num_args = 4, value_names = ["X1", "X2", "X3", "X4"], allow_negative_numbers = true)]
    stats: Option<Vec<f64>>,

    /// Pixels per display unit; overrides the configuration for both the window and `--stats`.
    #[arg(long)]
    pixels_per_unit: Option<f64>,

    /// Write the default scene configuration to this file and exit.
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ci_overlap=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.write_default_config {
        SceneConfig::default().save(path)?;
        tracing::info!(path = %path.display(), "wrote default scene configuration");
        return Ok(());
    }

    let mut scene = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(ppu) = cli.pixels_per_unit {
        scene.pixels_per_unit = ppu;
        scene.validate()?;
    }

    if let Some(xs) = &cli.stats {
        let stats = compute_overlap(xs[0], xs[1], xs[2], xs[3], scene.pixels_per_unit);
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let cfg = OverlapConfig {
        scene,
        theme: if cli.dark { Theme::Dark } else { Theme::Light },
        show_densities: !cli.no_densities,
        ..Default::default()
    };
    ci_overlap::run_overlap(cfg)?;
    Ok(())
}
