//! evprobe CLI
//!
//! Inspects evdev input devices and drives their indicators.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use evprobe::config::Config;

mod cli;
use cli::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;

    // RUST_LOG wins over --log-level, which wins over the config file
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!("Config loaded from {:?}", config_path);

    match cli.command {
        Commands::Info => {
            let path = commands::resolve_device(cli.device, &config)?;
            commands::query::info(&path)
        }
        Commands::Find { category, feature } => commands::find::find(&category, &feature),
        Commands::Events { json, count } => {
            let path = commands::resolve_device(cli.device, &config)?;
            commands::events::events(&path, json, count)
        }
        Commands::Write {
            category,
            feature,
            value,
        } => {
            let path = commands::resolve_device(cli.device, &config)?;
            commands::write::write(&path, &category, &feature, value)
        }
        Commands::Morse {
            unit_ms,
            category,
            feature,
        } => {
            let path = commands::resolve_device(cli.device, &config)?;
            let settings = commands::morse::MorseSettings {
                unit_ms: unit_ms.unwrap_or(config.morse.unit_ms),
                category: category.unwrap_or_else(|| config.morse.category.clone()),
                feature: feature.unwrap_or_else(|| config.morse.feature.clone()),
            };
            commands::morse::morse(&path, &settings)
        }
    }
}
