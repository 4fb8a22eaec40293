// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evprobe")]
#[command(author, version, about = "Capability and event inspector for Linux evdev devices")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/evprobe/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Device node, e.g. /dev/input/event3 (default: `device` from config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub device: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show identity, active keys/LEDs/sounds and supported features
    #[command(visible_aliases = ["dump", "i"])]
    Info,

    /// List event nodes that support a feature
    #[command(visible_aliases = ["list", "ls"])]
    Find {
        /// Category name
        #[arg(long, default_value = "LED")]
        category: String,
        /// Feature name within the category
        #[arg(long, default_value = "SCROLLL")]
        feature: String,
    },

    /// Print events as they arrive
    #[command(visible_aliases = ["read", "e"])]
    Events {
        /// One JSON object per line
        #[arg(long)]
        json: bool,
        /// Stop after this many events
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Send one event by category and feature name
    #[command(visible_alias = "w")]
    Write {
        /// Category name (e.g. LED)
        category: String,
        /// Feature name (e.g. CAPSL)
        feature: String,
        /// Value to send
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Blink an indicator in Morse code with text from stdin
    Morse {
        /// Dot length in milliseconds (default: from config, 120)
        #[arg(long)]
        unit_ms: Option<u64>,
        /// Indicator category (default: from config, LED)
        #[arg(long)]
        category: Option<String>,
        /// Indicator name (default: from config, SCROLLL)
        #[arg(long)]
        feature: Option<String>,
    },
}
