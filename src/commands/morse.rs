//! Morse signaling on an indicator.

use super::{open_device, CommandResult};
use anyhow::Context;
use evprobe::morse;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct MorseSettings {
    pub unit_ms: u64,
    pub category: String,
    pub feature: String,
}

/// Blink the indicator with every line read from stdin
pub fn morse(path: &Path, settings: &MorseSettings) -> CommandResult {
    let device = Arc::new(open_device(path)?);
    println!("Using {}", device.name()?);

    let (category, code) = {
        let led = device
            .category_named(&settings.category)?
            .feature_named(&settings.feature)
            .with_context(|| {
                format!(
                    "{} has no {} {}; try `evprobe find --category {} --feature {}`",
                    path.display(),
                    settings.category,
                    settings.feature,
                    settings.category,
                    settings.feature
                )
            })?;
        let state = if led.is_activated()? { "active" } else { "inactive" };
        println!("{} currently {state}", led.name());
        (led.category().code(), led.code())
    };

    // Leave the indicator dark on Ctrl-C
    let handler_device = Arc::clone(&device);
    ctrlc::set_handler(move || {
        if let Err(e) = handler_device.write_event(category, code, 0) {
            warn!("Failed to switch indicator off: {e}");
        }
        std::process::exit(130);
    })
    .context("Failed to install Ctrl-C handler")?;

    let unit = Duration::from_millis(settings.unit_ms);
    let led = device.category(category).feature(code);
    for line in io::stdin().lock().lines() {
        let mut line = line.context("Failed to read stdin")?;
        line.push('\n');
        let steps = morse::schedule(&line);
        debug!(
            "Sending {} chars as {} units",
            line.len(),
            morse::total_units(&steps)
        );
        for step in steps {
            if step.lit {
                led.write_value(1)?;
                thread::sleep(step.duration(unit));
                led.write_value(0)?;
            } else {
                thread::sleep(step.duration(unit));
            }
        }
    }
    Ok(())
}
