//! Create signal command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::{SignalRegistry, TimingOptions};

pub fn create_signal(
    registry: &SignalRegistry,
    id: String,
    options: TimingOptions,
) -> Result<(), CliError> {
    registry.create(id.clone(), options)?;

    if let Some(timing) = registry.read(&id) {
        println!(
            "{} Created signal: {}",
            "✓".bold().green(),
            super::format_timing(&timing)
        );
    }
    Ok(())
}
