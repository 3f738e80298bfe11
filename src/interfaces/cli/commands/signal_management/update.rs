//! Update signal command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::{SignalRegistry, TimingUpdate};

pub fn update_signal(
    registry: &SignalRegistry,
    id: &str,
    update: TimingUpdate,
) -> Result<(), CliError> {
    registry.update(id, update)?;

    if update.is_empty() {
        println!(
            "{} No timings given for {}, nothing to change",
            "ℹ".bold().blue(),
            id.cyan()
        );
        return Ok(());
    }

    if let Some(timing) = registry.read(id) {
        println!(
            "{} Updated signal: {}",
            "✓".bold().green(),
            super::format_timing(&timing)
        );
    }
    Ok(())
}
