//! Read signal command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::SignalRegistry;

/// A missing signal is a notice, not a failure.
pub fn read_signal(registry: &SignalRegistry, id: &str) -> Result<(), CliError> {
    match registry.read(id) {
        Some(timing) => println!("  {}", super::format_timing(&timing)),
        None => println!("{} Signal not found: {}", "ℹ".bold().blue(), id.cyan()),
    }
    Ok(())
}
