//! Delete signal command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::SignalRegistry;

pub fn delete_signal(registry: &SignalRegistry, id: &str) -> Result<(), CliError> {
    registry.delete(id)?;
    println!("{} Deleted signal: {}", "✓".bold().green(), id.cyan());
    Ok(())
}
