//! List signals command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::SignalRegistry;

pub fn list_signals(registry: &SignalRegistry) -> Result<(), CliError> {
    let signals = registry.list();

    if signals.is_empty() {
        println!("{} No signals registered", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Signal list:".bold().green());
    println!();
    for timing in &signals {
        println!(
            "  {} {}",
            super::format_timing(timing),
            format!("(cycle: {}s)", timing.cycle_seconds()).dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} signals",
        "ℹ".bold().blue(),
        signals.len().to_string().green()
    );
    Ok(())
}
