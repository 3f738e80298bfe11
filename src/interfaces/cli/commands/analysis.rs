//! Optimize and summarize commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::SignalRegistry;

pub fn optimize_signal(registry: &SignalRegistry, id: &str) -> Result<(), CliError> {
    let before = registry.read(id);
    let after = registry.optimize(id)?;

    println!("{} Optimized signal: {}", "✓".bold().green(), id.cyan());
    if let Some(before) = before {
        println!(
            "  {} {}s -> {}s",
            "green".green(),
            before.green_seconds,
            after.green_seconds.to_string().bold()
        );
        println!(
            "  {} {}s -> {}s",
            "red".red(),
            before.red_seconds,
            after.red_seconds.to_string().bold()
        );
    }
    Ok(())
}

pub fn summarize_signal(registry: &SignalRegistry, id: &str, json: bool) -> Result<(), CliError> {
    let summary = registry.summarize(id)?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize summary: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{} {}", "Impact analysis:".bold().green(), summary.id.cyan());
    println!("  {:<8}{}s", "green", summary.green_seconds);
    println!("  {:<8}{}s", "yellow", summary.yellow_seconds);
    println!("  {:<8}{}s", "red", summary.red_seconds);
    println!("  {:<8}{}", "impact", summary.impact.italic());
    Ok(())
}
