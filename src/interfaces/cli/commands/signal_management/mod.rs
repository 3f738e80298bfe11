//! Signal management commands

mod create;
mod delete;
mod list;
mod read;
mod update;

pub use create::*;
pub use delete::*;
pub use list::*;
pub use read::*;
pub use update::*;

use colored::Colorize;

use crate::registry::SignalTiming;

/// Render a timing as `id  green 30s  yellow 5s  red 30s`
pub(crate) fn format_timing(timing: &SignalTiming) -> String {
    format!(
        "{}  {} {}s  {} {}s  {} {}s",
        timing.id.cyan(),
        "green".green(),
        timing.green_seconds,
        "yellow".yellow(),
        timing.yellow_seconds,
        "red".red(),
        timing.red_seconds
    )
}
