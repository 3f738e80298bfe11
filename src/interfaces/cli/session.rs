//! Session runner
//!
//! Executes session scripts line by line against a single registry.

use std::io::BufRead;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use tracing::debug;

use super::CliError;
use super::commands;
use crate::cli::{SessionCommand, SessionLine};
use crate::registry::SignalRegistry;

/// Counters for one session run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub executed: usize,
    pub failed: usize,
}

impl SessionReport {
    pub fn print(&self) {
        if self.failed == 0 {
            println!(
                "{} Session finished: {} commands",
                "ℹ".bold().blue(),
                self.executed.to_string().green()
            );
        } else {
            println!(
                "{} Session finished: {} commands, {} failed",
                "⚠".bold().yellow(),
                self.executed.to_string().green(),
                self.failed.to_string().red()
            );
        }
    }
}

pub struct Session {
    registry: SignalRegistry,
    keep_going: bool,
}

impl Session {
    pub fn new(registry: SignalRegistry) -> Self {
        Self {
            registry,
            keep_going: false,
        }
    }

    /// Continue past failing lines instead of stopping at the first one.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    /// Execute a single script line.
    ///
    /// Returns `Ok(false)` for blank and comment lines.
    pub fn execute(&self, line: &str) -> Result<bool, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(false);
        }

        let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                print!("{}", e);
                return Ok(true);
            }
            Err(e) => return Err(CliError::ParseError(e.to_string().trim_end().to_string())),
        };

        debug!(line, "Executing session command");
        self.dispatch(parsed.command)?;
        Ok(true)
    }

    fn dispatch(&self, command: SessionCommand) -> Result<(), CliError> {
        let registry = &self.registry;
        match command {
            SessionCommand::Create { id, timings } => {
                commands::create_signal(registry, id, timings.into())
            }
            SessionCommand::Read { id } => commands::read_signal(registry, &id),
            SessionCommand::Update { id, timings } => {
                commands::update_signal(registry, &id, timings.into())
            }
            SessionCommand::Delete { id } => commands::delete_signal(registry, &id),
            SessionCommand::Optimize { id } => commands::optimize_signal(registry, &id),
            SessionCommand::Summarize { id, json } => {
                commands::summarize_signal(registry, &id, json)
            }
            SessionCommand::List => commands::list_signals(registry),
        }
    }

    /// Run every line from `reader`.
    ///
    /// Without keep-going, the first failing line aborts the run and its error
    /// is returned.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<SessionReport, CliError> {
        let mut report = SessionReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|e| CliError::CommandError(format!("Failed to read script: {}", e)))?;
            let line_no = index + 1;

            match self.execute(&line) {
                Ok(true) => report.executed += 1,
                Ok(false) => {}
                Err(e) if self.keep_going => {
                    report.executed += 1;
                    report.failed += 1;
                    eprintln!(
                        "{} line {}: {}",
                        "✗".bold().red(),
                        line_no,
                        e.format_colored()
                    );
                }
                Err(e) => {
                    eprintln!("{} Stopped at line {}", "✗".bold().red(), line_no);
                    return Err(e);
                }
            }
        }

        Ok(report)
    }
}
