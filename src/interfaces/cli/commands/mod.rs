//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod analysis;
mod config_gen;
mod signal_management;

pub use analysis::*;
pub use config_gen::*;
pub use signal_management::*;
