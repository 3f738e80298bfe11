//! signal-registry - traffic signal timing configurations
//!
//! An in-memory registry of signal timings with create/read/update/delete,
//! a fixed timing adjustment and an impact summary.
//!
//! # Architecture
//! - `registry`: `SignalRegistry` and its record types
//! - `errors`: error type shared by every layer
//! - `config`: static configuration (TOML + environment)
//! - `system`: logging setup
//! - `cli` / `interfaces`: the `signalctl` command-line front-end
//!
//! # Example
//! ```
//! use signal_registry::registry::{SignalRegistry, TimingOptions, TimingUpdate};
//!
//! let registry = SignalRegistry::new();
//! registry.create("TL1", TimingOptions::default()).unwrap();
//! registry.update("TL1", TimingUpdate::default().green(40)).unwrap();
//!
//! let optimized = registry.optimize("TL1").unwrap();
//! assert_eq!(optimized.green_seconds, 44);
//! assert_eq!(optimized.red_seconds, 27);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod registry;
pub mod system;

pub use errors::{Result, SignalError};
pub use registry::{SignalRegistry, SignalTiming, TimingOptions, TimingSummary, TimingUpdate};
