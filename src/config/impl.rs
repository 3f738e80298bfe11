use std::path::Path;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to the built-in defaults if neither initializer has run.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration from `config.toml` in the current
/// directory, or in-memory defaults if it is absent.
///
/// # Examples
/// ```no_run
/// use signal_registry::config::init_config;
/// init_config();
/// ```
pub fn init_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()))
        .load_full()
}

/// Initialize (or replace) the global configuration from an explicit file.
pub fn init_config_from<P: AsRef<Path>>(path: P) -> Result<Arc<StaticConfig>> {
    let loaded = Arc::new(StaticConfig::load_from(path)?);
    CONFIG
        .get_or_init(|| ArcSwap::new(Arc::clone(&loaded)))
        .store(Arc::clone(&loaded));
    Ok(loaded)
}
