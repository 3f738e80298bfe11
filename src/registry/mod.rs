//! Signal timing registry
//!
//! In-memory keyed store of [`SignalTiming`] records. Every public operation
//! takes the map lock exactly once, so each call is atomic with respect to
//! the others.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::errors::{Result, SignalError};

pub mod models;
pub mod optimizer;

pub use models::{
    IMPACT_STATEMENT, SignalTiming, TimingDefaults, TimingOptions, TimingSummary, TimingUpdate,
};

/// Owner of all signal timing records.
#[derive(Debug, Default)]
pub struct SignalRegistry {
    defaults: TimingDefaults,
    signals: Mutex<HashMap<String, SignalTiming>>,
}

impl SignalRegistry {
    /// Create an empty registry using the built-in 30/5/30 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom creation defaults.
    pub fn with_defaults(defaults: TimingDefaults) -> Self {
        Self {
            defaults,
            signals: Mutex::new(HashMap::new()),
        }
    }

    pub fn defaults(&self) -> TimingDefaults {
        self.defaults
    }

    /// Register a new signal. Omitted durations are filled from the defaults.
    ///
    /// Fails with [`SignalError::DuplicateId`] if `id` is already registered;
    /// the existing record is left as it was.
    pub fn create(&self, id: impl Into<String>, options: TimingOptions) -> Result<()> {
        let id = id.into();
        let mut signals = self.signals.lock();

        if signals.contains_key(&id) {
            warn!(id = %id, "Rejected create for existing signal");
            return Err(SignalError::duplicate_id(&id));
        }

        let timing = SignalTiming::new(id.clone(), &options, &self.defaults);
        info!(
            id = %id,
            green = timing.green_seconds,
            yellow = timing.yellow_seconds,
            red = timing.red_seconds,
            "Signal created"
        );
        signals.insert(id, timing);
        Ok(())
    }

    /// Look up a signal. Absence is reported as `None`, never as an error.
    pub fn read(&self, id: &str) -> Option<SignalTiming> {
        let found = self.signals.lock().get(id).cloned();
        if found.is_none() {
            debug!(id = %id, "Signal lookup miss");
        }
        found
    }

    /// Overwrite the fields set in `update`, leaving the rest unchanged.
    pub fn update(&self, id: &str, update: TimingUpdate) -> Result<()> {
        let mut signals = self.signals.lock();
        let Some(timing) = signals.get_mut(id) else {
            warn!(id = %id, "Update on unknown signal");
            return Err(SignalError::not_found(id));
        };

        if update.apply_to(timing) {
            timing.updated_at = Utc::now();
            info!(
                id = %id,
                green = timing.green_seconds,
                yellow = timing.yellow_seconds,
                red = timing.red_seconds,
                "Signal updated"
            );
        } else {
            debug!(id = %id, "Empty update, nothing changed");
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        match self.signals.lock().remove(id) {
            Some(_) => {
                info!(id = %id, "Signal deleted");
                Ok(())
            }
            None => {
                warn!(id = %id, "Delete on unknown signal");
                Err(SignalError::not_found(id))
            }
        }
    }

    /// Apply the fixed timing adjustment in place and return the new timing.
    ///
    /// See [`optimizer`] for the formula.
    pub fn optimize(&self, id: &str) -> Result<SignalTiming> {
        let mut signals = self.signals.lock();
        let Some(timing) = signals.get_mut(id) else {
            warn!(id = %id, "Optimize on unknown signal");
            return Err(SignalError::not_found(id));
        };

        let (old_green, old_red) = (timing.green_seconds, timing.red_seconds);
        optimizer::optimize(timing);
        timing.updated_at = Utc::now();
        info!(
            id = %id,
            old_green,
            green = timing.green_seconds,
            old_red,
            red = timing.red_seconds,
            "Signal timings optimized"
        );
        Ok(timing.clone())
    }

    /// Impact analysis snapshot of the current timings.
    pub fn summarize(&self, id: &str) -> Result<TimingSummary> {
        let signals = self.signals.lock();
        let timing = signals.get(id).ok_or_else(|| SignalError::not_found(id))?;
        debug!(id = %id, "Signal summarized");
        Ok(TimingSummary::from(timing))
    }

    /// All records, sorted by id.
    pub fn list(&self) -> Vec<SignalTiming> {
        let mut all: Vec<SignalTiming> = self.signals.lock().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.signals.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.signals.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.signals.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_defaults() {
        let registry = SignalRegistry::new();
        registry.create("TL1", TimingOptions::default()).unwrap();

        let timing = registry.read("TL1").unwrap();
        assert_eq!(timing.green_seconds, 30);
        assert_eq!(timing.yellow_seconds, 5);
        assert_eq!(timing.red_seconds, 30);
    }

    #[test]
    fn test_custom_defaults_apply_only_to_omitted_fields() {
        let registry = SignalRegistry::with_defaults(TimingDefaults {
            green: 45,
            yellow: 4,
            red: 20,
        });
        registry
            .create("TL1", TimingOptions::default().red(50))
            .unwrap();

        let timing = registry.read("TL1").unwrap();
        assert_eq!(timing.green_seconds, 45);
        assert_eq!(timing.yellow_seconds, 4);
        assert_eq!(timing.red_seconds, 50);
    }

    #[test]
    fn test_empty_update_keeps_updated_at() {
        let registry = SignalRegistry::new();
        registry.create("TL1", TimingOptions::default()).unwrap();
        let before = registry.read("TL1").unwrap();

        registry.update("TL1", TimingUpdate::default()).unwrap();
        assert_eq!(registry.read("TL1").unwrap(), before);
    }

    #[test]
    fn test_optimize_returns_stored_value() {
        let registry = SignalRegistry::new();
        registry.create("TL1", TimingOptions::default()).unwrap();

        let returned = registry.optimize("TL1").unwrap();
        assert_eq!(Some(returned), registry.read("TL1"));
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let registry = SignalRegistry::new();
        for id in ["TL3", "TL1", "TL2"] {
            registry.create(id, TimingOptions::default()).unwrap();
        }

        assert_eq!(registry.ids(), vec!["TL1", "TL2", "TL3"]);
        let listed: Vec<_> = registry.list().into_iter().map(|t| t.id).collect();
        assert_eq!(listed, vec!["TL1", "TL2", "TL3"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
