use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed impact text returned by every summary.
pub const IMPACT_STATEMENT: &str = "Optimized flow expected with adjusted timings.";

/// Phase durations of a single traffic signal, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalTiming {
    pub id: String,
    pub green_seconds: i64,
    pub yellow_seconds: i64,
    pub red_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SignalTiming {
    pub(crate) fn new(id: String, options: &TimingOptions, defaults: &TimingDefaults) -> Self {
        let now = Utc::now();
        Self {
            id,
            green_seconds: options.green.unwrap_or(defaults.green),
            yellow_seconds: options.yellow.unwrap_or(defaults.yellow),
            red_seconds: options.red.unwrap_or(defaults.red),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of the three phases.
    pub fn cycle_seconds(&self) -> i64 {
        self.green_seconds
            .saturating_add(self.yellow_seconds)
            .saturating_add(self.red_seconds)
    }
}

impl std::fmt::Display for SignalTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (green: {}s, yellow: {}s, red: {}s)",
            self.id, self.green_seconds, self.yellow_seconds, self.red_seconds
        )
    }
}

/// Durations applied at creation time when an option is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingDefaults {
    #[serde(default = "default_green")]
    pub green: i64,
    #[serde(default = "default_yellow")]
    pub yellow: i64,
    #[serde(default = "default_red")]
    pub red: i64,
}

fn default_green() -> i64 {
    30
}

fn default_yellow() -> i64 {
    5
}

fn default_red() -> i64 {
    30
}

impl Default for TimingDefaults {
    fn default() -> Self {
        Self {
            green: default_green(),
            yellow: default_yellow(),
            red: default_red(),
        }
    }
}

/// Creation options. `None` falls back to the registry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingOptions {
    pub green: Option<i64>,
    pub yellow: Option<i64>,
    pub red: Option<i64>,
}

impl TimingOptions {
    pub fn new(green: i64, yellow: i64, red: i64) -> Self {
        Self {
            green: Some(green),
            yellow: Some(yellow),
            red: Some(red),
        }
    }

    pub fn green(mut self, seconds: i64) -> Self {
        self.green = Some(seconds);
        self
    }

    pub fn yellow(mut self, seconds: i64) -> Self {
        self.yellow = Some(seconds);
        self
    }

    pub fn red(mut self, seconds: i64) -> Self {
        self.red = Some(seconds);
        self
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingUpdate {
    pub green: Option<i64>,
    pub yellow: Option<i64>,
    pub red: Option<i64>,
}

impl TimingUpdate {
    pub fn green(mut self, seconds: i64) -> Self {
        self.green = Some(seconds);
        self
    }

    pub fn yellow(mut self, seconds: i64) -> Self {
        self.yellow = Some(seconds);
        self
    }

    pub fn red(mut self, seconds: i64) -> Self {
        self.red = Some(seconds);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.green.is_none() && self.yellow.is_none() && self.red.is_none()
    }

    /// Returns true if any field was written.
    pub(crate) fn apply_to(&self, timing: &mut SignalTiming) -> bool {
        if let Some(green) = self.green {
            timing.green_seconds = green;
        }
        if let Some(yellow) = self.yellow {
            timing.yellow_seconds = yellow;
        }
        if let Some(red) = self.red {
            timing.red_seconds = red;
        }
        !self.is_empty()
    }
}

/// Snapshot returned by impact analysis.
///
/// Serialized with the analysis report keys: `signal_id`, `green_time`,
/// `yellow_time`, `red_time` and `impact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingSummary {
    #[serde(rename = "signal_id")]
    pub id: String,
    #[serde(rename = "green_time")]
    pub green_seconds: i64,
    #[serde(rename = "yellow_time")]
    pub yellow_seconds: i64,
    #[serde(rename = "red_time")]
    pub red_seconds: i64,
    pub impact: String,
}

impl From<&SignalTiming> for TimingSummary {
    fn from(timing: &SignalTiming) -> Self {
        Self {
            id: timing.id.clone(),
            green_seconds: timing.green_seconds,
            yellow_seconds: timing.yellow_seconds,
            red_seconds: timing.red_seconds,
            impact: IMPACT_STATEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_omitted_fields_from_defaults() {
        let options = TimingOptions::default().yellow(4);
        let timing = SignalTiming::new("TL1".into(), &options, &TimingDefaults::default());
        assert_eq!(timing.green_seconds, 30);
        assert_eq!(timing.yellow_seconds, 4);
        assert_eq!(timing.red_seconds, 30);
        assert_eq!(timing.created_at, timing.updated_at);
    }

    #[test]
    fn test_empty_update_writes_nothing() {
        let mut timing = SignalTiming::new(
            "TL1".into(),
            &TimingOptions::new(1, 2, 3),
            &TimingDefaults::default(),
        );
        let before = timing.clone();
        assert!(!TimingUpdate::default().apply_to(&mut timing));
        assert_eq!(timing, before);
    }

    #[test]
    fn test_display_matches_phase_layout() {
        let timing = SignalTiming::new(
            "TL1".into(),
            &TimingOptions::default(),
            &TimingDefaults::default(),
        );
        assert_eq!(timing.to_string(), "TL1 (green: 30s, yellow: 5s, red: 30s)");

        let timing = SignalTiming::new(
            "TL2".into(),
            &TimingOptions::new(0, 4, -3),
            &TimingDefaults::default(),
        );
        assert_eq!(timing.to_string(), "TL2 (green: 0s, yellow: 4s, red: -3s)");
    }

    #[test]
    fn test_cycle_seconds() {
        let defaults = TimingDefaults::default();
        let timing = SignalTiming::new("TL1".into(), &TimingOptions::default(), &defaults);
        assert_eq!(timing.cycle_seconds(), 65);

        let timing = SignalTiming::new("TL2".into(), &TimingOptions::new(40, 5, -10), &defaults);
        assert_eq!(timing.cycle_seconds(), 35);
    }

    #[test]
    fn test_cycle_seconds_saturates() {
        let defaults = TimingDefaults::default();
        let high = SignalTiming::new(
            "TL1".into(),
            &TimingOptions::new(i64::MAX, 5, 30),
            &defaults,
        );
        assert_eq!(high.cycle_seconds(), i64::MAX);

        let low = SignalTiming::new(
            "TL2".into(),
            &TimingOptions::new(i64::MIN, -5, 30),
            &defaults,
        );
        assert_eq!(low.cycle_seconds(), i64::MIN + 30);
    }

    #[test]
    fn test_summary_serializes_report_keys() {
        let timing = SignalTiming::new(
            "TL1".into(),
            &TimingOptions::new(44, 5, 27),
            &TimingDefaults::default(),
        );
        let json = serde_json::to_value(TimingSummary::from(&timing)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "signal_id": "TL1",
                "green_time": 44,
                "yellow_time": 5,
                "red_time": 27,
                "impact": IMPACT_STATEMENT,
            })
        );
    }
}
