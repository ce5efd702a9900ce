//! Per-call resolution options

use serde::{Deserialize, Serialize};

/// Estimated minutes per session when none is supplied
pub const DEFAULT_ESTIMATED_MINUTES_PER_SESSION: i64 = 15;

/// Options for one resolution call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// ETS used for `{ETR}`
    #[serde(default)]
    pub estimated_time_per_session_minutes: Option<i64>,
}

impl ResolveOptions {
    /// Options with default ETS
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimated minutes per session
    pub fn with_estimated_minutes(mut self, minutes: i64) -> Self {
        self.estimated_time_per_session_minutes = Some(minutes);
        self
    }

    /// Effective ETS. Missing or non-positive values fall back to the default.
    pub fn estimated_minutes_per_session(&self) -> i64 {
        match self.estimated_time_per_session_minutes {
            Some(minutes) if minutes > 0 => minutes,
            _ => DEFAULT_ESTIMATED_MINUTES_PER_SESSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ets() {
        assert_eq!(ResolveOptions::new().estimated_minutes_per_session(), 15);
    }

    #[test]
    fn test_custom_ets() {
        let options = ResolveOptions::new().with_estimated_minutes(20);
        assert_eq!(options.estimated_minutes_per_session(), 20);
    }

    #[test]
    fn test_non_positive_ets_falls_back() {
        assert_eq!(
            ResolveOptions::new()
                .with_estimated_minutes(0)
                .estimated_minutes_per_session(),
            15
        );
        assert_eq!(
            ResolveOptions::new()
                .with_estimated_minutes(-5)
                .estimated_minutes_per_session(),
            15
        );
    }

    #[test]
    fn test_options_deserialize() {
        let options: ResolveOptions =
            serde_json::from_str(r#"{"estimatedTimePerSessionMinutes": 10}"#).unwrap();
        assert_eq!(options.estimated_minutes_per_session(), 10);
    }
}
