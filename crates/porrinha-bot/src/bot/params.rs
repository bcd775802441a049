use serde::{Deserialize, Serialize};

const DEFAULT_CENTRIST_THRESHOLD: f64 = 0.125;
const DEFAULT_SEARCH_LIMIT: usize = 4_096;

/// Tunable knobs of the derandom player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerandomParams {
    /// Imbalance above which an opponent counts as centrist.
    pub centrist_threshold: f64,
    /// Guess candidates tried before giving up.
    pub max_search_attempts: usize,
    /// Keep opponent records between games of the same table size.
    pub retain_history: bool,
}

impl DerandomParams {
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub fn with_retain_history(mut self, retain: bool) -> Self {
        self.retain_history = retain;
        self
    }

    pub(crate) fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let centrist_threshold = read("PORRINHA_CENTRIST_THRESHOLD")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value >= 0.0 && *value <= 1.0)
            .unwrap_or(DEFAULT_CENTRIST_THRESHOLD);

        let max_search_attempts = read("PORRINHA_SEARCH_LIMIT")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_SEARCH_LIMIT);

        let retain_history = read("PORRINHA_RETAIN_HISTORY")
            .map(|raw| flag_enabled(&raw))
            .unwrap_or(false);

        Self {
            centrist_threshold,
            max_search_attempts,
            retain_history,
        }
    }
}

impl Default for DerandomParams {
    fn default() -> Self {
        Self {
            centrist_threshold: DEFAULT_CENTRIST_THRESHOLD,
            max_search_attempts: DEFAULT_SEARCH_LIMIT,
            retain_history: false,
        }
    }
}

pub(crate) fn flag_enabled(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON")
}

pub(crate) fn details_logging_enabled() -> bool {
    std::env::var("PORRINHA_DERANDOM_DETAILS")
        .map(|raw| flag_enabled(&raw))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_reader_defaults_when_unset() {
        let params = DerandomParams::from_reader(|_| None);
        assert_eq!(params, DerandomParams::default());
        assert!((params.centrist_threshold - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn from_reader_respects_values() {
        let mut vars = HashMap::new();
        vars.insert("PORRINHA_CENTRIST_THRESHOLD", "0.3");
        vars.insert("PORRINHA_SEARCH_LIMIT", "64");
        vars.insert("PORRINHA_RETAIN_HISTORY", "on");

        let params = DerandomParams::from_reader(|key| vars.get(key).map(|v| v.to_string()));
        assert!((params.centrist_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(params.max_search_attempts, 64);
        assert!(params.retain_history);
    }

    #[test]
    fn from_reader_rejects_malformed_values() {
        let mut vars = HashMap::new();
        vars.insert("PORRINHA_CENTRIST_THRESHOLD", "1.5");
        vars.insert("PORRINHA_SEARCH_LIMIT", "0");
        vars.insert("PORRINHA_RETAIN_HISTORY", "maybe");

        let params = DerandomParams::from_reader(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(params, DerandomParams::default());
    }

    #[test]
    fn deserializes_partial_config() {
        let params: DerandomParams =
            serde_json::from_str(r#"{ "retain_history": true }"#).unwrap();
        assert!(params.retain_history);
        assert_eq!(params.max_search_attempts, DEFAULT_SEARCH_LIMIT);
    }
}
