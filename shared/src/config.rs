use serde::{Deserialize, Serialize};

/// Configuration for the expense tracker
///
/// Every field is optional when deserializing, so a partial override object
/// only replaces the values it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Storage key holding the JSON snapshot of the expense list
    pub storage_key: String,
    pub currency_symbol: String,
    pub max_name_length: usize,
    /// How long the "expense added" message stays visible
    pub success_message_duration_ms: u32,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "expenses".to_string(),
            currency_symbol: "₹".to_string(),
            max_name_length: 256,
            success_message_duration_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Storage key the config overrides themselves are read from
    pub const OVERRIDES_KEY: &'static str = "expense-tracker-config";

    /// Parse the configured level, falling back to info on anything unknown
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.storage_key, "expenses");
        assert_eq!(config.max_name_length, 256);
    }

    #[test]
    fn test_log_level_filter() {
        let mut config = TrackerConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
