//! Server configuration from the environment

use std::env;

/// Filter directive used when nothing is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing_subscriber` filter directive, e.g. "info" or "measure_mcp=debug"
    pub log_filter: String,
}

impl Config {
    /// Read `MEASURE_LOG`, then `RUST_LOG`, falling back to "info"
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = ["MEASURE_LOG", "RUST_LOG"]
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Config { log_filter }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_measure_log_wins() {
        let config = Config::from_lookup(|key| match key {
            "MEASURE_LOG" => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_falls_back_to_rust_log() {
        let config = Config::from_lookup(|key| match key {
            "MEASURE_LOG" => Some("  ".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "warn");
    }
}
