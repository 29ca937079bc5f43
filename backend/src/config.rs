//! Environment-driven settings for the upstream data source.

use std::time::Duration;

pub const DEFAULT_PHOTOGRAPHERS_DB_URL: &str =
    "https://raw.githubusercontent.com/Ashraf-git-projects/Pixisphere-frontend/refs/heads/main/db.json";

#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Location of the static JSON document holding `{"photographers": [...]}`.
    pub db_url: String,
    pub fetch_timeout: Duration,
    /// How long the stubbed inquiry round trip takes.
    pub inquiry_delay: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_PHOTOGRAPHERS_DB_URL.to_string(),
            fetch_timeout: Duration::from_secs(15),
            inquiry_delay: Duration::from_millis(1000),
        }
    }
}

impl SourceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SourceConfig::default();
        let db_url = lookup("PHOTOGRAPHERS_DB_URL").filter(|v| !v.trim().is_empty()).unwrap_or(defaults.db_url);
        let fetch_timeout = parse_or_default(&lookup, "PHOTOGRAPHERS_FETCH_TIMEOUT_SECS", defaults.fetch_timeout, Duration::from_secs);
        let inquiry_delay = parse_or_default(&lookup, "INQUIRY_SIMULATED_DELAY_MS", defaults.inquiry_delay, Duration::from_millis);
        Self { db_url, fetch_timeout, inquiry_delay }
    }
}

fn parse_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Duration, unit: fn(u64) -> Duration) -> Duration {
    let Some(raw) = lookup(key) else { return default };
    match raw.trim().parse::<u64>() {
        Ok(value) => unit(value),
        Err(e) => {
            tracing::warn!("{key}={raw:?} is not a valid number ({e}), using {default:?}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(SourceConfig::from_lookup(lookup_from(&[])), SourceConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SourceConfig::from_lookup(lookup_from(&[
            ("PHOTOGRAPHERS_DB_URL", "http://localhost:9000/db.json"),
            ("PHOTOGRAPHERS_FETCH_TIMEOUT_SECS", "3"),
            ("INQUIRY_SIMULATED_DELAY_MS", "0"),
        ]));
        assert_eq!(config.db_url, "http://localhost:9000/db.json");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert_eq!(config.inquiry_delay, Duration::ZERO);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = SourceConfig::from_lookup(lookup_from(&[("PHOTOGRAPHERS_FETCH_TIMEOUT_SECS", "soon"), ("PHOTOGRAPHERS_DB_URL", " ")]));
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.db_url, DEFAULT_PHOTOGRAPHERS_DB_URL);
    }
}
