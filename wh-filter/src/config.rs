//! Filter bar configuration.

use serde::Deserialize;

/// Query key used for the category filter unless configured otherwise.
pub const DEFAULT_QUERY_KEY: &str = "workoutCategory";

/// How far back the date range picker starts, in days.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// Tunables for the filter bar.
///
/// Every field has a default, so a partial JSON object (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Name of the URL query parameter holding the committed category
    pub query_key: String,
    /// Days between the initial `from` date and today
    pub default_lookback_days: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            query_key: DEFAULT_QUERY_KEY.to_string(),
            default_lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl FilterConfig {
    /// Parse a config from JSON, typically embedded with `include_str!`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: FilterConfig = serde_json::from_str(json)?;
        if config.query_key.is_empty() {
            anyhow::bail!("queryKey must not be empty");
        }
        if config.default_lookback_days < 0 {
            anyhow::bail!(
                "defaultLookbackDays must not be negative, got {}",
                config.default_lookback_days
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FilterConfig::from_json("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.query_key, "workoutCategory");
        assert_eq!(config.default_lookback_days, 7);
    }

    #[test]
    fn partial_object_overrides_one_field() {
        let config = FilterConfig::from_json(r#"{"defaultLookbackDays": 30}"#).unwrap();
        assert_eq!(config.query_key, "workoutCategory");
        assert_eq!(config.default_lookback_days, 30);
    }

    #[test]
    fn rejects_empty_key_and_negative_lookback() {
        assert!(FilterConfig::from_json(r#"{"queryKey": ""}"#).is_err());
        assert!(FilterConfig::from_json(r#"{"defaultLookbackDays": -1}"#).is_err());
        assert!(FilterConfig::from_json("not json").is_err());
    }
}
