//! Environment-driven configuration.

use catalog_observability::LogFormat;
use thiserror::Error;

pub const DEFAULT_CURRENCY: &str = "$";
pub const DEFAULT_LOCATION: &str = "Main Warehouse";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CATALOG_DEFAULT_CURRENCY cannot be blank")]
    BlankCurrency,
}

/// Catalog settings.
///
/// | variable | default |
/// |---|---|
/// | `CATALOG_DEFAULT_CURRENCY` | `$` |
/// | `CATALOG_LOG_FORMAT` | `json` (`json` or `pretty`) |
/// | `CATALOG_LOCATIONS` | `Main Warehouse` (comma-separated) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_currency: String,
    pub log_format: LogFormat,
    /// Raw `CATALOG_LOG_FORMAT` value that was replaced by the JSON fallback.
    /// Reported once logging is up.
    pub unrecognized_log_format: Option<String>,
    pub locations: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            log_format: LogFormat::default(),
            unrecognized_log_format: None,
            locations: vec![DEFAULT_LOCATION.to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_currency = lookup("CATALOG_DEFAULT_CURRENCY")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        if default_currency.trim().is_empty() {
            return Err(ConfigError::BlankCurrency);
        }

        let mut unrecognized_log_format = None;
        let log_format = match lookup("CATALOG_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                unrecognized_log_format = Some(raw);
                LogFormat::Json
            }),
        };

        let locations = lookup("CATALOG_LOCATIONS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_LOCATION.to_string()]);

        Ok(Self {
            default_currency,
            log_format,
            unrecognized_log_format,
            locations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CATALOG_DEFAULT_CURRENCY", "EUR"),
            ("CATALOG_LOG_FORMAT", "pretty"),
            ("CATALOG_LOCATIONS", "North, South ,,East"),
        ]))
        .unwrap();

        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.unrecognized_log_format, None);
        assert_eq!(config.locations, vec!["North", "South", "East"]);
    }

    #[test]
    fn unknown_log_format_falls_back_to_json() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("CATALOG_LOG_FORMAT", "xml")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.unrecognized_log_format.as_deref(), Some("xml"));
    }

    #[test]
    fn blank_currency_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("CATALOG_DEFAULT_CURRENCY", " ")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::BlankCurrency);
    }
}
