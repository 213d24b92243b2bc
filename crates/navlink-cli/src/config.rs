use std::collections::{HashMap, HashSet};

use navlink_core::{App, TransportMode};
use thiserror::Error;

const APPS_ENV: &str = "NAVLINK_APPS";
const DEFAULT_MODE_ENV: &str = "NAVLINK_DEFAULT_MODE";
const INCLUDE_UNSUPPORTED_ENV: &str = "NAVLINK_INCLUDE_UNSUPPORTED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub apps: Vec<App>,
    pub default_mode: Option<TransportMode>,
    pub include_unsupported: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            apps: App::ALL.to_vec(),
            default_mode: None,
            include_unsupported: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env_map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Ok(Self {
            apps: parse_apps(env_map.get(APPS_ENV).map(String::as_str))?,
            default_mode: parse_default_mode(env_map.get(DEFAULT_MODE_ENV).map(String::as_str))?,
            include_unsupported: parse_flag(
                env_map.get(INCLUDE_UNSUPPORTED_ENV).map(String::as_str),
            ),
        })
    }

    /// Mode from the command line, falling back to `NAVLINK_DEFAULT_MODE`.
    pub fn effective_mode(&self, explicit: Option<TransportMode>) -> Option<TransportMode> {
        explicit.or(self.default_mode)
    }
}

/// Comma/newline separated app ids; order kept, duplicates dropped.
fn parse_apps(raw: Option<&str>) -> Result<Vec<App>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(App::ALL.to_vec());
    };

    let mut seen = HashSet::new();
    let mut apps = Vec::new();
    for token in value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        let app = token
            .parse::<App>()
            .map_err(|_| ConfigError::InvalidApps(token.to_string()))?;
        if seen.insert(app) {
            apps.push(app);
        }
    }

    if apps.is_empty() {
        return Err(ConfigError::InvalidApps(value.to_string()));
    }

    Ok(apps)
}

fn parse_default_mode(raw: Option<&str>) -> Result<Option<TransportMode>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    value
        .parse::<TransportMode>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidDefaultMode(value.to_string()))
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|value| value.trim().to_ascii_lowercase())
        .is_some_and(|value| matches!(value.as_str(), "1" | "true" | "yes" | "on"))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid NAVLINK_APPS token: {0} (expected comma/newline list of app ids)")]
    InvalidApps(String),
    #[error(
        "invalid NAVLINK_DEFAULT_MODE: {0} (expected driving, walking, bicycling, transit or taxi)"
    )]
    InvalidDefaultMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_uses_defaults_when_values_are_missing() {
        let config = RuntimeConfig::from_pairs(Vec::<(String, String)>::new())
            .expect("config should parse with defaults");

        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.apps.len(), App::ALL.len());
    }

    #[test]
    fn config_parses_app_list_with_order_and_dedup() {
        let config = RuntimeConfig::from_pairs(vec![(
            "NAVLINK_APPS",
            "waze, googleMaps\ncitymapper,waze",
        )])
        .expect("app list should parse");

        assert_eq!(
            config.apps,
            vec![App::Waze, App::GoogleMaps, App::Citymapper]
        );
    }

    #[test]
    fn config_rejects_unknown_app_token() {
        let err = RuntimeConfig::from_pairs(vec![("NAVLINK_APPS", "waze,mapquest")])
            .expect_err("unknown app should fail");

        assert_eq!(err, ConfigError::InvalidApps("mapquest".to_string()));
    }

    #[test]
    fn config_rejects_delimiters_only_app_list() {
        let err = RuntimeConfig::from_pairs(vec![("NAVLINK_APPS", ", ,\n")])
            .expect_err("delimiter-only list should fail");

        assert_eq!(err, ConfigError::InvalidApps(", ,".to_string()));
    }

    #[test]
    fn config_parses_default_mode_and_flag() {
        let config = RuntimeConfig::from_pairs(vec![
            ("NAVLINK_DEFAULT_MODE", " Transit "),
            ("NAVLINK_INCLUDE_UNSUPPORTED", "Yes"),
        ])
        .expect("mode and flag should parse");

        assert_eq!(config.default_mode, Some(TransportMode::Transit));
        assert!(config.include_unsupported);
        assert_eq!(
            config.effective_mode(Some(TransportMode::Taxi)),
            Some(TransportMode::Taxi)
        );
        assert_eq!(config.effective_mode(None), Some(TransportMode::Transit));
    }

    #[test]
    fn config_rejects_unknown_default_mode() {
        let err = RuntimeConfig::from_pairs(vec![("NAVLINK_DEFAULT_MODE", "hover")])
            .expect_err("unknown mode should fail");

        assert_eq!(err, ConfigError::InvalidDefaultMode("hover".to_string()));
        assert_eq!(
            err.to_string(),
            "invalid NAVLINK_DEFAULT_MODE: hover (expected driving, walking, bicycling, transit or taxi)"
        );
    }
}
