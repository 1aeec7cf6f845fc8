//! Frontend Configuration
//!
//! Backend address, log level and workflow timings. Defaults work against a
//! local members service; an operator can override them with a JSON document
//! stored in `localStorage`.

use std::str::FromStr;

use attendance_core::WorkflowConfig;
use log::LevelFilter;
use serde::Deserialize;

/// `localStorage` key holding the JSON override
pub const STORAGE_KEY: &str = "scout-attendance.config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Members service root, without trailing slash
    pub api_base_url: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub workflow: WorkflowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:9090".to_string(),
            log_level: "info".to_string(),
            workflow: WorkflowConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Stored override if present, defaults otherwise
    pub fn load() -> Result<Self, ConfigError> {
        match read_stored()? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Unknown names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

fn read_stored() -> Result<Option<String>, ConfigError> {
    let window = web_sys::window().ok_or_else(|| ConfigError::Storage("no window".to_string()))?;
    let storage = window
        .local_storage()
        .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ConfigError::Storage("localStorage disabled".to_string()))?;
    storage
        .get_item(STORAGE_KEY)
        .map_err(|e| ConfigError::Storage(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_members_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:9090");
        assert_eq!(config.workflow.error_display_ms, 3000);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{"apiBaseUrl": "https://scouts.example.org/api", "workflow": {"successDisplayMs": 1000}}"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://scouts.example.org/api");
        assert_eq!(config.workflow.success_display_ms, 1000);
        assert_eq!(config.workflow.error_display_ms, 3000);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "Debug".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    }
}
