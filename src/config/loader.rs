//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and validates engine configuration.
///
/// # File Format
///
/// ```text
/// warning_window_days: 30
/// page_size: 10
/// week_start: monday       # or sunday
/// search_fields: [name, email, role]
/// status_policy: derived   # or stored
/// ```
///
/// Any field may be omitted to take its default.
///
/// # Example
///
/// ```no_run
/// use staff_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Page size: {}", loader.config().page_size);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A field holds a value the engine cannot use
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            page_size = loader.config.page_size,
            warning_window_days = loader.config.warning_window_days,
            "Loaded engine configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from an inline YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("warning_window_days: 14").unwrap();
    /// assert_eq!(loader.config().warning_window_days, 14);
    /// ```
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        // An empty document deserializes as null; treat it as all defaults.
        let config = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::StatusPolicy;
    use crate::schedule::WeekStart;

    const CONFIG_PATH: &str = "./config/engine.yaml";

    #[test]
    fn test_load_sample_config() {
        let loader = ConfigLoader::load(CONFIG_PATH).expect("Failed to load config");
        let config = loader.config();
        assert_eq!(config.warning_window_days, 30);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.status_policy, StatusPolicy::Derived);
        assert_eq!(config.search_fields, vec!["name", "email", "role"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("./config/nonexistent.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let result = ConfigLoader::from_yaml("page_size: [not, a, number]");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml("").unwrap();
        assert_eq!(loader.into_config(), EngineConfig::default());
    }

    #[test]
    fn test_sunday_week_and_stored_policy() {
        let loader =
            ConfigLoader::from_yaml("week_start: sunday\nstatus_policy: stored\n").unwrap();
        assert_eq!(loader.config().week_start, WeekStart::Sunday);
        assert_eq!(loader.config().status_policy, StatusPolicy::Stored);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = ConfigLoader::from_yaml("page_size: 0");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
