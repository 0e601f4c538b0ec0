use serde::Deserialize;
use thiserror::Error;

use super::table::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Queries shorter than this are ignored
    pub search_min_length: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct FormsConfig {
    /// Simulated network latency of form submission
    pub submit_delay_ms: u32,
    /// Complete every simulated submission with an error
    #[serde(default)]
    pub simulate_failure: bool,
}

pub const SIMULATED_FAILURE_MESSAGE: &str = "Submission failed. Please try again.";

impl FormsConfig {
    /// Result the simulated backend returns once the delay elapsed
    pub fn submission_outcome(&self) -> Result<(), String> {
        if self.simulate_failure {
            Err(SIMULATED_FAILURE_MESSAGE.to_string())
        } else {
            Ok(())
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            search_min_length: 1,
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            simulate_failure: false,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            forms: FormsConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("default_page_size {0} is not one of page_size_options")]
    PageSizeNotOffered(usize),
    #[error("page_size_options must not be empty or contain 0")]
    BadPageSizeOptions,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[table]
default_page_size = 10
page_size_options = [10, 20, 30, 40, 50]
search_min_length = 1

[forms]
submit_delay_ms = 1000
simulate_failure = false
"#;

impl DashboardConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = &self.table.page_size_options;
        if options.is_empty() || options.contains(&0) {
            return Err(ConfigError::BadPageSizeOptions);
        }
        if !options.contains(&self.table.default_page_size) {
            return Err(ConfigError::PageSizeNotOffered(self.table.default_page_size));
        }
        Ok(())
    }
}

/// Load configuration from an optional TOML override.
///
/// Falls back to the embedded default when there is no override or it
/// does not parse.
pub fn load_config(override_toml: Option<&str>) -> DashboardConfig {
    if let Some(contents) = override_toml {
        match DashboardConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Loaded dashboard config override");
                return config;
            }
            Err(e) => log::warn!("Ignoring dashboard config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    DashboardConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = DashboardConfig::from_toml("[forms]\nsubmit_delay_ms = 250\n").unwrap();
        assert_eq!(config.forms.submit_delay_ms, 250);
        assert_eq!(config.table.default_page_size, 10);
    }

    #[test]
    fn test_simulated_failure_switch() {
        let config = DashboardConfig::from_toml("[forms]\nsubmit_delay_ms = 0\nsimulate_failure = true\n").unwrap();
        assert_eq!(
            config.forms.submission_outcome(),
            Err(SIMULATED_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(DashboardConfig::default().forms.submission_outcome(), Ok(()));
    }

    #[test]
    fn test_page_size_must_be_offered() {
        let err = DashboardConfig::from_toml(
            "[table]\ndefault_page_size = 15\npage_size_options = [10, 20]\nsearch_min_length = 1\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::PageSizeNotOffered(15)));
    }

    #[test]
    fn test_bad_override_falls_back() {
        let config = load_config(Some("not = [valid"));
        assert_eq!(config, DashboardConfig::default());
    }
}
