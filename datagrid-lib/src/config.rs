//! Grid configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::GridError;
use crate::state::ViewState;

/// Configuration applied when a grid creates or resets its view state.
///
/// # Example
///
/// ```
/// use datagrid_lib::GridConfig;
///
/// let config = GridConfig::default().with_page_size(25);
/// assert_eq!(config.page_size, 25);
///
/// let config = GridConfig::from_json_str(r#"{"page_size": 50}"#).unwrap();
/// assert_eq!(config.page_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: ViewState::DEFAULT_PAGE_SIZE,
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. Zero is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Parses a config from JSON, rejecting a zero page size.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is in range.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.page_size == 0 {
            return Err(GridError::invalid_config("page_size must be greater than 0"));
        }
        Ok(())
    }

    /// Fresh view state for this configuration.
    pub fn initial_state(&self) -> ViewState {
        ViewState::with_page_size(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::new();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.initial_state(), ViewState::default());
    }

    #[test]
    fn test_from_json_uses_defaults_for_missing_keys() {
        let config = GridConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_from_json_rejects_zero_page_size() {
        let err = GridConfig::from_json_str(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig { .. }));
    }

    #[test]
    fn test_with_page_size_clamps_zero() {
        assert_eq!(GridConfig::default().with_page_size(0).page_size, 1);
    }
}
