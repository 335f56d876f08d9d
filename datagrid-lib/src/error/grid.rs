//! GridError for dataset and configuration ingestion

/// Errors raised while loading rows or configuration from JSON.
///
/// Grid commands themselves never fail; these only come from the ingestion
/// helpers that build a dataset or a [`GridConfig`](crate::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The input was not valid JSON or did not have the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A row was expected to be a JSON object.
    #[error("Expected a JSON object for row {index}, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    /// A configuration value is outside its valid range.
    #[error("Invalid grid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GridError {
    /// Creates a new invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
