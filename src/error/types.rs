//! Configuration error types
//!
//! Missing variables are never an error: they fall back to defaults. The only
//! failure is a present variable whose text cannot be coerced into the type
//! its field declares.

use thiserror::Error;

/// Error raised while resolving settings from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed into its field's type
    #[error("Invalid value for {group}.{field} ({key}='{raw_value}'): {reason}")]
    InvalidValue {
        /// Settings group the field belongs to (e.g. `db`)
        group: String,
        /// Field name within the group (e.g. `port`)
        field: String,
        /// Environment variable the value was read from
        key: String,
        /// The offending text, exactly as found in the environment
        raw_value: String,
        /// Parser message describing why the value was rejected
        reason: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        group: impl Into<String>,
        field: impl Into<String>,
        key: impl Into<String>,
        raw_value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            group: group.into(),
            field: field.into(),
            key: key.into(),
            raw_value: raw_value.into(),
            reason: reason.into(),
        }
    }

    /// Group the failing field belongs to
    pub fn group(&self) -> &str {
        match self {
            ConfigError::InvalidValue { group, .. } => group,
        }
    }

    /// Name of the failing field
    pub fn field(&self) -> &str {
        match self {
            ConfigError::InvalidValue { field, .. } => field,
        }
    }

    /// Environment variable that carried the bad value
    pub fn key(&self) -> &str {
        match self {
            ConfigError::InvalidValue { key, .. } => key,
        }
    }

    /// The rejected text
    pub fn raw_value(&self) -> &str {
        match self {
            ConfigError::InvalidValue { raw_value, .. } => raw_value,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "invalid_value",
        }
    }
}
