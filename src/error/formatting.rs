//! Error formatting utilities
//!
//! Renders configuration errors for log lines and for machine consumers
//! of the `check` command.

use crate::ConfigError;
use serde_json::json;

/// Format error for display
pub fn format_error(error: &ConfigError) -> String {
    match error {
        ConfigError::InvalidValue {
            key,
            raw_value,
            reason,
            ..
        } => format!(
            "{} is set to '{}', which is not valid: {}",
            key, raw_value, reason
        ),
    }
}

/// Format error for API/JSON output
pub fn format_error_for_api(error: &ConfigError) -> serde_json::Value {
    match error {
        ConfigError::InvalidValue {
            group,
            field,
            key,
            raw_value,
            reason,
        } => json!({
            "error": error.category(),
            "group": group,
            "field": field,
            "key": key,
            "raw_value": raw_value,
            "message": reason,
        }),
    }
}

/// Format error for logging (with category prefix)
pub fn format_error_for_logging(error: &ConfigError) -> String {
    format!("[{}] {}", error.category(), error)
}
