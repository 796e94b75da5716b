//! Error handling for settings resolution
//!
//! This module defines the configuration error type and its renderings.

pub mod formatting;
pub mod types;

pub use formatting::{format_error, format_error_for_api, format_error_for_logging};
pub use types::{ConfigError, Result};
