//! `check` command
//!
//! Validates that the current environment resolves into a settings tree.

use tracing::error;

use crate::{
    ConfigError,
    cli::OutputFormat,
    config::ConfigLoader,
    error::{format_error, format_error_for_api, format_error_for_logging},
};

/// Outcome of a check, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the environment resolved
    pub ok: bool,
    /// Text to print (stdout when ok, stderr otherwise)
    pub message: String,
}

/// Run the check command, returning whether the configuration is valid
pub fn run_check(format: OutputFormat) -> bool {
    let report = build_report(ConfigLoader::new().load().err().as_ref(), format);
    if report.ok {
        println!("{}", report.message);
    } else {
        eprintln!("{}", report.message);
    }
    report.ok
}

/// Build the report for a load outcome
pub fn build_report(failure: Option<&ConfigError>, format: OutputFormat) -> CheckReport {
    match (failure, format) {
        (None, OutputFormat::Text) => CheckReport {
            ok: true,
            message: "configuration OK".to_string(),
        },
        (None, OutputFormat::Json) => CheckReport {
            ok: true,
            message: serde_json::json!({ "status": "ok" }).to_string(),
        },
        (Some(e), format) => {
            error!("{}", format_error_for_logging(e));
            let message = match format {
                OutputFormat::Text => format!("configuration invalid: {}", format_error(e)),
                OutputFormat::Json => format_error_for_api(e).to_string(),
            };
            CheckReport { ok: false, message }
        }
    }
}
