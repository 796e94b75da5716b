//! Command-line front end
//!
//! Subcommands that print the resolved settings, validate the environment,
//! and list the variables the loader reads.

pub mod check;
pub mod show;
pub mod vars;

use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format shared by `show` and `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `key = value` lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Initialize logging to stderr
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored and the
/// fallback is `error`, so stdout stays clean for piping.
pub fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into())
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
