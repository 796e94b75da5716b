//! Configuration loading utilities
//!
//! Resolves the full settings tree from a snapshot of the process
//! environment, or from any caller-supplied [`Environment`].

use tracing::{debug, info};

use crate::{
    Result,
    config::{
        RootSettings,
        env::{EnvSnapshot, Environment},
        resolver::{FieldSpec, describe_group},
        settings::{
            CacheSettings, QueueSettings, RelationalDbSettings, SearchSettings, StreamProcSettings,
        },
    },
};

/// Configuration loader
///
/// Precedence is environment variable over static default; there are no
/// other sources.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a fresh snapshot of the process environment
    pub fn load(&self) -> Result<RootSettings> {
        let snapshot = EnvSnapshot::capture();
        debug!("Captured {} environment variables", snapshot.len());
        self.load_from(&snapshot)
    }

    /// Load configuration from the given environment
    pub fn load_from<E: Environment + ?Sized>(&self, env: &E) -> Result<RootSettings> {
        let settings = RootSettings::from_env(env)?;

        info!("Configuration loaded successfully");
        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> RootSettings {
        RootSettings::default()
    }

    /// Every environment variable the loader reads, grouped in load order
    pub fn describe() -> Vec<FieldSpec> {
        let mut specs = describe_group::<QueueSettings>();
        specs.extend(describe_group::<RelationalDbSettings>());
        specs.extend(describe_group::<CacheSettings>());
        specs.extend(describe_group::<SearchSettings>());
        specs.extend(describe_group::<StreamProcSettings>());
        specs
    }
}

/// Resolve the settings tree from the current process environment
///
/// Each call builds a new [`RootSettings`]; nothing is cached.
pub fn load() -> Result<RootSettings> {
    ConfigLoader::new().load()
}
