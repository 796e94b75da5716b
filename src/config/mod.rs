//! Configuration management for the risk engine
//!
//! This module resolves the typed settings tree shared by the queue,
//! database, cache, search and stream-processing clients.

pub mod env;
pub mod loader;
pub mod resolver;
pub mod settings;

pub use env::{EnvSnapshot, Environment};
pub use loader::{ConfigLoader, load};
pub use resolver::{FieldKind, FieldSpec, GroupResolver, SettingsGroup, resolve_group};
pub use settings::{
    CacheSettings, QueueSettings, RelationalDbSettings, RootSettings, SearchSettings,
    StreamProcSettings,
};
