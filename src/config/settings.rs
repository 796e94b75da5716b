//! Settings groups for the risk engine's collaborators
//!
//! Each group binds its fields to environment variables under its own
//! prefix and falls back to a static default, so the whole tree is always
//! constructible from an empty environment.

use std::fmt;

use serde::Serialize;

use crate::{
    Result,
    config::{
        env::Environment,
        resolver::{GroupResolver, SettingsGroup, resolve_group},
    },
};

const DEFAULT_HOST: &str = "localhost";

const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";
const DEFAULT_TOPIC: &str = "risk.transactions";

const DEFAULT_POSTGRES_PORT: i64 = 5432;
const DEFAULT_POSTGRES_USER: &str = "fraud_user";
const DEFAULT_POSTGRES_PASSWORD: &str = "fraud_pass";
const DEFAULT_POSTGRES_DB: &str = "fraud_db";

const DEFAULT_REDIS_PORT: i64 = 6379;

const DEFAULT_ELASTICSEARCH_PORT: i64 = 9200;

const DEFAULT_CHECKPOINT_DIR: &str = "./checkpoint";
const DEFAULT_STREAM_LOG_LEVEL: &str = "WARN";

/// Mask shown in place of secrets
pub const REDACTED: &str = "********";

/// Aggregate of every settings group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RootSettings {
    /// Kafka producer/consumer settings
    pub queue: QueueSettings,
    /// Postgres settings
    pub db: RelationalDbSettings,
    /// Redis settings
    pub cache: CacheSettings,
    /// Elasticsearch settings
    pub search: SearchSettings,
    /// Spark streaming settings
    pub stream: StreamProcSettings,
}

/// Message-queue (Kafka) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSettings {
    /// Comma-separated broker list
    pub bootstrap_servers: String,
    /// Topic carrying transaction events
    pub topic: String,
}

/// Relational database (Postgres) configuration
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RelationalDbSettings {
    pub host: String,
    pub port: i64,
    pub user: String,
    pub password: String,
    /// Database name, bound to `POSTGRES_DB`
    pub database: String,
}

/// Cache (Redis) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSettings {
    pub host: String,
    pub port: i64,
}

/// Search index (Elasticsearch) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSettings {
    pub host: String,
    pub port: i64,
}

/// Stream processing (Spark) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamProcSettings {
    /// Directory for streaming checkpoints
    pub checkpoint_dir: String,
    /// Log level handed to the streaming runtime
    pub log_level: String,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            bootstrap_servers: DEFAULT_BOOTSTRAP_SERVERS.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl Default for RelationalDbSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_POSTGRES_PORT,
            user: DEFAULT_POSTGRES_USER.to_string(),
            password: DEFAULT_POSTGRES_PASSWORD.to_string(),
            database: DEFAULT_POSTGRES_DB.to_string(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_REDIS_PORT,
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_ELASTICSEARCH_PORT,
        }
    }
}

impl Default for StreamProcSettings {
    fn default() -> Self {
        Self {
            checkpoint_dir: DEFAULT_CHECKPOINT_DIR.to_string(),
            log_level: DEFAULT_STREAM_LOG_LEVEL.to_string(),
        }
    }
}

impl SettingsGroup for QueueSettings {
    const GROUP: &'static str = "queue";
    const PREFIX: &'static str = "KAFKA_";

    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self> {
        Ok(Self {
            bootstrap_servers: fields.text("bootstrap_servers", DEFAULT_BOOTSTRAP_SERVERS),
            topic: fields.text("topic", DEFAULT_TOPIC),
        })
    }
}

impl SettingsGroup for RelationalDbSettings {
    const GROUP: &'static str = "db";
    const PREFIX: &'static str = "POSTGRES_";

    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self> {
        Ok(Self {
            host: fields.text("host", DEFAULT_HOST),
            port: fields.integer("port", DEFAULT_POSTGRES_PORT)?,
            user: fields.text("user", DEFAULT_POSTGRES_USER),
            password: fields.secret("password", DEFAULT_POSTGRES_PASSWORD),
            database: fields.text("db", DEFAULT_POSTGRES_DB),
        })
    }
}

impl SettingsGroup for CacheSettings {
    const GROUP: &'static str = "cache";
    const PREFIX: &'static str = "REDIS_";

    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self> {
        Ok(Self {
            host: fields.text("host", DEFAULT_HOST),
            port: fields.integer("port", DEFAULT_REDIS_PORT)?,
        })
    }
}

impl SettingsGroup for SearchSettings {
    const GROUP: &'static str = "search";
    const PREFIX: &'static str = "ELASTICSEARCH_";

    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self> {
        Ok(Self {
            host: fields.text("host", DEFAULT_HOST),
            port: fields.integer("port", DEFAULT_ELASTICSEARCH_PORT)?,
        })
    }
}

impl SettingsGroup for StreamProcSettings {
    const GROUP: &'static str = "stream";
    const PREFIX: &'static str = "SPARK_";

    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self> {
        Ok(Self {
            checkpoint_dir: fields.text("checkpoint_dir", DEFAULT_CHECKPOINT_DIR),
            log_level: fields.text("log_level", DEFAULT_STREAM_LOG_LEVEL),
        })
    }
}

impl RelationalDbSettings {
    /// Full connection URL including credentials
    pub fn connection_url(&self) -> String {
        self.url_with_password(&self.password)
    }

    /// Connection URL with the password masked, safe for logs
    pub fn redacted_connection_url(&self) -> String {
        self.url_with_password(REDACTED)
    }

    /// JDBC URL for JVM consumers, which pass credentials separately
    pub fn jdbc_url(&self) -> String {
        format!(
            "jdbc:postgresql://{}:{}/{}",
            self.host, self.port, self.database
        )
    }

    fn url_with_password(&self, password: &str) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for RelationalDbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationalDbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("database", &self.database)
            .finish()
    }
}

impl SearchSettings {
    /// Base HTTP URL of the search cluster
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl RootSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every group against `env`
    ///
    /// Groups are independent; the first one that fails aborts the whole
    /// load and no partial tree is returned.
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Result<Self> {
        Ok(Self {
            queue: resolve_group(env)?,
            db: resolve_group(env)?,
            cache: resolve_group(env)?,
            search: resolve_group(env)?,
            stream: resolve_group(env)?,
        })
    }
}
