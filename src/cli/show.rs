//! `show` command
//!
//! Prints the resolved settings, derived URLs included.

use anyhow::Result;
use serde_json::json;

use crate::{
    cli::OutputFormat,
    config::{ConfigLoader, RootSettings, settings::REDACTED},
};

/// Arguments for the show command
#[derive(Debug, Default)]
pub struct ShowArgs {
    pub format: OutputFormat,
    pub reveal_secrets: bool,
}

/// Run the show command with the given arguments
pub fn run_show(args: ShowArgs) -> Result<()> {
    let settings = ConfigLoader::new().load()?;

    let output = match args.format {
        OutputFormat::Text => render_text(&settings, args.reveal_secrets),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&render_json(&settings, args.reveal_secrets))?
        }
    };
    println!("{}", output);

    Ok(())
}

/// Render settings as `group.field = value` lines
pub fn render_text(settings: &RootSettings, reveal_secrets: bool) -> String {
    let db = &settings.db;
    let (password, connection_url) = if reveal_secrets {
        (db.password.as_str(), db.connection_url())
    } else {
        (REDACTED, db.redacted_connection_url())
    };

    let lines = [
        ("queue.bootstrap_servers", settings.queue.bootstrap_servers.clone()),
        ("queue.topic", settings.queue.topic.clone()),
        ("db.host", db.host.clone()),
        ("db.port", db.port.to_string()),
        ("db.user", db.user.clone()),
        ("db.password", password.to_string()),
        ("db.database", db.database.clone()),
        ("db.connection_url", connection_url),
        ("db.jdbc_url", db.jdbc_url()),
        ("cache.host", settings.cache.host.clone()),
        ("cache.port", settings.cache.port.to_string()),
        ("search.host", settings.search.host.clone()),
        ("search.port", settings.search.port.to_string()),
        ("search.base_url", settings.search.base_url()),
        ("stream.checkpoint_dir", settings.stream.checkpoint_dir.clone()),
        ("stream.log_level", settings.stream.log_level.clone()),
    ];

    lines
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render settings as JSON with derived URLs folded into their groups
pub fn render_json(settings: &RootSettings, reveal_secrets: bool) -> serde_json::Value {
    let db = &settings.db;
    let (password, connection_url) = if reveal_secrets {
        (db.password.clone(), db.connection_url())
    } else {
        (REDACTED.to_string(), db.redacted_connection_url())
    };

    json!({
        "queue": settings.queue,
        "db": {
            "host": db.host,
            "port": db.port,
            "user": db.user,
            "password": password,
            "database": db.database,
            "connection_url": connection_url,
            "jdbc_url": db.jdbc_url(),
        },
        "cache": settings.cache,
        "search": {
            "host": settings.search.host,
            "port": settings.search.port,
            "base_url": settings.search.base_url(),
        },
        "stream": settings.stream,
    })
}
