//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

/// Every variable the loader reads
pub const ALL_KEYS: [&str; 13] = [
    "KAFKA_BOOTSTRAP_SERVERS",
    "KAFKA_TOPIC",
    "POSTGRES_HOST",
    "POSTGRES_PORT",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DB",
    "REDIS_HOST",
    "REDIS_PORT",
    "ELASTICSEARCH_HOST",
    "ELASTICSEARCH_PORT",
    "SPARK_CHECKPOINT_DIR",
    "SPARK_LOG_LEVEL",
];

/// Build an in-memory environment from pairs
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
