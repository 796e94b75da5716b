//! Read-only environment sources
//!
//! Resolution never touches `std::env` directly: it reads from an
//! [`Environment`], which is either a snapshot of the process environment
//! or an in-memory map supplied by the caller.

use std::collections::{BTreeMap, HashMap};

/// A read-only mapping from variable name to string value
pub trait Environment {
    /// Look up a variable, returning `None` when it is unset
    fn var(&self, key: &str) -> Option<String>;
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Point-in-time copy of the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    ///
    /// Names and values that are not valid UTF-8 are converted lossily, so a
    /// garbled port still reaches the parser and is reported instead of being
    /// mistaken for an unset variable.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { vars }
    }

    /// Number of captured variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables at all
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<String, String>> for EnvSnapshot {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl Environment for EnvSnapshot {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Static mutex to ensure environment variable tests don't interfere with each other
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("REDIS_HOST".to_string(), "cache-1".to_string());

        assert_eq!(env.var("REDIS_HOST").as_deref(), Some("cache-1"));
        assert_eq!(env.var("REDIS_PORT"), None);
    }

    #[test]
    fn test_btree_lookup_is_case_sensitive() {
        let mut env = BTreeMap::new();
        env.insert("KAFKA_TOPIC".to_string(), "t".to_string());

        assert_eq!(env.var("KAFKA_TOPIC").as_deref(), Some("t"));
        assert_eq!(env.var("kafka_topic"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let env: EnvSnapshot =
            HashMap::from([("SPARK_LOG_LEVEL".to_string(), String::new())]).into();
        assert_eq!(env.var("SPARK_LOG_LEVEL").as_deref(), Some(""));
    }

    #[test]
    fn test_capture_sees_process_env() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        let original = std::env::var("RISKENGINE_SNAPSHOT_PROBE").ok();
        unsafe {
            std::env::set_var("RISKENGINE_SNAPSHOT_PROBE", "present");
        }

        let snapshot = EnvSnapshot::capture();

        unsafe {
            std::env::remove_var("RISKENGINE_SNAPSHOT_PROBE");
            if let Some(value) = original {
                std::env::set_var("RISKENGINE_SNAPSHOT_PROBE", value);
            }
        }

        assert!(!snapshot.is_empty());
        assert_eq!(
            snapshot.var("RISKENGINE_SNAPSHOT_PROBE").as_deref(),
            Some("present")
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_later_changes() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::remove_var("RISKENGINE_SNAPSHOT_LATE");
        }
        let snapshot = EnvSnapshot::capture();
        unsafe {
            std::env::set_var("RISKENGINE_SNAPSHOT_LATE", "later");
        }

        assert_eq!(snapshot.var("RISKENGINE_SNAPSHOT_LATE"), None);

        unsafe {
            std::env::remove_var("RISKENGINE_SNAPSHOT_LATE");
        }
    }
}
