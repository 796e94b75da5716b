//! Per-group field resolution
//!
//! A settings group declares its fields by calling [`GroupResolver`] once per
//! field with the field's name, type and default. The environment key is
//! always `PREFIX + UPPERCASE(name)`. A present variable wins over the
//! default; an absent one never fails.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::{ConfigError, Result, config::env::Environment};

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String passthrough
    Text,
    /// Base-10 integer
    Integer,
}

/// Description of one environment-bound field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Group name (e.g. `db`)
    pub group: &'static str,
    /// Field name as used to derive the key (e.g. `port`)
    pub name: &'static str,
    /// Environment variable name (e.g. `POSTGRES_PORT`)
    pub key: String,
    /// Declared type
    pub kind: FieldKind,
    /// Static default, rendered as text
    pub default: String,
    /// Whether the value must be kept out of logs and displays
    pub secret: bool,
}

/// A named cluster of fields sharing one environment-variable prefix
pub trait SettingsGroup: Sized {
    /// Group name used in errors and listings
    const GROUP: &'static str;
    /// Environment-variable prefix, including the trailing underscore
    const PREFIX: &'static str;

    /// Build the group, declaring every field through `fields`
    fn resolve<E: Environment + ?Sized>(fields: &GroupResolver<'_, E>) -> Result<Self>;
}

/// Field resolution context for one group
pub struct GroupResolver<'a, E: ?Sized> {
    group: &'static str,
    prefix: &'static str,
    env: &'a E,
    specs: Option<RefCell<Vec<FieldSpec>>>,
}

impl<'a, E: Environment + ?Sized> GroupResolver<'a, E> {
    /// Create a resolver for `group` reading keys under `prefix`
    pub fn new(group: &'static str, prefix: &'static str, env: &'a E) -> Self {
        Self {
            group,
            prefix,
            env,
            specs: None,
        }
    }

    fn recording(group: &'static str, prefix: &'static str, env: &'a E) -> Self {
        Self {
            specs: Some(RefCell::new(Vec::new())),
            ..Self::new(group, prefix, env)
        }
    }

    /// Environment key for a field name
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.to_uppercase())
    }

    /// Resolve a string field
    pub fn text(&self, name: &'static str, default: &str) -> String {
        self.text_field(name, default, false)
    }

    /// Resolve a string field whose value is never logged
    pub fn secret(&self, name: &'static str, default: &str) -> String {
        self.text_field(name, default, true)
    }

    /// Resolve an integer field, parsing the variable as base-10
    pub fn integer<T>(&self, name: &'static str, default: T) -> Result<T>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let key = self.key(name);
        self.record(name, &key, FieldKind::Integer, default.to_string(), false);

        let Some(raw) = self.env.var(&key) else {
            return Ok(default);
        };

        match raw.parse::<T>() {
            Ok(value) => {
                debug!(group = self.group, key = %key, value = %value, "Environment override applied");
                Ok(value)
            }
            Err(e) => Err(ConfigError::invalid_value(
                self.group,
                name,
                key,
                raw,
                e.to_string(),
            )),
        }
    }

    fn text_field(&self, name: &'static str, default: &str, secret: bool) -> String {
        let key = self.key(name);
        self.record(name, &key, FieldKind::Text, default.to_string(), secret);

        match self.env.var(&key) {
            Some(value) => {
                if secret {
                    debug!(group = self.group, key = %key, "Environment override applied (secret)");
                } else {
                    debug!(group = self.group, key = %key, value = %value, "Environment override applied");
                }
                value
            }
            None => default.to_string(),
        }
    }

    fn record(
        &self,
        name: &'static str,
        key: &str,
        kind: FieldKind,
        default: String,
        secret: bool,
    ) {
        if let Some(specs) = &self.specs {
            specs.borrow_mut().push(FieldSpec {
                group: self.group,
                name,
                key: key.to_string(),
                kind,
                default,
                secret,
            });
        }
    }

    fn into_specs(self) -> Vec<FieldSpec> {
        self.specs.map(RefCell::into_inner).unwrap_or_default()
    }
}

/// Resolve one settings group against an environment
///
/// Either every field resolves or the whole group fails; no partially
/// populated group is ever returned.
pub fn resolve_group<G, E>(env: &E) -> Result<G>
where
    G: SettingsGroup,
    E: Environment + ?Sized,
{
    let fields = GroupResolver::new(G::GROUP, G::PREFIX, env);
    let group = G::resolve(&fields)?;
    debug!(group = G::GROUP, prefix = G::PREFIX, "Settings group resolved");
    Ok(group)
}

/// List the fields a group declares, with their keys and defaults
pub fn describe_group<G: SettingsGroup>() -> Vec<FieldSpec> {
    let empty: HashMap<String, String> = HashMap::new();
    let fields = GroupResolver::recording(G::GROUP, G::PREFIX, &empty);
    // Defaults are typed, so resolving against an empty environment succeeds.
    let resolved = G::resolve(&fields);
    debug_assert!(
        resolved.is_ok(),
        "group {} failed to resolve its defaults",
        G::GROUP
    );
    fields.into_specs()
}
