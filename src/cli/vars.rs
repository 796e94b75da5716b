//! `vars` command
//!
//! Lists every environment variable the loader reads with its default.

use crate::config::{ConfigLoader, FieldKind, FieldSpec, settings::REDACTED};

/// Print the variable table
pub fn run_vars() {
    println!("{}", render_table(&ConfigLoader::describe()));
}

/// Render one aligned line per variable
pub fn render_table(specs: &[FieldSpec]) -> String {
    let width = specs.iter().map(|s| s.key.len()).max().unwrap_or(0);

    specs
        .iter()
        .map(|spec| {
            let kind = match spec.kind {
                FieldKind::Text => "text",
                FieldKind::Integer => "integer",
            };
            let default = if spec.secret {
                REDACTED
            } else {
                spec.default.as_str()
            };
            format!("{:<width$}  {:<7}  {}", spec.key, kind, default, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
