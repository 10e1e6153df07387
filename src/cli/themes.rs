//! `folio themes`: list registered themes.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::theme::{ThemeRegistry, resolve_theme};

pub fn list_themes(registry: &ThemeRegistry, selected: &str) -> Result<()> {
    for line in theme_lines(registry, selected) {
        println!("{line}");
    }
    Ok(())
}

/// One line per theme: a marker for the selected one, its name, its lineage
/// (or the resolution error) and where it came from.
fn theme_lines(registry: &ThemeRegistry, selected: &str) -> Vec<String> {
    registry
        .iter()
        .map(|theme| {
            let marker = if theme.name == selected { "*" } else { " " };
            let lineage = match resolve_theme(&theme.name, registry) {
                Ok(resolved) => resolved.lineage.join(" -> "),
                Err(err) => format!("{}", err.to_string().red()),
            };
            let origin = if registry.is_builtin(&theme.name) {
                "built-in".to_string()
            } else {
                theme.display_source()
            };
            format!("{marker} {lineage}  {}", origin.dimmed())
        })
        .collect()
}
