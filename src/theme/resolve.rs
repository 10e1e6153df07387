//! `extends` chain resolution.

use rustc_hash::FxHashSet;

use super::{ThemeConfig, ThemeRegistry};
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::debug;

/// Look up `name` and fold its ancestors into one theme.
///
/// The chain is walked explicitly with a visited set:
///
/// ```text
/// local-theme ──extends──▶ default-theme ──extends──▶ (none)
///      │                          │
///      └──── inherit ◀────────────┘   (child wins on collision)
/// ```
///
/// # Errors
///
/// - `UnknownTheme` if `name` or any ancestor is not registered
/// - `CyclicExtends` if the chain revisits a name; `chain` ends with it
/// - `MalformedConfig` if a merged setting does not match the merged schema
pub fn resolve_theme(name: &str, registry: &ThemeRegistry) -> Result<ThemeConfig, ConfigError> {
    let mut chain: Vec<&ThemeConfig> = Vec::new();
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut current = name;
    let mut required_by: Option<&str> = None;

    loop {
        if !visited.insert(current) {
            let mut names: Vec<String> = chain.iter().map(|t| t.name.clone()).collect();
            names.push(current.to_string());
            return Err(ConfigError::CyclicExtends { chain: names });
        }

        let theme = registry
            .get(current)
            .ok_or_else(|| ConfigError::UnknownTheme {
                name: current.to_string(),
                required_by: required_by.map(str::to_string),
            })?;
        chain.push(theme);

        match theme.extends.as_deref() {
            Some(parent) => {
                required_by = Some(current);
                current = parent;
            }
            None => break,
        }
    }

    let lineage: Vec<String> = chain.iter().map(|t| t.name.clone()).collect();
    debug!("theme"; "resolving {}", lineage.join(" -> "));

    // chain is child-first; fold from the root ancestor down
    let mut ancestors = chain.iter().rev();
    let Some(root) = ancestors.next() else {
        return Err(ConfigError::UnknownTheme {
            name: name.to_string(),
            required_by: None,
        });
    };
    let mut resolved = ancestors.fold((*root).clone(), |parent, child| child.inherit(&parent));
    check_merged_settings(&chain, &resolved)?;
    resolved.lineage = lineage;
    Ok(resolved)
}

/// Check the merged `settings` against the merged `schema`.
///
/// Reported against the theme that supplied the offending value.
fn check_merged_settings(chain: &[&ThemeConfig], resolved: &ThemeConfig) -> Result<(), ConfigError> {
    for (key, kind) in &resolved.schema {
        let Some(value) = resolved.settings.get(key) else {
            continue;
        };
        if kind.accepts(value) {
            continue;
        }

        // chain is child-first: the first match is where the value came from
        let supplier = chain.iter().find(|t| t.settings.contains_key(key));
        let declarer = chain.iter().find(|t| t.schema.contains_key(key));

        let mut diag = match supplier {
            Some(theme) => ConfigDiagnostics::for_source(theme.display_source()),
            None => ConfigDiagnostics::new(),
        };
        let declared_by = declarer.map_or(resolved.name.as_str(), |t| t.name.as_str());
        diag.error_with_hint(
            FieldPath::new("settings").key(key),
            format!("expected {}, found {}", kind.label(), value.type_str()),
            format!("theme `{declared_by}` declares `{key}` as {}", kind.label()),
        );
        return Err(diag.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavItem, SettingKind};
    use std::path::PathBuf;

    fn registry(themes: impl IntoIterator<Item = ThemeConfig>) -> ThemeRegistry {
        ThemeRegistry::from_themes(themes).unwrap()
    }

    fn default_theme() -> ThemeConfig {
        let mut theme = ThemeConfig::new("default-theme");
        theme.layouts = Some(PathBuf::from("default/layouts"));
        theme.nav = Some(vec![NavItem::new("主页", "/")]);
        theme.social = Some(Vec::new());
        theme
            .settings
            .insert("smooth_scroll".into(), toml::Value::Boolean(false));
        theme
    }

    fn local_theme() -> ThemeConfig {
        let mut theme = ThemeConfig::new("local-theme").extending("default-theme");
        theme.layouts = Some(PathBuf::from("local/layouts"));
        theme
    }

    #[test]
    fn test_child_overrides_layouts_and_inherits_rest() {
        let registry = registry([default_theme(), local_theme()]);
        let resolved = resolve_theme("local-theme", &registry).unwrap();

        assert_eq!(resolved.name, "local-theme");
        assert_eq!(resolved.layouts, Some(PathBuf::from("local/layouts")));
        assert_eq!(resolved.nav, Some(vec![NavItem::new("主页", "/")]));
        assert_eq!(resolved.social, Some(Vec::new()));
        assert_eq!(resolved.settings["smooth_scroll"].as_bool(), Some(false));
        assert_eq!(resolved.lineage, ["local-theme", "default-theme"]);
    }

    #[test]
    fn test_root_theme_resolves_to_itself() {
        let registry = registry([default_theme()]);
        let resolved = resolve_theme("default-theme", &registry).unwrap();

        let mut expected = default_theme();
        expected.lineage = vec!["default-theme".into()];
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_three_level_chain() {
        let mut base = ThemeConfig::new("base");
        base.schema.insert("logo".into(), SettingKind::String);
        base.settings
            .insert("accent".into(), toml::Value::String("red".into()));

        let mut middle = ThemeConfig::new("middle").extending("base");
        middle.nav = Some(vec![NavItem::new("Docs", "/docs/")]);

        let mut leaf = ThemeConfig::new("leaf").extending("middle");
        leaf.settings
            .insert("accent".into(), toml::Value::String("blue".into()));

        let registry = registry([base, middle, leaf]);
        let resolved = resolve_theme("leaf", &registry).unwrap();

        assert_eq!(resolved.lineage, ["leaf", "middle", "base"]);
        assert_eq!(resolved.nav.as_ref().map(|n| n[0].link.as_str()), Some("/docs/"));
        assert_eq!(resolved.settings["accent"].as_str(), Some("blue"));
        assert_eq!(resolved.schema["logo"], SettingKind::String);
        assert_eq!(resolved.extends.as_deref(), Some("middle"));
    }

    #[test]
    fn test_child_default_must_match_ancestor_schema() {
        let mut base = ThemeConfig::new("base");
        base.schema.insert("smooth_scroll".into(), SettingKind::Bool);
        base.settings
            .insert("smooth_scroll".into(), toml::Value::Boolean(false));

        let mut child = ThemeConfig::new("child").extending("base");
        child
            .settings
            .insert("smooth_scroll".into(), toml::Value::String("yes".into()));

        let registry = registry([base, child]);
        let err = resolve_theme("child", &registry).unwrap_err();

        assert!(err.is_malformed(), "expected MalformedConfig, got {err:?}");
        let diag = err.diagnostics().unwrap();
        assert_eq!(diag.source(), Some("theme `child`"));
        assert_eq!(diag.errors()[0].field.as_str(), "settings.smooth_scroll");
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("theme `base` declares `smooth_scroll` as bool")
        );
    }

    #[test]
    fn test_cycle_is_detected() {
        let registry = registry([
            ThemeConfig::new("A").extending("B"),
            ThemeConfig::new("B").extending("A"),
        ]);

        let err = resolve_theme("A", &registry).unwrap_err();
        match err {
            ConfigError::CyclicExtends { chain } => assert_eq!(chain, ["A", "B", "A"]),
            other => panic!("expected CyclicExtends, got {other:?}"),
        }
    }

    #[test]
    fn test_self_extension_is_a_cycle() {
        let registry = registry([ThemeConfig::new("loop").extending("loop")]);
        assert!(matches!(
            resolve_theme("loop", &registry),
            Err(ConfigError::CyclicExtends { .. })
        ));
    }

    #[test]
    fn test_unknown_theme() {
        let registry = registry([default_theme()]);
        match resolve_theme("missing", &registry).unwrap_err() {
            ConfigError::UnknownTheme { name, required_by } => {
                assert_eq!(name, "missing");
                assert_eq!(required_by, None);
            }
            other => panic!("expected UnknownTheme, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_ancestor() {
        let registry = registry([local_theme()]);
        match resolve_theme("local-theme", &registry).unwrap_err() {
            ConfigError::UnknownTheme { name, required_by } => {
                assert_eq!(name, "default-theme");
                assert_eq!(required_by.as_deref(), Some("local-theme"));
            }
            other => panic!("expected UnknownTheme, got {other:?}"),
        }
    }
}
