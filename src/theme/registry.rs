//! Theme lookup table.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{THEME_FILE, ThemeConfig};
use crate::config::{ConfigDiagnostics, ConfigError, NavItem, SettingKind};
use crate::{debug, log};

/// Name of the theme every registry built with [`ThemeRegistry::with_builtin`] knows.
pub const BUILTIN_THEME: &str = "default";

#[derive(Debug, Clone)]
struct Entry {
    theme: ThemeConfig,
    /// Built-in themes may be replaced once by a user theme of the same name.
    builtin: bool,
}

/// Registered themes, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Entry>,
}

impl ThemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry containing the built-in `default` theme.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.themes.insert(
            BUILTIN_THEME.to_string(),
            Entry {
                theme: builtin_default(),
                builtin: true,
            },
        );
        registry
    }

    /// Built-in registry plus every theme found under `dirs`.
    pub fn from_dirs(dirs: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut registry = Self::with_builtin();
        for dir in dirs {
            registry.load_dir(dir)?;
        }
        Ok(registry)
    }

    /// Register every theme in `themes`, stopping at the first invalid one.
    pub fn from_themes(themes: impl IntoIterator<Item = ThemeConfig>) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for theme in themes {
            registry.register(theme)?;
        }
        Ok(registry)
    }

    /// Validate and add a theme.
    ///
    /// Fails with `MalformedConfig` when the theme is invalid or its name is
    /// already taken by a non-built-in theme.
    pub fn register(&mut self, theme: ThemeConfig) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::for_source(theme.display_source());
        theme.validate(&mut diag);

        if let Some(existing) = self.themes.get(&theme.name)
            && !existing.builtin
        {
            diag.error_with_hint(
                ThemeConfig::FIELDS.name,
                format!(
                    "theme `{}` is already defined by {}",
                    theme.name,
                    existing.theme.display_source()
                ),
                "rename one of the themes",
            );
        }

        diag.into_result()?;

        if self.themes.get(&theme.name).is_some_and(|e| e.builtin) {
            debug!("theme"; "`{}` replaces the built-in theme", theme.name);
        }
        self.themes.insert(
            theme.name.clone(),
            Entry {
                theme,
                builtin: false,
            },
        );
        Ok(())
    }

    /// Register every sub-directory of `dir` that contains a `theme.toml`.
    ///
    /// A missing `dir` is not an error. Returns the number of themes loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ConfigError> {
        if !dir.is_dir() {
            debug!("theme"; "skipping missing theme directory {}", dir.display());
            return Ok(0);
        }

        let mut theme_dirs: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|err| ConfigError::Io(dir.to_path_buf(), err))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.join(THEME_FILE).is_file())
            .collect();
        // read_dir order is platform-dependent
        theme_dirs.sort();

        for theme_dir in &theme_dirs {
            let theme = ThemeConfig::from_dir(theme_dir)?;
            debug!("theme"; "found `{}` in {}", theme.name, theme_dir.display());
            self.register(theme)?;
        }
        Ok(theme_dirs.len())
    }

    pub fn get(&self, name: &str) -> Option<&ThemeConfig> {
        self.themes.get(name).map(|entry| &entry.theme)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeConfig> {
        self.themes.values().map(|entry| &entry.theme)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.themes.get(name).is_some_and(|entry| entry.builtin)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Log a one-line summary per theme.
    pub fn log_summary(&self) {
        for theme in self.iter() {
            let origin = if self.is_builtin(&theme.name) {
                "built-in".to_string()
            } else {
                theme.display_source()
            };
            match &theme.extends {
                Some(parent) => log!("theme"; "{} extends {} ({})", theme.name, parent, origin),
                None => log!("theme"; "{} ({})", theme.name, origin),
            }
        }
    }
}

/// The built-in root theme: a home link, no social links, documented settings.
fn builtin_default() -> ThemeConfig {
    let mut settings = toml::Table::new();
    settings.insert("smooth_scroll".into(), toml::Value::Boolean(false));
    settings.insert("display_all_headers".into(), toml::Value::Boolean(false));

    let schema = BTreeMap::from([
        ("logo".to_string(), SettingKind::String),
        ("smooth_scroll".to_string(), SettingKind::Bool),
        ("display_all_headers".to_string(), SettingKind::Bool),
    ]);

    ThemeConfig {
        name: BUILTIN_THEME.to_string(),
        nav: Some(vec![NavItem::new("Home", "/")]),
        social: Some(Vec::new()),
        settings,
        schema,
        ..ThemeConfig::default()
    }
}
