//! Themes: named, inheritable bundles of layout and presentation defaults.
//!
//! A theme lives in its own directory with a `theme.toml`:
//!
//! ```toml
//! name = "local-theme"
//! extends = "default"
//! layouts = "layouts"
//!
//! nav = [{ text = "主页", link = "/" }]
//!
//! [settings]
//! smooth_scroll = true
//!
//! [schema]
//! smooth_scroll = "bool"
//! ```
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `registry` | `ThemeRegistry`: lookup table, directory loading |
//! | `resolve`  | `resolve_theme`: walk and merge `extends` chain  |

mod registry;
mod resolve;

pub use registry::{BUILTIN_THEME, ThemeRegistry};
pub use resolve::resolve_theme;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::section::{check_finite, merged, validate_nav, validate_social};
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, NavItem, SettingKind, SocialLink};

/// Theme definition filename inside a theme directory.
pub const THEME_FILE: &str = "theme.toml";

/// A theme definition, or a fully resolved theme after [`resolve_theme`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct ThemeConfig {
    /// Theme name. Defaults to the theme's directory name.
    pub name: String,

    /// Parent theme to inherit unspecified fields from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Layout override directory, handed to the renderer unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layouts: Option<PathBuf>,

    /// Navigation entries. `None` inherits from the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[config(skip)]
    pub nav: Option<Vec<NavItem>>,

    /// Social platform entries. `None` inherits from the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[config(skip)]
    pub social: Option<Vec<SocialLink>>,

    /// Default values for site `[theme_config]` keys.
    #[config(skip)]
    pub settings: toml::Table,

    /// Expected types of `settings` keys.
    #[config(skip)]
    pub schema: BTreeMap<String, SettingKind>,

    /// `theme.toml` this theme was loaded from (None for built-in themes).
    #[serde(skip)]
    #[config(skip)]
    pub source: Option<PathBuf>,

    /// Child-first names of the themes merged into this one.
    /// Empty until resolved.
    #[serde(skip)]
    #[config(skip)]
    pub lineage: Vec<String>,
}

impl ThemeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Parse a theme definition.
    ///
    /// Only syntax and types are checked here; invariants are checked on
    /// registration.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `<dir>/theme.toml`. An empty `name` falls back to the directory name.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(THEME_FILE);
        let content =
            fs::read_to_string(&path).map_err(|err| ConfigError::Io(path.clone(), err))?;

        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(&content);
        let mut theme: Self =
            serde_ignored::deserialize(deserializer, |field: serde_ignored::Path| {
                ignored.push(field.to_string());
            })?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::for_source(path.display().to_string());
            for field in ignored {
                diag.warn(FieldPath(field.into()), "unknown field, ignored");
            }
            diag.print_warnings();
        }

        if theme.name.trim().is_empty()
            && let Some(dir_name) = dir.file_name()
        {
            theme.name = dir_name.to_string_lossy().into_owned();
        }
        theme.source = Some(path);
        Ok(theme)
    }

    /// Label used in diagnostics: the source file, or the theme name.
    pub fn display_source(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => format!("theme `{}`", self.name),
        }
    }

    /// Check every invariant, collecting errors into `diag`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "theme name must not be empty");
        } else if self.name.chars().any(char::is_whitespace) {
            diag.error_with_hint(
                Self::FIELDS.name,
                format!("theme name '{}' must not contain whitespace", self.name),
                "use kebab-case, e.g. \"local-theme\"",
            );
        }

        if let Some(parent) = &self.extends
            && parent.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.extends,
                "parent theme name must not be empty",
                "remove `extends` to define a root theme",
            );
        }

        if let Some(layouts) = &self.layouts
            && layouts.as_os_str().is_empty()
        {
            diag.error(Self::FIELDS.layouts, "layout directory must not be empty");
        }

        if let Some(nav) = &self.nav {
            validate_nav(nav, &FieldPath::new("nav"), diag);
        }
        if let Some(social) = &self.social {
            validate_social(social, &FieldPath::new("social"), diag);
        }

        check_finite(&self.settings, &FieldPath::new("settings"), diag);

        for (key, kind) in &self.schema {
            if let Some(value) = self.settings.get(key)
                && !kind.accepts(value)
            {
                diag.error(
                    FieldPath::new("settings").key(key),
                    format!(
                        "default is {}, but the schema declares {}",
                        value.type_str(),
                        kind.label()
                    ),
                );
            }
        }
    }

    /// Merge `self` (child) over `parent`.
    ///
    /// Declared fields win; `settings` are deep-merged and `schema` entries
    /// are unioned with the child's taking precedence.
    pub fn inherit(&self, parent: &ThemeConfig) -> ThemeConfig {
        let mut schema = parent.schema.clone();
        schema.extend(self.schema.iter().map(|(k, v)| (k.clone(), *v)));

        ThemeConfig {
            name: self.name.clone(),
            extends: self.extends.clone(),
            layouts: self.layouts.clone().or_else(|| parent.layouts.clone()),
            nav: self.nav.clone().or_else(|| parent.nav.clone()),
            social: self.social.clone().or_else(|| parent.social.clone()),
            settings: merged(&parent.settings, &self.settings),
            schema,
            source: self.source.clone(),
            lineage: Vec::new(),
        }
    }
}
