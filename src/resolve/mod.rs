//! Combine a site config with its resolved theme.
//!
//! ```text
//! folio.toml ──▶ SiteConfig ─────────────────────────┐
//!                    │ theme = "local-theme"          │
//!                    ▼                                ▼
//! ThemeRegistry ──▶ resolve_theme ──▶ ThemeConfig ──▶ merge ──▶ ResolvedConfig
//! ```
//!
//! Precedence, highest first: site values, the selected theme, its ancestors.

mod base;

pub use base::BasePath;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::section::merged;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, HeadEntry, NavItem, SiteConfig, SocialLink};
use crate::debug;
use crate::theme::{ThemeConfig, ThemeRegistry, resolve_theme};

/// The effective configuration handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub base: String,
    pub language: String,
    /// Name of the selected theme.
    pub theme: String,
    /// Themes merged into this config, child first.
    #[serde(default)]
    pub lineage: Vec<String>,
    /// Layout directory of the nearest theme that declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts: Option<PathBuf>,
    #[serde(default)]
    pub head: Vec<HeadEntry>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Theme defaults deep-merged with the site's `[theme_config]`.
    #[serde(default)]
    pub settings: toml::Table,
}

/// Overlay `site` onto an already resolved `theme`.
///
/// Site `nav` and `social` replace the theme's lists wholesale; other
/// `[theme_config]` keys are deep-merged over the theme's settings.
pub fn merge(site: &SiteConfig, theme: &ThemeConfig) -> ResolvedConfig {
    let overrides = &site.theme_config;

    let lineage = if theme.lineage.is_empty() {
        vec![theme.name.clone()]
    } else {
        theme.lineage.clone()
    };

    ResolvedConfig {
        title: site.title.clone(),
        description: site.description.clone(),
        base: site.base.clone(),
        language: site.language.clone(),
        theme: theme.name.clone(),
        lineage,
        layouts: theme.layouts.clone(),
        head: site.head.clone(),
        nav: overrides
            .nav
            .clone()
            .or_else(|| theme.nav.clone())
            .unwrap_or_default(),
        social: overrides
            .social
            .clone()
            .or_else(|| theme.social.clone())
            .unwrap_or_default(),
        settings: merged(&theme.settings, &overrides.extra),
    }
}

/// Resolve `site.theme` against `registry`, check the site's theme settings
/// against the theme schema, then merge.
///
/// # Errors
///
/// - `UnknownTheme` / `CyclicExtends` from theme resolution
/// - `MalformedConfig` when a `[theme_config]` value has the wrong type
pub fn resolve(site: &SiteConfig, registry: &ThemeRegistry) -> Result<ResolvedConfig, ConfigError> {
    let theme = resolve_theme(&site.theme, registry)?;

    let mut diag = match site.config_path.file_name() {
        Some(name) => ConfigDiagnostics::for_source(name.to_string_lossy()),
        None => ConfigDiagnostics::new(),
    };
    site.theme_config
        .check_schema(&theme.schema, &FieldPath::new("theme_config"), &mut diag);
    diag.into_result()?;

    let resolved = merge(site, &theme);
    debug!("resolve"; "`{}` resolved via {}", resolved.title, resolved.lineage.join(" -> "));
    Ok(resolved)
}

/// Load `path`, discover themes from its `theme_dirs` and resolve.
pub fn load(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    let site = SiteConfig::from_path(path)?;
    let registry = ThemeRegistry::from_dirs(&site.theme_search_paths())?;
    resolve(&site, &registry)
}

impl ResolvedConfig {
    /// Parse a previously serialized config.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|err| ConfigError::Serialize(Box::new(err)))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|err| ConfigError::Serialize(Box::new(err)))
    }

    pub fn paths(&self) -> BasePath<'_> {
        BasePath::new(&self.base)
    }

    /// Render `head` as HTML, one tag per line.
    pub fn head_html(&self) -> String {
        self.head
            .iter()
            .map(HeadEntry::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Navigation links with the base path applied to internal targets.
    pub fn nav_links(&self) -> Vec<(&str, String)> {
        let paths = self.paths();
        self.nav
            .iter()
            .map(|item| (item.text.as_str(), paths.url_for(&item.link)))
            .collect()
    }
}
