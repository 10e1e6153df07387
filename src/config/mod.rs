//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Value types (head, nav/social, theme settings)
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # Config discovery and path expansion
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! title = "Kori Lin"
//! description = "Kori Lin - 林洁彬的个人博客"
//! base = "/blog/"
//! theme = "local-theme"
//! head = [
//!     ["link", { rel = "icon", href = "/korilin.png" }],
//!     ["script", { src = "/statistics.js" }],
//! ]
//!
//! [theme_config]
//! logo = "/korilin.png"
//! nav = [{ text = "主页", link = "/" }]
//! ```

pub mod section;
pub mod types;
mod util;

pub use util::{expand_path, find_config_file, find_config_file_from};

pub use section::{HeadEntry, NavItem, SettingKind, SocialLink, ThemeSettings};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Malformed};

use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::debug;

/// Default config filename.
pub const CONFIG_FILE: &str = "folio.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Site metadata, head tags and the theme to render with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Site title.
    #[config(default = "My Site", inline_doc)]
    pub title: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Base URL path the site is served under, e.g. "/blog/".
    #[config(default = "/", inline_doc)]
    pub base: String,

    /// Language code (e.g., "en-US", "zh-CN").
    #[config(default = "en-US", inline_doc)]
    pub language: String,

    /// Extra tags for every page's `<head>`.
    #[config(skip)]
    pub head: Vec<HeadEntry>,

    /// Theme name, looked up in `theme_dirs`.
    #[config(default = "default", inline_doc)]
    pub theme: String,

    /// Directories containing one sub-directory per theme (relative to site root).
    pub theme_dirs: Vec<PathBuf>,

    /// Theme-specific overrides.
    #[config(skip)]
    pub theme_config: ThemeSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            language: "en-US".into(),
            head: Vec::new(),
            theme: "default".into(),
            theme_dirs: vec![PathBuf::from("themes")],
            theme_config: ThemeSettings::default(),
        }
    }
}

/// Parse and validate a raw `folio.toml` document.
///
/// Fails with [`ConfigError::MalformedConfig`] on syntax or type errors and
/// when required fields are missing or invalid. All validation errors are
/// collected before failing.
pub fn load_site_config(raw: &str) -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_str_with_source(raw, None)
}

impl SiteConfig {
    /// Load and validate configuration from a file path.
    ///
    /// `root` is set to the file's parent directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut config = Self::from_str_with_source(&content, Some(source))?;
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    fn from_str_with_source(content: &str, source: Option<String>) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = match source {
            Some(source) => ConfigDiagnostics::for_source(source),
            None => ConfigDiagnostics::new(),
        };
        for field in ignored {
            diag.warn(FieldPath(field.into()), "unknown field, ignored");
        }

        config.validate(&mut diag);
        diag.into_result()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Check every invariant, collecting errors into `diag`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is required",
                format!("set {}, e.g.: title = \"My Blog\"", Self::FIELDS.title),
            );
        }

        validate_base(&self.base, diag);

        if self.language.trim().is_empty() {
            diag.error(Self::FIELDS.language, "language must not be empty");
        }

        if self.theme.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.theme,
                "theme name must not be empty",
                "use \"default\" for the built-in theme",
            );
        }

        section::validate_head(&self.head, &FieldPath::new("head"), diag);
        self.theme_config
            .validate(&FieldPath::new("theme_config"), diag);
    }

    /// Replace `base`, e.g. from a command-line override.
    pub fn override_base(&mut self, base: &str) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::for_source("--base");
        validate_base(base, &mut diag);
        diag.into_result()?;
        self.base = base.to_string();
        Ok(())
    }

    /// Theme directories, expanded and joined onto the site root.
    pub fn theme_search_paths(&self) -> Vec<PathBuf> {
        self.theme_dirs
            .iter()
            .map(|dir| expand_path(dir, &self.root))
            .collect()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

/// Base path must be non-empty and begin and end with `/`.
fn validate_base(base: &str, diag: &mut ConfigDiagnostics) {
    let field = SiteConfig::FIELDS.base;
    if base.is_empty() {
        diag.error_with_hint(field, "base path must not be empty", "use \"/\" for the site root");
        return;
    }
    if base.chars().any(char::is_whitespace) {
        diag.error(field, format!("base path '{base}' must not contain whitespace"));
        return;
    }
    if !base.starts_with('/') || !base.ends_with('/') {
        let trimmed = base.trim_matches('/');
        let suggestion = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        diag.error_with_hint(
            field,
            format!("base path '{base}' must begin and end with `/`"),
            format!("use \"{suggestion}\""),
        );
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a site config with a title, panicking on any error or unknown field.
#[cfg(test)]
pub fn test_site_config(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    let mut diag = ConfigDiagnostics::new();
    parsed.validate(&mut diag);
    assert!(diag.is_empty(), "test config is invalid: {diag}");
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_of(raw: &str) -> Vec<String> {
        let err = load_site_config(raw).unwrap_err();
        assert!(err.is_malformed(), "expected MalformedConfig, got {err:?}");
        err.diagnostics()
            .map(|d| d.errors().iter().map(|e| e.field.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "");
        assert_eq!(config.base, "/");
        assert_eq!(config.theme, "default");
        assert_eq!(config.theme_dirs, vec![PathBuf::from("themes")]);
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_load_blog_config() {
        let config = load_site_config(
            r#"
title = "Kori Lin"
description = "Kori Lin - 林洁彬的个人博客"
base = "/blog/"
theme = "local-theme"
head = [
    ["link", { rel = "icon", href = "/korilin.png" }],
    ["script", { src = "/statistics.js" }],
]

[theme_config]
logo = "/korilin.png"
display_all_headers = true
smooth_scroll = true
nav = [
    { text = "主页", link = "/" },
    { text = "技术长文", link = "/archive/" },
    { text = "笔记杂谈区", link = "/note-tattle/" },
    { text = "深圳KUG", link = "https://korilin.com/KUGshenzhen/" },
]

[[theme_config.social]]
name = "github"
href = "https://github.com/korilin"
icon = "/icon/github.png"
"#,
        )
        .unwrap();

        assert_eq!(config.title, "Kori Lin");
        assert_eq!(config.base, "/blog/");
        assert_eq!(config.head.len(), 2);
        assert_eq!(config.head[1].tag, "script");
        assert_eq!(config.theme_config.nav.as_ref().map(Vec::len), Some(4));
        assert_eq!(config.theme_config.social.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            config.theme_config.extra["logo"].as_str(),
            Some("/korilin.png")
        );
    }

    #[test]
    fn test_missing_title_is_malformed() {
        assert_eq!(errors_of("base = \"/blog/\""), ["title"]);
    }

    #[test]
    fn test_mistyped_field_is_malformed() {
        let err = load_site_config("title = 42").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedConfig(Malformed::Syntax(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_malformed() {
        let err = load_site_config("[title\n= \"x\"").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_base_must_be_slash_delimited() {
        assert_eq!(errors_of("title = \"t\"\nbase = \"blog/\""), ["base"]);
        assert_eq!(errors_of("title = \"t\"\nbase = \"/blog\""), ["base"]);
        assert_eq!(errors_of("title = \"t\"\nbase = \"\""), ["base"]);

        let err = load_site_config("title = \"t\"\nbase = \"blog\"").unwrap_err();
        let diag = err.diagnostics().unwrap();
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/blog/\""));
    }

    #[test]
    fn test_non_finite_theme_value_is_malformed() {
        assert_eq!(
            errors_of("title = \"t\"\n[theme_config]\nx = nan"),
            ["theme_config.x"]
        );
        assert_eq!(
            errors_of("title = \"t\"\n[theme_config]\nscale = -inf"),
            ["theme_config.scale"]
        );
    }

    #[test]
    fn test_override_base() {
        let mut config = test_site_config("");
        config.override_base("/preview/").unwrap();
        assert_eq!(config.base, "/preview/");

        assert!(config.override_base("preview").unwrap_err().is_malformed());
        assert_eq!(config.base, "/preview/");
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = errors_of(
            r#"
base = "nope"
theme = ""
[theme_config]
nav = [{ text = "", link = "/" }]
"#,
        );
        assert_eq!(
            errors,
            ["title", "base", "theme", "theme_config.nav[0].text"]
        );
    }

    #[test]
    fn test_unknown_fields_are_warnings() {
        let content = "title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));

        // unknown keys do not fail the load
        assert!(load_site_config(content).is_ok());
    }

    #[test]
    fn test_from_path_sets_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "title = \"Test\"\ntheme_dirs = [\"themes\", \"/abs\"]").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(
            config.theme_search_paths(),
            vec![dir.path().join("themes"), PathBuf::from("/abs")]
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_helper_parses_minimal() {
        let config = test_site_config("theme = \"local\"");
        assert_eq!(config.theme, "local");
    }
}
