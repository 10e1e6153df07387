//! Configuration file generation.
//!
//! Creates folio.toml and a local theme for new sites.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{CONFIG_FILE, SiteConfig};
use crate::theme::{BUILTIN_THEME, THEME_FILE, ThemeConfig};

/// Directory name of the starter theme.
const LOCAL_THEME: &str = "local";

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Folio configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!(
        "# Set `theme = \"{LOCAL_THEME}\"` to use the theme in themes/{LOCAL_THEME}.\n\n"
    ));
    out.push_str(&SiteConfig::template_with_header());

    out
}

/// Generate the starter theme: extends the built-in theme, own layouts.
pub fn generate_theme_template() -> Result<String> {
    let mut theme = ThemeConfig::new(LOCAL_THEME).extending(BUILTIN_THEME);
    theme.layouts = Some(PathBuf::from("layouts"));

    let body = toml::to_string(&theme).context("Failed to serialize starter theme")?;
    Ok(format!(
        "# Values left out here are inherited from `{BUILTIN_THEME}`.\n{body}"
    ))
}

/// Write default folio.toml configuration
pub fn write_config(root: &Path) -> Result<PathBuf> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Write themes/local/theme.toml
pub fn write_local_theme(root: &Path) -> Result<PathBuf> {
    let dir = root.join("themes").join(LOCAL_THEME);
    fs::create_dir_all(dir.join("layouts"))
        .with_context(|| format!("Failed to create '{}'", dir.display()))?;

    let path = dir.join(THEME_FILE);
    // Only create if doesn't exist
    if !path.exists() {
        fs::write(&path, generate_theme_template()?)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_site_config;
    use tempfile::TempDir;

    #[test]
    fn test_config_template_is_valid() {
        let template = generate_config_template();
        assert!(template.starts_with("# Folio configuration file"));

        let config = load_site_config(&template).unwrap();
        assert_eq!(config.base, "/");
        assert_eq!(config.theme, BUILTIN_THEME);
    }

    #[test]
    fn test_theme_template_parses() {
        let theme = ThemeConfig::from_str(&generate_theme_template().unwrap()).unwrap();
        assert_eq!(theme.name, LOCAL_THEME);
        assert_eq!(theme.extends.as_deref(), Some(BUILTIN_THEME));
        assert_eq!(theme.layouts, Some(PathBuf::from("layouts")));
    }

    #[test]
    fn test_write_local_theme() {
        let temp = TempDir::new().unwrap();
        let path = write_local_theme(temp.path()).unwrap();

        assert!(path.ends_with("themes/local/theme.toml"));
        assert!(temp.path().join("themes/local/layouts").is_dir());
    }

    #[test]
    fn test_local_theme_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("themes/local/theme.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "name = \"mine\"").unwrap();

        write_local_theme(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name = \"mine\"");
    }
}
