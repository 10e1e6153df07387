//! Pre-initialization validation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `folio init`: add a config to the current directory
    CurrentDir,
    /// `folio init <name>`: create a new site directory
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: must not already contain a folio.toml
/// - `NewDir`: must not exist, or be empty
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if root.join(CONFIG_FILE).exists() {
                bail!(
                    "'{}' already exists in this directory.\n\
                     Use `folio init <name>` to create a site in a new subdirectory.",
                    CONFIG_FILE
                );
            }
        }
        InitMode::NewDir => {
            if !is_empty(root)? {
                bail!(
                    "Directory '{}' already exists and is not empty.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_with_other_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "notes").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_current_dir_with_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "title = \"t\"").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_new_dir_empty_or_missing() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_ok());
        assert!(validate_target(&temp.path().join("new_site"), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_new_dir_not_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
    }
}
