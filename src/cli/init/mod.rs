//! Site initialization module.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: folio.toml and starter theme generation

mod config;
mod validate;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::log;

pub use validate::InitMode;

/// Create a new site at `name` (or the current directory).
///
/// # Steps
/// 1. Validate target directory
/// 2. Write folio.toml
/// 3. Write `themes/local/theme.toml`, extending the built-in theme
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    init_at(&root, mode)?;

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}

fn init_at(root: &Path, mode: InitMode) -> Result<Vec<PathBuf>> {
    validate::validate_target(root, mode)?;
    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    Ok(vec![
        config::write_config(root)?,
        config::write_local_theme(root)?,
    ])
}
