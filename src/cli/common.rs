//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::cli::Cli;
use crate::config::{SiteConfig, expand_path, find_config_file};
use crate::resolve::{ResolvedConfig, resolve};
use crate::theme::ThemeRegistry;
use crate::{debug, debug_do};

/// A loaded site config together with the themes it can see.
#[derive(Debug)]
pub struct Project {
    pub site: SiteConfig,
    pub registry: ThemeRegistry,
}

impl Project {
    /// Load the config named by `--config` and its theme directories.
    ///
    /// `--themes` replaces the config's `theme_dirs`; those paths are taken
    /// relative to the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = locate_config(&cli.config)?;
        let site = SiteConfig::from_path(&path)?;

        let dirs = if cli.themes.is_empty() {
            site.theme_search_paths()
        } else {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            cli.themes.iter().map(|dir| expand_path(dir, &cwd)).collect()
        };
        debug!("theme"; "searching {:?}", dirs);

        let registry = ThemeRegistry::from_dirs(&dirs)?;
        debug_do! {
            registry.log_summary();
        }
        Ok(Self { site, registry })
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        Ok(resolve(&self.site, &self.registry)?)
    }
}

/// Find the config file, walking up from the current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    if config.is_file() {
        return Ok(config.to_path_buf());
    }
    match find_config_file(config) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found in this directory or any parent.\n\
             Run `folio init` to create one.",
            config.display()
        ),
    }
}

/// Write `content` to `output`, or print it to stdout.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let content = if content.ends_with('\n') {
                content.to_string()
            } else {
                format!("{content}\n")
            };
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            crate::log!("resolve"; "wrote output to {}", path.display());
        }
        None => println!("{}", content.trim_end_matches('\n')),
    }
    Ok(())
}
