//! Folio - site configuration and theme inheritance resolver.
//!
//! Loads a `folio.toml`, resolves the selected theme through its `extends`
//! chain and merges both into one [`ResolvedConfig`]:
//!
//! ```ignore
//! let site = folio::load_site_config(&std::fs::read_to_string("folio.toml")?)?;
//! let registry = folio::ThemeRegistry::from_dirs(&site.theme_search_paths())?;
//! let resolved = folio::resolve(&site, &registry)?;
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod resolve;
pub mod theme;
pub mod utils;

pub use config::{ConfigError, SiteConfig, load_site_config};
pub use resolve::{BasePath, ResolvedConfig, merge, resolve};
pub use theme::{ThemeConfig, ThemeRegistry, resolve_theme};
