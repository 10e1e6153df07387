//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve site configuration and theme inheritance
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Theme directory to search instead of `theme_dirs` (repeatable)
    #[arg(long = "themes", global = true, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub themes: Vec<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and its theme chain
    #[command(visible_alias = "c")]
    Check,

    /// Print the fully resolved configuration
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// List available themes
    #[command(visible_alias = "t")]
    Themes,

    /// Print the rendered `<head>` tags
    Head,

    /// Create a starter folio.toml and local theme
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout without writing files
        #[arg(long)]
        dry: bool,
    },
}

/// Output format for `resolve`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Toml)]
    pub format: Format,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override the base path, e.g. for a preview deployment under a sub-path.
    ///
    /// Avoids editing folio.toml:
    ///   folio resolve --base /preview/
    #[arg(short, long, value_name = "PATH")]
    pub base: Option<String>,
}
