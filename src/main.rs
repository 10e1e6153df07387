//! Folio - resolve site configuration and theme inheritance.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli, Commands, common::Project};
use folio::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(name.as_deref(), *dry),
        Commands::Check => cli::check::check_site(&Project::load(&cli)?),
        Commands::Resolve { args } => cli::resolve::run_resolve(Project::load(&cli)?, args),
        Commands::Themes => {
            let project = Project::load(&cli)?;
            cli::themes::list_themes(&project.registry, &project.site.theme)
        }
        Commands::Head => cli::head::print_head(&Project::load(&cli)?.resolve()?),
    }
}
