//! `folio check`: load, resolve and summarize.

use anyhow::Result;

use crate::cli::common::Project;
use crate::log;
use crate::resolve::ResolvedConfig;
use crate::utils::plural::plural_count;

pub fn check_site(project: &Project) -> Result<()> {
    let resolved = project.resolve()?;
    for line in summary(&resolved, project.registry.len()) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summary(resolved: &ResolvedConfig, theme_count: usize) -> Vec<String> {
    vec![
        format!("`{}` served under {}", resolved.title, resolved.base),
        format!(
            "theme {} ({} available)",
            resolved.lineage.join(" -> "),
            plural_count(theme_count, "theme")
        ),
        format!(
            "{}, {}, {}",
            plural_count(resolved.nav.len(), "nav link"),
            plural_count(resolved.social.len(), "social link"),
            plural_count(resolved.head.len(), "head tag"),
        ),
    ]
}
