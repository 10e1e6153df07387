//! `folio head`: print the tags every page's `<head>` receives.

use anyhow::Result;

use crate::resolve::ResolvedConfig;
use crate::utils::html::escape;

pub fn print_head(resolved: &ResolvedConfig) -> Result<()> {
    println!("{}", render_head(resolved));
    Ok(())
}

/// `<meta charset>`, `<title>`, description, then the configured entries.
fn render_head(resolved: &ResolvedConfig) -> String {
    let mut lines = vec![
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{}</title>", escape(&resolved.title)),
    ];
    if !resolved.description.is_empty() {
        lines.push(format!(
            "<meta name=\"description\" content=\"{}\">",
            escape(&resolved.description)
        ));
    }
    if !resolved.head.is_empty() {
        lines.push(resolved.head_html());
    }
    lines.join("\n")
}
