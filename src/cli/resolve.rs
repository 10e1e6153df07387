//! `folio resolve`: print the effective configuration.

use anyhow::Result;

use crate::cli::args::{Format, ResolveArgs};
use crate::cli::common::{Project, write_output};
use crate::resolve::{ResolvedConfig, resolve};

pub fn run_resolve(mut project: Project, args: &ResolveArgs) -> Result<()> {
    if let Some(base) = &args.base {
        project.site.override_base(base)?;
    }
    let resolved = resolve(&project.site, &project.registry)?;
    let output = render(&resolved, args.format, args.pretty)?;
    write_output(&output, args.output.as_deref())
}

fn render(resolved: &ResolvedConfig, format: Format, pretty: bool) -> Result<String> {
    Ok(match format {
        Format::Toml => resolved.to_toml()?,
        Format::Json => resolved.to_json(pretty)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::theme::ThemeRegistry;

    fn resolved() -> ResolvedConfig {
        resolve(&test_site_config(""), &ThemeRegistry::with_builtin()).unwrap()
    }

    #[test]
    fn test_render_toml() {
        let out = render(&resolved(), Format::Toml, false).unwrap();
        assert!(out.starts_with("title = \"Test\""));
        assert_eq!(ResolvedConfig::from_toml(&out).unwrap(), resolved());
    }

    #[test]
    fn test_render_json() {
        let compact = render(&resolved(), Format::Json, false).unwrap();
        let pretty = render(&resolved(), Format::Json, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert!(compact.starts_with("{\"title\":\"Test\""));
    }

    #[test]
    fn test_base_override_is_validated() {
        let project = Project {
            site: test_site_config(""),
            registry: ThemeRegistry::with_builtin(),
        };
        let args = ResolveArgs {
            format: Format::Toml,
            pretty: false,
            output: None,
            base: Some("no-slashes".into()),
        };
        assert!(run_resolve(project, &args).is_err());
    }
}
