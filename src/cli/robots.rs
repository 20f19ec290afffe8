//! `robots` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::common::write_output;
use crate::config::{ConfigDiagnostics, ConfigError, ProjectConfig, SiteSectionConfig};
use crate::seo::{FsSource, RobotsAssembler};

/// Assemble robots.txt from the base text, project fragments and sitemap.
pub fn run_robots(
    config: &ProjectConfig,
    base: Option<&Path>,
    public: Option<bool>,
    output: Option<&Path>,
) -> Result<()> {
    let base = match base {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read base robots.txt {}", path.display()))?,
        None => String::new(),
    };
    let is_public = public.unwrap_or(config.site.public);

    let body = assemble_robots(config, &base, is_public)?;
    write_output(output, &body)
}

fn assemble_robots(config: &ProjectConfig, base: &str, is_public: bool) -> Result<String> {
    let site_url = match (&config.site.url, is_public) {
        (Some(url), _) => url.as_str(),
        (None, false) => "",
        (None, true) => {
            let mut diag = ConfigDiagnostics::new();
            diag.error_with_hint(
                SiteSectionConfig::URL,
                "site is public but no site URL is configured for the sitemap directive",
                format!("set {}, e.g.: \"https://example.com\"", SiteSectionConfig::URL),
            );
            return Err(ConfigError::Diagnostics(diag).into());
        }
    };

    let assembler = RobotsAssembler::new(config.get_root(), site_url);
    Ok(assembler.assemble(base, is_public, &FsSource))
}
