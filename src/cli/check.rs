//! `check` command: report which overrides and integrations are active.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::common::load_media_index;
use crate::config::{MetadataConfig, ProjectConfig};
use crate::log;
use crate::seo::{
    ImageLookup, OPENGRAPH_PRESENTERS, Options, load_bundled_plugin, opengraph_presenters_enabled,
    override_social_options, overrides_default,
};

const OVERRIDDEN_NOTICE: &str = "Social metadata has been saved in the configuration file. \
Use the configuration file to make changes to the Social SEO settings.";

/// Decisions derived from config and the stored social options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub metadata_enabled: bool,
    pub metadata_overridden: bool,
    pub opengraph_presenters: bool,
    pub load_bundled_plugin: bool,
    pub redirects: bool,
    pub site_verification: bool,
}

impl CheckReport {
    /// The presenter gate sees the social options as the plugin reads them,
    /// i.e. with the metadata override already applied.
    pub fn build(config: &ProjectConfig, social: &Options, images: &impl ImageLookup) -> Self {
        let seo = &config.modules.seo;
        let metadata = config.metadata();

        Self {
            metadata_enabled: metadata.is_some(),
            metadata_overridden: metadata.as_ref().is_some_and(|active| {
                overrides_default(active, &MetadataConfig::platform_default())
            }),
            opengraph_presenters: metadata.as_ref().is_some_and(|active| {
                let effective = override_social_options(active, social.clone(), images);
                opengraph_presenters_enabled(active, &effective)
            }),
            load_bundled_plugin: load_bundled_plugin(seo.premium),
            redirects: seo.redirects,
            site_verification: seo.site_verification,
        }
    }

    fn print(&self) {
        let row = |label: &str, value: bool| {
            let value = if value {
                "yes".green().to_string()
            } else {
                "no".dimmed().to_string()
            };
            println!("{:<22} {}", label, value);
        };

        row("metadata", self.metadata_enabled);
        row("metadata overridden", self.metadata_overridden);
        row("opengraph presenters", self.opengraph_presenters);
        if self.opengraph_presenters {
            println!("{:<22} {}", "", OPENGRAPH_PRESENTERS.join(", ").dimmed());
        }
        row("bundled plugin", self.load_bundled_plugin);
        row("redirects", self.redirects);
        row("site verification", self.site_verification);
    }
}

pub fn run_check(config: &ProjectConfig, options: Option<&Path>) -> Result<()> {
    let social = Options::read_or_default(options)?;
    let media = load_media_index(config)?;
    let report = CheckReport::build(config, &social, &media);

    if report.metadata_overridden {
        log!("check"; "{}", OVERRIDDEN_NOTICE);
    }
    report.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::seo::MediaIndex;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = test_parse_config("");
        let report = CheckReport::build(&config, &Options::new(), &MediaIndex::new());
        assert_eq!(
            report,
            CheckReport {
                metadata_enabled: true,
                metadata_overridden: false,
                opengraph_presenters: true,
                load_bundled_plugin: true,
                redirects: true,
                site_verification: true,
            }
        );
    }

    #[test]
    fn test_overridden_metadata() {
        let config = test_parse_config(
            "[modules.seo]\npremium = true\n[modules.seo.metadata]\nopengraph = true\nfallback-image = \"https://example.com/a.png\"",
        );
        let report = CheckReport::build(&config, &Options::new(), &MediaIndex::new());
        assert!(report.metadata_overridden);
        assert!(report.opengraph_presenters);
        assert!(!report.load_bundled_plugin);
    }

    #[test]
    fn test_presenters_ignore_stored_opengraph() {
        let config = test_parse_config("[modules.seo.metadata]\ntwitter = true");
        let social: Options = serde_json::from_value(json!({ "opengraph": false })).unwrap();
        assert!(CheckReport::build(&config, &social, &MediaIndex::new()).opengraph_presenters);

        let config = test_parse_config("[modules.seo.metadata]\nopengraph = false");
        let social: Options = serde_json::from_value(json!({ "opengraph": true })).unwrap();
        assert!(!CheckReport::build(&config, &social, &MediaIndex::new()).opengraph_presenters);
    }

    #[test]
    fn test_metadata_disabled() {
        let config = test_parse_config("[modules.seo]\nmetadata = false");
        let social: Options = serde_json::from_value(json!({ "opengraph": true })).unwrap();
        let report = CheckReport::build(&config, &social, &MediaIndex::new());
        assert!(!report.metadata_enabled);
        assert!(!report.metadata_overridden);
        assert!(!report.opengraph_presenters);
    }
}
