//! `[modules.seo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [modules.seo]
//! redirects = true
//! site-verification = true
//! premium = false
//!
//! [modules.seo.metadata]
//! opengraph = true
//! fallback-image = "https://example.com/uploads/share-1200x630.png"
//!
//! [modules.seo.metadata.social-urls]
//! twitter = "https://twitter.com/example"
//! ```
//!
//! `metadata` may also be a plain boolean: `true` enables the override
//! with every value at its default, `false` disables it.

mod metadata;

pub use metadata::{MetadataConfig, OpengraphFallback, SocialUrls};

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A feature that is either switched on/off or switched on with settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Feature<T> {
    Toggle(bool),
    Settings(T),
}

impl<T> Default for Feature<T> {
    fn default() -> Self {
        Self::Toggle(true)
    }
}

// A table is handed straight to `T` so unknown keys inside it stay visible
// to `serde_ignored`, which an untagged derive would hide.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Feature<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeatureVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for FeatureVisitor<T> {
            type Value = Feature<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or a table")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Feature::Toggle(value))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(de::value::MapAccessDeserializer::new(map)).map(Feature::Settings)
            }
        }

        deserializer.deserialize_any(FeatureVisitor(PhantomData))
    }
}

impl<T: Clone + Default> Feature<T> {
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(enabled) => *enabled,
            Self::Settings(_) => true,
        }
    }

    /// Settings in effect, or `None` when the feature is disabled.
    pub fn settings(&self) -> Option<T> {
        match self {
            Self::Toggle(true) => Some(T::default()),
            Self::Toggle(false) => None,
            Self::Settings(settings) => Some(settings.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeoModuleConfig {
    /// Load the redirects integration.
    pub redirects: bool,

    /// Metadata overrides for the SEO plugin's social options.
    pub metadata: Feature<MetadataConfig>,

    /// Load the site verification integration.
    pub site_verification: bool,

    /// Whether the premium SEO plugin is installed by the site.
    pub premium: bool,
}

impl Default for SeoModuleConfig {
    fn default() -> Self {
        Self {
            redirects: true,
            metadata: Feature::default(),
            site_verification: true,
            premium: false,
        }
    }
}

/// `[modules]` table, one entry per platform module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesSectionConfig {
    pub seo: SeoModuleConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_toggle() {
        let seo: SeoModuleConfig = toml::from_str("metadata = false").unwrap();
        assert!(!seo.metadata.is_enabled());
        assert!(seo.metadata.settings().is_none());

        let seo: SeoModuleConfig = toml::from_str("metadata = true").unwrap();
        assert!(seo.metadata.is_enabled());
        assert_eq!(seo.metadata.settings(), Some(MetadataConfig::default()));
    }

    #[test]
    fn test_metadata_table() {
        let seo: SeoModuleConfig =
            toml::from_str("[metadata]\ntwitter = false\npinterest-verify = \"xyz\"").unwrap();
        assert!(seo.metadata.is_enabled());
        let metadata = seo.metadata.settings().unwrap();
        assert_eq!(metadata.twitter, Some(false));
        assert_eq!(metadata.pinterest_verify.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_module_defaults() {
        let seo: SeoModuleConfig = toml::from_str("").unwrap();
        assert!(seo.redirects);
        assert!(seo.site_verification);
        assert!(!seo.premium);
        assert!(seo.metadata.is_enabled());
    }

    #[test]
    fn test_metadata_rejects_other_types() {
        let err = toml::from_str::<SeoModuleConfig>("metadata = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("a boolean or a table"));

        let err =
            toml::from_str::<SeoModuleConfig>("[metadata]\nopengraph = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("expected a boolean"));
    }

    #[test]
    fn test_kebab_case_toggle() {
        let seo: SeoModuleConfig = toml::from_str("site-verification = false").unwrap();
        assert!(!seo.site_verification);
    }
}
