//! `[modules.seo.metadata]` configuration.
//!
//! The declarative metadata block whose values take precedence over the
//! SEO plugin's stored social options. Every key is optional; a missing
//! key means "use the default", never an error.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::image::ImageId;
use crate::seo::social::Platform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MetadataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opengraph: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest_verify: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_image_id: Option<ImageId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_urls: Option<SocialUrls>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opengraph_fallback: Option<OpengraphFallback>,
}

/// Social profile URLs, one per supported platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
}

impl SocialUrls {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let url = match platform {
            Platform::Facebook => &self.facebook,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
            Platform::Google => &self.google,
            Platform::Myspace => &self.myspace,
            Platform::Pinterest => &self.pinterest,
            Platform::Youtube => &self.youtube,
            Platform::Wikipedia => &self.wikipedia,
        };
        url.as_deref()
    }

    /// All platforms with every URL set to the empty string.
    fn blank() -> Self {
        let blank = || Some(String::new());
        Self {
            facebook: blank(),
            twitter: blank(),
            instagram: blank(),
            linkedin: blank(),
            google: blank(),
            myspace: blank(),
            pinterest: blank(),
            youtube: blank(),
            wikipedia: blank(),
        }
    }
}

/// Front page Opengraph fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OpengraphFallback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_frontpage_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_frontpage_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_frontpage_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_frontpage_image_id: Option<ImageId>,
}

impl MetadataConfig {
    pub const SOCIAL_URLS: FieldPath = FieldPath::new("modules.seo.metadata.social-urls");

    /// The metadata block the platform ships when nothing is configured.
    pub fn platform_default() -> Self {
        Self {
            opengraph: Some(true),
            twitter: Some(true),
            pinterest_verify: Some(String::new()),
            fallback_image: Some(String::new()),
            fallback_image_id: None,
            social_urls: Some(SocialUrls::blank()),
            opengraph_fallback: None,
        }
    }

    /// Warn about social URLs that do not parse as absolute URLs.
    ///
    /// The values are still copied verbatim into the options.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(urls) = &self.social_urls else {
            return;
        };

        for platform in Platform::ALL {
            if let Some(url) = urls.get(platform)
                && !url.is_empty()
                && url::Url::parse(url).is_err()
            {
                diag.warn(
                    Self::SOCIAL_URLS,
                    format!("{} URL `{}` is not an absolute URL", platform.name(), url),
                );
            }
        }
    }
}
