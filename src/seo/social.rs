//! Social options override.
//!
//! Writes the configured metadata block over the SEO plugin's stored
//! social options. Configuration always wins for the keys listed below,
//! and every one of them is rewritten on each run; any other key in the
//! bucket is passed through untouched.
//!
//! | Option key                    | Source (`[modules.seo.metadata]`)        |
//! |-------------------------------|------------------------------------------|
//! | `opengraph`, `twitter`        | same keys, default `true`                |
//! | `pinterestverify`             | `pinterest-verify`                       |
//! | `facebook_site`,`twitter_site`| `social-urls.facebook`, `.twitter`       |
//! | `<platform>_url`              | `social-urls.<platform>`                 |
//! | `og_default_image[_id]`       | `fallback-image[-id]`                    |
//! | `og_frontpage_*`              | `opengraph-fallback.og-frontpage-*`      |
//!
//! Missing values become empty strings. A missing image id is resolved
//! from the image URL when possible and stays empty otherwise.

use super::image::{ImageId, ImageLookup, resolve_image_id};
use super::options::Options;
use crate::config::MetadataConfig;
use crate::config::section::seo::{OpengraphFallback, SocialUrls};

/// Social platforms with a profile URL option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Google,
    Myspace,
    Pinterest,
    Youtube,
    Wikipedia,
}

impl Platform {
    pub const ALL: [Self; 9] = [
        Self::Facebook,
        Self::Twitter,
        Self::Instagram,
        Self::Linkedin,
        Self::Google,
        Self::Myspace,
        Self::Pinterest,
        Self::Youtube,
        Self::Wikipedia,
    ];

    /// Key under `social-urls` in config.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Google => "google",
            Self::Myspace => "myspace",
            Self::Pinterest => "pinterest",
            Self::Youtube => "youtube",
            Self::Wikipedia => "wikipedia",
        }
    }

    /// Plugin option key. Facebook and Twitter store a `_site` value.
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::Facebook => "facebook_site",
            Self::Twitter => "twitter_site",
            Self::Instagram => "instagram_url",
            Self::Linkedin => "linkedin_url",
            Self::Google => "google_url",
            Self::Myspace => "myspace_url",
            Self::Pinterest => "pinterest_url",
            Self::Youtube => "youtube_url",
            Self::Wikipedia => "wikipedia_url",
        }
    }
}

/// Apply the metadata block to the social option bucket.
pub fn override_social_options(
    config: &MetadataConfig,
    mut options: Options,
    images: &impl ImageLookup,
) -> Options {
    options.set("opengraph", config.opengraph.unwrap_or(true));
    options.set("twitter", config.twitter.unwrap_or(true));
    options.set("pinterestverify", or_empty(config.pinterest_verify.as_deref()));

    let no_urls = SocialUrls::default();
    let urls = config.social_urls.as_ref().unwrap_or(&no_urls);
    for platform in Platform::ALL {
        options.set(platform.option_key(), or_empty(urls.get(platform)));
    }

    set_image(
        &mut options,
        ("og_default_image", "og_default_image_id"),
        config.fallback_image.as_deref(),
        config.fallback_image_id.as_ref(),
        images,
    );

    let no_fallback = OpengraphFallback::default();
    let fallback = config.opengraph_fallback.as_ref().unwrap_or(&no_fallback);
    options.set("og_frontpage_title", or_empty(fallback.og_frontpage_title.as_deref()));
    options.set("og_frontpage_desc", or_empty(fallback.og_frontpage_desc.as_deref()));
    set_image(
        &mut options,
        ("og_frontpage_image", "og_frontpage_image_id"),
        fallback.og_frontpage_image.as_deref(),
        fallback.og_frontpage_image_id.as_ref(),
        images,
    );

    options
}

/// Store an image URL and its id, deriving the id from the URL when unset.
fn set_image(
    options: &mut Options,
    (url_key, id_key): (&str, &str),
    url: Option<&str>,
    id: Option<&ImageId>,
    images: &impl ImageLookup,
) {
    let url = or_empty(url);
    let id = match id {
        Some(id) if !id.is_empty() => Some(id.clone()),
        _ if !url.is_empty() => resolve_image_id(url, images),
        // An explicit empty id (`0`, `"0"`) with no URL is kept as configured.
        _ => id.cloned(),
    };

    options.set(url_key, url);
    match id {
        Some(id) => options.set(id_key, id),
        None => options.set(id_key, ""),
    }
}

#[inline]
fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::image::MediaIndex;
    use serde_json::{Value, json};

    fn no_images() -> MediaIndex {
        MediaIndex::new()
    }

    fn run(config: &MetadataConfig, options: Value) -> Options {
        let options: Options = serde_json::from_value(options).unwrap();
        override_social_options(config, options, &no_images())
    }

    #[test]
    fn test_empty_config_defaults() {
        let out = run(&MetadataConfig::default(), json!({}));

        assert_eq!(out.get("opengraph"), Some(&json!(true)));
        assert_eq!(out.get("twitter"), Some(&json!(true)));
        assert_eq!(out.get_str("pinterestverify"), Some(""));
        for platform in Platform::ALL {
            assert_eq!(out.get_str(platform.option_key()), Some(""), "{platform:?}");
        }
        for key in [
            "og_default_image",
            "og_default_image_id",
            "og_frontpage_title",
            "og_frontpage_desc",
            "og_frontpage_image",
            "og_frontpage_image_id",
        ] {
            assert_eq!(out.get_str(key), Some(""), "{key}");
        }
    }

    #[test]
    fn test_defaults_ignore_stored_toggles() {
        let out = run(
            &MetadataConfig::default(),
            json!({ "opengraph": false, "twitter": false }),
        );
        assert_eq!(out.get("opengraph"), Some(&json!(true)));
        assert_eq!(out.get("twitter"), Some(&json!(true)));
    }

    #[test]
    fn test_explicit_toggles() {
        let config = MetadataConfig {
            opengraph: Some(false),
            twitter: Some(false),
            ..Default::default()
        };
        let out = run(&config, json!({}));
        assert_eq!(out.get("opengraph"), Some(&json!(false)));
        assert_eq!(out.get("twitter"), Some(&json!(false)));
    }

    #[test]
    fn test_social_urls_copied_verbatim() {
        let config = MetadataConfig {
            social_urls: Some(SocialUrls {
                facebook: Some("https://facebook.com/example".into()),
                twitter: Some("example".into()),
                wikipedia: Some("https://en.wikipedia.org/wiki/Example".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = run(&config, json!({ "instagram_url": "https://stale.example" }));

        assert_eq!(out.get_str("facebook_site"), Some("https://facebook.com/example"));
        assert_eq!(out.get_str("twitter_site"), Some("example"));
        assert_eq!(
            out.get_str("wikipedia_url"),
            Some("https://en.wikipedia.org/wiki/Example")
        );
        // Stored value is overwritten even when config is silent
        assert_eq!(out.get_str("instagram_url"), Some(""));
    }

    #[test]
    fn test_unrelated_keys_pass_through() {
        let out = run(
            &MetadataConfig::default(),
            json!({ "og_frontpage_title": "stale", "custom_key": 5 }),
        );
        assert_eq!(out.get("custom_key"), Some(&json!(5)));
        assert_eq!(out.get_str("og_frontpage_title"), Some(""));
        // 18 managed keys + 1 pass-through
        assert_eq!(out.len(), 19);
    }

    #[test]
    fn test_fallback_image_id_resolved_from_resized_url() {
        let mut index = MediaIndex::new();
        index.insert("photo.jpg", ImageId::Number(42));

        let config = MetadataConfig {
            fallback_image: Some("photo-300x200.jpg".into()),
            ..Default::default()
        };
        let out = override_social_options(&config, Options::new(), &index);

        assert_eq!(out.get_str("og_default_image"), Some("photo-300x200.jpg"));
        assert_eq!(out.get("og_default_image_id"), Some(&json!(42)));
    }

    #[test]
    fn test_configured_image_id_wins() {
        let mut index = MediaIndex::new();
        index.insert("photo.jpg", ImageId::Number(42));

        let config = MetadataConfig {
            fallback_image: Some("photo.jpg".into()),
            fallback_image_id: Some(ImageId::Number(7)),
            ..Default::default()
        };
        let out = override_social_options(&config, Options::new(), &index);
        assert_eq!(out.get("og_default_image_id"), Some(&json!(7)));
    }

    #[test]
    fn test_zero_image_id_is_resolved() {
        let mut index = MediaIndex::new();
        index.insert("photo.jpg", ImageId::Text("42".into()));

        let config = MetadataConfig {
            fallback_image: Some("photo.jpg".into()),
            fallback_image_id: Some(ImageId::Number(0)),
            ..Default::default()
        };
        let out = override_social_options(&config, Options::new(), &index);
        assert_eq!(out.get_str("og_default_image_id"), Some("42"));
    }

    #[test]
    fn test_unresolved_image_id_is_empty() {
        let config = MetadataConfig {
            fallback_image: Some("https://cdn.example.com/unknown.png".into()),
            ..Default::default()
        };
        let out = run(&config, json!({ "og_default_image_id": 99 }));
        assert_eq!(out.get_str("og_default_image_id"), Some(""));
    }

    #[test]
    fn test_frontpage_fallbacks() {
        let mut index = MediaIndex::new();
        index.insert("https://example.com/home.png", ImageId::Number(3));

        let config = MetadataConfig {
            opengraph_fallback: Some(OpengraphFallback {
                og_frontpage_title: Some("Home".into()),
                og_frontpage_desc: Some("Welcome".into()),
                og_frontpage_image: Some("https://example.com/home-640x480.png".into()),
                og_frontpage_image_id: None,
            }),
            ..Default::default()
        };
        let out = override_social_options(&config, Options::new(), &index);

        assert_eq!(out.get_str("og_frontpage_title"), Some("Home"));
        assert_eq!(out.get_str("og_frontpage_desc"), Some("Welcome"));
        assert_eq!(
            out.get_str("og_frontpage_image"),
            Some("https://example.com/home-640x480.png")
        );
        assert_eq!(out.get("og_frontpage_image_id"), Some(&json!(3)));
    }

    #[test]
    fn test_idempotent() {
        let mut index = MediaIndex::new();
        index.insert("photo.jpg", ImageId::Number(42));

        let config = MetadataConfig {
            twitter: Some(false),
            fallback_image: Some("photo-300x200.jpg".into()),
            social_urls: Some(SocialUrls {
                youtube: Some("https://youtube.com/@example".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let start: Options = serde_json::from_value(json!({ "keep": "me" })).unwrap();

        let once = override_social_options(&config, start, &index);
        let twice = override_social_options(&config, once.clone(), &index);
        assert_eq!(once, twice);
    }
}
