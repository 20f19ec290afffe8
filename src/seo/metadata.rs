//! Metadata override decisions.

use super::options::Options;
use crate::config::MetadataConfig;
use toml::Value;

/// Opengraph presenters contributed on top of the plugin's own.
pub const OPENGRAPH_PRESENTERS: [&str; 3] = ["author", "section", "tag"];

/// Whether the active metadata block overrides the platform default.
///
/// Only entries present in `active` are compared; nested tables are
/// compared entry by entry. Any present entry that is missing from, or
/// different in, `default` counts as an override.
pub fn overrides_default(active: &MetadataConfig, default: &MetadataConfig) -> bool {
    // Plain data structs always convert to a TOML table.
    let (Ok(active), Ok(default)) = (Value::try_from(active), Value::try_from(default)) else {
        return true;
    };
    differs(&active, Some(&default))
}

fn differs(active: &Value, default: Option<&Value>) -> bool {
    match (active, default) {
        (Value::Table(active), Some(Value::Table(default))) => active
            .iter()
            .any(|(key, value)| differs(value, default.get(key))),
        (Value::Table(active), _) => !active.is_empty(),
        (active, Some(default)) => active != default,
        (_, None) => true,
    }
}

/// Whether the platform's Opengraph presenters should be added.
///
/// Enabled when config explicitly turns Opengraph on, or when the stored
/// social options already have it on.
pub fn opengraph_presenters_enabled(config: &MetadataConfig, social: &Options) -> bool {
    config.opengraph == Some(true) || social.is_truthy("opengraph")
}
