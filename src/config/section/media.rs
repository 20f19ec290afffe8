//! `[media]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSectionConfig {
    /// Canonical-URL index used to resolve image identifiers
    /// (relative to the project root, `~` is expanded).
    pub index: Option<PathBuf>,
}

impl MediaSectionConfig {
    pub const INDEX: FieldPath = FieldPath::new("media.index");

    /// Check that a configured index exists. Paths must already be normalized.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(index) = &self.index
            && !index.is_file()
        {
            diag.error_with_hint(
                Self::INDEX,
                format!("media index `{}` not found", index.display()),
                "remove `media.index` to skip image id lookups",
            );
        }
    }
}
