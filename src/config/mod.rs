//! Project configuration management for `seoconf.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── media      # [media]
//! │   ├── seo        # [modules.seo] and [modules.seo.metadata]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                  | Purpose                                   |
//! |--------------------------|-------------------------------------------|
//! | `[site]`                 | Site URL, public flag, environment        |
//! | `[modules.seo]`          | Feature toggles, premium plugin flag      |
//! | `[modules.seo.metadata]` | Social/Opengraph values for the plugin    |
//! | `[media]`                | Canonical-URL index for image id lookups  |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_config_path};

pub use section::{
    Environment, Feature, MediaSectionConfig, MetadataConfig, ModulesSectionConfig,
    SeoModuleConfig, SiteSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "seoconf.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seoconf.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Public site information
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Platform module settings
    #[serde(default)]
    pub modules: ModulesSectionConfig,

    /// Media index settings
    #[serde(default)]
    pub media: MediaSectionConfig,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli.config.as_deref(), &cwd)
    }

    /// Load configuration starting the upward search at `cwd`.
    ///
    /// A missing `seoconf.toml` is not an error: every setting falls back to
    /// its default and `cwd` becomes the project root. A config path given
    /// explicitly must exist.
    fn load_from(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let config_name = explicit.unwrap_or(Path::new(DEFAULT_CONFIG));

        let mut config = match find_config_file(config_name, cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = crate::utils::path::normalize_path(&path);
                config
            }
            None if explicit.is_some() => {
                bail!("Config file '{}' not found", config_name.display());
            }
            None => {
                crate::debug!("config"; "{} not found, using defaults", config_name.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root directory and resolve configured paths against it.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        if let Some(index) = self.media.index.take() {
            self.media.index = Some(resolve_config_path(&index, root));
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Metadata block in effect, or `None` when metadata overrides are disabled.
    pub fn metadata(&self) -> Option<MetadataConfig> {
        self.modules.seo.metadata.settings()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.media.validate(&mut diag);
        if let Some(metadata) = self.metadata() {
            metadata.validate(&mut diag);
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
