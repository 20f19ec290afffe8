//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ProjectConfig;
use crate::log;
use crate::seo::{MediaIndex, Options};

/// Write command output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("write"; "{}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Write an option bucket as JSON.
pub fn write_options(path: Option<&Path>, options: &Options) -> Result<()> {
    write_output(path, &format!("{}\n", options.to_json()))
}

/// Load the configured media index, or an empty one.
pub fn load_media_index(config: &ProjectConfig) -> Result<MediaIndex> {
    match &config.media.index {
        Some(path) => {
            let index = MediaIndex::load(path)?;
            crate::debug!("options"; "media index: {} images", index.len());
            Ok(index)
        }
        None => Ok(MediaIndex::new()),
    }
}
