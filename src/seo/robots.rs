//! `robots.txt` assembly.
//!
//! Appends a static robots fragment from the project, then a sitemap
//! directive for public sites.
//!
//! Fragments are looked up in priority order, first match wins:
//!
//! | Priority | Path                 | Notes                           |
//! |----------|----------------------|---------------------------------|
//! | 1        | `.config/robots.txt` | current location                |
//! | 2        | `config/robots.txt`  | deprecated, logs a warning      |

use std::fs;
use std::path::{Path, PathBuf};

/// Sitemap index path appended to the site URL.
pub const SITEMAP_INDEX: &str = "/sitemap_index.xml";

const LEGACY_DEPRECATION: &str =
    r#"The "config/robots.txt" file is deprecated as of Altis 2.0. Use ".config/robots.txt" instead."#;

/// Read access to robots fragments. Unreadable files count as absent.
pub trait FileSource {
    fn read(&self, path: &Path) -> Option<String>;
}

/// Reads fragments from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}

/// A candidate fragment location.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    /// Deprecation notice emitted when this candidate is used.
    pub deprecation: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct RobotsAssembler {
    candidates: Vec<Candidate>,
    /// Absolute site URL without trailing slash.
    site_url: String,
}

impl RobotsAssembler {
    /// Assembler for a project rooted at `root`, serving `site_url`.
    pub fn new(root: &Path, site_url: &str) -> Self {
        Self {
            candidates: vec![
                Candidate {
                    path: root.join(".config/robots.txt"),
                    deprecation: None,
                },
                Candidate {
                    path: root.join("config/robots.txt"),
                    deprecation: Some(LEGACY_DEPRECATION),
                },
            ],
            site_url: site_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// `Sitemap:` directive for this site, newline-terminated.
    pub fn sitemap_line(&self) -> String {
        format!("Sitemap: {}{}\n", self.site_url, SITEMAP_INDEX)
    }

    /// Assemble the body, sending deprecation notices to the logger.
    pub fn assemble(&self, base: &str, is_public: bool, files: &impl FileSource) -> String {
        self.assemble_with(base, is_public, files, |message| {
            crate::log!("warning"; "{}", message);
        })
    }

    /// Assemble the body, sending deprecation notices to `on_deprecated`.
    pub fn assemble_with(
        &self,
        base: &str,
        is_public: bool,
        files: &impl FileSource,
        mut on_deprecated: impl FnMut(&str),
    ) -> String {
        let mut output = base.to_owned();

        let found = self
            .candidates
            .iter()
            .find_map(|candidate| files.read(&candidate.path).map(|text| (candidate, text)));

        if let Some((candidate, text)) = found {
            if let Some(message) = candidate.deprecation {
                on_deprecated(message);
            }
            crate::debug!("robots"; "appending {}", candidate.path.display());
            output.push('\n');
            output.push_str(&text);
            output.push('\n');
        }

        if is_public {
            output.push_str(&self.sitemap_line());
        }

        output
    }
}
