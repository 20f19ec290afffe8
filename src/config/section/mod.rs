//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seoconf.toml`:
//!
//! | Module  | TOML Section      | Purpose                                |
//! |---------|-------------------|----------------------------------------|
//! | `site`  | `[site]`          | Site URL, visibility, environment      |
//! | `seo`   | `[modules.seo]`   | Module toggles and metadata overrides  |
//! | `media` | `[media]`         | Canonical-URL index for image lookups  |

mod media;
pub mod seo;
mod site;

pub use media::MediaSectionConfig;
pub use seo::{Feature, MetadataConfig, ModulesSectionConfig, SeoModuleConfig};
pub use site::{Environment, SiteSectionConfig};
