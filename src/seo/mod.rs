//! SEO plugin integration.
//!
//! Pure transforms from configuration to plugin state:
//!
//! | Module     | Purpose                                             |
//! |------------|-----------------------------------------------------|
//! | `options`  | String-keyed plugin option buckets                  |
//! | `social`   | Metadata config → social options override           |
//! | `general`  | General options override, bundled plugin decision   |
//! | `image`    | Image id resolution via canonical media URLs        |
//! | `metadata` | Override decision, Opengraph presenter gate         |
//! | `robots`   | `robots.txt` assembly                               |

pub mod general;
pub mod image;
pub mod metadata;
pub mod options;
pub mod robots;
pub mod social;

pub use general::{load_bundled_plugin, override_general_options};
pub use image::{ImageId, ImageLookup, MediaIndex};
pub use metadata::{OPENGRAPH_PRESENTERS, opengraph_presenters_enabled, overrides_default};
pub use options::Options;
pub use robots::{FsSource, RobotsAssembler};
pub use social::override_social_options;
