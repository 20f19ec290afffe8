//! General plugin options override.
//!
//! The plugin's admin-bar menu is always disabled. Outside production
//! the "search engines discouraged" notice is silenced as well.

use super::options::Options;
use crate::config::Environment;

pub fn override_general_options(mut options: Options, environment: Environment) -> Options {
    options.set("enable_admin_bar_menu", false);

    if !environment.is_production() {
        options.set("ignore_search_engines_discouraged_notice", true);
    }

    options
}

/// The bundled free plugin only loads when the premium plugin is absent.
pub const fn load_bundled_plugin(premium: bool) -> bool {
    !premium
}
