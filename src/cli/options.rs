//! `social` and `general` commands: option bucket overrides.

use anyhow::Result;

use super::OptionsArgs;
use super::common::{load_media_index, write_options};
use crate::config::{Environment, ProjectConfig};
use crate::log;
use crate::seo::{Options, override_general_options, override_social_options};

/// Apply the metadata block to the stored social options.
///
/// With metadata disabled the options are written back unchanged.
pub fn run_social(config: &ProjectConfig, io: &OptionsArgs) -> Result<()> {
    let options = Options::read_or_default(io.options.as_deref())?;
    let options = social_options(config, options)?;
    write_options(io.output.as_deref(), &options)
}

fn social_options(config: &ProjectConfig, options: Options) -> Result<Options> {
    let Some(metadata) = config.metadata() else {
        log!("options"; "metadata disabled, social options left unchanged");
        return Ok(options);
    };

    let media = load_media_index(config)?;
    let options = override_social_options(&metadata, options, &media);
    log!("options"; "social options overridden from config");
    Ok(options)
}

/// Apply environment overrides to the stored general options.
pub fn run_general(
    config: &ProjectConfig,
    io: &OptionsArgs,
    environment: Option<Environment>,
) -> Result<()> {
    let environment = environment.unwrap_or(config.site.environment);
    let options = Options::read_or_default(io.options.as_deref())?;
    let options = override_general_options(options, environment);
    log!("options"; "general options overridden for {}", environment);
    write_options(io.output.as_deref(), &options)
}
