//! seoconf - config-driven SEO plugin options and robots.txt.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;
    debug!("config"; "root: {}", config.get_root().display());

    match &cli.command {
        Commands::Social { io } => cli::options::run_social(&config, io),
        Commands::General { io, environment } => {
            cli::options::run_general(&config, io, *environment)
        }
        Commands::Robots {
            base,
            public,
            output,
        } => cli::robots::run_robots(&config, base.as_deref(), *public, output.as_deref()),
        Commands::Check { options } => cli::check::run_check(&config, options.as_deref()),
    }
}
