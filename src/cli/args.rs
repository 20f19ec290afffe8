//! Command-line interface definitions.

use crate::config::Environment;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Config-driven SEO plugin options and robots.txt
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seoconf.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Apply the metadata config to the stored social options
    #[command(visible_alias = "s")]
    Social {
        #[command(flatten)]
        io: OptionsArgs,
    },

    /// Apply environment overrides to the stored general options
    #[command(visible_alias = "g")]
    General {
        #[command(flatten)]
        io: OptionsArgs,

        /// Environment type (overrides `site.environment`)
        #[arg(short, long, value_enum)]
        environment: Option<Environment>,
    },

    /// Assemble the robots.txt body
    #[command(visible_alias = "r")]
    Robots {
        /// File holding the base robots.txt text generated by the platform
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        base: Option<PathBuf>,

        /// Whether the site is public (overrides `site.public`)
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        public: Option<bool>,

        /// Write the body to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Report metadata override and plugin loading decisions
    #[command(visible_alias = "c")]
    Check {
        /// Stored social options (JSON object)
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        options: Option<PathBuf>,
    },
}

/// Input/output of an options override.
#[derive(clap::Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Stored options (JSON object). Starts from an empty set if omitted.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub options: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_social() {
        let cli = Cli::parse_from(["seoconf", "social", "--options", "social.json"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Social { io } => {
                assert_eq!(io.options, Some(PathBuf::from("social.json")));
                assert!(io.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_robots_public_flag() {
        let cli = Cli::parse_from(["seoconf", "robots", "--public"]);
        assert!(matches!(cli.command, Commands::Robots { public: Some(true), .. }));

        let cli = Cli::parse_from(["seoconf", "r", "--public", "false", "-C", "site.toml"]);
        assert!(matches!(cli.command, Commands::Robots { public: Some(false), .. }));
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));

        let cli = Cli::parse_from(["seoconf", "robots"]);
        assert!(matches!(cli.command, Commands::Robots { public: None, .. }));
    }

    #[test]
    fn test_parse_general_environment() {
        let cli = Cli::parse_from(["seoconf", "general", "-e", "staging", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::General {
                environment: Some(Environment::Staging),
                ..
            }
        ));
    }
}
