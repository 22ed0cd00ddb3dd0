//! CLI command implementations.

pub mod build;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Output directory (overrides build.out_dir).
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Skip HTML and CSS minification.
    #[arg(long)]
    pub no_minify: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
