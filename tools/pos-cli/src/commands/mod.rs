//! CLI command implementations.

pub mod config;
pub mod lookup;
pub mod register;

use clap::{Args, Subcommand};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Skip the confirmation prompt before committing a purchase.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// Product code.
    pub code: String,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
