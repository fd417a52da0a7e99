//! POS CLI - Terminal register for the POS backend.
//!
//! Commands:
//! - `pos register` - Run an interactive register session
//! - `pos lookup` - Look a single product code up
//! - `pos config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, LookupArgs, RegisterArgs};

/// POS CLI - Ring up purchases against the POS backend
#[derive(Parser)]
#[command(name = "pos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = "POS_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true, env = "POS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive register session
    Register(RegisterArgs),

    /// Look up a product by code
    Lookup(LookupArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let overrides = config::Overrides {
        api_url: cli.api_url,
        timeout_secs: cli.timeout_secs,
    };
    let ctx = match context::Context::load(cli.config.as_deref(), overrides, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Register(args) => commands::register::run(args, &ctx).await,
        Commands::Lookup(args) => commands::lookup::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
