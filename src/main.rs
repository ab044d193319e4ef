//! kubetree - inspect the ownership topology and health of an application's
//! Kubernetes resources from a resource tree snapshot.

use anyhow::{Context, Result};
use clap::Parser;
use kubetree::cli::{self, Command};
use kubetree::config::ConfigLoader;
use kubetree::render::OutputFormat;
use std::path::PathBuf;

/// Resource topology and status aggregation for Kubernetes application snapshots
#[derive(Parser, Debug)]
#[command(name = "kubetree")]
#[command(about = "Resource topology and status aggregation for Kubernetes application snapshots", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Output format (text, json, yaml); defaults to output.format from config
    #[arg(long, short = 'o', global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug, args.log_file.as_deref())?;

    match args.command {
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            Ok(())
        }
        command => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let output = args.output.unwrap_or(config.output.format);
            tracing::debug!(
                "Configuration loaded: maxDepth={}, output={}",
                config.topology.max_depth,
                output
            );

            let rendered = cli::execute(&command, &config, output)?;
            print!("{}", rendered);
            Ok(())
        }
    }
}
