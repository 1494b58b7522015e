//! luxd-version
//!
//! Reports the version identity of a luxd node, checks whether a peer's
//! version is compatible with it, and looks up which releases spoke a given
//! RPC chain VM protocol revision.

mod commands;
mod config;
mod identity;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use common::setup_logging;
use std::process::ExitCode;
use tracing::{debug, info};
use version::NodeVersions;

#[derive(Parser, Debug)]
#[command(name = "luxd-version")]
#[command(
    author,
    version,
    about = "luxd version identity and peer compatibility"
)]
#[command(long_about = "
Reports the version of this luxd build and decides whether peer versions are
compatible with it. Peers must run the same client and be at or above the
minimum compatible version in force at the query time; before the configured
cutover the previous minimum still applies.

EXAMPLES:
    # Show the version identity of this build
    luxd-version show

    # Check a peer against the current floor
    luxd-version check luxd/1.12.5

    # Check a peer as of a given date
    luxd-version check luxd/1.12.5 --at 2023-12-01

    # List the protocol compatibility table
    luxd-version protocol

    # Which protocol revision did a release speak?
    luxd-version protocol --release 1.22.0

CONFIGURATION:
    The tool looks for configuration files in the following order:
    1. Path specified with --config
    2. ~/.config/luxd-version/node.toml
    3. /etc/luxd-version/node.toml
    4. Built-in defaults
")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<std::path::PathBuf>,

    /// Save default configuration to default location and exit
    #[arg(long)]
    save_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the version identity of this build
    Show,

    /// Check whether a peer version is compatible
    Check {
        /// Peer version as name/major.minor.patch
        peer: String,

        /// Query time (RFC 3339 or YYYY-MM-DD), defaults to now
        #[arg(long, value_name = "TIME")]
        at: Option<String>,
    },

    /// Query the protocol compatibility table
    Protocol {
        /// Protocol revision to list
        revision: Option<u32>,

        /// Find the revision spoken by this release (major.minor.patch)
        #[arg(long, value_name = "VERSION", conflicts_with = "revision")]
        release: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Handle --save-config flag early (before loading config)
    if args.save_config {
        let config = config::NodeConfig::default();
        let path = config::NodeConfig::default_path();
        config.save(&path).context("Failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if let Some(ref path) = args.config {
        config::NodeConfig::load(Some(config::expand_path(path)))
            .context("Failed to load configuration")?
    } else {
        config::NodeConfig::load_or_default()
    };

    // Use CLI log level if specified, otherwise use config value
    let log_level = args.log_level.as_deref().unwrap_or(&config.node.log_level);
    setup_logging(log_level).context("Failed to setup logging")?;

    info!("luxd-version v{}", env!("CARGO_PKG_VERSION"));
    debug!("Log level: {}", log_level);

    let identity = identity::apply_overrides(
        identity::from_build_env().context("Invalid build identity")?,
        &config.identity,
    );

    // The version context is complete or the process stops here.
    let versions = NodeVersions::new(identity, config.compatibility.min_compatible_time)
        .context("Failed to initialize version context")?;

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            print!("{}", commands::show(&versions));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { peer, at } => {
            let now = match at {
                Some(text) => commands::parse_time(&text)?,
                None => Utc::now(),
            };
            let (verdict, report) = commands::check(&versions, &peer, now)?;
            println!("{}", report);
            Ok(if verdict.is_compatible() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Protocol { revision, release } => {
            let report =
                commands::protocol(versions.protocol_table(), revision, release.as_deref())?;
            print!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
    }
}
