//! Command line interface of the `deployer` binary.
//!
//! - `show`: the full resolved environment
//! - `get`: a single resolved value, failing if it is not deployed
//! - `networks`: what is deployed on each known network

use crate::{
    active_network,
    config::{Config, OutputFormat},
    known_networks, load_environment, render,
    require::{require, require_address},
    NETWORK_ENV,
};
use clap::{Parser, Subcommand};
use environment::{NetworkId, Resource};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "deployer")]
#[command(about = "Resolve contract addresses and endpoints for the active network")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Active network identifier (chain id)
    #[arg(short, long, global = true, env = NETWORK_ENV)]
    pub network: Option<NetworkId>,

    /// Output format (defaults to the config file's, then json)
    #[arg(short, long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved environment
    Show,

    /// Print one resolved value
    Get {
        /// Resource name (`router`, `rpc-url`, ...) or key (`SUMMITSWAP_ROUTER`, ...)
        resource: Resource,

        /// Parse the value as a contract address
        #[arg(long)]
        address: bool,
    },

    /// List known networks and what is deployed on them
    Networks,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s {
        "json" => Ok(OutputFormat::Json),
        "toml" => Ok(OutputFormat::Toml),
        other => Err(format!("unknown format `{other}`, expected json or toml")),
    }
}

/// Run the parsed command and return what it prints.
pub fn run(cli: Cli) -> eyre::Result<String> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Command::Networks => render(&known_networks(), format),
        Command::Show => {
            let network = active_network(cli.network, &config)?;
            let env = load_environment(&network);
            info!(%network, verify = env.is_verify_supported, "Resolved environment");

            render(&env, format)
        }
        Command::Get { resource, address } => {
            let network = active_network(cli.network, &config)?;
            let env = load_environment(&network);

            if address {
                Ok(require_address(&env, resource)?.to_string())
            } else {
                Ok(require(&env, resource)?.to_string())
            }
        }
    }
}
