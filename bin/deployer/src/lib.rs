pub mod cli;
pub mod config;
pub mod require;

use config::{Config, OutputFormat};
use environment::{
    network::KNOWN_NETWORKS, verify::VERIFY_SUPPORTED_ON, Environment, NetworkId, Resource,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Environment variable the toolchain selects the active network with.
pub const NETWORK_ENV: &str = "HARDHAT_NETWORK";

/// Pick the active network: command line (or [`NETWORK_ENV`]) first, then the
/// config file.
pub fn active_network(cli: Option<NetworkId>, config: &Config) -> eyre::Result<NetworkId> {
    match (cli, &config.network) {
        (Some(network), _) => {
            debug!(%network, "Using network from command line");
            Ok(network)
        }
        (None, Some(network)) => {
            debug!(%network, "Using network from config file");
            Ok(network.clone())
        }
        (None, None) => Err(eyre::eyre!(
            "No active network: pass --network, set {NETWORK_ENV}, or set `network` in the config file"
        )),
    }
}

/// Render `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> eyre::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    };

    Ok(rendered)
}

/// What is available on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub network: NetworkId,
    pub verify_supported: bool,
    pub deployed: Vec<Resource>,
}

impl NetworkSummary {
    pub fn new(network: NetworkId) -> Self {
        let deployed = Resource::ALL
            .into_iter()
            .filter(|resource| resource.table().contains(&network))
            .collect();

        Self {
            verify_supported: VERIFY_SUPPORTED_ON.supports(&network),
            network,
            deployed,
        }
    }
}

/// Summaries of every network that appears in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkList {
    pub networks: Vec<NetworkSummary>,
}

pub fn known_networks() -> NetworkList {
    let networks = KNOWN_NETWORKS
        .into_iter()
        .map(|network| NetworkSummary::new(NetworkId::new(network)))
        .collect();

    NetworkList { networks }
}

/// Build the environment for `network`, warning when nothing is deployed there.
pub fn load_environment(network: &NetworkId) -> Environment {
    let env = Environment::resolve(network);

    if !network.is_known() {
        warn!(%network, "Network has no configured resources");
    }
    for resource in env.missing() {
        debug!(%network, %resource, "Resource not deployed");
    }

    env
}
