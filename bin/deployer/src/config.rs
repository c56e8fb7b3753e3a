use environment::NetworkId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for rendered environments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Deployer configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Active network, used when none is given on the command line
    #[serde(default)]
    pub network: Option<NetworkId>,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}
