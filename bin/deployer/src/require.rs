//! Checks for resources a deployment step cannot proceed without.
//!
//! The environment reports an undeployed resource as `None`; these helpers
//! turn that into an error at the point where the value is needed.

use alloy_primitives::Address;
use environment::{Environment, NetworkId, Resource};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequireError {
    /// Resource has no entry for the active network
    #[error("{resource} is not deployed on network {network}")]
    Missing {
        resource: Resource,
        network: NetworkId,
    },

    /// Configured value is not a contract address
    #[error("{resource} on network {network} is not a valid address: {value}")]
    InvalidAddress {
        resource: Resource,
        network: NetworkId,
        value: &'static str,
    },
}

/// Resolved value of `resource`, or [`RequireError::Missing`].
pub fn require(env: &Environment, resource: Resource) -> Result<&'static str, RequireError> {
    env.get(resource).ok_or_else(|| RequireError::Missing {
        resource,
        network: env.network.clone(),
    })
}

/// Resolved contract address of `resource`.
pub fn require_address(env: &Environment, resource: Resource) -> Result<Address, RequireError> {
    let value = require(env, resource)?;
    value
        .parse()
        .map_err(|_| RequireError::InvalidAddress {
            resource,
            network: env.network.clone(),
            value,
        })
}

/// Resolved RPC endpoint.
pub fn require_rpc_url(env: &Environment) -> Result<&'static str, RequireError> {
    require(env, Resource::RpcUrl)
}
