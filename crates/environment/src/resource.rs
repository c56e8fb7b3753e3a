//! Kinds of per-network resources.

use crate::table::{
    AddressTable, RPC_URLS, SUMMITSWAP_FACTORIES, SUMMITSWAP_MIDDLEMANS, SUMMITSWAP_REFERRALS,
    SUMMITSWAP_ROUTERS, WBNBS,
};
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One kind of per-network resource, each backed by its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// Wrapped native token
    Wbnb,
    /// Swap pair factory
    Factory,
    /// Swap router
    Router,
    /// Referral registry
    Referral,
    /// Middleman registry
    Middleman,
    /// RPC endpoint
    RpcUrl,
}

impl Resource {
    pub const ALL: [Self; 6] = [
        Self::Wbnb,
        Self::Factory,
        Self::Router,
        Self::Referral,
        Self::Middleman,
        Self::RpcUrl,
    ];

    /// Table holding this resource for every network.
    pub const fn table(self) -> AddressTable {
        match self {
            Self::Wbnb => WBNBS,
            Self::Factory => SUMMITSWAP_FACTORIES,
            Self::Router => SUMMITSWAP_ROUTERS,
            Self::Referral => SUMMITSWAP_REFERRALS,
            Self::Middleman => SUMMITSWAP_MIDDLEMANS,
            Self::RpcUrl => RPC_URLS,
        }
    }

    /// Key of the resolved value in the environment.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wbnb => "WBNB",
            Self::Factory => "SUMMITSWAP_FACTORY",
            Self::Router => "SUMMITSWAP_ROUTER",
            Self::Referral => "SUMMITSWAP_REFERRAL",
            Self::Middleman => "SUMMITSWAP_MIDDLEMAN",
            Self::RpcUrl => "RPC_URL",
        }
    }

    /// Short kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wbnb => "wbnb",
            Self::Factory => "factory",
            Self::Router => "router",
            Self::Referral => "referral",
            Self::Middleman => "middleman",
            Self::RpcUrl => "rpc-url",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown resource: {0}")]
pub struct ParseResourceError(pub String);

impl FromStr for Resource {
    type Err = ParseResourceError;

    /// Accepts the short name (`router`) or the environment key
    /// (`SUMMITSWAP_ROUTER`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.name() == s || resource.key() == s)
            .ok_or_else(|| ParseResourceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_keys() {
        assert_eq!("router".parse::<Resource>().unwrap(), Resource::Router);
        assert_eq!("rpc-url".parse::<Resource>().unwrap(), Resource::RpcUrl);
        assert_eq!(
            "SUMMITSWAP_MIDDLEMAN".parse::<Resource>().unwrap(),
            Resource::Middleman
        );
        assert_eq!("WBNB".parse::<Resource>().unwrap(), Resource::Wbnb);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "pair".parse::<Resource>().unwrap_err();
        assert_eq!(err, ParseResourceError("pair".to_string()));
        assert_eq!(err.to_string(), "Unknown resource: pair");
        // table keys name the whole table, not a single value
        assert!("WBNBS".parse::<Resource>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>().unwrap(), resource);
        }
    }

    #[test]
    fn test_tables() {
        assert_eq!(Resource::Wbnb.table(), WBNBS);
        assert_eq!(Resource::RpcUrl.table(), RPC_URLS);
    }
}
