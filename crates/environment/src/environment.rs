//! The resolved deployment environment for the active network.

use crate::{
    network::NetworkId,
    resource::Resource,
    table::{
        AddressTable, RPC_URLS, SUMMITSWAP_FACTORIES, SUMMITSWAP_MIDDLEMANS, SUMMITSWAP_REFERRALS,
        SUMMITSWAP_ROUTERS, WBNBS,
    },
    verify::VERIFY_SUPPORTED_ON,
};
use serde::Serialize;

/// Contract addresses and endpoints for one network, alongside the full
/// per-network tables.
///
/// Built once for the active network and passed by reference to whatever
/// deploys or tests against it. A resolved value of `None` means the resource
/// is not deployed on that network; callers that need it decide whether that
/// is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Environment {
    /// Network this environment was resolved for
    pub network: NetworkId,

    pub wbnb: Option<&'static str>,
    pub summitswap_factory: Option<&'static str>,
    pub summitswap_router: Option<&'static str>,
    pub summitswap_referral: Option<&'static str>,
    pub summitswap_middleman: Option<&'static str>,
    pub rpc_url: Option<&'static str>,

    /// Whether contracts deployed here can be source-verified
    pub is_verify_supported: bool,

    pub wbnbs: AddressTable,
    pub summitswap_factories: AddressTable,
    pub summitswap_routers: AddressTable,
    pub summitswap_referrals: AddressTable,
    pub summitswap_middlemans: AddressTable,
    pub rpc_urls: AddressTable,
}

impl Environment {
    /// Resolve every table against `network`.
    ///
    /// Never fails: an unrecognized network resolves every value to `None`
    /// and verification support to `false`.
    pub fn resolve(network: &NetworkId) -> Self {
        Self {
            network: network.clone(),
            wbnb: WBNBS.get(network),
            summitswap_factory: SUMMITSWAP_FACTORIES.get(network),
            summitswap_router: SUMMITSWAP_ROUTERS.get(network),
            summitswap_referral: SUMMITSWAP_REFERRALS.get(network),
            summitswap_middleman: SUMMITSWAP_MIDDLEMANS.get(network),
            rpc_url: RPC_URLS.get(network),
            is_verify_supported: VERIFY_SUPPORTED_ON.supports(network),
            wbnbs: WBNBS,
            summitswap_factories: SUMMITSWAP_FACTORIES,
            summitswap_routers: SUMMITSWAP_ROUTERS,
            summitswap_referrals: SUMMITSWAP_REFERRALS,
            summitswap_middlemans: SUMMITSWAP_MIDDLEMANS,
            rpc_urls: RPC_URLS,
        }
    }

    /// Resolved value of `resource` on the active network.
    pub const fn get(&self, resource: Resource) -> Option<&'static str> {
        match resource {
            Resource::Wbnb => self.wbnb,
            Resource::Factory => self.summitswap_factory,
            Resource::Router => self.summitswap_router,
            Resource::Referral => self.summitswap_referral,
            Resource::Middleman => self.summitswap_middleman,
            Resource::RpcUrl => self.rpc_url,
        }
    }

    /// Full table of `resource` across networks.
    pub const fn table(&self, resource: Resource) -> &AddressTable {
        match resource {
            Resource::Wbnb => &self.wbnbs,
            Resource::Factory => &self.summitswap_factories,
            Resource::Router => &self.summitswap_routers,
            Resource::Referral => &self.summitswap_referrals,
            Resource::Middleman => &self.summitswap_middlemans,
            Resource::RpcUrl => &self.rpc_urls,
        }
    }

    /// Resources with no entry for the active network.
    pub fn missing(&self) -> impl Iterator<Item = Resource> + '_ {
        Resource::ALL
            .into_iter()
            .filter(|resource| self.get(*resource).is_none())
    }
}
