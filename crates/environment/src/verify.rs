//! Networks on which deployed contracts can be source-verified.

use crate::network::{BSC_MAINNET, BSC_TESTNET};

/// Networks whose block explorer supports automated source verification.
pub const VERIFY_SUPPORTED_ON: VerifySupport = VerifySupport::new(&[BSC_MAINNET, BSC_TESTNET]);

/// Set of network identifiers with verification support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifySupport {
    networks: &'static [&'static str],
}

impl VerifySupport {
    pub const fn new(networks: &'static [&'static str]) -> Self {
        Self { networks }
    }

    /// Exact membership test; no normalization of the identifier.
    pub fn supports(&self, network: impl AsRef<str>) -> bool {
        self.networks.contains(&network.as_ref())
    }
}
