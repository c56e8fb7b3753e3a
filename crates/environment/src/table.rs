//! Per-network lookup tables.
//!
//! Each table maps a network identifier to the address (or URL) of one kind
//! of resource on that network. A network without an entry has nothing of
//! that kind deployed.

use crate::network::{BSC_MAINNET, BSC_TESTNET};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Wrapped BNB token contracts.
pub const WBNBS: AddressTable = AddressTable::new(&[
    (BSC_MAINNET, "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
    (BSC_TESTNET, "0xae13d989dac2f0debff460ac112a837c89baa7cd"),
]);

/// Summitswap pair factory contracts.
pub const SUMMITSWAP_FACTORIES: AddressTable =
    AddressTable::new(&[(BSC_TESTNET, "0x765317D857df6BceA1B3489b8B66422B9967eF8B")]);

/// Summitswap router contracts.
pub const SUMMITSWAP_ROUTERS: AddressTable =
    AddressTable::new(&[(BSC_TESTNET, "0x1ebCD5e8a378F3b72900bF5BaEb073872f105B73")]);

/// Summitswap referral registry contracts.
pub const SUMMITSWAP_REFERRALS: AddressTable =
    AddressTable::new(&[(BSC_TESTNET, "0x7460E14B141e1978439C350E96862De684c91353")]);

/// Summitswap middleman registry contracts.
pub const SUMMITSWAP_MIDDLEMANS: AddressTable =
    AddressTable::new(&[(BSC_TESTNET, "0x88343503c9B9db8ce00d9dB364D7c89C295dA60E")]);

/// Public RPC endpoints.
pub const RPC_URLS: AddressTable = AddressTable::new(&[
    (BSC_MAINNET, "https://bsc-dataseed.binance.org/"),
    (BSC_TESTNET, "https://data-seed-prebsc-1-s1.binance.org:8545/"),
]);

/// Immutable mapping from network identifier to a compiled-in value.
///
/// Values are kept exactly as written; nothing here checks that they are
/// well-formed addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AddressTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Value configured for `network`, or `None` if nothing is deployed there.
    pub fn get(&self, network: impl AsRef<str>) -> Option<&'static str> {
        let network = network.as_ref();
        self.entries
            .iter()
            .find(|(key, _)| *key == network)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, network: impl AsRef<str>) -> bool {
        self.get(network).is_some()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Networks with an entry in this table.
    pub fn networks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl Serialize for AddressTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (network, value) in self.iter() {
            map.serialize_entry(network, value)?;
        }
        map.end()
    }
}
