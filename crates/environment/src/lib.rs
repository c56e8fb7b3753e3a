//! Deployment environment for the Summitswap contracts.
//!
//! This crate provides:
//! - Per-network tables of deployed contract addresses and RPC endpoints
//! - The set of networks with contract verification support
//! - The resolved [`Environment`] for the active network

pub mod environment;
pub mod network;
pub mod resource;
pub mod table;
pub mod verify;

pub use environment::Environment;
pub use network::NetworkId;
pub use resource::{ParseResourceError, Resource};
pub use table::AddressTable;
pub use verify::VerifySupport;
