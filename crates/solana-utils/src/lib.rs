#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Pact Solana Utils
//!
//! Cluster selection and a minimal, transport-agnostic RPC client surface
//! used to fetch raw program accounts.

/// Error type.
pub mod error;

/// Cluster.
pub mod cluster;

/// Client traits.
pub mod client_traits;

/// Utils.
pub mod utils;

pub use crate::{
    client_traits::{GenericRpcClient, RpcClient, RpcClientExt, RpcSender},
    cluster::Cluster,
    error::Error,
    utils::WithSlot,
};

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(client)]
pub use solana_client;
pub use solana_sdk;

pub use solana_account_decoder_client_types;
pub use solana_rpc_client_api;
