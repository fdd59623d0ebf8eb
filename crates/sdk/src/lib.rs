#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Pact SDK
//!
//! Read-side client for the challenge program: fetches the raw accounts it
//! owns, harvests them into typed records and answers point lookups through
//! derived addresses.

/// Error type.
pub mod error;

/// Program configuration.
pub mod config;

/// Serialization helpers.
pub mod serde;

/// RPC boundary adapters.
pub mod account;

/// Account sources.
pub mod source;

/// Client.
pub mod client;

pub use crate::{
    client::Client,
    config::ProgramConfig,
    error::Error,
    source::AccountSource,
};

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use pact_decode as decode;
pub use pact_solana_utils as solana_utils;
