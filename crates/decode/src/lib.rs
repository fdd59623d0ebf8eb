#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Pact Decode
//!
//! Decoding of raw accounts owned by the Pact challenge program.
//!
//! Everything in this crate is a pure transformation over already-fetched
//! bytes: [`classify`] reads the 8-byte discriminator, the record types in
//! [`accounts`] decode their bodies with a bounds-checked [`AccountCursor`],
//! and [`Harvester`] assembles a batch of [`RawAccount`]s into typed
//! collections. [`pda`] derives the program addresses the records live at.

/// Error type.
pub mod error;

/// Bounds-checked little-endian reader.
pub mod cursor;

/// Discriminator registry and classification.
pub mod discriminator;

/// Account records.
pub mod accounts;

/// Program-derived addresses.
pub mod pda;

/// Raw account as fetched from the chain.
pub mod raw;

/// Harvest of program accounts.
pub mod harvest;

/// Size-based fallback classification.
pub mod fallback;

/// Time source for computed fields.
pub mod clock;

pub use crate::{
    accounts::{
        decode_any, AccountDecode, AccountEncode, AnyAccount, Challenge, CredentialAuthority,
        Receipt, Resolution, TokenKind,
    },
    clock::{Clock, FixedClock, SystemClock},
    cursor::AccountCursor,
    discriminator::{classify, AccountKind, Classification, Discriminator, DISCRIMINATOR_LEN},
    error::Error,
    fallback::{classify_by_size, Provenance, SizeClassification, SizeGuess},
    harvest::{
        DecodeFailure, HarvestOptions, HarvestResult, HarvestStats, HarvestedChallenge, Harvester,
    },
    raw::{Keyed, RawAccount},
};

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use solana_sdk;
