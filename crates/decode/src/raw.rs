use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::discriminator::{classify, Classification};

/// An account as fetched from the chain, with its data already decoded to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    /// Account address.
    pub address: Pubkey,
    /// Owner program.
    pub owner: Pubkey,
    /// Balance in lamports.
    pub lamports: u64,
    /// Account data.
    pub data: Vec<u8>,
}

impl RawAccount {
    /// Create a raw account.
    pub fn new(address: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>) -> Self {
        Self {
            address,
            owner,
            lamports,
            data,
        }
    }

    /// Classify by discriminator.
    pub fn classify(&self) -> Classification {
        classify(&self.data)
    }
}

impl From<(Pubkey, Account)> for RawAccount {
    fn from((address, account): (Pubkey, Account)) -> Self {
        Self {
            address,
            owner: account.owner,
            lamports: account.lamports,
            data: account.data,
        }
    }
}

/// A decoded record together with the address it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct Keyed<T> {
    /// Account address.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub address: Pubkey,
    /// Decoded record.
    #[cfg_attr(serde, serde(flatten))]
    pub account: T,
}

impl<T> Keyed<T> {
    /// Create a keyed record.
    pub fn new(address: Pubkey, account: T) -> Self {
        Self { address, account }
    }
}
