use pact_solana_utils::solana_account_decoder_client_types::UiAccountEncoding;
use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};

/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Account decoding error.
    #[error("decode: {0}")]
    Decode(#[from] pact_decode::Error),
    /// Solana utils error.
    #[error("solana-utils: {0}")]
    SolanaUtils(#[from] pact_solana_utils::Error),
    /// Base64 decode error.
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Base58 decode error.
    #[error("base58: {0}")]
    Base58(#[from] bs58::decode::Error),
    /// Parse pubkey error.
    #[error("parse pubkey: {0}")]
    ParsePubkey(#[from] ParsePubkeyError),
    /// The RPC returned account data in an encoding that carries no raw bytes.
    #[error("unsupported account encoding: {0:?}")]
    UnsupportedEncoding(UiAccountEncoding),
    /// Account not found.
    #[error("account `{0}` not found")]
    AccountNotFound(Pubkey),
    /// Account is not owned by the program.
    #[error("account `{address}` is owned by `{owner}`, expected `{expected}`")]
    InvalidOwner {
        /// Account address.
        address: Pubkey,
        /// Actual owner.
        owner: Pubkey,
        /// Expected owner.
        expected: Pubkey,
    },
    /// The account data matches no known record kind.
    #[error("account `{0}` is not a known record")]
    UnknownAccount(Pubkey),
    /// Custom error.
    #[error("custom: {0}")]
    Custom(String),
}

impl Error {
    /// Create a custom error.
    pub fn custom(msg: impl ToString) -> Self {
        Self::Custom(msg.to_string())
    }

    /// Returns whether the error signals a misconfiguration rather than bad data.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Decode(err) if err.is_fatal())
    }
}
