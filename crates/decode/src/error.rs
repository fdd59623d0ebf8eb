use solana_sdk::pubkey::Pubkey;

use crate::discriminator::AccountKind;

/// Error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A read demanded more bytes than remain in the buffer.
    #[error("buffer too short reading `{field}` at offset {offset}: needed {needed} bytes, {available} available")]
    BufferTooShort {
        /// Field being read.
        field: &'static str,
        /// Byte offset where the read started.
        offset: usize,
        /// Bytes required by the read.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
    /// An enum-coded byte is outside of its known range.
    #[error("invalid value {value} for enum field `{field}`")]
    InvalidEnumValue {
        /// Field being read.
        field: &'static str,
        /// The raw value.
        value: u8,
    },
    /// A fixed-size record has the wrong total length.
    #[error("unexpected length for {kind} account: expected {expected} bytes, found {actual}")]
    UnexpectedLength {
        /// Record kind.
        kind: AccountKind,
        /// Exact expected length, discriminator included.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// String bytes are not valid UTF-8.
    #[error("invalid utf-8 in `{field}` at offset {offset}")]
    InvalidUtf8 {
        /// Field being read.
        field: &'static str,
        /// Byte offset of the string bytes.
        offset: usize,
    },
    /// The buffer does not carry the discriminator of the requested record.
    #[error("discriminator mismatch for {expected} account: found {found:?}")]
    DiscriminatorMismatch {
        /// Record kind the decoder expected.
        expected: AccountKind,
        /// Leading bytes found (at most 8).
        found: Vec<u8>,
    },
    /// The account address is not the address derived from its own fields.
    #[error("address mismatch: account is at {actual}, derived {derived}")]
    AddressMismatch {
        /// Address the account was fetched from.
        actual: Pubkey,
        /// Address derived from the decoded fields.
        derived: Pubkey,
    },
    /// A variable-length field does not fit its `u32` length prefix.
    #[error("field `{field}` is too long to encode ({len} bytes)")]
    FieldTooLong {
        /// Field being written.
        field: &'static str,
        /// Field length.
        len: usize,
    },
    /// Seeds cannot be used for address derivation.
    #[error("invalid seeds: {0}")]
    InvalidSeeds(&'static str),
    /// No bump in `0..=255` produced an off-curve address.
    #[error("no valid bump found for program {program_id}")]
    NoBumpFound {
        /// Program the derivation was attempted for.
        program_id: Pubkey,
    },
}

impl Error {
    /// Returns whether this error invalidates the configuration rather than a single account.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoBumpFound { .. } | Self::InvalidSeeds(_))
    }

    pub(crate) fn buffer_too_short(
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    ) -> Self {
        Self::BufferTooShort {
            field,
            offset,
            needed,
            available,
        }
    }
}
