use crate::{
    cursor::AccountCursor,
    discriminator::{AccountKind, Discriminator, DISCRIMINATOR_LEN},
    Error,
};

mod authority;
mod challenge;
mod receipt;
mod resolution;

pub use self::{
    authority::CredentialAuthority,
    challenge::{Challenge, TokenKind},
    receipt::Receipt,
    resolution::Resolution,
};

/// Records that can be decoded from account data.
///
/// The input always includes the discriminator. Decoding never returns a
/// partially-filled record: either every field is read or an error is
/// returned.
pub trait AccountDecode: Discriminator + Sized {
    /// Whether the record has no variable-length fields.
    ///
    /// Fixed-size records must consume the account data exactly. Data that
    /// is too short fails on the first missing field with
    /// [`Error::BufferTooShort`]; [`Error::UnexpectedLength`] is only
    /// returned for trailing bytes.
    const IS_FIXED_SIZE: bool;

    /// Decode the fields following the discriminator.
    fn decode_fields(cursor: &mut AccountCursor<'_>) -> crate::Result<Self>;

    /// Decode from full account data.
    fn decode(data: &[u8]) -> crate::Result<Self> {
        check_discriminator::<Self>(data)?;
        let mut cursor = AccountCursor::with_offset(data, DISCRIMINATOR_LEN)?;
        let record = Self::decode_fields(&mut cursor)?;
        if Self::IS_FIXED_SIZE && !cursor.is_empty() {
            return Err(Error::UnexpectedLength {
                kind: Self::KIND,
                expected: cursor.offset(),
                actual: data.len(),
            });
        }
        Ok(record)
    }
}

/// Records that can be encoded into account data.
pub trait AccountEncode: Discriminator {
    /// Append the fields following the discriminator.
    fn encode_fields(&self, buf: &mut Vec<u8>) -> crate::Result<()>;

    /// Encode into full account data, discriminator included.
    fn encode(&self) -> crate::Result<Vec<u8>> {
        let mut buf = Self::DISCRIMINATOR.to_vec();
        self.encode_fields(&mut buf)?;
        Ok(buf)
    }
}

fn check_discriminator<T: Discriminator>(data: &[u8]) -> crate::Result<()> {
    match data.first_chunk::<DISCRIMINATOR_LEN>() {
        Some(disc) if *disc == T::DISCRIMINATOR => Ok(()),
        _ => Err(Error::DiscriminatorMismatch {
            expected: T::KIND,
            found: data.iter().take(DISCRIMINATOR_LEN).copied().collect(),
        }),
    }
}

pub(crate) fn put_length_prefixed(
    buf: &mut Vec<u8>,
    bytes: &[u8],
    field: &'static str,
) -> crate::Result<()> {
    let len = u32::try_from(bytes.len()).map_err(|_| Error::FieldTooLong {
        field,
        len: bytes.len(),
    })?;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(bytes);
    Ok(())
}

/// Decode account data of the given kind into an [`AnyAccount`].
pub fn decode_any(kind: AccountKind, data: &[u8]) -> crate::Result<AnyAccount> {
    Ok(match kind {
        AccountKind::Challenge => AnyAccount::Challenge(Challenge::decode(data)?),
        AccountKind::CredentialAuthority => {
            AnyAccount::CredentialAuthority(CredentialAuthority::decode(data)?)
        }
        AccountKind::Receipt => AnyAccount::Receipt(Receipt::decode(data)?),
        AccountKind::Resolution => AnyAccount::Resolution(Resolution::decode(data)?),
    })
}

/// Any decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
#[cfg_attr(serde, serde(tag = "kind", rename_all = "snake_case"))]
pub enum AnyAccount {
    /// Challenge.
    Challenge(Challenge),
    /// Credential authority.
    CredentialAuthority(CredentialAuthority),
    /// Receipt.
    Receipt(Receipt),
    /// Resolution.
    Resolution(Resolution),
}

impl AnyAccount {
    /// Kind of the record.
    pub fn kind(&self) -> AccountKind {
        match self {
            Self::Challenge(_) => AccountKind::Challenge,
            Self::CredentialAuthority(_) => AccountKind::CredentialAuthority,
            Self::Receipt(_) => AccountKind::Receipt,
            Self::Resolution(_) => AccountKind::Resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_length_errors() {
        for kind in [AccountKind::Receipt, AccountKind::CredentialAuthority] {
            let short = kind.discriminator().to_vec();
            assert!(matches!(
                decode_any(kind, &short),
                Err(Error::BufferTooShort { offset: 8, .. })
            ));

            let mut long = short;
            long.resize(64, 0);
            assert!(matches!(
                decode_any(kind, &long),
                Err(Error::UnexpectedLength { actual: 64, .. })
            ));
        }
    }
}
