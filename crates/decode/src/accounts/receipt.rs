use crate::{
    cursor::AccountCursor,
    discriminator::{AccountKind, Discriminator},
};

use super::{AccountDecode, AccountEncode};

/// Participation receipt.
///
/// A receipt only stores its bump. The challenge and challenger it belongs to
/// are seeds of its address and cannot be recovered from the account data;
/// see [`crate::pda::is_receipt_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct Receipt {
    /// Bump of the receipt address.
    pub bump: u8,
}

impl Receipt {
    /// Total account length.
    pub const LEN: usize = 8 + 1;
}

impl Discriminator for Receipt {
    const KIND: AccountKind = AccountKind::Receipt;
}

impl AccountDecode for Receipt {
    const IS_FIXED_SIZE: bool = true;

    fn decode_fields(cursor: &mut AccountCursor<'_>) -> crate::Result<Self> {
        let bump = cursor.read_u8("bump")?;
        Ok(Self { bump })
    }
}

impl AccountEncode for Receipt {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> crate::Result<()> {
        buf.push(self.bump);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::*;

    #[test]
    fn decode_receipt() {
        let data = Receipt { bump: 253 }.encode().unwrap();
        assert_eq!(data.len(), Receipt::LEN);
        assert_eq!(Receipt::decode(&data).unwrap(), Receipt { bump: 253 });
    }

    #[test]
    fn extra_byte_is_unexpected_length() {
        let mut data = Receipt::DISCRIMINATOR.to_vec();
        data.extend_from_slice(&[1, 2]);
        assert_eq!(
            Receipt::decode(&data).unwrap_err(),
            Error::UnexpectedLength {
                kind: AccountKind::Receipt,
                expected: Receipt::LEN,
                actual: 10,
            }
        );
    }

    #[test]
    fn missing_bump_is_buffer_too_short() {
        assert!(matches!(
            Receipt::decode(&Receipt::DISCRIMINATOR).unwrap_err(),
            Error::BufferTooShort {
                field: "bump",
                offset: 8,
                needed: 1,
                available: 0,
            }
        ));
    }
}
