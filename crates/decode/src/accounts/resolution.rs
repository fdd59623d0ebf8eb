use crate::{
    cursor::AccountCursor,
    discriminator::{AccountKind, Discriminator},
};

use super::{put_length_prefixed, AccountDecode, AccountEncode};

/// Outcome of a challenge after its staking period.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Merkle root of the winner list.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::hex::Hex>"))]
    pub root_hash: [u8; 32],
    /// Number of winners.
    pub winner_count: u8,
    /// Number of winners that have not claimed yet.
    pub winner_not_claimed_count: u8,
    /// Location of the winner list, stored as opaque bytes.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::hex::Hex>"))]
    pub winner_list_uri: Vec<u8>,
    /// Bump of the resolution address.
    pub bump: u8,
}

impl Resolution {
    /// The winner list location as a string, if it is valid UTF-8.
    pub fn winner_list_uri_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.winner_list_uri).ok()
    }
}

impl Discriminator for Resolution {
    const KIND: AccountKind = AccountKind::Resolution;
}

impl AccountDecode for Resolution {
    const IS_FIXED_SIZE: bool = false;

    fn decode_fields(cursor: &mut AccountCursor<'_>) -> crate::Result<Self> {
        let root_hash = cursor.read_fixed_bytes("root_hash")?;
        let winner_count = cursor.read_u8("winner_count")?;
        let winner_not_claimed_count = cursor.read_u8("winner_not_claimed_count")?;
        let winner_list_uri = cursor
            .read_length_prefixed_bytes("winner_list_uri")?
            .to_vec();
        let bump = cursor.read_u8("bump")?;
        Ok(Self {
            root_hash,
            winner_count,
            winner_not_claimed_count,
            winner_list_uri,
            bump,
        })
    }
}

impl AccountEncode for Resolution {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> crate::Result<()> {
        buf.extend_from_slice(&self.root_hash);
        buf.push(self.winner_count);
        buf.push(self.winner_not_claimed_count);
        put_length_prefixed(buf, &self.winner_list_uri, "winner_list_uri")?;
        buf.push(self.bump);
        Ok(())
    }
}
