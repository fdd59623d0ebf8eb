use solana_sdk::pubkey::Pubkey;

use crate::{
    cursor::AccountCursor,
    discriminator::{AccountKind, Discriminator},
};

use super::{AccountDecode, AccountEncode};

/// Credential authority, one per program deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct CredentialAuthority {
    /// Signer trusted to issue credentials.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub signer: Pubkey,
    /// Bump of the authority address.
    pub bump: u8,
}

impl CredentialAuthority {
    /// Total account length.
    pub const LEN: usize = 8 + 32 + 1;
}

impl Discriminator for CredentialAuthority {
    const KIND: AccountKind = AccountKind::CredentialAuthority;
}

impl AccountDecode for CredentialAuthority {
    const IS_FIXED_SIZE: bool = true;

    fn decode_fields(cursor: &mut AccountCursor<'_>) -> crate::Result<Self> {
        let signer = cursor.read_pubkey("signer")?;
        let bump = cursor.read_u8("bump")?;
        Ok(Self { signer, bump })
    }
}

impl AccountEncode for CredentialAuthority {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> crate::Result<()> {
        buf.extend_from_slice(self.signer.as_ref());
        buf.push(self.bump);
        Ok(())
    }
}
