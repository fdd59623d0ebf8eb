use num_enum::{IntoPrimitive, TryFromPrimitive};
use solana_sdk::pubkey::Pubkey;

use crate::{
    cursor::AccountCursor,
    discriminator::{AccountKind, Discriminator},
    pda, Error,
};

use super::{put_length_prefixed, AccountDecode, AccountEncode};

/// Token a challenge is staked in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, strum::Display,
)]
#[repr(u8)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(serde, serde(rename_all = "UPPERCASE"))]
pub enum TokenKind {
    /// Wrapped SOL.
    Wsol = 0,
    /// USDC.
    Usdc = 1,
}

/// Challenge account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct Challenge {
    /// Name, also a seed of the challenge address.
    pub name: String,
    /// Creator of the challenge.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub initiator: Pubkey,
    /// Stake token.
    pub token_kind: TokenKind,
    /// Stake amount in the token's base units.
    pub stake_amount: u64,
    /// Fee in basis points.
    pub fee_basis_points: u16,
    /// Staking closes at this unix timestamp.
    pub stake_end_at: i64,
    /// Claims open from this unix timestamp.
    pub claim_start_from: i64,
    /// Attestation schema.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub schema: Pubkey,
    /// Attestor.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub attestor: Pubkey,
    /// Bump of the challenge address.
    pub bump: u8,
}

impl Challenge {
    /// Returns whether staking is still open at `now`.
    pub fn is_active_at(&self, now: i64) -> bool {
        now < self.stake_end_at
    }

    /// Derive the address of this challenge.
    pub fn find_address(&self, program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
        pda::find_challenge_address(&self.initiator, &self.name, program_id)
    }

    /// Check that `address` is the address derived from this challenge's seeds
    /// and that the stored bump is the canonical one.
    pub fn verify_address(&self, address: &Pubkey, program_id: &Pubkey) -> crate::Result<()> {
        let (derived, bump) = self.find_address(program_id)?;
        if derived != *address || bump != self.bump {
            return Err(Error::AddressMismatch {
                actual: *address,
                derived,
            });
        }
        Ok(())
    }
}

impl Discriminator for Challenge {
    const KIND: AccountKind = AccountKind::Challenge;
}

impl AccountDecode for Challenge {
    const IS_FIXED_SIZE: bool = false;

    fn decode_fields(cursor: &mut AccountCursor<'_>) -> crate::Result<Self> {
        let name = cursor.read_length_prefixed_string("name")?;
        let initiator = cursor.read_pubkey("initiator")?;
        let token_kind = cursor.read_u8("token_kind")?;
        let token_kind = TokenKind::try_from(token_kind).map_err(|_| Error::InvalidEnumValue {
            field: "token_kind",
            value: token_kind,
        })?;
        let stake_amount = cursor.read_u64_le("stake_amount")?;
        let fee_basis_points = cursor.read_u16_le("fee_basis_points")?;
        let stake_end_at = cursor.read_i64_le("stake_end_at")?;
        let claim_start_from = cursor.read_i64_le("claim_start_from")?;
        let schema = cursor.read_pubkey("schema")?;
        let attestor = cursor.read_pubkey("attestor")?;
        let bump = cursor.read_u8("bump")?;
        Ok(Self {
            name,
            initiator,
            token_kind,
            stake_amount,
            fee_basis_points,
            stake_end_at,
            claim_start_from,
            schema,
            attestor,
            bump,
        })
    }
}

impl AccountEncode for Challenge {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> crate::Result<()> {
        put_length_prefixed(buf, self.name.as_bytes(), "name")?;
        buf.extend_from_slice(self.initiator.as_ref());
        buf.push(self.token_kind.into());
        buf.extend_from_slice(&self.stake_amount.to_le_bytes());
        buf.extend_from_slice(&self.fee_basis_points.to_le_bytes());
        buf.extend_from_slice(&self.stake_end_at.to_le_bytes());
        buf.extend_from_slice(&self.claim_start_from.to_le_bytes());
        buf.extend_from_slice(self.schema.as_ref());
        buf.extend_from_slice(self.attestor.as_ref());
        buf.push(self.bump);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, token_kind: TokenKind, fee_basis_points: u16) -> Challenge {
        Challenge {
            name: name.to_string(),
            initiator: Pubkey::new_unique(),
            token_kind,
            stake_amount: 5_000_000_000,
            fee_basis_points,
            stake_end_at: 1_700_000_000,
            claim_start_from: 1_700_086_400,
            schema: Pubkey::new_unique(),
            attestor: Pubkey::new_unique(),
            bump: 254,
        }
    }

    #[test]
    fn minimal_challenge() {
        let mut data = vec![119, 250, 161, 121, 119, 81, 22, 208];
        data.extend_from_slice(&1u32.to_le_bytes());
        data.push(b'A');
        data.extend_from_slice(&[0; 32]);
        data.push(1);
        data.extend_from_slice(&1_000_000u64.to_le_bytes());
        data.extend_from_slice(&100u16.to_le_bytes());
        data.extend_from_slice(&2_000_000_000i64.to_le_bytes());
        data.extend_from_slice(&2_000_100_000i64.to_le_bytes());
        data.extend_from_slice(&[0; 32]);
        data.extend_from_slice(&[0; 32]);
        data.push(0);

        let challenge = Challenge::decode(&data).unwrap();
        assert_eq!(challenge.name, "A");
        assert_eq!(challenge.initiator, Pubkey::default());
        assert_eq!(challenge.token_kind, TokenKind::Usdc);
        assert_eq!(challenge.stake_amount, 1_000_000);
        assert_eq!(challenge.fee_basis_points, 100);
        assert_eq!(challenge.stake_end_at, 2_000_000_000);
        assert_eq!(challenge.claim_start_from, 2_000_100_000);
        assert_eq!(challenge.schema, Pubkey::default());
        assert_eq!(challenge.attestor, Pubkey::default());
        assert_eq!(challenge.bump, 0);
    }

    #[test]
    fn round_trip_boundary_values() {
        for challenge in [
            sample("", TokenKind::Wsol, 0),
            sample("weekly-10k-steps", TokenKind::Usdc, 10_000),
            sample("ünïcødé 🏃", TokenKind::Wsol, u16::MAX),
        ] {
            let data = challenge.encode().unwrap();
            assert_eq!(Challenge::decode(&data).unwrap(), challenge);
        }
    }

    #[test]
    fn every_truncation_is_buffer_too_short() {
        let data = sample("run", TokenKind::Usdc, 250).encode().unwrap();
        for len in 8..data.len() {
            let err = Challenge::decode(&data[..len]).unwrap_err();
            assert!(
                matches!(err, Error::BufferTooShort { .. }),
                "len {len}: {err:?}"
            );
        }
    }

    #[test]
    fn trailing_bytes_are_allowed() {
        let challenge = sample("padded", TokenKind::Wsol, 50);
        let mut data = challenge.encode().unwrap();
        data.extend_from_slice(&[0; 64]);
        assert_eq!(Challenge::decode(&data).unwrap(), challenge);
    }

    #[test]
    fn invalid_token_kind() {
        let challenge = sample("x", TokenKind::Wsol, 0);
        let mut data = challenge.encode().unwrap();
        // discriminator + prefix + name + initiator
        data[8 + 4 + 1 + 32] = 2;
        assert_eq!(
            Challenge::decode(&data).unwrap_err(),
            Error::InvalidEnumValue {
                field: "token_kind",
                value: 2
            }
        );
    }

    #[test]
    fn wrong_discriminator() {
        let mut data = sample("x", TokenKind::Wsol, 0).encode().unwrap();
        data[0] ^= 0x80;
        assert!(matches!(
            Challenge::decode(&data).unwrap_err(),
            Error::DiscriminatorMismatch {
                expected: AccountKind::Challenge,
                ..
            }
        ));
    }

    #[test]
    fn is_active() {
        let challenge = sample("x", TokenKind::Wsol, 0);
        assert!(challenge.is_active_at(challenge.stake_end_at - 1));
        assert!(!challenge.is_active_at(challenge.stake_end_at));
    }

    #[test]
    fn verify_address() {
        let program_id = Pubkey::new_unique();
        let mut challenge = sample("verified", TokenKind::Usdc, 100);
        let (address, bump) = challenge.find_address(&program_id).unwrap();
        challenge.bump = bump;
        challenge.verify_address(&address, &program_id).unwrap();

        let other = Pubkey::new_unique();
        assert!(matches!(
            challenge.verify_address(&other, &program_id),
            Err(Error::AddressMismatch { .. })
        ));
    }
}
