use pact_decode::TokenKind;
use solana_sdk::pubkey::Pubkey;
use typed_builder::TypedBuilder;

use crate::serde::StringPubkey;

mod wsol {
    solana_sdk::declare_id!("So11111111111111111111111111111111111111112");
}

/// Wrapped SOL mint.
pub const WSOL_MINT: Pubkey = wsol::ID;

mod usdc {
    solana_sdk::declare_id!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
}

/// USDC mint.
pub const USDC_MINT: Pubkey = usdc::ID;

/// Addresses the client needs to know about the deployed program.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
pub struct ProgramConfig {
    /// Program ID.
    #[builder(setter(into))]
    pub program_id: StringPubkey,
    /// Mint staked by [`TokenKind::Wsol`] challenges.
    #[builder(default = StringPubkey(WSOL_MINT), setter(into))]
    #[cfg_attr(serde, serde(default = "default_wsol_mint"))]
    pub wsol_mint: StringPubkey,
    /// Mint staked by [`TokenKind::Usdc`] challenges.
    #[builder(default = StringPubkey(USDC_MINT), setter(into))]
    #[cfg_attr(serde, serde(default = "default_usdc_mint"))]
    pub usdc_mint: StringPubkey,
}

#[cfg(serde)]
fn default_wsol_mint() -> StringPubkey {
    StringPubkey(WSOL_MINT)
}

#[cfg(serde)]
fn default_usdc_mint() -> StringPubkey {
    StringPubkey(USDC_MINT)
}

impl ProgramConfig {
    /// Create a config for `program_id` with the canonical mints.
    pub fn new(program_id: Pubkey) -> Self {
        Self::builder().program_id(program_id).build()
    }

    /// Program ID.
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id.0
    }

    /// Mint of the given token kind.
    pub fn mint_for(&self, kind: TokenKind) -> &Pubkey {
        match kind {
            TokenKind::Wsol => &self.wsol_mint.0,
            TokenKind::Usdc => &self.usdc_mint.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_mints() {
        let config = ProgramConfig::new(Pubkey::new_unique());
        assert_eq!(*config.mint_for(TokenKind::Wsol), WSOL_MINT);
        assert_eq!(
            config.mint_for(TokenKind::Usdc).to_string(),
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
        );
    }

    #[test]
    fn override_mint() {
        let mint = Pubkey::new_unique();
        let config = ProgramConfig::builder()
            .program_id(Pubkey::new_unique())
            .usdc_mint(mint)
            .build();
        assert_eq!(*config.mint_for(TokenKind::Usdc), mint);
        assert_eq!(*config.mint_for(TokenKind::Wsol), WSOL_MINT);
    }

    #[cfg(serde)]
    #[test]
    fn deserialize_with_default_mints() {
        let program_id = Pubkey::new_unique();
        let config: ProgramConfig =
            serde_json::from_value(serde_json::json!({ "program_id": program_id.to_string() }))
                .unwrap();
        assert_eq!(config, ProgramConfig::new(program_id));
    }
}
