use pact_sdk::{
    decode::pda,
    serde::StringPubkey,
    solana_utils::solana_sdk::pubkey::Pubkey,
};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

/// Derive program addresses.
#[derive(Debug, clap::Args)]
pub struct Pda {
    #[command(subcommand)]
    kind: PdaKind,
}

#[derive(Debug, clap::Subcommand)]
enum PdaKind {
    /// Credential authority of the program.
    Authority,
    /// Challenge created by `initiator` under `name`.
    Challenge {
        /// Initiator of the challenge.
        #[arg(long)]
        initiator: StringPubkey,
        /// Challenge name.
        #[arg(long)]
        name: String,
    },
    /// Receipt of `challenger` in `challenge`.
    Receipt {
        /// Challenge address.
        #[arg(long)]
        challenge: StringPubkey,
        /// Challenger wallet.
        #[arg(long)]
        challenger: StringPubkey,
    },
    /// Resolution of `challenge`.
    Resolution {
        /// Challenge address.
        #[arg(long)]
        challenge: StringPubkey,
    },
}

#[serde_as]
#[derive(Serialize)]
struct Derived {
    #[serde_as(as = "DisplayFromStr")]
    address: Pubkey,
    bump: u8,
}

impl super::Command for Pda {
    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let program_id = ctx.program_id()?;
        let (address, bump) = match &self.kind {
            PdaKind::Authority => pda::find_credential_authority_address(program_id)?,
            PdaKind::Challenge { initiator, name } => {
                pda::find_challenge_address(initiator, name, program_id)?
            }
            PdaKind::Receipt {
                challenge,
                challenger,
            } => pda::find_receipt_address(challenge, challenger, program_id)?,
            PdaKind::Resolution { challenge } => {
                pda::find_resolution_address(challenge, program_id)?
            }
        };
        println!(
            "{}",
            ctx.output().display_value(Derived { address, bump })?
        );
        Ok(())
    }
}
