use account::Account;
use enum_dispatch::enum_dispatch;
use eyre::OptionExt;
use harvest::Harvest;
use pact_sdk::solana_utils::solana_sdk::pubkey::Pubkey;
use pda::Pda;
use sizes::Sizes;

use crate::config::{CommandClient, Config, OutputFormat};

mod account;
mod harvest;
mod pda;
mod sizes;

/// Commands.
#[enum_dispatch(Command)]
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch every program account, classify and decode it.
    Harvest(Harvest),
    /// Fetch and decode a single account.
    Account(Account),
    /// Derive program addresses.
    Pda(Pda),
    /// Group program accounts by data length (low confidence).
    Sizes(Sizes),
}

#[enum_dispatch]
pub(crate) trait Command {
    fn is_client_required(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()>;
}

pub(crate) struct Context<'a> {
    config: &'a Config,
    client: Option<&'a CommandClient>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(config: &'a Config, client: Option<&'a CommandClient>) -> Self {
        Self { config, client }
    }

    pub(crate) fn client(&self) -> eyre::Result<&CommandClient> {
        self.client.ok_or_eyre("client is not provided")
    }

    pub(crate) fn program_id(&self) -> eyre::Result<&Pubkey> {
        self.config.program_id()
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.config.output()
    }
}
