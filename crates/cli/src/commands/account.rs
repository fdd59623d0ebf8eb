use pact_sdk::{decode::Keyed, serde::StringPubkey};

/// Fetch and decode a single account.
#[derive(Debug, clap::Args)]
pub struct Account {
    /// Account address.
    address: StringPubkey,
}

impl super::Command for Account {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let account = client.account(&self.address).await?;
        let out = ctx
            .output()
            .display_value(Keyed::new(*self.address, account))?;
        println!("{out}");
        Ok(())
    }
}
