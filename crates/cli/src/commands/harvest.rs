use pact_sdk::decode::{HarvestOptions, HarvestResult, HarvestedChallenge, SystemClock};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::config::{DisplayOptions, OutputFormat};

/// Fetch every program account, classify and decode it.
#[derive(Debug, clap::Args)]
pub struct Harvest {
    /// Only show challenges whose staking period is still open.
    #[arg(long)]
    active_only: bool,
    /// Check every challenge against the address derived from its seeds.
    #[arg(long)]
    verify_addresses: bool,
}

impl super::Command for Harvest {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let options = HarvestOptions {
            verify_addresses: self.verify_addresses,
        };
        let mut result = ctx.client()?.harvest_with(SystemClock, options).await?;
        if self.active_only {
            result.challenges.retain(|c| c.is_active);
        }

        match ctx.output() {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            format @ OutputFormat::Text => print_text(format, &result)?,
        }
        Ok(())
    }
}

fn format_timestamp(ts: i64) -> String {
    OffsetDateTime::from_unix_timestamp(ts)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| ts.to_string())
}

fn challenge_row(harvested: &HarvestedChallenge) -> serde_json::Value {
    let challenge = &harvested.challenge;
    serde_json::json!({
        "address": harvested.address.to_string(),
        "name": challenge.name,
        "token": challenge.token_kind.to_string(),
        "stake": challenge.stake_amount,
        "fee_bps": challenge.fee_basis_points,
        "stake_end_at": format_timestamp(challenge.stake_end_at),
        "active": harvested.is_active,
    })
}

fn print_text(format: OutputFormat, result: &HarvestResult) -> eyre::Result<()> {
    println!("Challenges:");
    println!(
        "{}",
        format.display_many(
            result.challenges.iter().map(challenge_row),
            DisplayOptions::table_projection([
                ("/address", "Address"),
                ("/name", "Name"),
                ("/token", "Token"),
                ("/stake", "Stake"),
                ("/fee_bps", "Fee (bps)"),
                ("/stake_end_at", "Stake Ends"),
                ("/active", "Active"),
            ]),
        )?
    );
    println!("Resolutions:");
    println!(
        "{}",
        format.display_many(
            &result.resolutions,
            DisplayOptions::table_projection([
                ("/address", "Address"),
                ("/winner_count", "Winners"),
                ("/winner_not_claimed_count", "Unclaimed"),
            ]),
        )?
    );

    let stats = &result.stats;
    println!(
        "evaluated at {}: {} accounts, {} challenges, {} receipts, {} resolutions, {} ignored, {} foreign",
        format_timestamp(result.evaluated_at),
        stats.total,
        result.challenges.len(),
        result.receipts.len(),
        result.resolutions.len(),
        stats.ignored,
        stats.foreign,
    );
    if !stats.decode_failures.is_empty() {
        println!("Decode failures:");
        println!(
            "{}",
            format.display_many(
                &stats.decode_failures,
                DisplayOptions::table_projection([
                    ("/address", "Address"),
                    ("/kind", "Kind"),
                    ("/error", "Error"),
                ]),
            )?
        );
    }
    Ok(())
}
