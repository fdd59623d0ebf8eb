use pact_sdk::decode::SizeClassification;
use serde_json::json;

use crate::config::{DisplayOptions, OutputFormat};

/// Group program accounts by data length.
///
/// This bypasses discriminator matching. The guessed labels are a heuristic
/// and may be wrong; use `harvest` for typed results.
#[derive(Debug, clap::Args)]
pub struct Sizes {}

impl super::Command for Sizes {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let report = ctx.client()?.classify_by_size().await?;
        tracing::warn!("size-based classification is low confidence");
        match ctx.output() {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            format @ OutputFormat::Text => print_text(format, &report)?,
        }
        Ok(())
    }
}

fn print_text(format: OutputFormat, report: &SizeClassification) -> eyre::Result<()> {
    println!("Provenance: {} (low confidence)", report.provenance);
    let rows = report.groups.iter().map(|group| {
        json!({
            "len": group.len,
            "count": group.addresses.len(),
            "guess": group.guess.map(|guess| guess.to_string()),
        })
    });
    println!(
        "{}",
        format.display_many(
            rows,
            DisplayOptions::table_projection([
                ("/len", "Length"),
                ("/count", "Accounts"),
                ("/guess", "Guess"),
            ]),
        )?
    );
    Ok(())
}
