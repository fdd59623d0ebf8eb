use std::path::{Path, PathBuf};

use eyre::OptionExt;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use pact_sdk::{
    serde::StringPubkey,
    solana_utils::{
        solana_client::nonblocking::rpc_client::RpcClient,
        solana_sdk::{
            commitment_config::{CommitmentConfig, CommitmentLevel},
            pubkey::Pubkey,
        },
        Cluster,
    },
    Client, ProgramConfig,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

mod output;

pub(crate) use output::{DisplayOptions, OutputFormat};

/// Config file read when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "pact.toml";

/// Prefix of environment variables overriding the config file.
pub(crate) const ENV_PREFIX: &str = "PACT_";

/// Client used by commands.
pub(crate) type CommandClient = Client<RpcClient>;

/// Resolved CLI configuration.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Cluster URL or alias.
    #[serde_as(as = "DisplayFromStr")]
    cluster: Cluster,
    /// Program ID.
    program_id: Option<StringPubkey>,
    /// Commitment level of RPC reads.
    commitment: CommitmentLevel,
    /// Output format.
    output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            program_id: None,
            commitment: CommitmentLevel::Confirmed,
            output: OutputFormat::default(),
        }
    }
}

/// Command-line overrides of [`Config`].
#[derive(Debug, Default, Clone, clap::Args, Serialize)]
pub(crate) struct ConfigOverrides {
    /// Cluster to read from: an RPC URL or one of
    /// `mainnet`, `devnet`, `testnet`, `localnet`.
    #[arg(long, short = 'u', global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster: Option<String>,
    /// Program ID.
    #[arg(long, short = 'p', global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    program_id: Option<StringPubkey>,
    /// Commitment level.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment: Option<CommitmentLevel>,
    /// Output format.
    #[arg(long, short, global = true, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Config {
    /// Load the config, layering defaults, the config file, `PACT_*`
    /// environment variables and command-line overrides.
    pub(crate) fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> eyre::Result<Self> {
        let path = match path {
            Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref()),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        tracing::debug!(path = %path.display(), "loading config");
        Ok(Self::figment(&path, overrides).extract()?)
    }

    fn figment(path: &Path, overrides: &ConfigOverrides) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
            .merge(Serialized::defaults(overrides))
    }

    pub(crate) fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub(crate) fn program_id(&self) -> eyre::Result<&Pubkey> {
        self.program_id
            .as_ref()
            .map(|id| &id.0)
            .ok_or_eyre("`program_id` is not configured")
    }

    pub(crate) fn commitment(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment,
        }
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.output
    }

    pub(crate) fn program_config(&self) -> eyre::Result<ProgramConfig> {
        Ok(ProgramConfig::new(*self.program_id()?))
    }

    pub(crate) fn create_client(&self) -> eyre::Result<CommandClient> {
        let rpc = RpcClient::new_with_commitment(self.cluster.url().to_string(), self.commitment());
        Ok(Client::new(rpc, self.program_config()?))
    }
}
