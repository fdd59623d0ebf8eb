//! RPC client traits.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use solana_account_decoder_client_types::{UiAccount, UiAccountEncoding};
use solana_rpc_client_api::{
    config, filter,
    request::RpcRequest,
    response::{Response, RpcKeyedAccount},
};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::utils::WithSlot;

pub mod generic;

/// A RPC client.
pub trait RpcClient {
    /// Returns the configured default commitment level.
    fn commitment(&self) -> CommitmentConfig;

    /// Send an [`RpcRequest`] with parameters.
    fn send<T>(
        &self,
        request: RpcRequest,
        params: impl Serialize,
    ) -> impl Future<Output = crate::Result<T>>
    where
        T: DeserializeOwned;
}

/// A trait that extends [`RpcClient`] with account reads.
///
/// Accounts are returned in their wire form ([`UiAccount`]); turning them into
/// raw bytes is left to the caller so that every encoding is handled in one
/// place.
pub trait RpcClientExt: RpcClient {
    /// Get account info for `address`, including the context slot.
    /// Returns `None` if the account does not exist.
    fn get_optional_account_with_slot(
        &self,
        address: &Pubkey,
        mut config: config::RpcAccountInfoConfig,
    ) -> impl Future<Output = crate::Result<WithSlot<Option<UiAccount>>>> {
        config.encoding = Some(config.encoding.unwrap_or(UiAccountEncoding::Base64));
        let commitment = config.commitment.unwrap_or_else(|| self.commitment());
        config.commitment = Some(commitment);
        tracing::trace!(%address, ?config, "fetching account with config");
        async move {
            let res = self
                .send::<Response<Option<UiAccount>>>(
                    RpcRequest::GetAccountInfo,
                    json!([address.to_string(), config]),
                )
                .await?;
            Ok(WithSlot::new(res.context.slot, res.value))
        }
    }

    /// Get all accounts owned by `program`, including the context slot.
    fn get_program_accounts_with_slot(
        &self,
        program: &Pubkey,
        mut config: RpcProgramAccountsConfig,
    ) -> impl Future<Output = crate::Result<WithSlot<Vec<RpcKeyedAccount>>>> {
        config.account_config.encoding = Some(
            config
                .account_config
                .encoding
                .unwrap_or(UiAccountEncoding::Base64),
        );
        let commitment = config
            .account_config
            .commitment
            .unwrap_or_else(|| self.commitment());
        config.account_config.commitment = Some(commitment);
        let config = config::RpcProgramAccountsConfig {
            filters: config.filters,
            account_config: config.account_config,
            with_context: Some(true),
            sort_results: None,
        };
        tracing::trace!(%program, ?config, "fetching program accounts");
        async move {
            let res = self
                .send::<Response<Vec<RpcKeyedAccount>>>(
                    RpcRequest::GetProgramAccounts,
                    json!([program.to_string(), config]),
                )
                .await?;
            Ok(WithSlot::new(res.context.slot, res.value))
        }
    }
}

impl<C: RpcClient + ?Sized> RpcClientExt for C {}

/// Configuration for program accounts.
#[derive(Debug, Default, Clone)]
pub struct RpcProgramAccountsConfig {
    /// Filters.
    pub filters: Option<Vec<filter::RpcFilterType>>,
    /// Account Config.
    pub account_config: config::RpcAccountInfoConfig,
}

impl RpcProgramAccountsConfig {
    /// Only return accounts whose data is exactly `len` bytes.
    pub fn with_data_size(mut self, len: u64) -> Self {
        self.filters
            .get_or_insert_with(Vec::new)
            .push(filter::RpcFilterType::DataSize(len));
        self
    }
}

#[cfg(client)]
impl RpcClient for solana_client::nonblocking::rpc_client::RpcClient {
    fn commitment(&self) -> CommitmentConfig {
        self.commitment()
    }

    async fn send<T>(&self, request: RpcRequest, params: impl Serialize) -> crate::Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(self.send(request, serde_json::to_value(params)?).await?)
    }
}
