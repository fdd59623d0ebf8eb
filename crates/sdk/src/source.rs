use std::future::Future;

use pact_decode::RawAccount;
use pact_solana_utils::{
    client_traits::RpcProgramAccountsConfig, RpcClient, RpcClientExt,
};
use solana_sdk::pubkey::Pubkey;

use crate::account::{decode_keyed_account, decode_ui_account};

/// Capability to fetch raw accounts from a chain.
///
/// Accounts are handed over with their data already decoded to bytes.
/// Retries and timeouts are the implementor's business.
pub trait AccountSource {
    /// Fetch every account owned by `program_id`, optionally only those whose
    /// data is exactly `data_size` bytes.
    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> impl Future<Output = crate::Result<Vec<RawAccount>>>;

    /// Fetch one account. Returns `None` if it does not exist.
    fn fetch_account(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = crate::Result<Option<RawAccount>>>;
}

impl<C: RpcClient> AccountSource for C {
    async fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> crate::Result<Vec<RawAccount>> {
        let mut config = RpcProgramAccountsConfig::default();
        if let Some(len) = data_size {
            config = config.with_data_size(len);
        }
        let (slot, accounts) = self
            .get_program_accounts_with_slot(program_id, config)
            .await?
            .split();
        tracing::debug!(%program_id, slot, count = accounts.len(), "fetched program accounts");
        accounts.iter().map(decode_keyed_account).collect()
    }

    async fn fetch_account(&self, address: &Pubkey) -> crate::Result<Option<RawAccount>> {
        let account = self
            .get_optional_account_with_slot(address, Default::default())
            .await?
            .into_value();
        account
            .map(|account| decode_ui_account(*address, &account))
            .transpose()
    }
}
