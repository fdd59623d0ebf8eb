use pact_decode::{
    classify_by_size, decode_any, pda, AccountDecode, AnyAccount, Challenge, Classification,
    Clock, CredentialAuthority, HarvestOptions, HarvestResult, Harvester, Keyed, RawAccount,
    Receipt, Resolution, SizeClassification, SystemClock,
};
use solana_sdk::pubkey::Pubkey;

use crate::{config::ProgramConfig, source::AccountSource};

/// Read-side client of the challenge program.
#[derive(Debug, Clone)]
pub struct Client<S> {
    source: S,
    config: ProgramConfig,
    harvest_options: HarvestOptions,
}

impl<S> Client<S> {
    /// Create a client reading from `source`.
    pub fn new(source: S, config: ProgramConfig) -> Self {
        Self {
            source,
            config,
            harvest_options: HarvestOptions::default(),
        }
    }

    /// Set the options used by [`Client::harvest`].
    pub fn with_harvest_options(mut self, options: HarvestOptions) -> Self {
        self.harvest_options = options;
        self
    }

    /// Program config.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Program ID.
    pub fn program_id(&self) -> &Pubkey {
        self.config.program_id()
    }

    /// Get the account source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: AccountSource> Client<S> {
    /// Fetch the raw accounts owned by the program.
    pub async fn program_accounts(&self, data_size: Option<u64>) -> crate::Result<Vec<RawAccount>> {
        self.source
            .fetch_program_accounts(self.program_id(), data_size)
            .await
    }

    /// Fetch and harvest every account of the program.
    pub async fn harvest(&self) -> crate::Result<HarvestResult> {
        self.harvest_at(SystemClock).await
    }

    /// Fetch and harvest every account of the program, evaluating computed
    /// fields against `clock`.
    pub async fn harvest_at(&self, clock: impl Clock) -> crate::Result<HarvestResult> {
        self.harvest_with(clock, self.harvest_options).await
    }

    /// Fetch and harvest every account of the program with the given options.
    pub async fn harvest_with(
        &self,
        clock: impl Clock,
        options: HarvestOptions,
    ) -> crate::Result<HarvestResult> {
        let accounts = self.program_accounts(None).await?;
        let harvester = Harvester::new(*self.program_id())
            .with_clock(clock)
            .with_options(options);
        Ok(harvester.harvest(&accounts))
    }

    /// Fetch every account of the program and group them by data length.
    ///
    /// The result is a low-confidence guess; see [`pact_decode::fallback`].
    pub async fn classify_by_size(&self) -> crate::Result<SizeClassification> {
        let accounts = self.program_accounts(None).await?;
        Ok(classify_by_size(&accounts))
    }

    /// Fetch a raw account, checking that it is owned by the program.
    pub async fn raw_account(&self, address: &Pubkey) -> crate::Result<Option<RawAccount>> {
        let Some(account) = self.source.fetch_account(address).await? else {
            return Ok(None);
        };
        if account.owner != *self.program_id() {
            return Err(crate::Error::InvalidOwner {
                address: *address,
                owner: account.owner,
                expected: *self.program_id(),
            });
        }
        Ok(Some(account))
    }

    /// Fetch an account and decode it as whatever record kind it holds.
    pub async fn account(&self, address: &Pubkey) -> crate::Result<AnyAccount> {
        let account = self
            .raw_account(address)
            .await?
            .ok_or(crate::Error::AccountNotFound(*address))?;
        let Classification::Known(kind) = account.classify() else {
            return Err(crate::Error::UnknownAccount(*address));
        };
        Ok(decode_any(kind, &account.data)?)
    }

    /// Fetch an account and decode it as `T`.
    /// Returns `None` if the account does not exist.
    pub async fn optional_account<T: AccountDecode>(
        &self,
        address: &Pubkey,
    ) -> crate::Result<Option<T>> {
        self.raw_account(address)
            .await?
            .map(|account| T::decode(&account.data))
            .transpose()
            .map_err(Into::into)
    }

    async fn derived_account<T: AccountDecode>(
        &self,
        (address, _bump): (Pubkey, u8),
    ) -> crate::Result<Option<Keyed<T>>> {
        Ok(self
            .optional_account(&address)
            .await?
            .map(|account| Keyed::new(address, account)))
    }

    /// Fetch a challenge by address.
    pub async fn challenge(&self, address: &Pubkey) -> crate::Result<Option<Challenge>> {
        self.optional_account(address).await
    }

    /// Fetch the credential authority of the program.
    pub async fn credential_authority(
        &self,
    ) -> crate::Result<Option<Keyed<CredentialAuthority>>> {
        let derived = pda::find_credential_authority_address(self.program_id())?;
        self.derived_account(derived).await
    }

    /// Fetch the resolution of `challenge`.
    pub async fn resolution(&self, challenge: &Pubkey) -> crate::Result<Option<Keyed<Resolution>>> {
        let derived = pda::find_resolution_address(challenge, self.program_id())?;
        self.derived_account(derived).await
    }

    /// Fetch the receipt of `challenger` in `challenge`.
    pub async fn receipt(
        &self,
        challenge: &Pubkey,
        challenger: &Pubkey,
    ) -> crate::Result<Option<Keyed<Receipt>>> {
        let derived = pda::find_receipt_address(challenge, challenger, self.program_id())?;
        self.derived_account(derived).await
    }

    /// Returns whether `challenger` has a receipt for `challenge`.
    pub async fn has_participated(
        &self,
        challenge: &Pubkey,
        challenger: &Pubkey,
    ) -> crate::Result<bool> {
        Ok(self.receipt(challenge, challenger).await?.is_some())
    }
}
