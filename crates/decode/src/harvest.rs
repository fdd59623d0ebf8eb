use std::collections::BTreeMap;

use solana_sdk::pubkey::Pubkey;

use crate::{
    accounts::{decode_any, AnyAccount, Challenge, CredentialAuthority, Receipt, Resolution},
    clock::{Clock, SystemClock},
    discriminator::{AccountKind, Classification},
    fallback::Provenance,
    pda,
    raw::{Keyed, RawAccount},
    Error,
};

/// Options for [`Harvester`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Check every challenge against the address derived from its seeds.
    /// Challenges that do not match are reported as decode failures.
    pub verify_addresses: bool,
}

/// Classifies and decodes a batch of raw program accounts.
///
/// A harvester has no mutable state. The clock is read once per harvest, so
/// every computed field in a [`HarvestResult`] refers to the same instant.
#[derive(Debug, Clone)]
pub struct Harvester<C = SystemClock> {
    program_id: Pubkey,
    clock: C,
    options: HarvestOptions,
}

impl Harvester {
    /// Create a harvester for accounts owned by `program_id`.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            clock: SystemClock,
            options: HarvestOptions::default(),
        }
    }
}

impl<C> Harvester<C> {
    /// Replace the clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Harvester<C2> {
        Harvester {
            program_id: self.program_id,
            clock,
            options: self.options,
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: HarvestOptions) -> Self {
        self.options = options;
        self
    }

    /// Program the harvested accounts must be owned by.
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }
}

impl<C: Clock> Harvester<C> {
    /// Harvest `accounts`.
    ///
    /// Output collections keep the input order. Accounts owned by another
    /// program or carrying an unknown discriminator are counted and skipped;
    /// accounts that fail to decode are reported in
    /// [`HarvestStats::decode_failures`]. Neither aborts the harvest.
    pub fn harvest<'a>(
        &self,
        accounts: impl IntoIterator<Item = &'a RawAccount>,
    ) -> HarvestResult {
        let now = self.clock.unix_timestamp();
        let mut result = HarvestResult::empty(self.program_id, now);

        for account in accounts {
            result.stats.total += 1;
            if account.owner != self.program_id {
                result.stats.foreign += 1;
                continue;
            }
            let Classification::Known(kind) = account.classify() else {
                result.stats.ignored += 1;
                continue;
            };
            *result.stats.by_kind.entry(kind).or_default() += 1;

            match self.decode(kind, account) {
                Ok(decoded) => result.push(account.address, decoded, now),
                Err(error) => {
                    tracing::debug!(
                        address = %account.address,
                        %kind,
                        %error,
                        "failed to decode account"
                    );
                    result.stats.decode_failures.push(DecodeFailure {
                        address: account.address,
                        kind,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            total = result.stats.total,
            challenges = result.challenges.len(),
            receipts = result.receipts.len(),
            resolutions = result.resolutions.len(),
            ignored = result.stats.ignored,
            foreign = result.stats.foreign,
            failures = result.stats.decode_failures.len(),
            "harvested program accounts"
        );
        result
    }

    fn decode(&self, kind: AccountKind, account: &RawAccount) -> crate::Result<AnyAccount> {
        let decoded = decode_any(kind, &account.data)?;
        if let AnyAccount::Challenge(challenge) = &decoded {
            if self.options.verify_addresses {
                challenge.verify_address(&account.address, &self.program_id)?;
            }
        }
        Ok(decoded)
    }
}

/// A challenge with fields computed at harvest time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct HarvestedChallenge {
    /// Challenge address.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub address: Pubkey,
    /// Decoded challenge.
    pub challenge: Challenge,
    /// Whether staking was open at harvest time.
    pub is_active: bool,
}

/// An account that matched a discriminator but failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct DecodeFailure {
    /// Account address.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub address: Pubkey,
    /// Kind given by the discriminator.
    pub kind: AccountKind,
    /// Reason.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub error: Error,
}

/// Harvest counters and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct HarvestStats {
    /// Number of accounts seen.
    pub total: usize,
    /// Number of accounts per recognised kind, failures included.
    pub by_kind: BTreeMap<AccountKind, usize>,
    /// Accounts with no known discriminator.
    pub ignored: usize,
    /// Accounts owned by another program.
    pub foreign: usize,
    /// Accounts that failed to decode.
    pub decode_failures: Vec<DecodeFailure>,
}

/// Typed collections produced by one harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct HarvestResult {
    /// Program the accounts belong to.
    #[cfg_attr(serde, serde(with = "serde_with::As::<serde_with::DisplayFromStr>"))]
    pub program_id: Pubkey,
    /// Unix timestamp computed fields were evaluated at.
    pub evaluated_at: i64,
    /// Challenges.
    pub challenges: Vec<HarvestedChallenge>,
    /// Receipts.
    pub receipts: Vec<Keyed<Receipt>>,
    /// Resolutions.
    pub resolutions: Vec<Keyed<Resolution>>,
    /// Credential authorities.
    pub authorities: Vec<Keyed<CredentialAuthority>>,
    /// Counters and diagnostics.
    pub stats: HarvestStats,
}

impl HarvestResult {
    fn empty(program_id: Pubkey, evaluated_at: i64) -> Self {
        Self {
            program_id,
            evaluated_at,
            challenges: Vec::new(),
            receipts: Vec::new(),
            resolutions: Vec::new(),
            authorities: Vec::new(),
            stats: HarvestStats::default(),
        }
    }

    fn push(&mut self, address: Pubkey, decoded: AnyAccount, now: i64) {
        match decoded {
            AnyAccount::Challenge(challenge) => self.challenges.push(HarvestedChallenge {
                address,
                is_active: challenge.is_active_at(now),
                challenge,
            }),
            AnyAccount::Receipt(receipt) => self.receipts.push(Keyed::new(address, receipt)),
            AnyAccount::Resolution(resolution) => {
                self.resolutions.push(Keyed::new(address, resolution))
            }
            AnyAccount::CredentialAuthority(authority) => {
                self.authorities.push(Keyed::new(address, authority))
            }
        }
    }

    /// Challenges that were active at harvest time.
    pub fn active_challenges(&self) -> impl Iterator<Item = &HarvestedChallenge> {
        self.challenges.iter().filter(|c| c.is_active)
    }

    /// Find a challenge by address.
    pub fn challenge(&self, address: &Pubkey) -> Option<&HarvestedChallenge> {
        self.challenges.iter().find(|c| c.address == *address)
    }

    /// Find the resolution of `challenge` by its derived address.
    pub fn resolution_for(&self, challenge: &Pubkey) -> crate::Result<Option<&Keyed<Resolution>>> {
        let (address, _) = pda::find_resolution_address(challenge, &self.program_id)?;
        Ok(self.resolutions.iter().find(|r| r.address == address))
    }

    /// Find the receipt of `challenger` in `challenge` by its derived address.
    pub fn receipt_for(
        &self,
        challenge: &Pubkey,
        challenger: &Pubkey,
    ) -> crate::Result<Option<&Keyed<Receipt>>> {
        let (address, _) = pda::find_receipt_address(challenge, challenger, &self.program_id)?;
        Ok(self.receipts.iter().find(|r| r.address == address))
    }

    /// How the accounts were classified.
    pub fn provenance(&self) -> Provenance {
        Provenance::Discriminator
    }

    /// Number of accounts of `kind` that decoded successfully.
    pub fn decoded_count(&self, kind: AccountKind) -> usize {
        match kind {
            AccountKind::Challenge => self.challenges.len(),
            AccountKind::CredentialAuthority => self.authorities.len(),
            AccountKind::Receipt => self.receipts.len(),
            AccountKind::Resolution => self.resolutions.len(),
        }
    }
}
