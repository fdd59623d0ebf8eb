//! Degraded-mode classification by exact data length.
//!
//! The guesses made here are best-effort: nothing ties a record kind to a
//! size except that challenges are usually the largest accounts of the
//! program and receipts the smallest. Use [`crate::Harvester`] whenever the
//! discriminator registry is available. Results are returned in their own
//! types and are never mixed into a [`crate::HarvestResult`].

use std::collections::BTreeMap;

use solana_sdk::pubkey::Pubkey;

use crate::{discriminator::DISCRIMINATOR_LEN, raw::RawAccount};

/// Groups longer than this are candidates for the large record guess.
pub const LARGE_RECORD_MIN_LEN: usize = 50;

/// How a classification was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(serde, derive(serde::Serialize))]
#[cfg_attr(serde, serde(rename_all = "snake_case"))]
pub enum Provenance {
    /// Exact discriminator match.
    Discriminator,
    /// Size heuristic, low confidence.
    SizeHeuristic,
}

/// Label guessed for a size group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(serde, derive(serde::Serialize))]
#[cfg_attr(serde, serde(rename_all = "snake_case"))]
pub enum SizeGuess {
    /// The largest group, assumed to hold challenges.
    LikelyChallenge,
    /// The smallest non-trivial group, assumed to hold receipts.
    LikelyReceipt,
}

/// Accounts sharing one exact data length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct SizeGroup {
    /// Data length in bytes.
    pub len: usize,
    /// Accounts of this length, in input order.
    #[cfg_attr(serde, serde(with = "serde_with::As::<Vec<serde_with::DisplayFromStr>>"))]
    pub addresses: Vec<Pubkey>,
    /// Guessed label.
    pub guess: Option<SizeGuess>,
}

/// Output of [`classify_by_size`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(serde, derive(serde::Serialize))]
pub struct SizeClassification {
    /// Always [`Provenance::SizeHeuristic`].
    pub provenance: Provenance,
    /// Groups ordered by ascending length.
    pub groups: Vec<SizeGroup>,
}

impl SizeClassification {
    /// The group guessed to hold `guess`.
    pub fn group(&self, guess: SizeGuess) -> Option<&SizeGroup> {
        self.groups.iter().find(|g| g.guess == Some(guess))
    }
}

/// Group `accounts` by exact data length and guess the record kind of the
/// largest and smallest groups.
///
/// The largest length above [`LARGE_RECORD_MIN_LEN`] is labelled
/// [`SizeGuess::LikelyChallenge`]; the smallest other length that holds more
/// than a discriminator is labelled [`SizeGuess::LikelyReceipt`].
pub fn classify_by_size<'a>(
    accounts: impl IntoIterator<Item = &'a RawAccount>,
) -> SizeClassification {
    let mut by_len = BTreeMap::<usize, Vec<Pubkey>>::new();
    for account in accounts {
        by_len
            .entry(account.data.len())
            .or_default()
            .push(account.address);
    }

    let large = by_len
        .keys()
        .rev()
        .find(|len| **len > LARGE_RECORD_MIN_LEN)
        .copied();
    let small = by_len
        .keys()
        .find(|len| **len > DISCRIMINATOR_LEN && Some(**len) != large)
        .copied();

    tracing::debug!(
        groups = by_len.len(),
        ?large,
        ?small,
        "classified accounts by size (low confidence)"
    );

    let groups = by_len
        .into_iter()
        .map(|(len, addresses)| {
            let guess = if Some(len) == large {
                Some(SizeGuess::LikelyChallenge)
            } else if Some(len) == small {
                Some(SizeGuess::LikelyReceipt)
            } else {
                None
            };
            SizeGroup {
                len,
                addresses,
                guess,
            }
        })
        .collect();

    SizeClassification {
        provenance: Provenance::SizeHeuristic,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(len: usize) -> RawAccount {
        RawAccount::new(Pubkey::new_unique(), Pubkey::new_unique(), 0, vec![0; len])
    }

    #[test]
    fn groups_by_exact_length() {
        let accounts = [9, 180, 9, 0, 4, 181, 180, 41].map(account);
        let report = classify_by_size(&accounts);

        assert_eq!(report.provenance, Provenance::SizeHeuristic);
        let lens = report.groups.iter().map(|g| g.len).collect::<Vec<_>>();
        assert_eq!(lens, vec![0, 4, 9, 41, 180, 181]);

        let large = report.group(SizeGuess::LikelyChallenge).unwrap();
        assert_eq!(large.len, 181);
        assert_eq!(large.addresses, vec![accounts[5].address]);

        let small = report.group(SizeGuess::LikelyReceipt).unwrap();
        assert_eq!(small.len, 9);
        assert_eq!(small.addresses, vec![accounts[0].address, accounts[2].address]);

        assert!(report
            .groups
            .iter()
            .filter(|g| g.len != 9 && g.len != 181)
            .all(|g| g.guess.is_none()));
    }

    #[test]
    fn no_large_group_below_threshold() {
        let accounts = [9, 41, 50].map(account);
        let report = classify_by_size(&accounts);
        assert!(report.group(SizeGuess::LikelyChallenge).is_none());
        assert_eq!(report.group(SizeGuess::LikelyReceipt).unwrap().len, 9);
    }

    #[test]
    fn single_group_is_only_large() {
        let accounts = [200, 200].map(account);
        let report = classify_by_size(&accounts);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].guess, Some(SizeGuess::LikelyChallenge));
    }

    #[test]
    fn empty_input() {
        let report = classify_by_size(&[]);
        assert!(report.groups.is_empty());
    }
}
