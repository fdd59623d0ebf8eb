use strum::IntoEnumIterator;

/// Length of an account discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Types with a fixed account discriminator.
pub trait Discriminator {
    /// Record kind.
    const KIND: AccountKind;

    /// The discriminator bytes prefixed to the serialized account.
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = Self::KIND.discriminator();
}

/// Known account record kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(serde, serde(rename_all = "snake_case"))]
pub enum AccountKind {
    /// Challenge.
    Challenge,
    /// Credential authority.
    CredentialAuthority,
    /// Participation receipt.
    Receipt,
    /// Challenge resolution.
    Resolution,
}

impl AccountKind {
    /// Discriminator of this kind.
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::Challenge => [119, 250, 161, 121, 119, 81, 22, 208],
            Self::CredentialAuthority => [252, 102, 35, 185, 7, 48, 175, 85],
            Self::Receipt => [39, 154, 73, 106, 80, 102, 145, 153],
            Self::Resolution => [31, 13, 235, 201, 17, 66, 5, 138],
        }
    }

    /// Look up the kind for an exact discriminator.
    pub fn from_discriminator(disc: &[u8; DISCRIMINATOR_LEN]) -> Option<Self> {
        Self::iter().find(|kind| kind.discriminator() == *disc)
    }
}

/// Result of signature classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The leading bytes match a known discriminator.
    Known(AccountKind),
    /// The buffer is shorter than a discriminator or matches none.
    Unknown,
}

impl Classification {
    /// Returns the kind if known.
    pub fn kind(&self) -> Option<AccountKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unknown => None,
        }
    }
}

impl From<Option<AccountKind>> for Classification {
    fn from(kind: Option<AccountKind>) -> Self {
        kind.map_or(Self::Unknown, Self::Known)
    }
}

/// Classify account data by its leading discriminator.
///
/// Only an exact 8-byte match is accepted.
pub fn classify(data: &[u8]) -> Classification {
    data.first_chunk::<DISCRIMINATOR_LEN>()
        .and_then(AccountKind::from_discriminator)
        .into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn discriminators_are_distinct() {
        let set = AccountKind::iter()
            .map(|kind| kind.discriminator())
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), AccountKind::iter().count());
    }

    #[test]
    fn classify_known_kinds() {
        for kind in AccountKind::iter() {
            let mut data = kind.discriminator().to_vec();
            data.extend_from_slice(&[0; 16]);
            assert_eq!(classify(&data), Classification::Known(kind));
            assert_eq!(classify(&kind.discriminator()), Classification::Known(kind));
        }
    }

    #[test]
    fn short_buffer_is_unknown() {
        let disc = AccountKind::Challenge.discriminator();
        assert_eq!(classify(&disc[..7]), Classification::Unknown);
        assert_eq!(classify(&[]), Classification::Unknown);
    }

    #[test]
    fn single_bit_flip_is_unknown() {
        for kind in AccountKind::iter() {
            for byte in 0..DISCRIMINATOR_LEN {
                for bit in 0..8 {
                    let mut data = kind.discriminator();
                    data[byte] ^= 1 << bit;
                    assert_eq!(
                        classify(&data),
                        Classification::Unknown,
                        "{kind} byte {byte} bit {bit}"
                    );
                }
            }
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(
            AccountKind::CredentialAuthority.to_string(),
            "credential_authority"
        );
        assert_eq!(
            "receipt".parse::<AccountKind>().unwrap(),
            AccountKind::Receipt
        );
    }
}
