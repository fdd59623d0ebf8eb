use std::{fmt, str::FromStr};

use url::Url;

const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";
const DEVNET_URL: &str = "https://api.devnet.solana.com";
const TESTNET_URL: &str = "https://api.testnet.solana.com";
const LOCALNET_URL: &str = "http://127.0.0.1:8899";

/// Solana cluster to read accounts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cluster {
    /// Mainnet Beta.
    #[default]
    Mainnet,
    /// Devnet.
    Devnet,
    /// Testnet.
    Testnet,
    /// Local validator.
    Localnet,
    /// Any other RPC endpoint.
    Custom(Url),
}

impl Cluster {
    /// RPC endpoint of the cluster.
    pub fn url(&self) -> &str {
        match self {
            Self::Mainnet => MAINNET_URL,
            Self::Devnet => DEVNET_URL,
            Self::Testnet => TESTNET_URL,
            Self::Localnet => LOCALNET_URL,
            Self::Custom(url) => url.as_str(),
        }
    }
}

impl FromStr for Cluster {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cluster = match s.to_lowercase().as_str() {
            "m" | "mainnet" | "mainnet-beta" => Self::Mainnet,
            "d" | "devnet" => Self::Devnet,
            "t" | "testnet" => Self::Testnet,
            "l" | "localnet" | "localhost" => Self::Localnet,
            _ => {
                let url = Url::parse(s)?;
                match url.scheme() {
                    "http" | "https" => Self::Custom(url),
                    scheme => {
                        return Err(crate::Error::ParseCluster(format!(
                            "unsupported scheme `{scheme}`"
                        )))
                    }
                }
            }
        };
        Ok(cluster)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Devnet => f.write_str("devnet"),
            Self::Testnet => f.write_str("testnet"),
            Self::Localnet => f.write_str("localnet"),
            Self::Custom(url) => f.write_str(url.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!("D".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("localhost".parse::<Cluster>().unwrap().url(), LOCALNET_URL);
    }

    #[test]
    fn parse_custom_url() {
        let cluster = "https://rpc.example.com/".parse::<Cluster>().unwrap();
        assert_eq!(cluster.url(), "https://rpc.example.com/");
        assert_eq!(cluster.to_string().parse::<Cluster>().unwrap(), cluster);
    }

    #[test]
    fn reject_non_http_scheme() {
        assert!(matches!(
            "ws://rpc.example.com".parse::<Cluster>(),
            Err(crate::Error::ParseCluster(_))
        ));
        assert!(matches!(
            "not a cluster".parse::<Cluster>(),
            Err(crate::Error::ParseUrl(_))
        ));
    }
}
