/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parse url error.
    #[error("parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    /// Parse cluster error.
    #[error("parse cluster: {0}")]
    ParseCluster(String),
    /// RPC client error.
    #[error("rpc-client-api: {0}")]
    RpcClientApi(Box<solana_rpc_client_api::client_error::Error>),
    /// JSON error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// Custom error.
    #[error("custom: {0}")]
    Custom(String),
}

impl Error {
    /// Create a custom error.
    pub fn custom(msg: impl ToString) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl From<solana_rpc_client_api::client_error::Error> for Error {
    fn from(err: solana_rpc_client_api::client_error::Error) -> Self {
        Self::RpcClientApi(Box::new(err))
    }
}
