//! A transport for RPC calls.

use solana_rpc_client_api::request::RpcRequest;
use std::future::Future;

/// A transport for RPC calls.
///
/// Implementors carry a JSON-RPC request to a Solana node and hand back the
/// `result` member of the reply.
pub trait RpcSender {
    /// Send an [`RpcRequest`] with JSON parameters.
    fn send(
        &self,
        request: RpcRequest,
        params: serde_json::Value,
    ) -> impl Future<Output = crate::Result<serde_json::Value>>;

    /// Get the RPC endpoint URL.
    fn url(&self) -> String;
}
