pub mod rpc_client;
pub mod rpc_sender;

pub use rpc_client::{
    generic::{GenericRpcClient, GenericRpcClientConfig},
    RpcClient, RpcClientExt, RpcProgramAccountsConfig,
};
pub use rpc_sender::RpcSender;
