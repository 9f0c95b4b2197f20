//! Monero daemon RPC plumbing.
//!
//! One [`Transport`] ([`HttpTransport`] over `reqwest`, answering digest
//! challenges) is shared by two [`Dispatcher`] strategies:
//! [`JsonRpcDispatcher`] wraps calls in the JSON-RPC envelope and posts them
//! to `/json_rpc`; [`DirectDispatcher`] posts plain JSON bodies to
//! REST-style paths such as `/get_height`.

mod direct;
mod http_adapter;
#[cfg(test)]
pub mod mock;
mod protocol;

pub use direct::DirectDispatcher;
pub use http_adapter::HttpTransport;
pub use protocol::{
    JsonRpcDispatcher, JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSON_RPC_PATH,
};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RpcError;

/// Status and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues one HTTP request against the daemon.
///
/// Implementations attach `Content-Type: application/json`, handle any
/// authentication handshake, and hand back whatever status the daemon
/// finally answered with. Interpreting the status and body is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, RpcError>;
}

/// One way of turning `(target, params)` into a daemon reply.
///
/// `target` is a JSON-RPC method name or an endpoint path depending on the
/// strategy.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(
        &self,
        target: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RpcError>;
}

/// Typed convenience over [`Dispatcher::dispatch`].
pub(crate) async fn call_typed<D, P, R>(
    dispatcher: &D,
    target: &str,
    params: Option<&P>,
) -> Result<R, RpcError>
where
    D: Dispatcher + ?Sized,
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let params = params
        .map(serde_json::to_value)
        .transpose()
        .map_err(RpcError::Encode)?;
    let raw = dispatcher.dispatch(target, params).await?;
    serde_json::from_value(raw).map_err(RpcError::Decode)
}
