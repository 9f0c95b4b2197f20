use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::DaemonConfig;
use crate::entropy::{Entropy, ThreadRngEntropy};
use crate::error::{CoreError, RpcError};
use crate::methods::{Endpoint, RpcMethod};
use crate::rpc::{DirectDispatcher, Dispatcher, HttpTransport, JsonRpcDispatcher, Transport};

/// Handle to one Monero daemon.
///
/// Cheap to share behind an `Arc`; calls are independent and hold no state
/// beyond the immutable configuration.
#[derive(Clone)]
pub struct DaemonClient {
    json_rpc: JsonRpcDispatcher,
    direct: DirectDispatcher,
}

impl DaemonClient {
    /// Build a client with a default `reqwest` client (no request timeout).
    pub fn new(config: DaemonConfig) -> Result<Self, CoreError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build a client on top of a caller-configured `reqwest` client, e.g.
    /// one carrying timeouts or custom TLS roots.
    pub fn with_http_client(
        config: DaemonConfig,
        client: reqwest::Client,
    ) -> Result<Self, CoreError> {
        Self::with_entropy(config, client, Arc::new(ThreadRngEntropy))
    }

    pub fn with_entropy(
        config: DaemonConfig,
        client: reqwest::Client,
        entropy: Arc<dyn Entropy>,
    ) -> Result<Self, CoreError> {
        let base = config.base_url()?;
        debug!(endpoint = %base, "daemon client configured");
        let transport = HttpTransport::new(client, base, config.credentials, entropy.clone());
        Ok(Self::from_transport(Arc::new(transport), entropy))
    }

    /// Both dispatchers share `transport`.
    pub fn from_transport(transport: Arc<dyn Transport>, entropy: Arc<dyn Entropy>) -> Self {
        Self {
            json_rpc: JsonRpcDispatcher::new(transport.clone(), entropy),
            direct: DirectDispatcher::new(transport),
        }
    }

    pub fn dispatcher(&self, endpoint: Endpoint) -> &dyn Dispatcher {
        match endpoint {
            Endpoint::JsonRpc(_) => &self.json_rpc,
            Endpoint::Direct(_) => &self.direct,
        }
    }

    /// Invoke a catalogued method.
    pub async fn call<M: RpcMethod>(&self, params: &M::Params) -> Result<M::Output, CoreError> {
        let params = serde_json::to_value(params).map_err(RpcError::Encode)?;
        let params = (!params.is_null()).then_some(params);

        let endpoint = M::ENDPOINT;
        let raw = self
            .dispatcher(endpoint)
            .dispatch(endpoint.target(), params)
            .await?;
        Ok(serde_json::from_value(raw).map_err(RpcError::Decode)?)
    }

    /// Invoke an arbitrary JSON-RPC method.
    pub async fn json_rpc<P, R>(&self, method: &str, params: Option<&P>) -> Result<R, CoreError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        Ok(self.json_rpc.call(method, params).await?)
    }

    /// Invoke an arbitrary direct endpoint.
    pub async fn direct<P, R>(&self, path: &str, params: Option<&P>) -> Result<R, CoreError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        Ok(self.direct.call(path, params).await?)
    }
}
