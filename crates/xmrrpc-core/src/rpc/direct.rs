use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::RpcError;

use super::{call_typed, Dispatcher, Transport};

/// Posts plain JSON bodies to REST-style daemon paths (`/get_height`,
/// `/get_transactions`, ...).
///
/// No envelope and no error discrimination: the body is handed back as-is,
/// and any daemon `status` field is left for the typed caller to inspect.
#[derive(Clone)]
pub struct DirectDispatcher {
    transport: Arc<dyn Transport>,
}

impl DirectDispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Call `path` and decode the body into `R`.
    pub async fn call<P, R>(&self, path: &str, params: Option<&P>) -> Result<R, RpcError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        call_typed(self, path, params).await
    }
}

#[async_trait]
impl Dispatcher for DirectDispatcher {
    async fn dispatch(
        &self,
        path: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RpcError> {
        // monerod rejects an empty or `null` body on these endpoints.
        let params = params.unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        debug!(rpc.path = path, "direct call");

        let body = serde_json::to_vec(&params).map_err(RpcError::Encode)?;
        let response = self.transport.send(Method::POST, path, body).await?;

        serde_json::from_str(&response.body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode response from {path} (HTTP {}): {e}; body={}",
                response.status, response.body
            ))
        })
    }
}
