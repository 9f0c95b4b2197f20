use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entropy::Entropy;
use crate::error::RpcError;

use super::{call_typed, Dispatcher, Transport};

/// Path of monerod's batched JSON-RPC endpoint.
pub const JSON_RPC_PATH: &str = "/json_rpc";

const JSON_RPC_VERSION: &str = "2.0";

// ==============================================================================
// Envelope
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &str, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_owned(),
            id,
            method: method.to_owned(),
            params,
        }
    }
}

/// Reply envelope. `id` and `jsonrpc` are decoded but never checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// `{"code": <int>, "message": <string>}`. Only negative codes are failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl JsonRpcResponse {
    /// Split the envelope into its result, enforcing that exactly one of a
    /// non-null result or a negative error code is present.
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        if let Some(err) = self.error {
            if err.code < 0 {
                let message = if err.message.is_empty() {
                    format!("daemon error (code {})", err.code)
                } else {
                    err.message
                };
                return Err(RpcError::Daemon { message });
            }
        }

        match self.result {
            Some(result) if !result.is_null() => Ok(result),
            _ => Err(RpcError::NullResult),
        }
    }
}

// ==============================================================================
// JsonRpcDispatcher
// ==============================================================================

/// Sends enveloped calls to the batched endpoint.
#[derive(Clone)]
pub struct JsonRpcDispatcher {
    transport: Arc<dyn Transport>,
    entropy: Arc<dyn Entropy>,
    path: String,
}

impl JsonRpcDispatcher {
    pub fn new(transport: Arc<dyn Transport>, entropy: Arc<dyn Entropy>) -> Self {
        Self {
            transport,
            entropy,
            path: JSON_RPC_PATH.to_owned(),
        }
    }

    /// Call `method` and decode its result into `R`.
    pub async fn call<P, R>(&self, method: &str, params: Option<&P>) -> Result<R, RpcError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        call_typed(self, method, params).await
    }
}

#[async_trait]
impl Dispatcher for JsonRpcDispatcher {
    async fn dispatch(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RpcError> {
        let request = JsonRpcRequest::new(self.entropy.correlation_id(), method, params);
        debug!(rpc.id = request.id, rpc.method = method, "json-rpc call");

        let body = serde_json::to_vec(&request).map_err(RpcError::Encode)?;
        let response = self.transport.send(Method::POST, &self.path, body).await?;

        let decoded: JsonRpcResponse = serde_json::from_str(&response.body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode JSON-RPC response (HTTP {}): {e}; body={}",
                response.status, response.body
            ))
        })?;

        decoded.into_result()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entropy::FixedEntropy;
    use crate::rpc::mock::MockTransport;

    fn dispatcher(transport: Arc<MockTransport>, id: u64) -> JsonRpcDispatcher {
        JsonRpcDispatcher::new(
            transport,
            Arc::new(FixedEntropy {
                correlation_id: id,
                client_nonce: [0; 8],
            }),
        )
    }

    #[test]
    fn request_wire_shape() {
        let request = JsonRpcRequest::new(42, "get_block_count", None);
        let encoded = serde_json::to_value(&request).expect("request must encode");
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "id": 42, "method": "get_block_count"})
        );

        let with_params = JsonRpcRequest::new(1, "on_get_block_hash", Some(json!([912345])));
        let encoded = serde_json::to_value(&with_params).expect("request must encode");
        assert_eq!(encoded["params"], json!([912345]));
    }

    #[test]
    fn into_result_negative_code_wins() {
        let response: JsonRpcResponse = serde_json::from_value(json!({
            "error": {"code": -7, "message": "Block not accepted"}
        }))
        .expect("envelope must decode");
        let err = response.into_result().expect_err("negative code must fail");
        assert_eq!(err.to_string(), "Block not accepted");
    }

    #[test]
    fn into_result_negative_code_without_message() {
        let response: JsonRpcResponse =
            serde_json::from_value(json!({"error": {"code": -32603}})).expect("envelope must decode");
        let err = response.into_result().expect_err("negative code must fail");
        assert_eq!(err.to_string(), "daemon error (code -32603)");
    }

    #[test]
    fn into_result_zero_code_is_not_an_error() {
        let response: JsonRpcResponse = serde_json::from_value(json!({
            "result": {"status": "OK"},
            "error": {"code": 0, "message": ""}
        }))
        .expect("envelope must decode");
        assert_eq!(
            response.into_result().expect("zero code is success"),
            json!({"status": "OK"})
        );
    }

    #[test]
    fn into_result_missing_or_null_result() {
        let missing = JsonRpcResponse::default();
        assert!(matches!(missing.into_result(), Err(RpcError::NullResult)));

        let null: JsonRpcResponse =
            serde_json::from_value(json!({"result": null})).expect("envelope must decode");
        let err = null.into_result().expect_err("null result must fail");
        assert_eq!(err.to_string(), "unexpected null result");
    }

    #[tokio::test]
    async fn dispatch_round_trips_through_echo() {
        let transport = Arc::new(MockTransport::echo());
        let rpc = dispatcher(transport.clone(), 0xfeed_beef);

        // The echo replies with the request itself wrapped as the result.
        let echoed: JsonRpcRequest = rpc
            .call("get_block_header_by_height", Some(&json!({"height": 1562023})))
            .await
            .expect("echo call must succeed");
        assert_eq!(echoed.method, "get_block_header_by_height");
        assert_eq!(echoed.id, 0xfeed_beef);
        assert_eq!(echoed.params, Some(json!({"height": 1562023})));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, JSON_RPC_PATH);
    }

    #[tokio::test]
    async fn dispatch_rejects_malformed_envelope() {
        let transport = Arc::new(MockTransport::fixed(200, "<html>not json</html>"));
        let rpc = dispatcher(transport, 1);

        let err = rpc
            .dispatch("get_info", None)
            .await
            .expect_err("malformed body must fail");
        assert!(matches!(err, RpcError::InvalidResponse(ref msg) if msg.contains("HTTP 200")));
    }

    #[tokio::test]
    async fn call_surfaces_shape_mismatch_as_decode_error() {
        let transport = Arc::new(MockTransport::fixed(200, r#"{"result":"not a number"}"#));
        let rpc = dispatcher(transport, 1);

        let err = rpc
            .call::<(), u64>("get_block_count", None)
            .await
            .expect_err("shape mismatch must fail");
        assert!(matches!(err, RpcError::Decode(_)));
    }
}
