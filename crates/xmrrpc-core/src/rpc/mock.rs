use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::error::RpcError;

use super::{HttpResponse, Transport, JSON_RPC_PATH};

type Responder = Box<dyn Fn(&RecordedRequest) -> HttpResponse + Send + Sync>;

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body must be JSON")
    }
}

/// In-memory transport for dispatcher tests. Records every request and
/// answers through a canned responder.
pub struct MockTransport {
    responder: Responder,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(
        responder: impl Fn(&RecordedRequest) -> HttpResponse + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Echo the request back: enveloped calls get the decoded request as
    /// their `result`, direct calls get their body verbatim.
    pub fn echo() -> Self {
        Self::new(|request| {
            let body = if request.path == JSON_RPC_PATH {
                serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": request.json()["id"],
                    "result": request.json(),
                })
                .to_string()
            } else {
                String::from_utf8_lossy(&request.body).into_owned()
            };
            HttpResponse {
                status: StatusCode::OK,
                body,
            }
        })
    }

    /// Always answer with the same status and body.
    pub fn fixed(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("test status code must be valid");
        let body = body.to_owned();
        Self::new(move |_| HttpResponse {
            status,
            body: body.clone(),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, RpcError> {
        let request = RecordedRequest {
            method,
            path: path.to_owned(),
            body,
        };
        let response = (self.responder)(&request);
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request);
        Ok(response)
    }
}
