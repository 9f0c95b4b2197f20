use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::{Method, StatusCode, Url};
use tracing::{debug, trace};

use crate::config::Credentials;
use crate::digest::{encode_client_nonce, select_challenge, DigestResponse};
use crate::entropy::Entropy;
use crate::error::RpcError;

use super::super::{HttpResponse, Transport};
use super::connection::{digest_uri, join_endpoint};

// ==============================================================================
// HttpTransport: single challenge/response cycle over reqwest
// ==============================================================================

/// HTTP transport for one daemon.
///
/// Holds the base address, the immutable credentials and the random source;
/// no authentication state survives between calls, so every call that hits a
/// protected daemon pays one 401 round trip.
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    credentials: Credentials,
    entropy: Arc<dyn Entropy>,
}

impl HttpTransport {
    pub fn new(
        client: reqwest::Client,
        base: Url,
        credentials: Credentials,
        entropy: Arc<dyn Entropy>,
    ) -> Self {
        Self {
            client,
            base,
            credentials,
            entropy,
        }
    }

    async fn issue(
        &self,
        method: &Method,
        url: &Url,
        body: Vec<u8>,
        authorization: Option<&str>,
    ) -> Result<reqwest::Response, RpcError> {
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        Ok(builder.send().await?)
    }

    /// Build the `Authorization` value answering the challenge(s) in `headers`.
    fn answer_challenge(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
    ) -> Result<String, RpcError> {
        let offered = headers
            .get_all(header::WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok());
        let challenge = select_challenge(offered).ok_or_else(|| {
            RpcError::Authentication("401 response without a Digest challenge".to_owned())
        })?;

        let cnonce = encode_client_nonce(self.entropy.client_nonce());
        let uri = digest_uri(url);
        let answer = DigestResponse::from_challenge(
            &challenge,
            &self.credentials.username,
            &self.credentials.password,
            method.as_str(),
            &uri,
            &cnonce,
        );
        debug!(
            realm = answer.realm,
            qop = answer.qop,
            algorithm = answer.algorithm,
            uri = %uri,
            "answering digest challenge"
        );

        Ok(answer.authorization_header())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, RpcError> {
        let url = join_endpoint(&self.base, path)?;
        debug!(%method, %url, body_len = body.len(), "daemon request");

        let first = self.issue(&method, &url, body.clone(), None).await?;
        let response = if first.status() == StatusCode::UNAUTHORIZED {
            let authorization = self.answer_challenge(&method, &url, first.headers())?;
            drop(first);
            self.issue(&method, &url, body, Some(&authorization)).await?
        } else {
            first
        };

        let status = response.status();
        let body = response.text().await?;
        debug!(%method, %url, %status, body_len = body.len(), "daemon response");
        trace!(%url, body = %body, "daemon response body");

        Ok(HttpResponse { status, body })
    }
}
