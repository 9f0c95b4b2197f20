//! Client handle configuration: daemon base address plus credentials.

use reqwest::Url;

use crate::error::CoreError;

/// Username and password answered to a digest challenge.
///
/// Both may be empty; they are only used once the daemon asks for them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything a [`DaemonClient`](crate::DaemonClient) needs to reach a daemon.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Base address, e.g. `http://127.0.0.1:18081`. Endpoint paths such as
    /// `/json_rpc` are appended to it.
    pub endpoint: String,
    pub credentials: Credentials,
}

impl DaemonConfig {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials: Credentials::new(username, password),
        }
    }

    /// Parse and validate the base address.
    pub(crate) fn base_url(&self) -> Result<Url, CoreError> {
        parse_endpoint(&self.endpoint)
    }
}

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(endpoint).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid daemon endpoint `{endpoint}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported endpoint scheme `{other}`; expected http or https"
        ))),
    }
}
