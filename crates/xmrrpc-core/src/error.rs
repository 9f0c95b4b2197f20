/// Failures raised while talking to the daemon.
///
/// Every variant propagates to the immediate caller; nothing here is retried
/// or logged-and-dropped.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("digest authentication failed: {0}")]
    Authentication(String),

    /// The daemon answered with a negative JSON-RPC error code. Only the
    /// message is kept; it is displayed verbatim.
    #[error("{message}")]
    Daemon { message: String },

    #[error("unexpected null result")]
    NullResult,

    #[error("invalid daemon response: {0}")]
    InvalidResponse(String),

    #[error("encode request parameters: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Decode(serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
