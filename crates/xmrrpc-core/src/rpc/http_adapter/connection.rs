use reqwest::Url;

use crate::error::RpcError;

/// Append an endpoint path to the daemon base address.
///
/// Any path already present on the base is kept as a prefix, so a daemon
/// served behind `http://host/monero` resolves `/json_rpc` to
/// `http://host/monero/json_rpc`.
pub(super) fn join_endpoint(base: &Url, path: &str) -> Result<Url, RpcError> {
    if base.cannot_be_a_base() {
        return Err(RpcError::InvalidUrl(format!("cannot append `{path}` to `{base}`")));
    }

    let prefix = base.path().trim_end_matches('/');
    let suffix = path.trim_start_matches('/');
    let mut url = base.clone();
    url.set_path(&format!("{prefix}/{suffix}"));
    Ok(url)
}

/// The request-URI the digest answer is computed over: path plus query.
pub(super) fn digest_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}
