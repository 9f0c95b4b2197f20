//! HTTP Digest authentication (RFC 2617, `qop=auth`, MD5) as spoken by
//! the Monero daemon's RPC server.
//!
//! [`DigestChallenge`] parses the `WWW-Authenticate` header of a 401
//! response; [`DigestResponse`] turns a challenge plus credentials into the
//! `Authorization` header value for the retried request.

mod challenge;
mod response;

pub use challenge::{select_challenge, DigestChallenge};
pub use response::{encode_client_nonce, md5_hex, DigestResponse, NONCE_COUNT};
