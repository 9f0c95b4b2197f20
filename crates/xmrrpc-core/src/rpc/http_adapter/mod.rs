//! `reqwest`-backed [`Transport`](super::Transport) for monerod.
//!
//! Plain requests go out without credentials; a 401 carrying a Digest
//! challenge is answered exactly once with a computed `Authorization`
//! header.

mod connection;
mod transport;

pub use transport::HttpTransport;
