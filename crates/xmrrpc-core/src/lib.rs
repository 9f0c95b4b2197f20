pub mod client;
pub mod config;
pub mod digest;
pub mod entropy;
pub mod error;
pub mod methods;
pub mod rpc;

pub use client::DaemonClient;
pub use config::{Credentials, DaemonConfig};
pub use error::{CoreError, RpcError};
