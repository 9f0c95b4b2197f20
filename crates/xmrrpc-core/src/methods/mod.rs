//! Declarative catalog of monerod RPC methods.
//!
//! Each method is a unit record implementing [`RpcMethod`]: where it lives
//! (JSON-RPC method name or direct path), what it takes, and what it returns.
//! [`DaemonClient::call`](crate::DaemonClient::call) is the single generic
//! call path that consumes them.

pub mod types;

use serde::de::DeserializeOwned;
use serde::Serialize;

use types::*;

/// Where a method is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Method name inside the `/json_rpc` envelope.
    JsonRpc(&'static str),
    /// Path of a plain-JSON endpoint.
    Direct(&'static str),
}

impl Endpoint {
    pub fn target(&self) -> &'static str {
        match self {
            Self::JsonRpc(name) | Self::Direct(name) => name,
        }
    }
}

pub trait RpcMethod {
    const ENDPOINT: Endpoint;
    /// `()` serializes to `null`, which is sent as "no params".
    type Params: Serialize + Send + Sync;
    type Output: DeserializeOwned;
}

macro_rules! rpc_methods {
    ($(
        $(#[$meta:meta])*
        $name:ident => $kind:ident($target:literal), $params:ty => $output:ty;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl RpcMethod for $name {
                const ENDPOINT: Endpoint = Endpoint::$kind($target);
                type Params = $params;
                type Output = $output;
            }
        )*

        /// Every catalogued endpoint, in declaration order.
        pub const CATALOG: &[Endpoint] = &[$(Endpoint::$kind($target)),*];
    };
}

rpc_methods! {
    GetBlockCount => JsonRpc("get_block_count"), () => BlockCount;
    /// Params are `[height]`.
    OnGetBlockHash => JsonRpc("on_get_block_hash"), [u64; 1] => String;
    GetBlockTemplate => JsonRpc("get_block_template"), BlockTemplateParams => BlockTemplate;
    /// Params are `[block_blob_hex]`. A rejected block comes back as a
    /// daemon error, not as a status.
    SubmitBlock => JsonRpc("submit_block"), [String; 1] => StatusOnly;
    GetLastBlockHeader => JsonRpc("get_last_block_header"), () => BlockHeaderResponse;
    GetBlockHeaderByHash => JsonRpc("get_block_header_by_hash"), HashParams => BlockHeaderResponse;
    GetBlockHeaderByHeight => JsonRpc("get_block_header_by_height"), HeightParams => BlockHeaderResponse;
    GetBlockHeadersRange => JsonRpc("get_block_headers_range"), HeightRangeParams => BlockHeadersRange;
    GetBlock => JsonRpc("get_block"), GetBlockParams => Block;
    GetConnections => JsonRpc("get_connections"), () => Connections;
    GetInfo => JsonRpc("get_info"), () => DaemonInfo;
    GetFeeEstimate => JsonRpc("get_fee_estimate"), FeeEstimateParams => FeeEstimate;
    GetVersion => JsonRpc("get_version"), () => Version;

    GetHeight => Direct("/get_height"), () => Height;
    GetTransactions => Direct("/get_transactions"), GetTransactionsParams => Transactions;
    SendRawTransaction => Direct("/send_raw_transaction"), SendRawTransactionParams => SendRawTransactionResult;
    IsKeyImageSpent => Direct("/is_key_image_spent"), KeyImagesParams => KeyImagesSpent;
    GetTransactionPoolHashes => Direct("/get_transaction_pool_hashes"), () => PoolHashes;
}
