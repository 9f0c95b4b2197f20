//! Parameter and result shapes of the catalogued daemon methods.
//!
//! These mirror monerod's JSON field names. Fields the daemon only sends in
//! some versions default when absent.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Parameters
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BlockTemplateParams {
    pub wallet_address: String,
    pub reserve_size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashParams {
    pub hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeightParams {
    pub height: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeightRangeParams {
    pub start_height: u64,
    pub end_height: u64,
}

/// Look a block up by height or by hash; monerod uses whichever is set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBlockParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeeEstimateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_blocks: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTransactionsParams {
    pub txs_hashes: Vec<String>,
    pub decode_as_json: bool,
    pub prune: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendRawTransactionParams {
    pub tx_as_hex: String,
    pub do_not_relay: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyImagesParams {
    pub key_images: Vec<String>,
}

// ==============================================================================
// Results
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BlockCount {
    pub count: u64,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockTemplate {
    pub blockhashing_blob: String,
    pub blocktemplate_blob: String,
    pub difficulty: u64,
    pub expected_reward: u64,
    pub height: u64,
    pub prev_hash: String,
    pub reserved_offset: u64,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

/// Replies that carry nothing but a daemon status string.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusOnly {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockHeader {
    pub block_size: u64,
    pub depth: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub major_version: u32,
    pub minor_version: u32,
    pub nonce: u64,
    pub num_txes: u64,
    pub orphan_status: bool,
    pub prev_hash: String,
    pub reward: u64,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeaderResponse {
    pub block_header: BlockHeader,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeadersRange {
    pub headers: Vec<BlockHeader>,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub block_header: BlockHeader,
    /// The block itself, as a JSON document encoded in a string.
    pub json: String,
    pub miner_tx_hash: String,
    #[serde(default)]
    pub blob: String,
    #[serde(default)]
    pub tx_hashes: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    pub address: String,
    pub avg_download: u64,
    pub avg_upload: u64,
    pub connection_id: String,
    pub current_download: u64,
    pub current_upload: u64,
    pub height: u64,
    pub host: String,
    pub incoming: bool,
    pub ip: String,
    pub live_time: u64,
    pub local_ip: bool,
    pub localhost: bool,
    pub peer_id: String,
    pub port: String,
    pub recv_count: u64,
    pub recv_idle_time: u64,
    pub send_count: u64,
    pub send_idle_time: u64,
    pub state: String,
    pub support_flags: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connections {
    #[serde(default)]
    pub connections: Vec<Connection>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonInfo {
    pub height: u64,
    #[serde(default)]
    pub target_height: u64,
    pub difficulty: u64,
    #[serde(default)]
    pub tx_count: u64,
    #[serde(default)]
    pub tx_pool_size: u64,
    #[serde(default)]
    pub incoming_connections_count: u64,
    #[serde(default)]
    pub outgoing_connections_count: u64,
    #[serde(default)]
    pub mainnet: bool,
    #[serde(default)]
    pub testnet: bool,
    #[serde(default)]
    pub stagenet: bool,
    #[serde(default)]
    pub nettype: String,
    #[serde(default)]
    pub synchronized: bool,
    #[serde(default)]
    pub top_block_hash: String,
    #[serde(default)]
    pub version: String,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeeEstimate {
    pub fee: u64,
    #[serde(default)]
    pub quantization_mask: u64,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub version: u32,
    #[serde(default)]
    pub release: bool,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Height {
    pub height: u64,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEntry {
    pub tx_hash: String,
    #[serde(default)]
    pub as_hex: String,
    #[serde(default)]
    pub as_json: String,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub in_pool: bool,
    #[serde(default)]
    pub double_spend_seen: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transactions {
    #[serde(default)]
    pub txs: Vec<TransactionEntry>,
    #[serde(default)]
    pub missed_tx: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendRawTransactionResult {
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub double_spend: bool,
    #[serde(default)]
    pub fee_too_low: bool,
    #[serde(default)]
    pub invalid_input: bool,
    #[serde(default)]
    pub invalid_output: bool,
    #[serde(default)]
    pub low_mixin: bool,
    #[serde(default)]
    pub not_relayed: bool,
    #[serde(default)]
    pub overspend: bool,
    #[serde(default)]
    pub too_big: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyImagesSpent {
    /// One entry per key image: 0 unspent, 1 spent in a block, 2 spent in
    /// the pool.
    pub spent_status: Vec<u8>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolHashes {
    #[serde(default)]
    pub tx_hashes: Vec<String>,
    pub status: String,
}
