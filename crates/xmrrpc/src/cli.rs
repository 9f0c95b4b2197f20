use clap::{Parser, Subcommand};

/// xmrrpc: call Monero daemon RPC methods from the command line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon RPC base address.
    #[arg(long, default_value = "http://127.0.0.1:18081", env = "XMRRPC_DAEMON_URL")]
    pub daemon_url: String,

    /// RPC username (only sent when the daemon asks for digest auth).
    #[arg(long, default_value = "", env = "XMRRPC_RPC_USER")]
    pub rpc_user: String,

    /// RPC password.
    #[arg(long, default_value = "", env = "XMRRPC_RPC_PASS", hide_env_values = true)]
    pub rpc_pass: String,

    /// Per-request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Call a JSON-RPC method on `/json_rpc` and print its result.
    Call {
        method: String,
        /// Parameters as a JSON document.
        #[arg(long)]
        params: Option<String>,
    },
    /// POST to a direct endpoint path (e.g. `/get_height`) and print the body.
    Direct {
        path: String,
        /// Request body as a JSON document. Defaults to `{}`.
        #[arg(long)]
        params: Option<String>,
    },
    /// Print the current block count.
    BlockCount,
    /// Print general daemon information.
    Info,
    /// Print the current chain height.
    Height,
}
