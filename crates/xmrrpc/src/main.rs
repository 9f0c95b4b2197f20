mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use xmrrpc_core::methods::{GetBlockCount, GetHeight, GetInfo};
use xmrrpc_core::{DaemonClient, DaemonConfig};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let mut http = reqwest::Client::builder().tcp_nodelay(true);
    if let Some(secs) = args.timeout_secs {
        http = http.timeout(Duration::from_secs(secs));
    }
    let http = http.build().context("build HTTP client")?;

    let config = DaemonConfig::new(&args.daemon_url, &args.rpc_user, &args.rpc_pass);
    let client = DaemonClient::with_http_client(config, http).context("configure daemon client")?;
    tracing::debug!(daemon = %args.daemon_url, "client ready");

    let output = run(&client, args.command).await.map_err(|err| {
        let message = format_daemon_error(&args.daemon_url, &err.to_string());
        eyre!(message).wrap_err("daemon call failed")
    })?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render result")?
    );
    Ok(())
}

async fn run(client: &DaemonClient, command: Command) -> eyre::Result<Value> {
    let output = match command {
        Command::Call { method, params } => {
            let params = parse_params(params.as_deref())?;
            client.json_rpc::<Value, Value>(&method, params.as_ref()).await?
        }
        Command::Direct { path, params } => {
            let params = parse_params(params.as_deref())?;
            client.direct::<Value, Value>(&path, params.as_ref()).await?
        }
        Command::BlockCount => {
            let count = client.call::<GetBlockCount>(&()).await?;
            tracing::info!(count = count.count, status = %count.status, "block count");
            serde_json::json!({ "count": count.count, "status": count.status })
        }
        Command::Info => {
            let info = client.call::<GetInfo>(&()).await?;
            serde_json::json!({
                "height": info.height,
                "target_height": info.target_height,
                "difficulty": info.difficulty,
                "nettype": info.nettype,
                "synchronized": info.synchronized,
                "version": info.version,
                "status": info.status,
            })
        }
        Command::Height => {
            let height = client.call::<GetHeight>(&()).await?;
            serde_json::json!({ "height": height.height, "status": height.status })
        }
    };
    Ok(output)
}

fn parse_params(raw: Option<&str>) -> eyre::Result<Option<Value>> {
    raw.map(|raw| serde_json::from_str(raw).wrap_err_with(|| format!("parse --params `{raw}`")))
        .transpose()
}

fn format_daemon_error(daemon_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("daemon endpoint `{daemon_url}`"),
        format!("error: {source_error}"),
    ];

    if source_error.contains("digest authentication") || source_error.contains("HTTP 401") {
        lines.push("hint: authentication failed; verify --rpc-user/--rpc-pass".into());
    } else if source_error.contains("HTTP 403") {
        lines.push("hint: daemon refused the credentials or restricts this method".into());
    } else if source_error.contains("HTTP 404") {
        lines.push("hint: endpoint path is invalid; check the method or direct path".into());
    } else if source_error.contains("error sending request for url") {
        lines.push(
            "hint: request could not be sent; verify the daemon is running and reachable".into(),
        );
    }

    lines.join("\n")
}
