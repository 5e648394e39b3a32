mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};

use rail_core::amount::{convert, convert_by_name, Unit};
use rail_core::rpc::Client;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_level(true)
        .init();

    // Pure arithmetic; no node required.
    if let cli::Command::Convert { amount, from, to } = &args.command {
        let converted =
            convert_by_name(amount, from, to).wrap_err("convert amount between denominations")?;
        println!("{converted}");
        return Ok(());
    }

    let client = Client::new(Some(&args.node_url));

    // Verify the node answers before dispatching the real command.
    let version = client.version().await.map_err(|err| {
        eyre!("{err}").wrap_err(format!(
            "could not reach ledger node RPC at `{}`",
            args.node_url
        ))
    })?;
    tracing::info!(
        vendor = %version.node_vendor,
        rpc_version = %version.rpc_version,
        "connected to ledger node"
    );

    match args.command {
        cli::Command::Balance { account, unit } => {
            let balance = client.account_balance(&account).await?;
            let confirmed = convert(&balance.balance, Unit::Raw, unit)?;
            let pending = convert(&balance.pending, Unit::Raw, unit)?;
            println!("balance: {confirmed} {unit}");
            println!("pending: {pending} {unit}");
        }
        cli::Command::Supply { unit } => {
            let supply = client.available_supply(unit).await?;
            println!("{supply} {unit}");
        }
        cli::Command::BlockCount => {
            let count = client.block_count().await?;
            println!("count: {}", count.count);
            println!("unchecked: {}", count.unchecked);
        }
        cli::Command::Version => {
            println!(
                "{} (rpc {}, store {})",
                version.node_vendor, version.rpc_version, version.store_version
            );
        }
        cli::Command::Peers => {
            let peers = client.peers().await?;
            println!("{}", serde_json::to_string_pretty(&peers)?);
        }
        cli::Command::History { account, count } => {
            let history = client.account_history(&account, count).await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        cli::Command::Send {
            wallet,
            source,
            destination,
            amount,
            unit,
        } => {
            let block = client
                .send(&wallet, &source, &destination, &amount, unit)
                .await?;
            println!("{block}");
        }
        cli::Command::WorkGenerate { hash } => {
            let work = client.work_generate(&hash).await?;
            println!("{work}");
        }
        cli::Command::Convert { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}
