use clap::{Parser, Subcommand};

use rail_core::amount::Unit;

/// Command-line client for a ledger node's RPC.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC base address. Scheme and port are optional; `http://`
    /// and `:7076` fill in when omitted.
    #[arg(long, default_value = "http://localhost:7076", env = "RAIL_NODE_URL")]
    pub node_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Confirmed and pending balance of an account.
    Balance {
        account: String,

        /// Display denomination.
        #[arg(long, default_value = "raw", value_parser = parse_unit)]
        unit: Unit,
    },

    /// Total available supply.
    Supply {
        /// Display denomination.
        #[arg(long, default_value = "raw", value_parser = parse_unit)]
        unit: Unit,
    },

    /// Ledger block tally.
    BlockCount,

    /// Node vendor and protocol versions.
    Version,

    /// Connected peers and their protocol versions.
    Peers,

    /// Recent send/receive entries for an account, newest first.
    History {
        account: String,

        /// Number of entries to fetch.
        #[arg(long)]
        count: Option<u64>,
    },

    /// Send an amount from a wallet account.
    Send {
        wallet: String,
        source: String,
        destination: String,
        amount: String,

        /// Denomination of AMOUNT; converted to raw before sending.
        #[arg(long, default_value = "raw", value_parser = parse_unit)]
        unit: Unit,
    },

    /// Convert an amount between denominations without touching the
    /// node. Unknown unit names scale as raw.
    Convert {
        amount: String,
        from: String,
        to: String,
    },

    /// Generate proof-of-work for a block hash.
    WorkGenerate { hash: String },
}

fn parse_unit(name: &str) -> Result<Unit, String> {
    Unit::from_name(name).ok_or_else(|| {
        format!("unknown unit `{name}` (one of: raw, prai, urai, mrai, rai, krai, Mrai, XRB, Grai, Trai)")
    })
}
