use clap::{Parser, Subcommand};
use zano::Decimal;

#[derive(Parser, Debug)]
#[command(author, version, about = "Talk to a Zano wallet and daemon over JSON-RPC", long_about = None)]
pub struct Args {
    /// Wallet JSON-RPC url (overrides ZANO_WALLET_RPC)
    #[arg(long)]
    pub wallet: Option<String>,

    /// Daemon JSON-RPC url (overrides ZANO_DAEMON_RPC)
    #[arg(long)]
    pub daemon: Option<String>,

    /// Per-request timeout in seconds, 0 for none
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print raw JSON instead of tables
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Unlocked wallet balances, ZANO first
    Balances,
    /// Every asset registered on chain
    Assets {
        /// Rows to print (defaults to ZANO_ASSET_PREVIEW, 0 = all)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Look an asset up in the full catalog
    Asset { asset_id: String },
    /// Ask the daemon for a single asset
    Info { asset_id: String },
    /// Send `amount` of an asset to an address
    Transfer {
        asset_id: String,
        address: String,
        amount: Decimal,
    },
    /// Compare the built-in ZANO decimal point with the catalog
    CheckNative,
    /// Balances, asset list and details of every held asset
    Demo,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}
