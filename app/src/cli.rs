use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use gif_portal_client::config::DEVNET_URL;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Parser)]
#[command(name = "gif-portal", version, about = "Submit and browse GIF links stored on-chain")]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// JSON-RPC endpoint of the cluster the program is deployed to.
    #[arg(long, env = "GIF_PORTAL_RPC_URL", default_value = DEVNET_URL, global = true)]
    pub rpc_url: String,

    /// Address of the deployed GIF portal program. Takes precedence over `--idl`.
    #[arg(long, env = "GIF_PORTAL_PROGRAM_ID", global = true, value_parser = parse_pubkey)]
    pub program_id: Option<Pubkey>,

    /// Anchor IDL file to read the program address from.
    #[arg(long, env = "GIF_PORTAL_IDL", global = true)]
    pub idl: Option<PathBuf>,

    /// Keypair file of the account that stores the GIF list.
    #[arg(
        long,
        env = "GIF_PORTAL_STORAGE_KEYPAIR",
        default_value = "keypair.json",
        global = true
    )]
    pub storage_keypair: PathBuf,

    /// Wallet keypair file. Defaults to the Solana CLI's `~/.config/solana/id.json`.
    #[arg(long, env = "GIF_PORTAL_WALLET", global = true)]
    pub wallet: Option<PathBuf>,

    /// Treat the wallet as previously approved, so it connects on startup without asking.
    #[arg(long, env = "GIF_PORTAL_AUTO_CONNECT", global = true)]
    pub auto_connect: bool,
}

fn parse_pubkey(s: &str) -> Result<Pubkey, String> {
    s.parse::<Pubkey>().map_err(|_| format!("`{s}` isn't a base58 address"))
}

impl ConfigArgs {
    pub fn wallet_path(&self) -> PathBuf {
        self.wallet.clone().unwrap_or_else(|| {
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
            home.join(".config").join("solana").join("id.json")
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive portal (the default).
    Run,
    /// Print the current GIF list and exit.
    List,
    /// Submit one GIF link and print the refreshed list.
    Submit { link: String },
    /// Create the storage account for the configured keypair.
    Init,
    /// Generate a new storage account keypair file.
    CreateStorageKeypair {
        /// Where to write the keypair.
        #[arg(long, default_value = "keypair.json")]
        out: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
