//! Terminal front-end for the GIF portal program.

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use gif_portal_client::{
    config::PortalConfig,
    gateway::RpcGateway,
    identity::KeypairWallet,
    keypair_file::create_storage_keypair,
    print_kv,
    session::Session,
};
use solana_sdk::signer::Signer;

use crate::cli::{
    Cli,
    Command,
    ConfigArgs,
};

mod cli;
mod commands;
mod ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Cli { config, command } = Cli::parse();

    match command.unwrap_or(Command::Run) {
        Command::CreateStorageKeypair { out, force } => write_storage_keypair(&out, force),
        command => run_portal(&config, command).await,
    }
}

fn write_storage_keypair(out: &Path, force: bool) -> anyhow::Result<()> {
    let keypair = create_storage_keypair(out, force)
        .with_context(|| format!("Couldn't create storage keypair at {}", out.display()))?;
    print_kv!("Storage account", keypair.pubkey());
    print_kv!("Keypair file", out.display());
    Ok(())
}

async fn run_portal(config: &ConfigArgs, command: Command) -> anyhow::Result<()> {
    let portal_config = PortalConfig::resolve(
        config.rpc_url.as_str(),
        config.program_id,
        config.idl.as_deref(),
        &config.storage_keypair,
    )
    .context("Couldn't load configuration")?;

    print_kv!("RPC", portal_config.rpc_url);
    print_kv!("Program", portal_config.program_id);
    print_kv!("Storage account", portal_config.storage_account.pubkey());

    let gateway = RpcGateway::new(portal_config);
    let wallet = KeypairWallet::new(config.wallet_path(), config.auto_connect);
    let mut session = Session::new(gateway, wallet);

    match command {
        Command::Run => ui::run(&mut session).await,
        command => commands::run_once(&mut session, command).await,
    }
}
