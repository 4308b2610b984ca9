//! One-shot subcommands: connect, do one thing, print the resulting view.

use gif_portal_client::{
    gateway::Gateway,
    identity::IdentityProvider,
    logs::log_info,
    print_kv,
    session::{
        RefreshOutcome,
        Session,
    },
    view::render,
};

use crate::cli::Command;

pub async fn run_once<G: Gateway, W: IdentityProvider>(
    session: &mut Session<G, W>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::List => {
            session.connect().await?;
        }
        Command::Submit { link } => {
            session.connect().await?;
            let mut input = link;
            session.submit(&mut input).await?;
        }
        Command::Init => {
            session.connect().await?;
            report_storage(session).await?;
        }
        Command::Run | Command::CreateStorageKeypair { .. } => {
            anyhow::bail!("{command:?} isn't a one-shot cluster command")
        }
    }

    finish(session)
}

/// Connecting already fetched the list and created the storage account if it was missing, so
/// `init` only sends a transaction for a fresh account.
async fn report_storage<G: Gateway, W: IdentityProvider>(
    session: &mut Session<G, W>,
) -> anyhow::Result<()> {
    match session.state().last_refresh() {
        Some(RefreshOutcome::StorageInitialized(sig)) => {
            print_kv!("Storage initialized", sig);
            session.refresh().await?;
        }
        Some(RefreshOutcome::Fetched(_)) => log_info("Storage account", "already initialized"),
        // The failed fetch is in `last_error`.
        None => {}
    }
    Ok(())
}

/// Prints the final view, failing if the last action failed.
fn finish<G: Gateway, W: IdentityProvider>(session: &Session<G, W>) -> anyhow::Result<()> {
    println!("{}", render(session.state()));
    match session.state().last_error() {
        Some(e) => Err(anyhow::anyhow!("{e}")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use gif_portal_client::{
        item::Item,
        mock_helpers::{
            rpc_error,
            GatewayCall,
            MockGateway,
            MockWallet,
        },
        test_accounts,
    };
    use solana_sdk::signer::Signer;

    use super::*;

    fn session(gateway: MockGateway) -> Session<MockGateway, MockWallet> {
        Session::new(gateway, MockWallet::new(test_accounts::wallet_1(), false))
    }

    #[tokio::test]
    async fn init_creates_missing_storage_once() {
        let mut session = session(MockGateway::uninitialized());

        run_once(&mut session, Command::Init).await.expect("Should initialize");

        assert_eq!(
            session.gateway().calls(),
            vec![
                GatewayCall::FetchList,
                GatewayCall::InitializeStorage {
                    user: test_accounts::wallet_1().pubkey(),
                },
                GatewayCall::FetchList,
            ]
        );
        assert_eq!(session.gateway().remote_items(), Some(vec![]));
        assert_eq!(session.state().last_refresh(), Some(RefreshOutcome::Fetched(0)));
        assert_eq!(session.state().last_error(), None);
    }

    #[tokio::test]
    async fn init_on_existing_storage_sends_nothing() {
        let submitter = test_accounts::wallet_2().pubkey();
        let mut session = session(MockGateway::with_items(vec![Item::new("a.gif", submitter)]));

        run_once(&mut session, Command::Init).await.expect("Should succeed");

        assert_eq!(session.gateway().calls(), vec![GatewayCall::FetchList]);
        assert_eq!(session.state().items(), &[Item::new("a.gif", submitter)]);
    }

    #[tokio::test]
    async fn init_fails_when_the_list_cant_be_read() {
        let gateway = MockGateway::with_items(vec![]);
        gateway.fail_next_fetch(rpc_error("connection refused"));
        let mut session = session(gateway);

        let err = run_once(&mut session, Command::Init).await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(session.gateway().calls(), vec![GatewayCall::FetchList]);
    }

    #[tokio::test]
    async fn submit_appends_then_refreshes() {
        let mut session = session(MockGateway::with_items(vec![]));
        let user = test_accounts::wallet_1().pubkey();

        run_once(
            &mut session,
            Command::Submit {
                link: "a.gif".to_string(),
            },
        )
        .await
        .expect("Should submit");

        assert_eq!(
            session.gateway().calls(),
            vec![
                GatewayCall::FetchList,
                GatewayCall::AppendItem {
                    user,
                    link: "a.gif".to_string(),
                },
                GatewayCall::FetchList,
            ]
        );
        assert_eq!(session.state().items(), &[Item::new("a.gif", user)]);
    }

    #[tokio::test]
    async fn interactive_command_is_rejected() {
        let mut session = session(MockGateway::with_items(vec![]));

        assert!(run_once(&mut session, Command::Run).await.is_err());
        assert!(session.gateway().calls().is_empty());
        assert!(!session.state().is_connected());
    }
}
