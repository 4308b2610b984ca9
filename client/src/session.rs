//! Session state: the connected identity and the last fetched item list.
//!
//! Every action applies its effect to the state, logs failures, remembers the last failure for the
//! view, and returns a typed result to the caller.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
};

use crate::{
    gateway::{
        Gateway,
        GatewayError,
    },
    identity::{
        IdentityError,
        IdentityProvider,
    },
    item::Item,
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Disconnected,
    Connected(Pubkey),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Not connected; connect a wallet first")]
    NotConnected,
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    identity: Identity,
    items: Vec<Item>,
    last_refresh: Option<RefreshOutcome>,
    last_error: Option<String>,
}

impl SessionState {
    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.identity, Identity::Connected(_))
    }

    /// The remote list as of the last successful fetch.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The outcome of the most recent refresh, `None` if it failed or none has run since connecting.
    pub fn last_refresh(&self) -> Option<RefreshOutcome> {
        self.last_refresh
    }

    /// The message of the most recent failed action, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with a snapshot of this many items.
    Fetched(usize),
    /// The storage account was missing and has been created. The list is left untouched until the
    /// next refresh.
    StorageInitialized(Signature),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit; no remote calls were made.
    EmptyInput,
    Submitted(Signature),
}

pub struct Session<G, W> {
    gateway: G,
    wallet: W,
    state: SessionState,
}

impl<G: Gateway, W: IdentityProvider> Session<G, W> {
    pub fn new(gateway: G, wallet: W) -> Self {
        Self {
            gateway,
            wallet,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    /// Silently reconnects a previously trusted wallet. An untrusted wallet leaves the session
    /// disconnected and is not an error.
    pub async fn check_if_connected(&mut self) -> Result<Option<Pubkey>, SessionError> {
        match self.wallet.connect(true).await {
            Ok(pubkey) => {
                log_success("Connected with Public Key", pubkey);
                self.enter_connected(pubkey).await;
                Ok(Some(pubkey))
            }
            Err(IdentityError::NotTrusted) => {
                log_info("Wallet found", "waiting for an explicit connect");
                Ok(None)
            }
            Err(e) => {
                log_error("Wallet not found", &e);
                self.record(Err(e.into()))
            }
        }
    }

    /// Connects the wallet at the user's request.
    pub async fn connect(&mut self) -> Result<Pubkey, SessionError> {
        let pubkey = match self.wallet.connect(false).await {
            Ok(pubkey) => pubkey,
            Err(e) => {
                log_error("Error connecting wallet", &e);
                return self.record(Err(e.into()));
            }
        };
        log_success("Connected with Public Key", pubkey);
        self.state.last_error = None;
        self.enter_connected(pubkey).await;
        Ok(pubkey)
    }

    /// Drops the identity and the list. Returns whether a wallet was connected.
    pub fn disconnect(&mut self) -> bool {
        let was_connected = self.state.is_connected();
        self.wallet.disconnect();
        self.state = SessionState::default();
        if was_connected {
            log_info("Wallet", "disconnected");
        }
        was_connected
    }

    /// Entering `Connected` fetches the list, unless the session was already connected with the
    /// same key.
    async fn enter_connected(&mut self, pubkey: Pubkey) {
        let previous = std::mem::replace(&mut self.state.identity, Identity::Connected(pubkey));
        if previous == Identity::Connected(pubkey) {
            return;
        }
        if previous != Identity::Disconnected {
            self.state.items.clear();
        }
        // Failures are logged and recorded in the state by `refresh`.
        let _ = self.refresh().await;
    }

    /// Replaces the item list with the remote snapshot.
    ///
    /// A missing storage account triggers exactly one `initialize_storage` and leaves the list
    /// untouched; any other failure empties the list.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome, SessionError> {
        let res = self.fetch_and_apply().await;
        self.state.last_refresh = res.as_ref().ok().copied();
        self.record(res)
    }

    async fn fetch_and_apply(&mut self) -> Result<RefreshOutcome, SessionError> {
        if !self.state.is_connected() {
            return Err(SessionError::NotConnected);
        }

        log_info("Fetching GIF list", "...");
        let fetched = self.gateway.fetch_list().await;
        match fetched {
            Ok(items) => {
                log_info("Got the account", format!("{} gifs", items.len()));
                let len = items.len();
                self.state.items = items;
                Ok(RefreshOutcome::Fetched(len))
            }
            Err(GatewayError::AccountNotFound(address)) => {
                log_warning("Storage account not found, creating it", address);
                let sig = self.create_storage().await?;
                Ok(RefreshOutcome::StorageInitialized(sig))
            }
            Err(e) => {
                log_error("Error fetching GIF list", &e);
                self.state.items.clear();
                Err(e.into())
            }
        }
    }

    /// Creates the storage account, paid for and signed by the connected identity.
    pub async fn initialize_storage(&mut self) -> Result<Signature, SessionError> {
        let res = self.create_storage().await;
        self.record(res)
    }

    async fn create_storage(&self) -> Result<Signature, SessionError> {
        let signer = self.signer()?;
        self.gateway
            .initialize_storage(signer)
            .await
            .inspect_err(|e| log_error("Error creating BaseAccount account", e))
            .map_err(Into::into)
    }

    /// Submits the link in `input`. Empty input is a no-op with no remote calls.
    ///
    /// On success the input is cleared and the list refreshed. On failure the input keeps its
    /// contents and no refresh happens.
    pub async fn submit(&mut self, input: &mut String) -> Result<SubmitOutcome, SessionError> {
        if input.is_empty() {
            log_info("Submit", "No gif link given!");
            return Ok(SubmitOutcome::EmptyInput);
        }

        log_info("Gif link", input.as_str());
        let res = self.append(input.as_str()).await;
        let sig = self.record(res)?;
        input.clear();

        // The append landed. A failed refresh is recorded in the state, not reported as a failed
        // submit.
        if self.refresh().await.is_err() {
            log_warning("Submitted, but couldn't refresh the list", sig);
        }
        Ok(SubmitOutcome::Submitted(sig))
    }

    async fn append(&self, link: &str) -> Result<Signature, SessionError> {
        let signer = self.signer()?;
        self.gateway
            .append_item(signer, link)
            .await
            .inspect_err(|e| log_error("Error sending GIF", e))
            .map_err(Into::into)
    }

    fn signer(&self) -> Result<&Keypair, SessionError> {
        if !self.state.is_connected() {
            return Err(SessionError::NotConnected);
        }
        self.wallet
            .signer()
            .ok_or(SessionError::Gateway(GatewayError::MissingSigner))
    }

    fn record<T>(&mut self, res: Result<T, SessionError>) -> Result<T, SessionError> {
        self.state.last_error = res.as_ref().err().map(ToString::to_string);
        res
    }
}
