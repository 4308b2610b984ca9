//! In-memory stand-ins for the RPC gateway and the wallet, for exercising [`crate::session`]
//! without a validator.

use std::{
    cell::{
        Cell,
        RefCell,
    },
    path::PathBuf,
};

use async_trait::async_trait;
use solana_client::client_error::{
    ClientError,
    ClientErrorKind,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
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
    test_accounts,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    InitializeStorage { user: Pubkey },
    AppendItem { user: Pubkey, link: String },
    FetchList,
}

/// A generic RPC failure, as the gateway reports transport errors and program rejections.
pub fn rpc_error(msg: &str) -> GatewayError {
    ClientError::from(ClientErrorKind::Custom(msg.to_string())).into()
}

/// Simulates the program's storage account in memory and records every call made to it.
///
/// `None` for the remote list means the storage account doesn't exist yet.
#[derive(Default)]
pub struct MockGateway {
    storage_account: Pubkey,
    remote: RefCell<Option<Vec<Item>>>,
    calls: RefCell<Vec<GatewayCall>>,
    next_fetch_error: RefCell<Option<GatewayError>>,
    next_append_error: RefCell<Option<GatewayError>>,
    num_signatures: Cell<u8>,
}

impl MockGateway {
    pub fn uninitialized() -> Self {
        Self {
            storage_account: test_accounts::storage_account().pubkey(),
            ..Default::default()
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let gateway = Self::uninitialized();
        gateway.remote.replace(Some(items));
        gateway
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, f: impl Fn(&GatewayCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| f(c)).count()
    }

    pub fn remote_items(&self) -> Option<Vec<Item>> {
        self.remote.borrow().clone()
    }

    /// Replaces the remote list, as if another user had written to it.
    pub fn set_remote_items(&self, items: Vec<Item>) {
        self.remote.replace(Some(items));
    }

    /// Removes the storage account, as if it had never been created.
    pub fn close_storage(&self) {
        self.remote.replace(None);
    }

    pub fn fail_next_fetch(&self, error: GatewayError) {
        self.next_fetch_error.replace(Some(error));
    }

    pub fn fail_next_append(&self, error: GatewayError) {
        self.next_append_error.replace(Some(error));
    }

    fn next_signature(&self) -> Signature {
        let n = self.num_signatures.get().wrapping_add(1);
        self.num_signatures.set(n);
        Signature::from([n; 64])
    }
}

#[async_trait(?Send)]
impl Gateway for MockGateway {
    async fn initialize_storage(&self, signer: &Keypair) -> Result<Signature, GatewayError> {
        self.calls.borrow_mut().push(GatewayCall::InitializeStorage {
            user: signer.pubkey(),
        });
        let mut remote = self.remote.borrow_mut();
        if remote.is_some() {
            return Err(rpc_error(&format!(
                "Allocate: account {} already in use",
                self.storage_account
            )));
        }
        *remote = Some(vec![]);
        Ok(self.next_signature())
    }

    async fn append_item(&self, signer: &Keypair, link: &str) -> Result<Signature, GatewayError> {
        self.calls.borrow_mut().push(GatewayCall::AppendItem {
            user: signer.pubkey(),
            link: link.to_string(),
        });
        if let Some(error) = self.next_append_error.take() {
            return Err(error);
        }
        match self.remote.borrow_mut().as_mut() {
            Some(items) => items.push(Item::new(link, signer.pubkey())),
            None => return Err(rpc_error("AccountNotInitialized")),
        }
        Ok(self.next_signature())
    }

    async fn fetch_list(&self) -> Result<Vec<Item>, GatewayError> {
        self.calls.borrow_mut().push(GatewayCall::FetchList);
        if let Some(error) = self.next_fetch_error.take() {
            return Err(error);
        }
        self.remote
            .borrow()
            .clone()
            .ok_or(GatewayError::AccountNotFound(self.storage_account))
    }
}

/// A wallet that holds its keypair in memory.
pub struct MockWallet {
    keypair: Keypair,
    installed: bool,
    trusted: bool,
    connected: bool,
    num_connects: usize,
}

impl MockWallet {
    pub fn new(keypair: &Keypair, trusted: bool) -> Self {
        Self {
            keypair: keypair.insecure_clone(),
            installed: true,
            trusted,
            connected: false,
            num_connects: 0,
        }
    }

    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::new(test_accounts::wallet_1(), false)
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Successful connects so far.
    pub fn num_connects(&self) -> usize {
        self.num_connects
    }

    /// Replaces the key the wallet hands out, as when the user switches accounts.
    pub fn switch_account(&mut self, keypair: &Keypair) {
        self.keypair = keypair.insecure_clone();
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MockWallet {
    async fn connect(&mut self, only_if_trusted: bool) -> Result<Pubkey, IdentityError> {
        if !self.installed {
            return Err(IdentityError::ProviderMissing(PathBuf::from("mock-wallet")));
        }
        if only_if_trusted && !self.trusted {
            return Err(IdentityError::NotTrusted);
        }
        self.trusted = true;
        self.connected = true;
        self.num_connects += 1;
        Ok(self.keypair.pubkey())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn signer(&self) -> Option<&Keypair> {
        self.connected.then_some(&self.keypair)
    }
}
