//! The remote gateway: turns the session's four operations into calls against the GIF portal
//! program.

use async_trait::async_trait;
use gif_portal_interface::{
    error::AccountDataError,
    instructions::{
        AddGif,
        StartStuffOff,
    },
    state::try_base_account_from_owner_and_data,
};
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::{
        Signer,
        SignerError,
    },
};

use crate::{
    config::PortalConfig,
    item::Item,
    logs::log_success,
    transactions::send_transaction,
};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No wallet signer available; connect a wallet first")]
    MissingSigner,
    #[error("Account does not exist: {0}")]
    AccountNotFound(Pubkey),
    #[error("Invalid storage account: {0}")]
    InvalidAccount(#[from] AccountDataError),
    #[error("No gif link given")]
    EmptyLink,
    #[error("Couldn't sign transaction: {0}")]
    Signing(#[from] SignerError),
    #[error("RPC request failed: {0}")]
    Rpc(Box<ClientError>),
}

impl From<ClientError> for GatewayError {
    fn from(error: ClientError) -> Self {
        Self::Rpc(Box::new(error))
    }
}

/// The program operations the session depends on.
///
/// `initialize_storage` and `append_item` are signed by the connected identity. `fetch_list`
/// returns the remote list verbatim, in the program's order.
#[async_trait(?Send)]
pub trait Gateway {
    async fn initialize_storage(&self, signer: &Keypair) -> Result<Signature, GatewayError>;

    async fn append_item(&self, signer: &Keypair, link: &str) -> Result<Signature, GatewayError>;

    async fn fetch_list(&self) -> Result<Vec<Item>, GatewayError>;
}

/// A [`Gateway`] backed by a Solana JSON-RPC endpoint.
pub struct RpcGateway {
    rpc: RpcClient,
    config: PortalConfig,
}

impl RpcGateway {
    pub fn new(config: PortalConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
        Self { rpc, config }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn storage_account(&self) -> Pubkey {
        self.config.storage_account.pubkey()
    }

    /// Binds the RPC connection and program to the identity's signer. Pure construction, nothing
    /// is sent.
    pub fn derive_client<'a>(
        &'a self,
        signer: Option<&'a Keypair>,
    ) -> Result<ProgramClient<'a>, GatewayError> {
        let user = signer.ok_or(GatewayError::MissingSigner)?;
        Ok(ProgramClient {
            rpc: &self.rpc,
            program_id: self.config.program_id,
            storage_account: &self.config.storage_account,
            user,
        })
    }
}

/// An RPC connection bound to the program and one signing identity.
pub struct ProgramClient<'a> {
    rpc: &'a RpcClient,
    program_id: Pubkey,
    storage_account: &'a Keypair,
    user: &'a Keypair,
}

impl ProgramClient<'_> {
    pub fn user(&self) -> Pubkey {
        self.user.pubkey()
    }

    pub async fn start_stuff_off(&self) -> Result<Signature, GatewayError> {
        let ixn = StartStuffOff {
            base_account: self.storage_account.pubkey(),
            user: self.user.pubkey(),
        }
        .create_instruction(self.program_id);

        let sig = send_transaction(self.rpc, self.user, &[self.storage_account], &[ixn]).await?;
        log_success(
            "Created a new BaseAccount w/ address",
            self.storage_account.pubkey(),
        );
        Ok(sig)
    }

    pub async fn add_gif(&self, gif_link: &str) -> Result<Signature, GatewayError> {
        if gif_link.is_empty() {
            return Err(GatewayError::EmptyLink);
        }

        let ixn = AddGif {
            base_account: self.storage_account.pubkey(),
            user: self.user.pubkey(),
            gif_link: gif_link.to_string(),
        }
        .create_instruction(self.program_id);

        let sig = send_transaction(self.rpc, self.user, &[], &[ixn]).await?;
        log_success("GIF successfully sent to program", gif_link);
        Ok(sig)
    }
}

#[async_trait(?Send)]
impl Gateway for RpcGateway {
    async fn initialize_storage(&self, signer: &Keypair) -> Result<Signature, GatewayError> {
        self.derive_client(Some(signer))?.start_stuff_off().await
    }

    async fn append_item(&self, signer: &Keypair, link: &str) -> Result<Signature, GatewayError> {
        self.derive_client(Some(signer))?.add_gif(link).await
    }

    async fn fetch_list(&self) -> Result<Vec<Item>, GatewayError> {
        let address = self.storage_account();
        let account = self
            .rpc
            .get_account_with_commitment(&address, self.rpc.commitment())
            .await?
            .value
            .ok_or(GatewayError::AccountNotFound(address))?;

        let base_account = try_base_account_from_owner_and_data(
            &self.config.program_id,
            &account.owner,
            &account.data,
        )?;

        Ok(base_account.gif_list.into_iter().map(Item::from).collect())
    }
}
