//! Wallet identity providers.
//!
//! A provider hands out the user's public key on connect and holds the signer used for every
//! transaction afterwards. The session never touches key material directly.

use std::path::{
    Path,
    PathBuf,
};

use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};

use crate::keypair_file::{
    parse_keypair_json,
    KeypairFileError,
};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("No wallet found at {0}; create one with `solana-keygen new` or pass --wallet")]
    ProviderMissing(PathBuf),
    #[error("Wallet hasn't been trusted for silent connect")]
    NotTrusted,
    #[error("Couldn't load wallet keypair: {0}")]
    InvalidKeypair(#[from] KeypairFileError),
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Connects and returns the wallet's public key. With `only_if_trusted`, only succeeds when
    /// the user approved this wallet before, and fails with [`IdentityError::NotTrusted`]
    /// otherwise.
    async fn connect(&mut self, only_if_trusted: bool) -> Result<Pubkey, IdentityError>;

    fn disconnect(&mut self);

    /// The connected wallet's signer, if any.
    fn signer(&self) -> Option<&Keypair>;
}

/// A wallet backed by a `solana-keygen` JSON keypair file.
pub struct KeypairWallet {
    path: PathBuf,
    trusted: bool,
    keypair: Option<Keypair>,
}

impl KeypairWallet {
    pub fn new(path: impl Into<PathBuf>, trusted: bool) -> Self {
        Self {
            path: path.into(),
            trusted,
            keypair: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted
    }
}

#[async_trait(?Send)]
impl IdentityProvider for KeypairWallet {
    async fn connect(&mut self, only_if_trusted: bool) -> Result<Pubkey, IdentityError> {
        let io_err = |source: std::io::Error| KeypairFileError::Io {
            path: self.path.clone(),
            source,
        };
        if !tokio::fs::try_exists(&self.path).await.map_err(io_err)? {
            return Err(IdentityError::ProviderMissing(self.path.clone()));
        }
        if only_if_trusted && !self.trusted {
            return Err(IdentityError::NotTrusted);
        }

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(io_err)?;
        let keypair = parse_keypair_json(&contents)?;
        let pubkey = keypair.pubkey();

        // An explicit connect approves the wallet for later silent connects.
        self.trusted = true;
        self.keypair = Some(keypair);
        Ok(pubkey)
    }

    fn disconnect(&mut self) {
        self.keypair = None;
    }

    fn signer(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        keypair_file::write_keypair_file,
        test_accounts,
    };

    #[tokio::test]
    async fn missing_wallet_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut wallet = KeypairWallet::new(dir.path().join("id.json"), true);

        assert!(matches!(
            wallet.connect(false).await,
            Err(IdentityError::ProviderMissing(_))
        ));
        assert!(wallet.signer().is_none());
    }

    #[tokio::test]
    async fn silent_connect_requires_trust() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("id.json");
        write_keypair_file(test_accounts::wallet_1(), &path)?;
        let mut wallet = KeypairWallet::new(&path, false);

        assert!(matches!(
            wallet.connect(true).await,
            Err(IdentityError::NotTrusted)
        ));
        assert!(wallet.signer().is_none());

        let pubkey = wallet.connect(false).await?;
        assert_eq!(pubkey, test_accounts::wallet_1().pubkey());
        assert!(wallet.is_trusted());

        wallet.disconnect();
        assert!(wallet.signer().is_none());

        // Previously approved, so a silent connect now succeeds.
        assert_eq!(wallet.connect(true).await?, pubkey);
        assert_eq!(wallet.signer().map(|s| s.pubkey()), Some(pubkey));
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_wallet_path_is_not_missing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let not_a_dir = dir.path().join("id.json");
        std::fs::write(&not_a_dir, "[]")?;
        let mut wallet = KeypairWallet::new(not_a_dir.join("id.json"), true);

        assert!(matches!(
            wallet.connect(false).await,
            Err(IdentityError::InvalidKeypair(KeypairFileError::Io { .. }))
        ));
        assert!(wallet.signer().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_wallet_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("id.json");
        std::fs::write(&path, "not a keypair")?;
        let mut wallet = KeypairWallet::new(&path, true);

        assert!(matches!(
            wallet.connect(false).await,
            Err(IdentityError::InvalidKeypair(_))
        ));
        Ok(())
    }
}
