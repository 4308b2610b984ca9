//! Runtime configuration for the gateway: where the program lives and which account stores the
//! list.

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    str::FromStr,
};

use serde::Deserialize;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
};

use crate::keypair_file::{
    read_keypair_file,
    KeypairFileError,
};

pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No program id given; pass --program-id or an IDL file with `metadata.address`")]
    MissingProgramId,
    #[error("Couldn't read IDL file {path}: {source}")]
    IdlRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse IDL file {path}: {source}")]
    IdlParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid program address `{0}`")]
    InvalidProgramId(String),
    #[error("Couldn't load the storage account keypair: {0}")]
    StorageKeypair(#[from] KeypairFileError),
}

/// The subset of an Anchor IDL this client reads.
#[derive(Debug, Deserialize)]
struct Idl {
    metadata: IdlMetadata,
}

#[derive(Debug, Deserialize)]
struct IdlMetadata {
    address: String,
}

/// Reads the deployed program's address from an Anchor IDL file.
pub fn program_id_from_idl(path: &Path) -> Result<Pubkey, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::IdlRead {
        path: path.to_path_buf(),
        source,
    })?;
    program_id_from_idl_json(&contents).map_err(|e| match e {
        IdlError::Parse(source) => ConfigError::IdlParse {
            path: path.to_path_buf(),
            source,
        },
        IdlError::Address(address) => ConfigError::InvalidProgramId(address),
    })
}

#[derive(Debug)]
enum IdlError {
    Parse(serde_json::Error),
    Address(String),
}

fn program_id_from_idl_json(contents: &str) -> Result<Pubkey, IdlError> {
    let idl: Idl = serde_json::from_str(contents).map_err(IdlError::Parse)?;
    Pubkey::from_str(&idl.metadata.address).map_err(|_| IdlError::Address(idl.metadata.address))
}

/// Everything the gateway needs to reach the program, passed in at construction.
pub struct PortalConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
    /// The storage account's keypair. It only signs `start_stuff_off`, when the account is
    /// created.
    pub storage_account: Keypair,
}

impl PortalConfig {
    pub fn new(rpc_url: impl Into<String>, program_id: Pubkey, storage_account: Keypair) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            commitment: CommitmentConfig::processed(),
            program_id,
            storage_account,
        }
    }

    /// Builds the config from its sources. An explicit `program_id` wins over the IDL file.
    pub fn resolve(
        rpc_url: impl Into<String>,
        program_id: Option<Pubkey>,
        idl: Option<&Path>,
        storage_keypair: &Path,
    ) -> Result<Self, ConfigError> {
        let program_id = match (program_id, idl) {
            (Some(id), _) => id,
            (None, Some(idl)) => program_id_from_idl(idl)?,
            (None, None) => return Err(ConfigError::MissingProgramId),
        };
        let storage_account = read_keypair_file(storage_keypair)?;

        Ok(Self::new(rpc_url, program_id, storage_account))
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::signer::Signer;

    use super::*;
    use crate::{
        keypair_file::write_keypair_file,
        test_accounts,
    };

    const IDL: &str = r#"{
        "version": "0.1.0",
        "name": "myepicproject",
        "instructions": [],
        "metadata": { "address": "2222VkwR14uJeobbCRfr67aEudhqv9gwjaZHpHqja9M5" }
    }"#;

    #[test]
    fn program_id_from_idl_metadata() {
        let id = program_id_from_idl_json(IDL).expect("Should parse");
        assert_eq!(
            id.to_string(),
            "2222VkwR14uJeobbCRfr67aEudhqv9gwjaZHpHqja9M5"
        );
    }

    #[test]
    fn idl_without_metadata_is_rejected() {
        assert!(matches!(
            program_id_from_idl_json(r#"{ "name": "myepicproject" }"#),
            Err(IdlError::Parse(_))
        ));
        assert!(matches!(
            program_id_from_idl_json(r#"{ "metadata": { "address": "not base58!" } }"#),
            Err(IdlError::Address(_))
        ));
    }

    #[test]
    fn resolve_prefers_explicit_program_id() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let keypair_path = dir.path().join("keypair.json");
        let idl_path = dir.path().join("idl.json");
        write_keypair_file(test_accounts::storage_account(), &keypair_path)?;
        fs::write(&idl_path, IDL)?;

        let explicit = Pubkey::new_unique();
        let config = PortalConfig::resolve(DEVNET_URL, Some(explicit), Some(&idl_path), &keypair_path)?;
        assert_eq!(config.program_id, explicit);
        assert_eq!(config.commitment, CommitmentConfig::processed());
        assert_eq!(
            config.storage_account.pubkey(),
            test_accounts::storage_account().pubkey()
        );

        let from_idl = PortalConfig::resolve(DEVNET_URL, None, Some(&idl_path), &keypair_path)?;
        assert_eq!(
            from_idl.program_id.to_string(),
            "2222VkwR14uJeobbCRfr67aEudhqv9gwjaZHpHqja9M5"
        );

        assert!(matches!(
            PortalConfig::resolve(DEVNET_URL, None, None, &keypair_path),
            Err(ConfigError::MissingProgramId)
        ));
        Ok(())
    }
}
