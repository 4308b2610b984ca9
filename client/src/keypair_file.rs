//! Reading and writing keypairs in the JSON byte-array format used by `solana-keygen`.

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use solana_sdk::signature::Keypair;

#[derive(Debug, thiserror::Error)]
pub enum KeypairFileError {
    #[error("Couldn't access keypair file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Keypair file {0} already exists")]
    AlreadyExists(PathBuf),
    #[error("Keypair isn't a JSON byte array: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Keypair bytes are invalid: expected 64 bytes, got {0}")]
    InvalidBytes(usize),
}

/// Parses a keypair from a JSON array of its 64 secret key bytes.
pub fn parse_keypair_json(contents: &str) -> Result<Keypair, KeypairFileError> {
    let bytes: Vec<u8> = serde_json::from_str(contents)?;
    Keypair::try_from(bytes.as_slice()).map_err(|_| KeypairFileError::InvalidBytes(bytes.len()))
}

pub fn keypair_to_json(keypair: &Keypair) -> String {
    serde_json::to_string(&keypair.to_bytes().to_vec()).expect("A byte vec always serializes")
}

pub fn read_keypair_file(path: &Path) -> Result<Keypair, KeypairFileError> {
    let contents = fs::read_to_string(path).map_err(|source| KeypairFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_keypair_json(&contents)
}

/// Writes `keypair` to `path`, creating parent directories as needed.
pub fn write_keypair_file(keypair: &Keypair, path: &Path) -> Result<(), KeypairFileError> {
    let io_err = |source: std::io::Error| KeypairFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, keypair_to_json(keypair)).map_err(io_err)
}

/// Generates a fresh storage account keypair at `path`. Refuses to overwrite an existing file
/// unless `force` is set.
pub fn create_storage_keypair(path: &Path, force: bool) -> Result<Keypair, KeypairFileError> {
    if path.exists() && !force {
        return Err(KeypairFileError::AlreadyExists(path.to_path_buf()));
    }
    let keypair = Keypair::new();
    write_keypair_file(&keypair, path)?;
    Ok(keypair)
}

#[cfg(test)]
mod tests {
    use solana_sdk::signer::Signer;

    use super::*;
    use crate::test_accounts;

    #[test]
    fn keypair_file_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("keypair.json");
        write_keypair_file(test_accounts::wallet_1(), &path)?;

        let read = read_keypair_file(&path)?;
        assert_eq!(read.pubkey(), test_accounts::wallet_1().pubkey());
        Ok(())
    }

    #[test]
    fn reject_wrong_length() {
        assert!(matches!(
            parse_keypair_json("[1, 2, 3]"),
            Err(KeypairFileError::InvalidBytes(3))
        ));
        assert!(matches!(
            parse_keypair_json("{\"_keypair\": {}}"),
            Err(KeypairFileError::Json(_))
        ));
    }

    #[test]
    fn create_storage_keypair_refuses_overwrite() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("keypair.json");

        let first = create_storage_keypair(&path, false)?;
        assert!(matches!(
            create_storage_keypair(&path, false),
            Err(KeypairFileError::AlreadyExists(_))
        ));
        assert_eq!(read_keypair_file(&path)?.pubkey(), first.pubkey());

        let second = create_storage_keypair(&path, true)?;
        assert_ne!(second.pubkey(), first.pubkey());
        assert_eq!(read_keypair_file(&path)?.pubkey(), second.pubkey());
        Ok(())
    }
}
