use solana_sdk::pubkey::Pubkey;

/// Anchor framework error codes the GIF portal program can return as `InstructionError::Custom`.
///
/// The program declares no error codes of its own, so every custom error it returns comes from the
/// framework's account and constraint checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr, strum_macros::EnumIter)]
#[repr(u32)]
pub enum AnchorErrorCode {
    InstructionMissing = 100,
    InstructionFallbackNotFound = 101,
    InstructionDidNotDeserialize = 102,
    InstructionDidNotSerialize = 103,
    ConstraintMut = 2000,
    ConstraintSigner = 2002,
    AccountDiscriminatorAlreadySet = 3000,
    AccountDiscriminatorNotFound = 3001,
    AccountDiscriminatorMismatch = 3002,
    AccountDidNotDeserialize = 3003,
    AccountDidNotSerialize = 3004,
    AccountNotEnoughKeys = 3005,
    AccountNotMutable = 3006,
    AccountOwnedByWrongProgram = 3007,
    AccountNotSigner = 3010,
    AccountNotSystemOwned = 3011,
    AccountNotInitialized = 3012,
}

impl From<AnchorErrorCode> for &'static str {
    fn from(value: AnchorErrorCode) -> Self {
        match value {
            AnchorErrorCode::InstructionMissing => "8 byte instruction identifier not provided",
            AnchorErrorCode::InstructionFallbackNotFound => "Fallback functions are not supported",
            AnchorErrorCode::InstructionDidNotDeserialize => {
                "The program could not deserialize the given instruction"
            }
            AnchorErrorCode::InstructionDidNotSerialize => {
                "The program could not serialize the given instruction"
            }
            AnchorErrorCode::ConstraintMut => "A mut constraint was violated",
            AnchorErrorCode::ConstraintSigner => "A signer constraint was violated",
            AnchorErrorCode::AccountDiscriminatorAlreadySet => {
                "The account discriminator was already set on this account"
            }
            AnchorErrorCode::AccountDiscriminatorNotFound => "No discriminator was found on the account",
            AnchorErrorCode::AccountDiscriminatorMismatch => {
                "Account discriminator did not match what was expected"
            }
            AnchorErrorCode::AccountDidNotDeserialize => "Failed to deserialize the account",
            AnchorErrorCode::AccountDidNotSerialize => "Failed to serialize the account",
            AnchorErrorCode::AccountNotEnoughKeys => "Not enough account keys given to the instruction",
            AnchorErrorCode::AccountNotMutable => "The given account is not mutable",
            AnchorErrorCode::AccountOwnedByWrongProgram => {
                "The given account is owned by a different program than expected"
            }
            AnchorErrorCode::AccountNotSigner => "The given account did not sign",
            AnchorErrorCode::AccountNotSystemOwned => {
                "The given account is not owned by the system program"
            }
            AnchorErrorCode::AccountNotInitialized => {
                "The program expected this account to be already initialized"
            }
        }
    }
}

impl core::fmt::Display for AnchorErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{:?} ({}): {msg}", self, *self as u32)
    }
}

/// Errors from decoding the storage account's raw data.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum AccountDataError {
    #[error("Account is owned by {actual}, expected {expected}")]
    WrongOwner { expected: Pubkey, actual: Pubkey },
    #[error("Account is uninitialized")]
    Uninitialized,
    #[error("Account isn't a BaseAccount")]
    InvalidDiscriminator,
    #[error("Account data is malformed: {0}")]
    Malformed(String),
}
