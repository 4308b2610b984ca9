//! Layout of the program's single storage account.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::{
        BASE_ACCOUNT,
        DISCRIMINATOR_LEN,
    },
    error::AccountDataError,
};

/// Bytes allocated for the storage account when `start_stuff_off` creates it.
pub const BASE_ACCOUNT_SPACE: usize = 9000;

/// A submitted link and the address that submitted it.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemStruct {
    pub gif_link: String,
    pub user_address: [u8; 32],
}

impl ItemStruct {
    pub fn user_address(&self) -> Pubkey {
        Pubkey::new_from_array(self.user_address)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<ItemStruct>,
}

impl BaseAccount {
    /// Decodes the account from its raw data, discriminator included.
    ///
    /// The account is allocated with a fixed size, so any bytes after the encoded list are
    /// zero-filled slack and are ignored.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, AccountDataError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(AccountDataError::Uninitialized);
        }
        let (discriminator, mut rest) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != BASE_ACCOUNT {
            return Err(AccountDataError::InvalidDiscriminator);
        }
        Self::deserialize(&mut rest).map_err(|e| AccountDataError::Malformed(e.to_string()))
    }

    /// Encodes the account the way the program stores it: discriminator, then borsh data.
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = BASE_ACCOUNT.to_vec();
        self.serialize(&mut data)
            .expect("Writing to a Vec can't fail");
        data
    }
}

/// Decodes a storage account from raw Solana account fields.
///
/// Validates that:
/// - `account_owner` matches `program_id`, and
/// - `account_data` starts with the `BaseAccount` discriminator.
pub fn try_base_account_from_owner_and_data(
    program_id: &Pubkey,
    account_owner: &Pubkey,
    account_data: &[u8],
) -> Result<BaseAccount, AccountDataError> {
    if account_owner != program_id {
        return Err(AccountDataError::WrongOwner {
            expected: *program_id,
            actual: *account_owner,
        });
    }

    BaseAccount::try_from_account_data(account_data)
}
