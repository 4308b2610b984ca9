use borsh::BorshSerialize;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::instructions::InstructionTag;

/// Appends a GIF link to the storage account's list, recording the signer as its submitter.
///
/// ### Accounts
///  0. `[WRITE]` Storage (base) account
///  1. `[WRITE, SIGNER]` User account
pub struct AddGif {
    pub base_account: Pubkey,
    pub user: Pubkey,
    pub gif_link: String,
}

#[derive(BorshSerialize)]
struct AddGifArgs<'a> {
    gif_link: &'a str,
}

impl AddGif {
    /// The discriminator followed by the borsh encoded link.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = InstructionTag::AddGif.discriminator().to_vec();
        AddGifArgs {
            gif_link: &self.gif_link,
        }
        .serialize(&mut data)
        .expect("Writing to a Vec can't fail");
        data
    }

    pub fn create_instruction(&self, program_id: Pubkey) -> Instruction {
        Instruction::new_with_bytes(
            program_id,
            &self.pack(),
            vec![
                AccountMeta::new(self.base_account, false),
                AccountMeta::new(self.user, true),
            ],
        )
    }
}
