use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::InstructionTag,
    program::SYSTEM_PROGRAM_ID,
};

/// Creates the storage account and writes an empty GIF list into it.
///
/// The storage account is created by the system program, so it must sign alongside the user that
/// pays for it. Fails if the account already exists.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Storage (base) account
///  1. `[WRITE, SIGNER]` User account, pays for the storage account
///  2. `[READ]` System program
pub struct StartStuffOff {
    pub base_account: Pubkey,
    pub user: Pubkey,
}

impl StartStuffOff {
    pub fn create_instruction(&self, program_id: Pubkey) -> Instruction {
        Instruction::new_with_bytes(
            program_id,
            &InstructionTag::StartStuffOff.discriminator(),
            vec![
                AccountMeta::new(self.base_account, true),
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}
