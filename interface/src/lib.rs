//! Client-side view of the GIF portal Anchor program: instruction builders, account layouts, and
//! the program's error codes.
//!
//! The program itself is deployed separately; its id is supplied at runtime.

pub mod discriminator;
pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// The system program, passed to `start_stuff_off` so the storage account can be allocated.
    pub const SYSTEM_PROGRAM_ID: Pubkey =
        Pubkey::from_str_const("11111111111111111111111111111111");
}
