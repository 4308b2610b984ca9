use gif_portal_interface::{
    discriminator::START_STUFF_OFF,
    instructions::{
        AddGif,
        InstructionTag,
        StartStuffOff,
    },
    program::SYSTEM_PROGRAM_ID,
};
use solana_sdk::pubkey::Pubkey;

#[test]
fn start_stuff_off_accounts() {
    let program_id = Pubkey::new_unique();
    let base_account = Pubkey::new_unique();
    let user = Pubkey::new_unique();

    let ixn = StartStuffOff { base_account, user }.create_instruction(program_id);

    assert_eq!(ixn.program_id, program_id);
    assert_eq!(ixn.data, START_STUFF_OFF);
    let metas: Vec<_> = ixn
        .accounts
        .iter()
        .map(|m| (m.pubkey, m.is_signer, m.is_writable))
        .collect();
    assert_eq!(
        metas,
        vec![
            (base_account, true, true),
            (user, true, true),
            (SYSTEM_PROGRAM_ID, false, false),
        ]
    );
}

#[test]
fn add_gif_accounts_and_tag() {
    let program_id = Pubkey::new_unique();
    let base_account = Pubkey::new_unique();
    let user = Pubkey::new_unique();

    let ixn = AddGif {
        base_account,
        user,
        gif_link: "https://media.giphy.com/a.gif".to_string(),
    }
    .create_instruction(program_id);

    assert_eq!(
        InstructionTag::from_instruction_data(&ixn.data),
        Some(InstructionTag::AddGif)
    );
    let metas: Vec<_> = ixn
        .accounts
        .iter()
        .map(|m| (m.pubkey, m.is_signer, m.is_writable))
        .collect();
    assert_eq!(metas, vec![(base_account, false, true), (user, true, true)]);
}
