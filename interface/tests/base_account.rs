use gif_portal_interface::{
    error::AccountDataError,
    state::{
        try_base_account_from_owner_and_data,
        BaseAccount,
        ItemStruct,
        BASE_ACCOUNT_SPACE,
    },
};
use solana_sdk::pubkey::Pubkey;

fn two_item_account(submitter: Pubkey) -> BaseAccount {
    BaseAccount {
        total_gifs: 2,
        gif_list: vec![
            ItemStruct {
                gif_link: "https://media.giphy.com/a.gif".to_string(),
                user_address: submitter.to_bytes(),
            },
            ItemStruct {
                gif_link: "https://media.giphy.com/b.gif".to_string(),
                user_address: submitter.to_bytes(),
            },
        ],
    }
}

#[test]
fn decode_zero_padded_account() {
    let program_id = Pubkey::new_unique();
    let submitter = Pubkey::new_unique();
    let account = two_item_account(submitter);

    // The program allocates a fixed amount of space, so the tail of the account is zeroed.
    let mut data = account.to_account_data();
    data.resize(BASE_ACCOUNT_SPACE, 0);

    let decoded = try_base_account_from_owner_and_data(&program_id, &program_id, &data)
        .expect("Should decode");
    assert_eq!(decoded, account);
    assert_eq!(decoded.gif_list[0].user_address(), submitter);
    assert_eq!(decoded.gif_list[1].gif_link, "https://media.giphy.com/b.gif");
}

#[test]
fn decode_preserves_remote_order() {
    let program_id = Pubkey::new_unique();
    let links = ["c.gif", "a.gif", "b.gif"];
    let account = BaseAccount {
        total_gifs: links.len() as u64,
        gif_list: links
            .iter()
            .map(|link| ItemStruct {
                gif_link: link.to_string(),
                user_address: Pubkey::new_unique().to_bytes(),
            })
            .collect(),
    };

    let decoded = try_base_account_from_owner_and_data(
        &program_id,
        &program_id,
        &account.to_account_data(),
    )
    .unwrap();
    let decoded_links: Vec<_> = decoded.gif_list.iter().map(|i| i.gif_link.as_str()).collect();
    assert_eq!(decoded_links, links);
}

#[test]
fn reject_foreign_owner() {
    let program_id = Pubkey::new_unique();
    let other = Pubkey::new_unique();
    let data = BaseAccount::default().to_account_data();

    assert_eq!(
        try_base_account_from_owner_and_data(&program_id, &other, &data),
        Err(AccountDataError::WrongOwner {
            expected: program_id,
            actual: other,
        })
    );
}

#[test]
fn reject_bad_discriminator_and_short_data() {
    let mut data = BaseAccount::default().to_account_data();
    data[0] ^= 0xff;
    assert_eq!(
        BaseAccount::try_from_account_data(&data),
        Err(AccountDataError::InvalidDiscriminator)
    );
    assert_eq!(
        BaseAccount::try_from_account_data(&[16, 90, 130]),
        Err(AccountDataError::Uninitialized)
    );
}

#[test]
fn reject_truncated_list() {
    let data = two_item_account(Pubkey::new_unique()).to_account_data();
    let truncated = &data[..data.len() - 4];
    assert!(matches!(
        BaseAccount::try_from_account_data(truncated),
        Err(AccountDataError::Malformed(_))
    ));
}
