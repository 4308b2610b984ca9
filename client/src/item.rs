use gif_portal_interface::state::ItemStruct;
use solana_sdk::pubkey::Pubkey;

/// One submitted link and the address of its submitter, as last read from the storage account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub link: String,
    pub submitter_address: Pubkey,
}

impl Item {
    pub fn new(link: impl Into<String>, submitter_address: Pubkey) -> Self {
        Self {
            link: link.into(),
            submitter_address,
        }
    }
}

impl From<ItemStruct> for Item {
    fn from(item: ItemStruct) -> Self {
        Self {
            submitter_address: item.user_address(),
            link: item.gif_link,
        }
    }
}
