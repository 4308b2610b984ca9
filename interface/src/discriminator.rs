//! Anchor discriminators for the GIF portal program.
//!
//! Instruction discriminators are the first 8 bytes of `sha256("global:<snake_case_name>")` and
//! account discriminators are the first 8 bytes of `sha256("account:<TypeName>")`.

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// `sha256("global:start_stuff_off")[..8]`
pub const START_STUFF_OFF: Discriminator = [126, 54, 85, 33, 226, 32, 195, 32];

/// `sha256("global:add_gif")[..8]`
pub const ADD_GIF: Discriminator = [171, 74, 141, 100, 33, 70, 87, 155];

/// `sha256("account:BaseAccount")[..8]`
pub const BASE_ACCOUNT: Discriminator = [16, 90, 130, 242, 159, 10, 232, 133];
