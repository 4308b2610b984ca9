//! Client for the GIF portal program.
//!
//! Wires a wallet identity, the RPC gateway to the on-chain program, the session state machine,
//! and the terminal view together.

pub mod config;
pub mod gateway;
pub mod identity;
pub mod item;
pub mod keypair_file;
pub mod logs;
pub mod mock_helpers;
pub mod session;
pub mod test_accounts;
pub mod transactions;
pub mod view;

pub use logs::LogColor;

/// Prints a `key: value` pair with the key highlighted.
#[macro_export]
macro_rules! print_kv {
    ($k:expr, $v:expr) => {{
        use ::colored::Colorize as _;
        println!(
            "{}: {}",
            $k.to_string().color($crate::LogColor::Highlight),
            $v
        );
    }};
}
