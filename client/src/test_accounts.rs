//! Deterministic keypairs for tests and local walkthroughs.

macro_rules! acc_keypair_fn {
    ($fn_name:ident, $b58:literal) => {
        #[inline]
        pub fn $fn_name() -> &'static ::solana_sdk::signature::Keypair {
            static KP: ::std::sync::LazyLock<::solana_sdk::signature::Keypair> =
                ::std::sync::LazyLock::new(|| {
                    ::solana_sdk::signature::Keypair::from_base58_string($b58)
                });

            ::std::sync::LazyLock::force(&KP)
        }
    };
}

#[rustfmt::skip]
mod unformatted {
    acc_keypair_fn!(wallet_1, "4phi3FwSKx8CQssCGPgBZxabjeLBZK7ZhhPrVVo1vsP4T3F9iUdQPFf7wphop5dhYg9CJV35GoPMSTdb95w3FfoE");
    acc_keypair_fn!(wallet_2, "5LqH8f3NYsSHGvEYbaWnRM8swJgEB9SdSrT6KkCeerTMbyZnQgSZhPQwJEVSsfZVMRPz4q4P4UYynEwvw2KApYrP");
    acc_keypair_fn!(storage_account, "5hcjDdYk6G8Tap95ZFpuasQU5ovxKDVKZkhyZbXdZfWhX3RyfS6ZzsZMTMhKo9xAVBmz7sFPe7gRce8G9DRtjDAK");
}

pub use unformatted::*;
