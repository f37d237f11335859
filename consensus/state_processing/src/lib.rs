// Clippy lint set-up (disabled in tests)
#![cfg_attr(
    not(test),
    deny(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic
    )
)]

#[macro_use]
mod macros;

pub mod common;
pub mod per_block_processing;

pub use per_block_processing::{
    errors::BlockProcessingError, process_deposit, process_deposits,
};
