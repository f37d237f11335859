pub mod errors;
pub mod process_operations;
mod verify_deposit;


pub use process_operations::{process_deposit, process_deposits};
pub use verify_deposit::{
    verify_deposit_index, verify_deposit_merkle_proof, verify_deposit_signature,
};
