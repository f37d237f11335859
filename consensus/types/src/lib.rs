//! Types used by the beacon chain's deposit-processing logic.
//!
//! The definitions here are SSZ-stable: `tree_hash_root` of a `DepositData` is the
//! deposit tree leaf that every other node computes, bit for bit.

pub mod beacon_state;
pub mod chain_spec;
pub mod deposit;
pub mod deposit_data;
pub mod deposit_message;
pub mod eth1_data;
pub mod fork_data;
pub mod signing_data;
pub mod validator;

pub use crate::beacon_state::{BeaconState, Error as BeaconStateError};
pub use crate::chain_spec::{ChainSpec, Domain};
pub use crate::deposit::{Deposit, DEPOSIT_TREE_DEPTH};
pub use crate::deposit_data::DepositData;
pub use crate::deposit_message::DepositMessage;
pub use crate::eth1_data::Eth1Data;
pub use crate::fork_data::ForkData;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::validator::Validator;

pub use bls::{Keypair, PublicKey, PublicKeyBytes, SecretKey, Signature, SignatureBytes};

pub type Hash256 = ethereum_types::H256;
