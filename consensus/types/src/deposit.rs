use crate::{DepositData, Hash256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::typenum::U32;
use ssz_types::FixedVector;
use tree_hash_derive::TreeHash;

/// The depth of the deposit accumulator, fixed by the deposit contract.
pub const DEPOSIT_TREE_DEPTH: usize = 32;

/// A deposit to potentially become a beacon chain validator.
///
/// The proof length is pinned to the tree depth at the type level: a record with the
/// wrong shape is rejected at the SSZ boundary, before any cryptographic work.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Deposit {
    pub proof: FixedVector<Hash256, U32>,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    pub data: DepositData,
}
