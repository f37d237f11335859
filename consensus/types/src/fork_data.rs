use crate::Hash256;
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Identifies a fork for the purposes of domain computation.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ForkData {
    pub current_version: [u8; 4],
    pub genesis_validators_root: Hash256,
}
