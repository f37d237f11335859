use crate::{Eth1Data, Validator};
use bls::PublicKeyBytes;
use safe_arith::ArithError;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    UnknownValidator(usize),
    /// More deposits have been applied than the anchor chain has committed.
    InvalidDepositState {
        deposit_count: u64,
        deposit_index: u64,
    },
    ArithError(ArithError),
}

impl From<ArithError> for Error {
    fn from(e: ArithError) -> Error {
        Error::ArithError(e)
    }
}

/// The state of the `BeaconChain`, reduced to the fields that deposit processing reads
/// and writes.
///
/// `validators` and `balances` are index-aligned: every mutation that grows one grows
/// the other, keeping their lengths equal.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct BeaconState {
    pub eth1_data: Eth1Data,
    #[serde(with = "serde_utils::quoted_u64")]
    pub eth1_deposit_index: u64,
    pub validators: Vec<Validator>,
    #[serde(with = "serde_utils::quoted_u64_vec")]
    pub balances: Vec<u64>,
}

impl BeaconState {
    /// Instantiate a state with an empty registry against the given anchor-chain view.
    pub fn new(eth1_data: Eth1Data) -> Self {
        Self {
            eth1_data,
            eth1_deposit_index: 0,
            validators: vec![],
            balances: vec![],
        }
    }

    /// Looks up the registry index of a validator by public key.
    ///
    /// Public keys are unique across the registry, so the first match is the only match.
    /// A linear scan suffices here; a pubkey cache belongs to the surrounding pipeline.
    pub fn get_validator_index(&self, pubkey: &PublicKeyBytes) -> Option<u64> {
        self.validators
            .iter()
            .position(|v| v.pubkey == *pubkey)
            .map(|i| i as u64)
    }

    /// Get a mutable reference to the balance of a single validator.
    pub fn get_balance_mut(&mut self, validator_index: usize) -> Result<&mut u64, Error> {
        self.balances
            .get_mut(validator_index)
            .ok_or(Error::UnknownValidator(validator_index))
    }

    /// The number of deposits committed on the anchor chain but not yet applied to `self`.
    pub fn get_outstanding_deposit_len(&self) -> Result<u64, Error> {
        self.eth1_data
            .deposit_count
            .checked_sub(self.eth1_deposit_index)
            .ok_or(Error::InvalidDepositState {
                deposit_count: self.eth1_data.deposit_count,
                deposit_index: self.eth1_deposit_index,
            })
    }
}
