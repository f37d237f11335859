use crate::{ForkData, Hash256};
use tree_hash::TreeHash;

/// Domains for signatures, preventing a signature over one kind of object being
/// replayed as a signature over another.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Domain {
    Deposit,
}

/// Holds the chain-level constants that deposit processing reads.
#[derive(Debug, PartialEq, Clone)]
pub struct ChainSpec {
    /*
     * Gwei values.
     */
    pub max_effective_balance: u64,
    pub effective_balance_increment: u64,

    /*
     * Deposit contract.
     */
    pub deposit_contract_tree_depth: u64,
    pub max_deposits: u64,

    /*
     * Initial values.
     */
    pub far_future_epoch: u64,
    pub bls_withdrawal_prefix_byte: u8,
    pub genesis_fork_version: [u8; 4],

    /*
     * Signature domains.
     */
    domain_deposit: u32,
}

impl ChainSpec {
    /// Returns a `ChainSpec` compatible with the Ethereum Foundation mainnet preset.
    pub fn mainnet() -> Self {
        Self {
            max_effective_balance: 32_000_000_000,
            effective_balance_increment: 1_000_000_000,
            deposit_contract_tree_depth: 32,
            max_deposits: 16,
            far_future_epoch: u64::MAX,
            bls_withdrawal_prefix_byte: 0x00,
            genesis_fork_version: [0, 0, 0, 0],
            domain_deposit: 3,
        }
    }

    /// Returns the domain for deposit signatures.
    ///
    /// Deposits are valid across forks, thus the deposit domain is computed at the
    /// genesis fork version with an empty genesis validators root.
    pub fn get_deposit_domain(&self) -> Hash256 {
        self.compute_domain(Domain::Deposit, self.genesis_fork_version, Hash256::zero())
    }

    /// Compute a domain by applying the given `fork_version`.
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let domain_constant = match domain {
            Domain::Deposit => self.domain_deposit,
        };

        let fork_data_root = ForkData {
            current_version: fork_version,
            genesis_validators_root,
        }
        .tree_hash_root();

        let mut domain = [0; 32];
        domain[0..4].copy_from_slice(&domain_constant.to_le_bytes());
        domain[4..].copy_from_slice(
            fork_data_root
                .as_bytes()
                .get(0..28)
                .expect("fork data root is 32 bytes so the first 28 bytes exist"),
        );
        Hash256::from(domain)
    }
}
