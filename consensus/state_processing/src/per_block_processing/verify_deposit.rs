use crate::per_block_processing::errors::{BlockOperationError, DepositInvalid};
use merkle_proof::verify_merkle_proof_with_mixin;
use tree_hash::TreeHash;
use types::{BeaconState, ChainSpec, Deposit, DepositData, SignedRoot};

type Result<T> = std::result::Result<T, BlockOperationError<DepositInvalid>>;

fn error(reason: DepositInvalid) -> BlockOperationError<DepositInvalid> {
    BlockOperationError::invalid(reason)
}

/// Verify that `deposit` is the next deposit to be applied to `state`.
///
/// The inclusion proof is positional, so deposits cannot be reordered or replayed; any
/// index other than the state's counter is rejected.
pub fn verify_deposit_index(state: &BeaconState, deposit: &Deposit) -> Result<()> {
    verify!(
        deposit.index == state.eth1_deposit_index,
        DepositInvalid::BadIndex {
            state: state.eth1_deposit_index,
            deposit: deposit.index,
        }
    );

    Ok(())
}

/// Verify that the deposit's inclusion proof recomputes to the deposit root committed
/// in the state's anchor-chain view, at the deposit's claimed index and the committed
/// leaf count.
pub fn verify_deposit_merkle_proof(
    state: &BeaconState,
    deposit: &Deposit,
    spec: &ChainSpec,
) -> Result<()> {
    let leaf = deposit.data.tree_hash_root();

    verify!(
        verify_merkle_proof_with_mixin(
            leaf,
            &deposit.proof,
            spec.deposit_contract_tree_depth as usize,
            deposit.index as usize,
            state.eth1_data.deposit_root,
            state.eth1_data.deposit_count,
        ),
        DepositInvalid::BadMerkleProof
    );

    Ok(())
}

/// Verify `deposit.data.signature` signs the deposit message under `deposit.data.pubkey`.
///
/// Only called for deposits that would admit a new validator; top-ups of an
/// already-admitted key skip this check (ownership of the key was proven at admission).
pub fn verify_deposit_signature(deposit_data: &DepositData, spec: &ChainSpec) -> Result<()> {
    let pubkey = deposit_data
        .pubkey
        .decompress()
        .map_err(|_| error(DepositInvalid::BadBlsBytes))?;
    let signature = deposit_data
        .signature
        .decompress()
        .map_err(|_| error(DepositInvalid::BadBlsBytes))?;

    let message = deposit_data
        .as_deposit_message()
        .signing_root(spec.get_deposit_domain());

    verify!(
        signature.verify(&pubkey, message),
        DepositInvalid::BadSignature
    );

    Ok(())
}
