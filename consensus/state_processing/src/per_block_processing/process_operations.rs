use super::errors::{BlockProcessingError, IntoWithIndex};
use super::verify_deposit::{
    verify_deposit_index, verify_deposit_merkle_proof, verify_deposit_signature,
};
use crate::common::increase_balance;
use safe_arith::SafeArith;
use types::{BeaconState, ChainSpec, Deposit, Validator};

/// Validates each `Deposit` and updates the state, short-circuiting on an invalid object.
///
/// Returns `Ok(())` if the validation and state updates completed successfully, otherwise returns
/// an `Err` describing the invalid object or cause of failure.
pub fn process_deposits(
    state: &mut BeaconState,
    deposits: &[Deposit],
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let expected_deposit_len =
        std::cmp::min(spec.max_deposits, state.get_outstanding_deposit_len()?);
    block_verify!(
        deposits.len() as u64 == expected_deposit_len,
        BlockProcessingError::DepositCountInvalid {
            expected: expected_deposit_len as usize,
            found: deposits.len(),
        }
    );

    // Deposits are verified and applied strictly in the order listed in the block; each
    // successful application becomes the precondition of the next.
    for deposit in deposits {
        process_deposit(state, deposit, spec)?;
    }

    Ok(())
}

/// Verify a single deposit against the state, then apply it.
///
/// Verification runs to completion before any mutation begins, so a rejected deposit
/// leaves `state` untouched.
pub fn process_deposit(
    state: &mut BeaconState,
    deposit: &Deposit,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let deposit_index = state.eth1_deposit_index as usize;

    verify_deposit_index(state, deposit).map_err(|e| e.into_with_index(deposit_index))?;
    verify_deposit_merkle_proof(state, deposit, spec)
        .map_err(|e| e.into_with_index(deposit_index))?;

    // Get an `Option<u64>` where `u64` is the validator index if this deposit public key
    // already exists in the registry.
    let validator_index = state.get_validator_index(&deposit.data.pubkey);

    let amount = deposit.data.amount;

    if let Some(index) = validator_index {
        // Top-up of a key whose ownership was proven when it was admitted. The
        // signature is deliberately not re-checked: a malformed one cannot reassign
        // control, it only credits the already-verified key.
        increase_balance(state, index as usize, amount)?;
    } else {
        // The signature binds the withdrawal credentials to the key, so it must hold
        // before a new validator is admitted.
        verify_deposit_signature(&deposit.data, spec)
            .map_err(|e| e.into_with_index(deposit_index))?;

        let validator = Validator {
            pubkey: deposit.data.pubkey.clone(),
            withdrawal_credentials: deposit.data.withdrawal_credentials,
            activation_eligibility_epoch: spec.far_future_epoch,
            activation_epoch: spec.far_future_epoch,
            exit_epoch: spec.far_future_epoch,
            withdrawable_epoch: spec.far_future_epoch,
            effective_balance: std::cmp::min(
                amount.safe_sub(amount.safe_rem(spec.effective_balance_increment)?)?,
                spec.max_effective_balance,
            ),
            slashed: false,
        };
        state.validators.push(validator);
        state.balances.push(amount);
    }

    state.eth1_deposit_index.safe_add_assign(1)?;

    Ok(())
}
