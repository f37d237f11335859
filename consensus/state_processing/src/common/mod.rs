mod deposit_data_tree;

pub use deposit_data_tree::DepositDataTree;

use safe_arith::SafeArith;
use types::{BeaconState, BeaconStateError};

/// Increase the balance of a validator, erroring upon overflow.
pub fn increase_balance(
    state: &mut BeaconState,
    index: usize,
    delta: u64,
) -> Result<(), BeaconStateError> {
    state.get_balance_mut(index)?.safe_add_assign(delta)?;
    Ok(())
}
