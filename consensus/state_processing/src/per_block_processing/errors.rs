use safe_arith::ArithError;
use types::BeaconStateError;

/// The error returned from block-level deposit processing. Indicates that a block is
/// either invalid, or we were unable to determine its validity (we encountered an
/// unexpected error).
#[derive(Debug, PartialEq, Clone)]
pub enum BlockProcessingError {
    /// A deposit was invalid; `index` is its position in the block body.
    DepositInvalid {
        index: usize,
        reason: DepositInvalid,
    },
    /// The block does not carry exactly the outstanding deposits it must.
    DepositCountInvalid {
        expected: usize,
        found: usize,
    },
    BeaconStateError(BeaconStateError),
    ArithError(ArithError),
}

impl From<BeaconStateError> for BlockProcessingError {
    fn from(e: BeaconStateError) -> Self {
        BlockProcessingError::BeaconStateError(e)
    }
}

impl From<ArithError> for BlockProcessingError {
    fn from(e: ArithError) -> Self {
        BlockProcessingError::ArithError(e)
    }
}

/// A conversion that consumes `self` and adds an `index` variable to resulting struct.
///
/// Used to convert an operation-level error into a block-level error that points at the
/// object which caused it.
pub trait IntoWithIndex<T>: Sized {
    fn into_with_index(self, index: usize) -> T;
}

/// Carries a reason an object was invalid, alongside the classes of failure that any
/// verification can hit while computing it.
#[derive(Debug, PartialEq, Clone)]
pub enum BlockOperationError<T> {
    Invalid(T),
    BeaconStateError(BeaconStateError),
    ArithError(ArithError),
}

impl<T> BlockOperationError<T> {
    pub fn invalid(reason: T) -> BlockOperationError<T> {
        BlockOperationError::Invalid(reason)
    }
}

impl<T> From<BeaconStateError> for BlockOperationError<T> {
    fn from(e: BeaconStateError) -> Self {
        BlockOperationError::BeaconStateError(e)
    }
}

impl<T> From<ArithError> for BlockOperationError<T> {
    fn from(e: ArithError) -> Self {
        BlockOperationError::ArithError(e)
    }
}

/// Describes why a `Deposit` is invalid.
#[derive(Debug, PartialEq, Clone)]
pub enum DepositInvalid {
    /// The deposit is not the next deposit to be applied to the state.
    BadIndex { state: u64, deposit: u64 },
    /// The proof does not recompute to the deposit root committed by the anchor chain.
    BadMerkleProof,
    /// The `pubkey` or `signature` bytes do not describe valid BLS points.
    BadBlsBytes,
    /// The signature over the deposit message does not verify under its public key.
    BadSignature,
}

impl IntoWithIndex<BlockProcessingError> for BlockOperationError<DepositInvalid> {
    fn into_with_index(self, index: usize) -> BlockProcessingError {
        match self {
            BlockOperationError::Invalid(reason) => {
                BlockProcessingError::DepositInvalid { index, reason }
            }
            BlockOperationError::BeaconStateError(e) => BlockProcessingError::BeaconStateError(e),
            BlockOperationError::ArithError(e) => BlockProcessingError::ArithError(e),
        }
    }
}
