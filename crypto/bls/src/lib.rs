//! BLS12-381 primitives, backed by the `blst` library.
//!
//! Exposes exactly the surface that deposit processing needs: signing keys,
//! point-validated public keys/signatures, and their lazily-validated byte
//! forms (`PublicKeyBytes`, `SignatureBytes`) as they appear on the wire.

#[macro_use]
mod macros;
mod get_withdrawal_credentials;
mod keypair;
mod public_key;
mod public_key_bytes;
mod secret_key;
mod signature;
mod signature_bytes;

pub use get_withdrawal_credentials::get_withdrawal_credentials;
pub use keypair::Keypair;
pub use public_key::{PublicKey, PUBLIC_KEY_BYTES_LEN};
pub use public_key_bytes::PublicKeyBytes;
pub use secret_key::{SecretKey, SECRET_KEY_BYTES_LEN};
pub use signature::{Signature, SIGNATURE_BYTES_LEN};
pub use signature_bytes::SignatureBytes;

use blst::BLST_ERROR;

pub type Hash256 = ethereum_types::H256;

/// Domain separation tag used when hashing a message to the curve.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An error was raised from the `blst` backend.
    BlstError(BLST_ERROR),
    /// The provided bytes were an incorrect length.
    InvalidByteLength { got: usize, expected: usize },
}

impl From<BLST_ERROR> for Error {
    fn from(e: BLST_ERROR) -> Error {
        Error::BlstError(e)
    }
}
