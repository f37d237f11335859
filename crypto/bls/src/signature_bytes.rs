use crate::{Error, Signature, SIGNATURE_BYTES_LEN};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_utils::hex::encode as hex_encode;
use ssz::{Decode, Encode};
use std::fmt;
use tree_hash::TreeHash;

/// A wrapper around some bytes that may or may not be a `Signature` in compressed form.
///
/// Deposit messages are self-signed, so their signature bytes cannot be rejected at the
/// wire boundary; this type carries them unverified until (and unless) they are needed.
#[derive(Clone)]
pub struct SignatureBytes {
    bytes: [u8; SIGNATURE_BYTES_LEN],
}

impl SignatureBytes {
    /// Instantiates `Self` with all-zeros.
    pub fn empty() -> Self {
        Self {
            bytes: [0; SIGNATURE_BYTES_LEN],
        }
    }

    /// Decompress and deserialize the bytes in `self` into an actual signature.
    ///
    /// May fail if the bytes are invalid.
    pub fn decompress(&self) -> Result<Signature, Error> {
        Signature::deserialize(&self.bytes)
    }

    /// Clones the bytes in `self`.
    ///
    /// The bytes are not verified (i.e., they may not represent a valid BLS point).
    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.bytes
    }

    /// Instantiates `Self` from bytes.
    ///
    /// The bytes are not fully verified (i.e., they may not represent a valid BLS point). Only the
    /// byte-length is checked.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == SIGNATURE_BYTES_LEN {
            let mut sig_bytes = [0; SIGNATURE_BYTES_LEN];
            sig_bytes[..].copy_from_slice(bytes);
            Ok(Self { bytes: sig_bytes })
        } else {
            Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            })
        }
    }
}

impl PartialEq for SignatureBytes {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..] == other.bytes[..]
    }
}

impl Eq for SignatureBytes {}

/// Serializes the `Signature` in compressed form, storing the bytes in the newly created `Self`.
impl From<Signature> for SignatureBytes {
    fn from(sig: Signature) -> Self {
        Self {
            bytes: sig.serialize(),
        }
    }
}

impl Encode for SignatureBytes {
    impl_ssz_encode!(SIGNATURE_BYTES_LEN);
}

impl Decode for SignatureBytes {
    impl_ssz_decode!(SIGNATURE_BYTES_LEN);
}

impl TreeHash for SignatureBytes {
    impl_tree_hash!(SIGNATURE_BYTES_LEN);
}

impl Serialize for SignatureBytes {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for SignatureBytes {
    impl_serde_deserialize!();
}

impl fmt::Debug for SignatureBytes {
    impl_debug!();
}
