use crate::{Error, Hash256, PublicKey, DST};
use blst::min_pk as blst_core;
use blst::BLST_ERROR;
use serde_utils::hex::encode as hex_encode;
use std::fmt;

/// The byte-length of a BLS signature when serialized in compressed form.
pub const SIGNATURE_BYTES_LEN: usize = 96;

/// A point on the curve that has been checked to be a valid signature.
#[derive(Clone)]
pub struct Signature {
    point: blst_core::Signature,
}

impl Signature {
    pub(crate) fn from_point(point: blst_core::Signature) -> Self {
        Self { point }
    }

    /// Serialize `self` as compressed bytes.
    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.point.compress()
    }

    /// Deserialize `self` from compressed bytes.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let point = blst_core::Signature::uncompress(bytes)?;
        Ok(Self { point })
    }

    /// Returns `true` if `self` is a signature across `msg` by `pubkey`.
    pub fn verify(&self, pubkey: &PublicKey, msg: Hash256) -> bool {
        self.point
            .verify(true, msg.as_bytes(), DST, &[], pubkey.point(), true)
            == BLST_ERROR::BLST_SUCCESS
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.serialize()[..] == other.serialize()[..]
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    impl_debug!();
}
