use crate::Error;
use blst::min_pk as blst_core;
use serde_utils::hex::encode as hex_encode;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The byte-length of a BLS public key when serialized in compressed form.
pub const PUBLIC_KEY_BYTES_LEN: usize = 48;

/// A point on the curve that has been checked to be a valid, non-infinity public key.
#[derive(Clone)]
pub struct PublicKey {
    point: blst_core::PublicKey,
}

impl PublicKey {
    pub(crate) fn from_point(point: blst_core::PublicKey) -> Self {
        Self { point }
    }

    pub(crate) fn point(&self) -> &blst_core::PublicKey {
        &self.point
    }

    /// Serialize `self` as compressed bytes.
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_BYTES_LEN] {
        self.point.compress()
    }

    /// Deserialize `self` from compressed bytes, checking group membership.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let point = blst_core::PublicKey::uncompress(bytes)?;
        point.validate()?;
        Ok(Self { point })
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.serialize()[..] == other.serialize()[..]
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}

impl fmt::Debug for PublicKey {
    impl_debug!();
}
