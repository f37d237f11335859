use crate::{Hash256, PublicKey, Signature, DST};
use blst::min_pk as blst_core;
use rand::Rng;

/// The byte-length of a BLS secret key.
pub const SECRET_KEY_BYTES_LEN: usize = 32;

/// A BLS secret (signing) key.
///
/// Deliberately does not implement `Debug`, `Serialize` or SSZ encoding; key material
/// never leaves this process through those paths.
#[derive(Clone)]
pub struct SecretKey {
    point: blst_core::SecretKey,
}

impl SecretKey {
    /// Generate a new key from the system RNG.
    pub fn random() -> Self {
        let mut ikm = [0; SECRET_KEY_BYTES_LEN];
        rand::thread_rng().fill(&mut ikm[..]);

        // `key_gen` only fails when the key material is shorter than 32 bytes.
        let point = blst_core::SecretKey::key_gen(&ikm, &[]).unwrap();
        Self { point }
    }

    /// Returns the public key that corresponds to `self`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(self.point.sk_to_pk())
    }

    /// Signs `msg` (a digest that already includes any domain separation).
    pub fn sign(&self, msg: Hash256) -> Signature {
        Signature::from_point(self.point.sign(msg.as_bytes(), DST, &[]))
    }
}
