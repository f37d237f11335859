use crate::{PublicKey, SecretKey};
use std::fmt;

/// A simple wrapper around a `PublicKey` and `SecretKey`.
#[derive(Clone)]
pub struct Keypair {
    pub pk: PublicKey,
    pub sk: SecretKey,
}

impl Keypair {
    /// Instantiate `self` from a public and secret key.
    pub fn from_components(pk: PublicKey, sk: SecretKey) -> Self {
        Self { pk, sk }
    }

    /// Instantiates `self` from a randomly generated secret key.
    pub fn random() -> Self {
        let sk = SecretKey::random();
        Self {
            pk: sk.public_key(),
            sk,
        }
    }
}

impl fmt::Debug for Keypair {
    /// Omits the secret key from the debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair {{ pk: {:?} }}", self.pk)
    }
}
