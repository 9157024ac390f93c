use crate::error::{Error, Result};

/// Capability set shared by both AEAD primitives: each owns a key and a
/// fixed nonce for the whole file (§3, §4.1).
pub trait Cipher: Sized {
    /// Build a new cipher from a key, generating a fresh random nonce.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt an arbitrary-length buffer under the cipher's current nonce.
    ///
    /// # Errors
    /// Errors if `plaintext` is empty.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt a buffer produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    /// Errors if the ciphertext is shorter than the auth tag, or if
    /// authentication fails (wrong key, wrong nonce, or tampering).
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Replace the nonce (used when loading a nonce from the container header).
    ///
    /// # Errors
    /// Errors if `nonce` is the wrong size for this cipher.
    fn set_nonce(&mut self, nonce: &[u8]) -> Result<()>;

    /// The cipher's current nonce.
    fn nonce(&self) -> &[u8];
}

pub(super) fn empty_plaintext() -> Error {
    Error::Cipher("plaintext cannot be empty".to_string())
}

pub(super) fn auth_failure() -> Error {
    Error::Cipher("authentication failed".to_string())
}

pub(super) fn too_short() -> Error {
    Error::Cipher("ciphertext shorter than the authentication tag".to_string())
}

pub(super) fn bad_key_size(expected: usize, got: usize) -> Error {
    Error::Cipher(format!("invalid key size: want {expected} bytes, got {got}"))
}

pub(super) fn bad_nonce_size(expected: usize, got: usize) -> Error {
    Error::Cipher(format!(
        "invalid nonce size: want {expected} bytes, got {got}"
    ))
}
