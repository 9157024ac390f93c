//! Cipher A: AES-256-GCM, 12-byte nonce, 16-byte tag (§4.1).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

use super::traits::{auth_failure, bad_key_size, bad_nonce_size, empty_plaintext, too_short};
use crate::error::Result;
use crate::primitives::Cipher;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

pub struct AeadA {
    cipher: Aes256Gcm,
    nonce: [u8; NONCE_LEN],
}

impl Cipher for AeadA {
    fn new(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_LEN {
            return Err(bad_key_size(KEY_LEN, key.len()));
        }
        let mut nonce = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);
        Ok(Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
            nonce,
        })
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        if plaintext.is_empty() {
            return Err(empty_plaintext());
        }
        self.cipher
            .encrypt(Nonce::from_slice(&self.nonce), plaintext)
            .map_err(|_| auth_failure())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < TAG_LEN {
            return Err(too_short());
        }
        self.cipher
            .decrypt(Nonce::from_slice(&self.nonce), ciphertext)
            .map_err(|_| auth_failure())
    }

    fn set_nonce(&mut self, nonce: &[u8]) -> Result<()> {
        if nonce.len() != NONCE_LEN {
            return Err(bad_nonce_size(NONCE_LEN, nonce.len()));
        }
        self.nonce.copy_from_slice(nonce);
        Ok(())
    }

    fn nonce(&self) -> &[u8] {
        &self.nonce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> [u8; KEY_LEN] {
        [7u8; KEY_LEN]
    }

    #[test]
    fn roundtrip() {
        let cipher = AeadA::new(&key()).unwrap();
        let ciphertext = cipher.encrypt(b"hello, world!").unwrap();
        let plaintext = cipher.decrypt(&ciphertext).unwrap();
        assert_eq!(plaintext, b"hello, world!");
    }

    #[test]
    fn wrong_key_size_rejected() {
        let err = AeadA::new(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, crate::error::Error::Cipher(_)));
    }

    #[test]
    fn empty_plaintext_rejected() {
        let cipher = AeadA::new(&key()).unwrap();
        assert!(cipher.encrypt(b"").is_err());
    }

    #[test]
    fn tampered_ciphertext_fails_auth() {
        let cipher = AeadA::new(&key()).unwrap();
        let mut ciphertext = cipher.encrypt(b"hello, world!").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;
        assert!(cipher.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn wrong_nonce_fails_auth() {
        let mut cipher = AeadA::new(&key()).unwrap();
        let ciphertext = cipher.encrypt(b"hello, world!").unwrap();
        cipher.set_nonce(&[1u8; NONCE_LEN]).unwrap();
        assert!(cipher.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn set_nonce_rejects_wrong_size() {
        let mut cipher = AeadA::new(&key()).unwrap();
        assert!(cipher.set_nonce(&[0u8; 11]).is_err());
    }
}
