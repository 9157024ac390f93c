//! Cipher B: ChaCha20-Poly1305, 24-byte stored nonce, first 12 bytes used
//! as the actual AEAD nonce, 16-byte tag (§4.1).

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;

use super::traits::{auth_failure, bad_key_size, bad_nonce_size, empty_plaintext, too_short};
use crate::error::Result;
use crate::primitives::Cipher;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 24;
const AEAD_NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

pub struct AeadB {
    cipher: ChaCha20Poly1305,
    nonce: [u8; NONCE_LEN],
}

impl AeadB {
    fn aead_nonce(&self) -> &Nonce {
        Nonce::from_slice(&self.nonce[..AEAD_NONCE_LEN])
    }
}

impl Cipher for AeadB {
    fn new(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_LEN {
            return Err(bad_key_size(KEY_LEN, key.len()));
        }
        let mut nonce = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);
        Ok(Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(key)),
            nonce,
        })
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        if plaintext.is_empty() {
            return Err(empty_plaintext());
        }
        self.cipher
            .encrypt(self.aead_nonce(), plaintext)
            .map_err(|_| auth_failure())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < TAG_LEN {
            return Err(too_short());
        }
        self.cipher
            .decrypt(self.aead_nonce(), ciphertext)
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
        [11u8; KEY_LEN]
    }

    #[test]
    fn roundtrip() {
        let cipher = AeadB::new(&key()).unwrap();
        let ciphertext = cipher.encrypt(b"hello, world!").unwrap();
        let plaintext = cipher.decrypt(&ciphertext).unwrap();
        assert_eq!(plaintext, b"hello, world!");
    }

    #[test]
    fn stores_24_byte_nonce_but_uses_first_12() {
        let cipher = AeadB::new(&key()).unwrap();
        assert_eq!(cipher.nonce().len(), NONCE_LEN);
    }

    #[test]
    fn wrong_key_size_rejected() {
        assert!(AeadB::new(&[0u8; 16]).is_err());
    }

    #[test]
    fn tampered_ciphertext_fails_auth() {
        let cipher = AeadB::new(&key()).unwrap();
        let mut ciphertext = cipher.encrypt(b"hello, world!").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;
        assert!(cipher.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn set_nonce_rejects_wrong_size() {
        let mut cipher = AeadB::new(&key()).unwrap();
        assert!(cipher.set_nonce(&[0u8; 12]).is_err());
    }
}
