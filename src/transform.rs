//! Composes compress → pad → cipherA → cipherB → RS-encode, and its
//! inverse, into the single per-chunk transform (§4.5).

use crate::codec::Codec;
use crate::compress;
use crate::error::Result;
use crate::pad;
use crate::primitives::{AeadA, AeadB, Cipher};

pub struct ChunkTransform {
    cipher_a: AeadA,
    cipher_b: AeadB,
    codec: Codec,
}

impl ChunkTransform {
    pub fn new(cipher_a: AeadA, cipher_b: AeadB, codec: Codec) -> Self {
        Self {
            cipher_a,
            cipher_b,
            codec,
        }
    }

    pub fn nonce_a(&self) -> &[u8] {
        self.cipher_a.nonce()
    }

    pub fn nonce_b(&self) -> &[u8] {
        self.cipher_b.nonce()
    }

    /// `compress -> frame_and_pad -> cipherA -> cipherB -> RS.encode`.
    pub fn encrypt_chunk(&self, chunk: &[u8]) -> Result<Vec<u8>> {
        let compressed = compress::compress(chunk)?;
        let padded = pad::frame_and_pad(&compressed);
        let ct_a = self.cipher_a.encrypt(&padded)?;
        let ct_b = self.cipher_b.encrypt(&ct_a)?;
        self.codec.encode(&ct_b)
    }

    /// `RS.decode -> cipherB -> cipherA -> decompress`.
    pub fn decrypt_chunk(&self, chunk: &[u8]) -> Result<Vec<u8>> {
        let ct_b = self.codec.decode(chunk)?;
        let ct_a = self.cipher_b.decrypt(&ct_b)?;
        let padded = self.cipher_a.decrypt(&ct_a)?;
        let compressed = pad::strip_padding(&padded)?;
        compress::decompress(&compressed)
    }
}
