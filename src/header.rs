//! Fixed-layout container header (§4.6): salt, original size, both nonces.
//! Big-endian, no magic, no version.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::primitives::{aead_a, aead_b};

pub const SALT_LEN: usize = 32;
const SIZE_LEN: usize = 8;
pub const HEADER_LEN: usize = SALT_LEN + SIZE_LEN + aead_a::NONCE_LEN + aead_b::NONCE_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub salt: Vec<u8>,
    pub original_size: u64,
    pub nonce_a: Vec<u8>,
    pub nonce_b: Vec<u8>,
}

impl FileHeader {
    pub fn new(salt: Vec<u8>, original_size: u64, nonce_a: Vec<u8>, nonce_b: Vec<u8>) -> Result<Self> {
        if salt.len() != SALT_LEN {
            return Err(Error::Header(format!(
                "invalid salt size: want {SALT_LEN}, got {}",
                salt.len()
            )));
        }
        if nonce_a.len() != aead_a::NONCE_LEN {
            return Err(Error::Header(format!(
                "invalid cipher-A nonce size: want {}, got {}",
                aead_a::NONCE_LEN,
                nonce_a.len()
            )));
        }
        if nonce_b.len() != aead_b::NONCE_LEN {
            return Err(Error::Header(format!(
                "invalid cipher-B nonce size: want {}, got {}",
                aead_b::NONCE_LEN,
                nonce_b.len()
            )));
        }
        Ok(Self {
            salt,
            original_size,
            nonce_a,
            nonce_b,
        })
    }

    pub fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer
            .write_all(&self.salt)
            .map_err(|e| Error::Header(format!("short write: {e}")))?;
        writer
            .write_all(&self.original_size.to_be_bytes())
            .map_err(|e| Error::Header(format!("short write: {e}")))?;
        writer
            .write_all(&self.nonce_a)
            .map_err(|e| Error::Header(format!("short write: {e}")))?;
        writer
            .write_all(&self.nonce_b)
            .map_err(|e| Error::Header(format!("short write: {e}")))?;
        Ok(())
    }

    pub fn read(reader: &mut impl Read) -> Result<Self> {
        let mut salt = vec![0u8; SALT_LEN];
        reader
            .read_exact(&mut salt)
            .map_err(|e| Error::Header(format!("short read: {e}")))?;

        let mut size_buf = [0u8; SIZE_LEN];
        reader
            .read_exact(&mut size_buf)
            .map_err(|e| Error::Header(format!("short read: {e}")))?;
        let original_size = u64::from_be_bytes(size_buf);

        let mut nonce_a = vec![0u8; aead_a::NONCE_LEN];
        reader
            .read_exact(&mut nonce_a)
            .map_err(|e| Error::Header(format!("short read: {e}")))?;

        let mut nonce_b = vec![0u8; aead_b::NONCE_LEN];
        reader
            .read_exact(&mut nonce_b)
            .map_err(|e| Error::Header(format!("short read: {e}")))?;

        Self::new(salt, original_size, nonce_a, nonce_b)
    }
}
