//! Password-based key derivation (§4.4): Argon2id, password + salt → 64-byte key.

use argon2::{Algorithm, Argon2, Params as Argon2Params, Version};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretBox};

use crate::error::{Error, Result};

pub const KEY_LEN: usize = 64;
const MIN_MEMORY_KIB: u32 = 8 * 1024;
const MIN_SALT_LEN: usize = 16;
const MIN_KEY_LEN: usize = 16;

/// Tunable KDF parameters (§4.4). Configuration, not global state.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub memory_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    pub salt_len: usize,
    pub key_len: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            time_cost: 4,
            parallelism: 4,
            salt_len: 32,
            key_len: KEY_LEN,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib < MIN_MEMORY_KIB {
            return Err(Error::Kdf("memory must be at least 8 MiB".to_string()));
        }
        if self.time_cost < 1 {
            return Err(Error::Kdf("time cost must be at least 1".to_string()));
        }
        if self.parallelism < 1 {
            return Err(Error::Kdf("parallelism must be at least 1".to_string()));
        }
        if self.salt_len < MIN_SALT_LEN {
            return Err(Error::Kdf("salt length must be at least 16 bytes".to_string()));
        }
        if self.key_len < MIN_KEY_LEN {
            return Err(Error::Kdf("key length must be at least 16 bytes".to_string()));
        }
        Ok(())
    }
}

/// `saltLen` cryptographically random bytes.
pub fn generate_salt(len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Derive a `params.key_len`-byte key from `password` and `salt`.
///
/// # Errors
/// Errors if `password` is empty, `salt` is the wrong length, or `params`
/// fails validation.
pub fn derive(password: &[u8], salt: &[u8], params: &Params) -> Result<SecretBox<[u8]>> {
    params.validate()?;
    if password.is_empty() {
        return Err(Error::Kdf("password cannot be empty".to_string()));
    }
    if salt.len() != params.salt_len {
        return Err(Error::Kdf(format!(
            "salt length must be {} bytes, got {}",
            params.salt_len,
            salt.len()
        )));
    }

    let argon2_params = Argon2Params::new(
        params.memory_kib,
        params.time_cost,
        params.parallelism,
        Some(params.key_len),
    )
    .map_err(|e| Error::Kdf(format!("invalid argon2 parameters: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = vec![0u8; params.key_len];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| Error::Kdf(format!("derivation failed: {e}")))?;

    Ok(SecretBox::new(key.into_boxed_slice()))
}

/// Split a derived key into its two 32-byte halves, each still wrapped
/// so it zeroizes on drop — the halves are handed straight to the
/// ciphers and must never live as plain `Vec<u8>` in between.
pub fn split_key(key: &SecretBox<[u8]>) -> (SecretBox<[u8]>, SecretBox<[u8]>) {
    let bytes = key.expose_secret();
    let key_a: Box<[u8]> = bytes[..32].into();
    let key_b: Box<[u8]> = bytes[32..64].into();
    (SecretBox::new(key_a), SecretBox::new(key_b))
}
