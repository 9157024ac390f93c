//! The two CLI operations, wiring the prompt, file manager, KDF, header
//! and pipeline together end to end (§6-§7).

use std::fs;
use std::path::Path;

use secrecy::ExposeSecret as _;

use crate::error::Result;
use crate::file_manager::{self, FileManager, RealFileManager};
use crate::header::FileHeader;
use crate::kdf::{self, Params as KdfParams};
use crate::pipeline::{self, Direction, NullProgress, ProgressSink as _};
use crate::primitives::{AeadA, AeadB, Cipher};
use crate::prompt::{Prompt, TerminalPrompt};
use crate::transform::ChunkTransform;

fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

pub fn encrypt(path: &Path) -> Result<()> {
    run_encrypt(path, &RealFileManager, &TerminalPrompt)
}

pub fn decrypt(path: &Path) -> Result<()> {
    run_decrypt(path, &RealFileManager, &TerminalPrompt)
}

fn run_encrypt(path: &Path, files: &impl FileManager, prompt: &impl Prompt) -> Result<()> {
    files.validate_input(path)?;
    let (mut input, original_size) = files.open_input(path)?;

    let password = prompt.read_password("Password: ")?;

    let kdf_params = KdfParams::default();
    let salt = kdf::generate_salt(kdf_params.salt_len);
    let key = kdf::derive(password.expose_secret().as_bytes(), &salt, &kdf_params)?;
    let (key_a, key_b) = kdf::split_key(&key);

    let cipher_a = AeadA::new(key_a.expose_secret())?;
    let cipher_b = AeadB::new(key_b.expose_secret())?;
    let nonce_a = cipher_a.nonce().to_vec();
    let nonce_b = cipher_b.nonce().to_vec();

    let output_path = file_manager::encrypted_path(path);
    let mut output = files.create_output(&output_path)?;

    let header = FileHeader::new(salt, original_size, nonce_a.clone(), nonce_b.clone())?;
    if let Err(e) = header.write(&mut output) {
        let _ = fs::remove_file(&output_path);
        return Err(e);
    }

    let build_transform = || -> Result<ChunkTransform> {
        let mut cipher_a = AeadA::new(key_a.expose_secret())?;
        cipher_a.set_nonce(&nonce_a)?;
        let mut cipher_b = AeadB::new(key_b.expose_secret())?;
        cipher_b.set_nonce(&nonce_b)?;
        Ok(ChunkTransform::new(cipher_a, cipher_b, crate::codec::Codec::new()?))
    };

    let result = pipeline::run(
        Direction::Encrypt,
        &mut input,
        &mut output,
        build_transform,
        worker_count(),
        &mut NullProgress,
    );

    if result.is_err() {
        let _ = fs::remove_file(&output_path);
    }
    result
}

fn run_decrypt(path: &Path, files: &impl FileManager, prompt: &impl Prompt) -> Result<()> {
    let output_path = file_manager::decrypted_path(path)?;
    files.validate_input(path)?;
    let (mut input, _) = files.open_input(path)?;

    let header = FileHeader::read(&mut input)?;

    let password = prompt.read_password("Password: ")?;

    let kdf_params = KdfParams {
        salt_len: header.salt.len(),
        ..KdfParams::default()
    };
    let key = kdf::derive(password.expose_secret().as_bytes(), &header.salt, &kdf_params)?;
    let (key_a, key_b) = kdf::split_key(&key);

    let mut output = files.create_output(&output_path)?;

    let nonce_a = header.nonce_a.clone();
    let nonce_b = header.nonce_b.clone();
    let build_transform = || -> Result<ChunkTransform> {
        let mut cipher_a = AeadA::new(key_a.expose_secret())?;
        cipher_a.set_nonce(&nonce_a)?;
        let mut cipher_b = AeadB::new(key_b.expose_secret())?;
        cipher_b.set_nonce(&nonce_b)?;
        Ok(ChunkTransform::new(cipher_a, cipher_b, crate::codec::Codec::new()?))
    };

    let mut progress = NullProgress;
    progress.set_total(header.original_size);
    let result = pipeline::run(
        Direction::Decrypt,
        &mut input,
        &mut output,
        build_transform,
        worker_count(),
        &mut progress,
    );

    if result.is_err() {
        let _ = fs::remove_file(&output_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    struct FixedPrompt(&'static str);
    impl Prompt for FixedPrompt {
        fn read_password(&self, _prompt: &str) -> Result<secrecy::SecretBox<str>> {
            Ok(secrecy::SecretBox::new(self.0.to_string().into_boxed_str()))
        }
    }

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("notes.txt");
        File::create(&input_path).unwrap().write_all(b"hello, world!\n").unwrap();

        let files = RealFileManager;
        let prompt = FixedPrompt("correct horse");

        run_encrypt(&input_path, &files, &prompt).unwrap();
        let encrypted_path = file_manager::encrypted_path(&input_path);
        assert!(encrypted_path.exists());

        fs::remove_file(&input_path).unwrap();
        run_decrypt(&encrypted_path, &files, &prompt).unwrap();

        let mut roundtripped = Vec::new();
        File::open(&input_path).unwrap().read_to_end(&mut roundtripped).unwrap();
        assert_eq!(roundtripped, b"hello, world!\n");
    }

    #[test]
    fn decrypt_with_wrong_password_fails_and_removes_output() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("notes.txt");
        File::create(&input_path).unwrap().write_all(b"hello, world!\n").unwrap();

        let files = RealFileManager;
        run_encrypt(&input_path, &files, &FixedPrompt("correct horse")).unwrap();
        let encrypted_path = file_manager::encrypted_path(&input_path);

        let result = run_decrypt(&encrypted_path, &files, &FixedPrompt("wrong password"));
        assert!(result.is_err());

        let decrypted_path = file_manager::decrypted_path(&encrypted_path).unwrap();
        assert!(!decrypted_path.exists());
    }

    #[test]
    fn encrypt_refuses_existing_output() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("notes.txt");
        File::create(&input_path).unwrap().write_all(b"data").unwrap();
        File::create(file_manager::encrypted_path(&input_path)).unwrap();

        let files = RealFileManager;
        let result = run_encrypt(&input_path, &files, &FixedPrompt("pw"));
        assert!(result.is_err());
    }

    #[test]
    fn encrypt_rejects_empty_input() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("empty.txt");
        File::create(&input_path).unwrap();

        let files = RealFileManager;
        let result = run_encrypt(&input_path, &files, &FixedPrompt("pw"));
        assert!(result.is_err());
        assert!(!file_manager::encrypted_path(&input_path).exists());
    }
}
