//! Non-interactive file validation/open/create (§6). No chooser, no
//! overwrite prompt: this binary refuses rather than asks.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const ENC_EXTENSION: &str = "enc";

pub trait FileManager {
    fn validate_input(&self, path: &Path) -> Result<()>;
    fn open_input(&self, path: &Path) -> Result<(File, u64)>;
    fn create_output(&self, path: &Path) -> Result<File>;
}

/// Derive the encrypt-side output path: `<path>.enc`.
pub fn encrypted_path(path: &Path) -> PathBuf {
    let mut out = path.as_os_str().to_owned();
    out.push(".");
    out.push(ENC_EXTENSION);
    PathBuf::from(out)
}

/// Derive the decrypt-side output path: `<path>` with `.enc` stripped.
/// Fails if `path` does not end in `.enc`.
pub fn decrypted_path(path: &Path) -> Result<PathBuf> {
    match path.extension() {
        Some(ext) if ext == ENC_EXTENSION => Ok(path.with_extension("")),
        _ => Err(Error::Input(format!(
            "expected a '.{ENC_EXTENSION}' file, got '{}'",
            path.display()
        ))),
    }
}

pub struct RealFileManager;

impl FileManager for RealFileManager {
    fn validate_input(&self, path: &Path) -> Result<()> {
        let metadata = fs::metadata(path)
            .map_err(|_| Error::Input(format!("'{}' does not exist", path.display())))?;
        if !metadata.is_file() {
            return Err(Error::Input(format!("'{}' is not a regular file", path.display())));
        }
        if metadata.len() == 0 {
            return Err(Error::Input(format!("'{}' is empty", path.display())));
        }
        Ok(())
    }

    fn open_input(&self, path: &Path) -> Result<(File, u64)> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok((file, size))
    }

    fn create_output(&self, path: &Path) -> Result<File> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    Error::Input(format!("'{}' already exists", path.display()))
                }
                _ => Error::Io(e.to_string()),
            })
    }
}
