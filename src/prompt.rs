//! Password entry (§6): a minimal `Prompt` trait plus one terminal
//! implementation. No confirmation/double-entry UI; that's an
//! interactive-chooser concern this system leaves out.

use secrecy::SecretBox;

use crate::error::{Error, Result};

pub trait Prompt {
    /// Read a non-empty password from the user with echo disabled.
    fn read_password(&self, prompt: &str) -> Result<SecretBox<str>>;
}

/// Reads from the real terminal via `rpassword`.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_password(&self, prompt: &str) -> Result<SecretBox<str>> {
        let password = rpassword::prompt_password(prompt).map_err(|e| Error::Io(e.to_string()))?;
        if password.is_empty() {
            return Err(Error::Kdf("password cannot be empty".to_string()));
        }
        Ok(SecretBox::new(password.into_boxed_str()))
    }
}
