use std::fmt;

/// Crate-wide error kind. Variants name the failing *layer*, not the
/// underlying library type, so CLI output stays stable across
/// dependency changes.
#[derive(Debug)]
pub enum Error {
    /// Missing file, empty file, wrong extension, output already exists.
    Input(String),
    /// Short read/write or an impossible size field in the container header.
    Header(String),
    /// Empty password, bad salt length, out-of-range KDF parameters.
    Kdf(String),
    /// Key/nonce size mismatch, or authentication failure (wrong password
    /// or tampered ciphertext). Deliberately opaque beyond this.
    Cipher(String),
    /// Reed-Solomon misalignment, reconstruction failure, corrupt length header.
    Codec(String),
    /// Inflate/deflate failure or invalid framing.
    Compression(String),
    /// Read/write failure on input, output, or an intermediate buffer.
    Io(String),
    /// A worker reported a failure while processing chunk `index`.
    Pipeline { index: u32, cause: Box<Error> },
    /// The user declined a prompt.
    UserAbort,
}

impl Error {
    pub fn pipeline(index: u32, cause: Error) -> Self {
        Self::Pipeline {
            index,
            cause: Box::new(cause),
        }
    }

    fn context(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Header(_) => "header",
            Self::Kdf(_) => "key derivation",
            Self::Cipher(_) => "cipher",
            Self::Codec(_) => "erasure codec",
            Self::Compression(_) => "compression",
            Self::Io(_) => "i/o",
            Self::Pipeline { .. } => "pipeline",
            Self::UserAbort => "prompt",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(reason)
            | Self::Header(reason)
            | Self::Kdf(reason)
            | Self::Cipher(reason)
            | Self::Codec(reason)
            | Self::Compression(reason)
            | Self::Io(reason) => write!(f, "Error: {}: {reason}", self.context()),
            Self::Pipeline { index, cause } => {
                write!(f, "Error: {}: chunk {index}: {cause}", self.context())
            }
            Self::UserAbort => write!(f, "Error: {}: aborted", self.context()),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
