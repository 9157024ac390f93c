//! Length-prefix framing and 16-byte alignment padding (§4.3).

use crate::error::{Error, Result};

const LEN_HEADER: usize = 4;
const ALIGNMENT: usize = 16;

/// `sized = len32(compressed) ++ compressed`, then zero-padded so
/// `len(sized)` is a multiple of 16.
pub fn frame_and_pad(compressed: &[u8]) -> Vec<u8> {
    let sized_len = LEN_HEADER + compressed.len();
    let aligned_len = sized_len.div_ceil(ALIGNMENT) * ALIGNMENT;

    let mut out = vec![0u8; aligned_len];
    out[..LEN_HEADER].copy_from_slice(&(compressed.len() as u32).to_be_bytes());
    out[LEN_HEADER..sized_len].copy_from_slice(compressed);
    out
}

/// Inverse of [`frame_and_pad`]: strip the length prefix and trailing padding.
pub fn strip_padding(padded: &[u8]) -> Result<Vec<u8>> {
    if padded.len() < LEN_HEADER {
        return Err(Error::Compression(
            "padded buffer shorter than length header".to_string(),
        ));
    }
    let n = u32::from_be_bytes(padded[..LEN_HEADER].try_into().unwrap()) as usize;
    if n > padded.len() - LEN_HEADER {
        return Err(Error::Compression("invalid padding length header".to_string()));
    }
    Ok(padded[LEN_HEADER..LEN_HEADER + n].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let compressed = b"some compressed bytes";
        let padded = frame_and_pad(compressed);
        assert_eq!(padded.len() % ALIGNMENT, 0);
        assert_eq!(strip_padding(&padded).unwrap(), compressed);
    }

    #[test]
    fn pads_to_next_16_byte_boundary() {
        let padded = frame_and_pad(&[0u8; 10]);
        assert_eq!(padded.len(), 16);
        let padded = frame_and_pad(&[0u8; 12]);
        assert_eq!(padded.len(), 32);
    }

    #[test]
    fn rejects_truncated_buffer() {
        assert!(strip_padding(&[0u8; 2]).is_err());
    }

    #[test]
    fn rejects_corrupt_length_header() {
        let mut padded = frame_and_pad(b"hello");
        padded[0..4].copy_from_slice(&255u32.to_be_bytes());
        assert!(strip_padding(&padded).is_err());
    }
}
