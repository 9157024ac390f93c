//! Reed-Solomon erasure codec over fixed `(D, P)` shards (§4.2).

use reed_solomon_erasure::galois_8::ReedSolomon;

use crate::error::{Error, Result};

pub const DATA_SHARDS: usize = 4;
pub const PARITY_SHARDS: usize = 10;
pub const TOTAL_SHARDS: usize = DATA_SHARDS + PARITY_SHARDS;
const LEN_HEADER: usize = 4;
const MAX_SHARDS: usize = 256;
const MAX_DATA_SIZE: usize = 1 << 32;

pub struct Codec {
    rs: ReedSolomon,
}

impl Codec {
    pub fn new() -> Result<Self> {
        if DATA_SHARDS == 0 || PARITY_SHARDS == 0 || TOTAL_SHARDS > MAX_SHARDS {
            return Err(Error::Codec("shard counts out of range".to_string()));
        }
        let rs = ReedSolomon::new(DATA_SHARDS, PARITY_SHARDS)
            .map_err(|e| Error::Codec(format!("failed to build reed-solomon encoder: {e}")))?;
        Ok(Self { rs })
    }

    /// Encode `buf` into `D+P` shards, concatenated in shard order (§4.2).
    pub fn encode(&self, buf: &[u8]) -> Result<Vec<u8>> {
        if buf.is_empty() || buf.len() > MAX_DATA_SIZE {
            return Err(Error::Codec(format!(
                "invalid data size: must be between 1 and {MAX_DATA_SIZE} bytes"
            )));
        }

        let mut framed = Vec::with_capacity(LEN_HEADER + buf.len());
        framed.extend_from_slice(&(buf.len() as u32).to_be_bytes());
        framed.extend_from_slice(buf);

        let shard_size = framed.len().div_ceil(DATA_SHARDS);
        let mut shards: Vec<Vec<u8>> = vec![vec![0u8; shard_size]; TOTAL_SHARDS];
        for (i, byte) in framed.iter().enumerate() {
            shards[i / shard_size][i % shard_size] = *byte;
        }

        self.rs
            .encode(&mut shards)
            .map_err(|e| Error::Codec(format!("encoding failed: {e}")))?;

        let mut out = Vec::with_capacity(shard_size * TOTAL_SHARDS);
        for shard in &shards {
            out.extend_from_slice(shard);
        }
        Ok(out)
    }

    /// Decode a buffer produced by [`Codec::encode`], assuming all shards
    /// are present and intact.
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<u8>> {
        let shards = self.split_shards(buf)?;
        self.reconstruct_and_extract(shards.into_iter().map(Some).collect())
    }

    /// Decode tolerating up to `PARITY_SHARDS` missing shards, marked as
    /// `None` at the given `missing` indices. Exercised by tests; the
    /// normal pipeline path always supplies every shard intact.
    pub fn decode_with_erasures(&self, buf: &[u8], missing: &[usize]) -> Result<Vec<u8>> {
        let shards = self.split_shards(buf)?;
        let mut opt_shards: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
        for &i in missing {
            if let Some(slot) = opt_shards.get_mut(i) {
                *slot = None;
            }
        }
        self.reconstruct_and_extract(opt_shards)
    }

    fn split_shards(&self, buf: &[u8]) -> Result<Vec<Vec<u8>>> {
        if buf.is_empty() || buf.len() % TOTAL_SHARDS != 0 {
            return Err(Error::Codec("invalid encoded data size".to_string()));
        }
        let shard_size = buf.len() / TOTAL_SHARDS;
        Ok(buf.chunks(shard_size).map(<[u8]>::to_vec).collect())
    }

    fn reconstruct_and_extract(&self, mut shards: Vec<Option<Vec<u8>>>) -> Result<Vec<u8>> {
        self.rs
            .reconstruct(&mut shards)
            .map_err(|e| Error::Codec(format!("reconstruction failed: {e}")))?;

        let shard_size = shards[0].as_ref().expect("reconstructed").len();
        let mut framed = Vec::with_capacity(shard_size * DATA_SHARDS);
        for shard in &shards[..DATA_SHARDS] {
            framed.extend_from_slice(shard.as_ref().expect("reconstructed"));
        }

        if framed.len() < LEN_HEADER {
            return Err(Error::Codec("corrupted data: too short".to_string()));
        }
        let original_len =
            u32::from_be_bytes(framed[..LEN_HEADER].try_into().unwrap()) as usize;
        if original_len > framed.len() - LEN_HEADER {
            return Err(Error::Codec(
                "corrupted data: invalid length header".to_string(),
            ));
        }
        Ok(framed[LEN_HEADER..LEN_HEADER + original_len].to_vec())
    }
}
