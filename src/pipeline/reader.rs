//! Reader-side of the pipeline (§4.7): turns an input stream into an
//! ordered sequence of [`Job`]s.

use std::io::Read;

use crossbeam_channel::Sender;

use super::job::Job;
use crate::codec::TOTAL_SHARDS;
use crate::error::{Error, Result};

/// Plaintext chunk size before the encrypt-side transform (§2, §4.7).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Upper bound on a single encrypted chunk's on-disk size, used to
/// reject an implausible length prefix on the decrypt path before
/// allocating a buffer for it.
pub fn max_encrypted_chunk_size() -> usize {
    const TAG_LEN: usize = 16;
    const LEN_HEADER: usize = 4;
    const DATA_SHARDS: usize = 4;

    let compressed_upper_bound = CHUNK_SIZE + CHUNK_SIZE / 10;
    let framed = LEN_HEADER + compressed_upper_bound + TAG_LEN + TAG_LEN;
    let shard_size = framed.div_ceil(DATA_SHARDS);
    shard_size * TOTAL_SHARDS
}

/// Read `CHUNK_SIZE`-sized chunks from `input`, in order, and enqueue
/// one [`Job`] per chunk. The final chunk may be shorter; an empty read
/// at EOF ends the stream cleanly.
pub fn read_plaintext_jobs(mut input: impl Read, jobs_tx: &Sender<Job>) -> Result<()> {
    let mut index = 0u32;
    loop {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        buf.truncate(n);
        if jobs_tx.send(Job { data: buf, index }).is_err() {
            return Err(Error::Pipeline {
                index,
                cause: Box::new(Error::Io("downstream pipeline closed".to_string())),
            });
        }
        index += 1;
    }
    Ok(())
}

/// Read length-prefixed encrypted chunks from `input`, in order, and
/// enqueue one [`Job`] per chunk.
pub fn read_ciphertext_jobs(mut input: impl Read, jobs_tx: &Sender<Job>) -> Result<()> {
    let max_len = max_encrypted_chunk_size();
    let mut index = 0u32;
    loop {
        let mut len_buf = [0u8; 4];
        let first = input.read(&mut len_buf[..1])?;
        if first == 0 {
            break;
        }
        input.read_exact(&mut len_buf[1..])?;
        let len = u32::from_be_bytes(len_buf) as usize;
        if len == 0 || len > max_len || len % TOTAL_SHARDS != 0 {
            return Err(Error::Header(format!("invalid chunk length prefix: {len}")));
        }

        let mut data = vec![0u8; len];
        input.read_exact(&mut data)?;

        if jobs_tx.send(Job { data, index }).is_err() {
            return Err(Error::Pipeline {
                index,
                cause: Box::new(Error::Io("downstream pipeline closed".to_string())),
            });
        }
        index += 1;
    }
    Ok(())
}
