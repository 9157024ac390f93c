//! Deflate-family (zlib) compression at the fastest setting (§4.3).

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

pub fn compress(chunk: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder
        .write_all(chunk)
        .map_err(|e| Error::Compression(format!("deflate failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| Error::Compression(format!("deflate failed: {e}")))
}

pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut out = Vec::new();
    copy_or_err(&mut decoder, &mut out)?;
    Ok(out)
}

fn copy_or_err<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    io::copy(reader, writer).map_err(|e| Error::Compression(format!("inflate failed: {e}")))
}
