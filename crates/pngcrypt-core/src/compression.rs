//! Gzip compression of the encrypted envelope.
//!
//! Any lossless compressor would satisfy the pipeline; gzip is what the
//! wire format uses. `decompress(compress(x)) == x` for every byte
//! sequence `x`.

use std::io::Read;

use flate2::read::{GzDecoder, GzEncoder};
use flate2::Compression;

use crate::error::PngCryptError;
use crate::result::Result;

pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();
    encoder
        .read_to_end(&mut compressed)
        .map_err(|source| PngCryptError::ReadError { source })?;

    Ok(compressed)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|source| PngCryptError::CorruptData { source })?;

    Ok(decompressed)
}
