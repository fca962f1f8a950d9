//! The two linear pipelines composing crypto, compression, framing and
//! bit embedding. Pure functions of their inputs; the first failing
//! stage terminates the invocation, nothing is retried or rolled back.

use image::RgbaImage;
use log::debug;

use crate::key::Key;
use crate::result::Result;
use crate::{compression, crypto, frame, media};

/// Encrypts, compresses and frames `data`, then embeds the frame into
/// `image` in place.
///
/// Persisting the mutated image is the caller's responsibility.
pub fn encode(key: &Key, data: &[u8], image: &mut RgbaImage) -> Result<()> {
    let (iv, ciphertext) = crypto::encrypt(key, data);
    let envelope = crypto::join_envelope(&iv, &ciphertext);
    let compressed = compression::compress(&envelope)?;
    let frame = frame::build(&compressed)?;

    debug!(
        "payload: {} bytes compressed, checksum {:08x}, {} bits to embed, {} bits available",
        compressed.len(),
        crc32fast::hash(&compressed),
        frame.len() * 8,
        media::image::capacity(image)
    );

    media::image::embed(image, &frame)
}

/// Extracts the frame from `image`, verifies it and reconstructs the
/// original bytes exactly.
pub fn decode(key: &Key, image: &RgbaImage) -> Result<Vec<u8>> {
    let extracted = media::image::extract(image)?;
    let payload = frame::parse(&extracted)?;

    debug!(
        "extracted {} bytes, frame payload of {} bytes verified",
        extracted.len(),
        payload.len()
    );

    let envelope = compression::decompress(payload)?;
    let (iv, ciphertext) = crypto::split_envelope(&envelope)?;

    crypto::decrypt(key, &iv, ciphertext)
}
