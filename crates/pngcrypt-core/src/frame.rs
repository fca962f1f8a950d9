//! The integrity-checked frame around the compressed payload.
//!
//! Wire format, bit exact:
//!
//! ```text
//! u32 big-endian payload length | u32 big-endian CRC32 of payload | payload
//! ```
//!
//! CRC32 guards against accidental corruption only; it is not a keyed
//! authentication tag.

use byteorder::{BigEndian, ByteOrder};

use crate::error::PngCryptError;
use crate::result::Result;

/// header bytes in front of the payload: length + checksum
pub const HEADER_LEN: usize = 8;

/// Wraps `payload` in a length + checksum frame.
pub fn build(payload: &[u8]) -> Result<Vec<u8>> {
    let length =
        u32::try_from(payload.len()).map_err(|_| PngCryptError::PayloadTooLarge(payload.len()))?;

    let mut frame = vec![0u8; HEADER_LEN];
    BigEndian::write_u32(&mut frame[0..4], length);
    BigEndian::write_u32(&mut frame[4..8], crc32fast::hash(payload));
    frame.extend_from_slice(payload);

    Ok(frame)
}

/// Parses a frame and returns the verified payload slice.
///
/// Fails fast when fewer bytes than the declared length remain; a short
/// slice is never silently accepted.
pub fn parse(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() < HEADER_LEN {
        return Err(PngCryptError::InsufficientData {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let declared = BigEndian::read_u32(&bytes[0..4]) as usize;
    let stored = BigEndian::read_u32(&bytes[4..8]);

    let available = bytes.len() - HEADER_LEN;
    if available < declared {
        return Err(PngCryptError::TruncatedPayload {
            declared,
            available,
        });
    }

    let payload = &bytes[HEADER_LEN..HEADER_LEN + declared];
    let actual = crc32fast::hash(payload);
    if actual != stored {
        return Err(PngCryptError::ChecksumMismatch {
            expected: stored,
            actual,
        });
    }

    Ok(payload)
}
