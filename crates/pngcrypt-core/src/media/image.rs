//! Bit-level mapping between frame bytes and the cover image.
//!
//! One bit per pixel is stored in the least significant bit of the blue
//! channel. Pixels are visited in row-major order, row outer, column
//! inner, identical for embedding and extraction. Bits are taken from
//! each frame byte most significant first.
//!
//! Pixels beyond the embedded bits are left byte-for-byte untouched,
//! which is why the encoded image is visually indistinguishable from
//! the cover.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::RgbaImage;
use log::error;

use crate::error::PngCryptError;
use crate::result::Result;

/// index of the blue channel within an RGBA pixel
const BLUE: usize = 2;

/// Number of bits the cover image can carry: one per pixel.
pub fn capacity(image: &RgbaImage) -> usize {
    (image.width() * image.height()) as usize
}

/// Overwrites the blue channel LSB of the first `frame.len() * 8` pixels
/// with the frame bits. Alpha, red, green and all higher blue bits stay
/// unchanged.
pub fn embed(image: &mut RgbaImage, frame: &[u8]) -> Result<()> {
    let capacity = capacity(image);
    let required = frame.len() * 8;
    if required > capacity {
        return Err(PngCryptError::CapacityExceeded { required, capacity });
    }

    let mut bits = BitReader::endian(Cursor::new(frame), BigEndian);
    for pixel in image.pixels_mut().take(required) {
        let bit = bits
            .read_bit()
            .map_err(|source| PngCryptError::ReadError { source })?;
        pixel[BLUE] = (pixel[BLUE] & (u8::MAX - 1)) | u8::from(bit);
    }

    Ok(())
}

/// Reads the blue channel LSB of every pixel and packs the bits into
/// bytes, 8 bits per byte most significant first. A trailing partial
/// byte is discarded, so the result is exactly `capacity / 8` bytes.
pub fn extract(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bits = BitWriter::endian(Vec::with_capacity(capacity(image) / 8), BigEndian);
    for pixel in image.pixels() {
        bits.write_bit(pixel[BLUE] & 1 == 1)
            .map_err(|source| PngCryptError::WriteError { source })?;
    }

    Ok(bits.into_writer())
}

/// Loads a cover or encoded image as an RGBA pixel grid.
pub fn open(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .map_err(|e| {
            error!("Error decoding image {path:?}: {e}");
            PngCryptError::UnsupportedImageFormat
        })?
        .to_rgba8();

    Ok(image)
}

/// Writes the image as PNG. PNG is lossless, a lossy re-encode would
/// destroy the embedded payload.
pub fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| {
        error!("Error creating file {path:?}: {source}");
        PngCryptError::WriteError { source }
    })?;

    image
        .write_to(&mut file, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error encoding image {path:?}: {e}");
            PngCryptError::UnsupportedImageFormat
        })
}
