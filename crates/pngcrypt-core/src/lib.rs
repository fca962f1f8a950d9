//! # pngcrypt Core API
//!
//! Hides an arbitrary file inside a PNG cover image. The file bytes are
//! AES-256-CBC encrypted under a 256-bit key, gzip compressed, wrapped
//! in a length + CRC32 frame and embedded one bit per pixel into the
//! least significant bit of the blue channel. The encoded image is
//! visually near-identical to the cover image, and the decode path
//! reconstructs the original bytes exactly.
//!
//! # Usage Examples
//!
//! ## Hide a file inside an image
//!
//! ```no_run
//! use pngcrypt_core::Key;
//!
//! let key: Key = "00".repeat(32).parse().expect("Invalid key");
//!
//! pngcrypt_core::api::encode::prepare()
//!     .with_key(key)
//!     .with_input_file("secret.zip")
//!     .with_cover_image("cover.png")
//!     .with_output("encoded.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Recover the file from an image
//!
//! ```no_run
//! use pngcrypt_core::Key;
//!
//! let key: Key = "00".repeat(32).parse().expect("Invalid key");
//!
//! pngcrypt_core::api::decode::prepare()
//!     .with_key(key)
//!     .from_encoded_image("encoded.png")
//!     .into_output_file("secret.zip")
//!     .execute()
//!     .expect("Failed to recover file from image");
//! ```
//!
//! # Integrity, not authenticity
//!
//! The CRC32 checksum inside the frame detects accidental corruption
//! only. There is no keyed authentication tag: an adversary able to
//! rewrite ciphertext and checksum together can craft a frame that
//! verifies but decrypts to garbage. This is a deliberate property of
//! the wire format, not an oversight.

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod compression;
pub mod crypto;
pub mod error;
pub mod frame;
pub mod key;
pub mod media;
pub mod pipeline;
pub mod result;

pub use crate::error::PngCryptError;
pub use crate::key::Key;
pub use crate::pipeline::{decode, encode};
pub use crate::result::Result;
