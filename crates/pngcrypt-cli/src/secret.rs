use std::io::{self, BufRead};

use pngcrypt_core::{Key, PngCryptError, Result};

/// Reads the secret from stdin and validates it into key material.
///
/// Expects a single line holding a 64 character hex string, the way the
/// tool is meant to be driven: `echo $secret | pngcrypt encode …`
pub fn read_key_from_stdin() -> Result<Key> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|source| PngCryptError::ReadError { source })?;

    line.trim().parse()
}
