//! AES-256-CBC encryption of the raw file bytes.
//!
//! The ciphertext travels as an envelope of `iv (16 bytes) ‖ ciphertext`.
//! There is no authentication tag; integrity checking is the frame
//! codec's job and is limited to accidental corruption (see crate docs).

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::PngCryptError;
use crate::key::Key;
use crate::result::Result;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// initialization vector length in bytes, one AES block
pub const IV_LEN: usize = 16;

/// Encrypts `plaintext` under a freshly drawn random IV.
///
/// IV and ciphertext are returned separately; [`join_envelope`] produces
/// the wire form.
pub fn encrypt(key: &Key, plaintext: &[u8]) -> ([u8; IV_LEN], Vec<u8>) {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    (iv, ciphertext)
}

/// Decrypts `ciphertext` with the given IV. Invalid padding after
/// decryption means a wrong key, corrupted ciphertext or truncated input.
pub fn decrypt(key: &Key, iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Aes256CbcDec::new(key.as_bytes().into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PngCryptError::Decryption)
}

/// Concatenates IV and ciphertext into the `iv ‖ ciphertext` envelope.
pub fn join_envelope(iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(IV_LEN + ciphertext.len());
    envelope.extend_from_slice(iv);
    envelope.extend_from_slice(ciphertext);
    envelope
}

/// Splits an envelope back into IV and ciphertext.
pub fn split_envelope(envelope: &[u8]) -> Result<([u8; IV_LEN], &[u8])> {
    if envelope.len() < IV_LEN {
        return Err(PngCryptError::Decryption);
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&envelope[..IV_LEN]);

    Ok((iv, &envelope[IV_LEN..]))
}
