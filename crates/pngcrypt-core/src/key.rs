use std::fmt::{self, Debug, Formatter};
use std::str::FromStr;

use crate::error::PngCryptError;
use crate::result::Result;

/// key length in bytes, AES-256 key material
pub const KEY_LEN: usize = 32;

/// hex characters needed to spell a full key
pub const KEY_HEX_LEN: usize = KEY_LEN * 2;

/// A 256-bit symmetric key, immutable for the lifetime of an invocation.
///
/// There is no ambient key state anywhere in this crate; a `Key` is
/// constructed once from its hex spelling and passed explicitly into
/// every pipeline call.
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Parses a key from a hex string of exactly 64 characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != KEY_HEX_LEN {
            return Err(PngCryptError::InvalidKey {
                details: format!(
                    "expected a {KEY_HEX_LEN} character hex string, got {} characters",
                    s.len()
                ),
            });
        }

        let bytes = hex::decode(s).map_err(|_| PngCryptError::InvalidKey {
            details: "secret is not a valid hex string".to_string(),
        })?;

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);

        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl FromStr for Key {
    type Err = PngCryptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", "*".repeat(KEY_HEX_LEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn should_parse_a_64_character_hex_string() {
        let key =
            Key::from_hex("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
                .expect("key was not parsed");

        assert_eq!(
            key.as_bytes(),
            &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
        );
    }

    #[test]
    fn should_reject_a_key_of_the_wrong_length() {
        let result = Key::from_hex("Ab0");
        match result.err() {
            Some(PngCryptError::InvalidKey { .. }) => (),
            _ => panic!("short secret was not rejected"),
        }
    }

    #[test]
    fn should_reject_non_hex_characters() {
        let result = Key::from_hex(&"zz".repeat(32));
        match result.err() {
            Some(PngCryptError::InvalidKey { .. }) => (),
            _ => panic!("non-hex secret was not rejected"),
        }
    }

    #[test]
    fn should_not_leak_key_material_via_debug() {
        let key: Key = "00".repeat(32).parse().unwrap();
        assert_eq!(format!("{key:?}"), format!("Key({})", "*".repeat(64)));
    }
}
