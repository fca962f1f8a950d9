use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::PngCryptError;
use crate::key::Key;
use crate::result::Result;
use crate::{media, pipeline};

pub fn prepare() -> DecodeApi {
    DecodeApi::default()
}

/// Builder for the image-to-file decode path.
///
/// The output file is only written after the full pipeline, including
/// checksum verification and decryption, has succeeded.
#[derive(Default, Debug)]
pub struct DecodeApi {
    key: Option<Key>,
    encoded_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl DecodeApi {
    /// Set the key the hidden data was encrypted with
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// This is the image that contains the hidden file
    pub fn from_encoded_image(mut self, encoded_image: impl AsRef<Path>) -> Self {
        self.encoded_image = Some(encoded_image.as_ref().to_path_buf());
        self
    }

    /// The recovered file will be stored under this path
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the decode process and block until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(key) = self.key else {
            return Err(PngCryptError::KeyNotSet);
        };
        let Some(encoded_image) = self.encoded_image else {
            return Err(PngCryptError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(PngCryptError::TargetNotSet);
        };

        let image = media::image::open(&encoded_image)?;
        let data = pipeline::decode(&key, &image)?;

        fs::write(&output_file, &data)
            .map_err(|source| PngCryptError::WriteError { source })?;

        info!("decoded {encoded_image:?} into {output_file:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fail_without_a_key() {
        let result = prepare()
            .from_encoded_image("encoded.png")
            .into_output_file("out.bin")
            .execute();

        match result.err() {
            Some(PngCryptError::KeyNotSet) => (),
            _ => panic!("missing key was not reported"),
        }
    }

    #[test]
    fn should_fail_without_an_output_file() {
        let result = prepare()
            .with_key("00".repeat(32).parse().unwrap())
            .from_encoded_image("encoded.png")
            .execute();

        match result.err() {
            Some(PngCryptError::TargetNotSet) => (),
            _ => panic!("missing target was not reported"),
        }
    }
}
