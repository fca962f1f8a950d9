use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::PngCryptError;
use crate::key::Key;
use crate::result::Result;
use crate::{media, pipeline};

pub fn prepare() -> EncodeApi {
    EncodeApi::default()
}

/// Builder for the file-to-image encode path.
///
/// Reads the input file and the cover image, runs the pipeline and only
/// then writes the output image, so a failing stage leaves no partial
/// output behind.
#[derive(Default, Debug)]
pub struct EncodeApi {
    key: Option<Key>,
    input_file: Option<PathBuf>,
    cover_image: Option<PathBuf>,
    output_image: Option<PathBuf>,
}

impl EncodeApi {
    /// Set the key all data will be encrypted with
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// This is the file that will be hidden inside the image
    pub fn with_input_file(mut self, input_file: impl AsRef<Path>) -> Self {
        self.input_file = Some(input_file.as_ref().to_path_buf());
        self
    }

    /// This is the cover image used as carrier, read only
    pub fn with_cover_image(mut self, cover_image: impl AsRef<Path>) -> Self {
        self.cover_image = Some(cover_image.as_ref().to_path_buf());
        self
    }

    /// The encoded image will be stored as this file
    pub fn with_output(mut self, output_image: impl AsRef<Path>) -> Self {
        self.output_image = Some(output_image.as_ref().to_path_buf());
        self
    }

    /// Execute the encode process and block until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(key) = self.key else {
            return Err(PngCryptError::KeyNotSet);
        };
        let Some(input_file) = self.input_file else {
            return Err(PngCryptError::InputNotSet);
        };
        let Some(cover_image) = self.cover_image else {
            return Err(PngCryptError::CarrierNotSet);
        };
        let Some(output_image) = self.output_image else {
            return Err(PngCryptError::TargetNotSet);
        };

        let data =
            fs::read(&input_file).map_err(|source| PngCryptError::ReadError { source })?;
        let mut image = media::image::open(&cover_image)?;

        pipeline::encode(&key, &data, &mut image)?;
        media::image::save(&image, &output_image)?;

        info!("encoded {input_file:?} into {output_image:?}");

        Ok(())
    }
}
