use std::path::PathBuf;

use clap::Args;

use crate::secret;
use crate::CliResult;

/// Encrypts a file and hides it inside a PNG cover image
///
/// The secret key is read from stdin as a 64 character hex string:
/// `echo $secret | pngcrypt encode <input file> <cover image> <output image>`
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// File to encrypt and hide
    #[arg(value_name = "input file")]
    pub input_file: PathBuf,

    /// Cover image the data is hidden in, used readonly
    #[arg(value_name = "cover image")]
    pub cover_image: PathBuf,

    /// Encoded image will be stored as this file
    #[arg(value_name = "output image")]
    pub output_image: PathBuf,
}

impl EncodeArgs {
    pub fn run(self) -> CliResult<()> {
        let key = secret::read_key_from_stdin()?;

        pngcrypt_core::commands::encode(key, &self.input_file, &self.cover_image, &self.output_image)
    }
}
