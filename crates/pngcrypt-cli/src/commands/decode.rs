use std::path::PathBuf;

use clap::Args;

use crate::secret;
use crate::CliResult;

/// Extracts and decrypts a file hidden inside a PNG image
///
/// The secret key is read from stdin as a 64 character hex string:
/// `echo $secret | pngcrypt decode <encoded image> <output file>`
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Image that contains the hidden file
    #[arg(value_name = "encoded image")]
    pub encoded_image: PathBuf,

    /// Recovered file will be stored under this path
    #[arg(value_name = "output file")]
    pub output_file: PathBuf,
}

impl DecodeArgs {
    pub fn run(self) -> CliResult<()> {
        let key = secret::read_key_from_stdin()?;

        pngcrypt_core::commands::decode(key, &self.encoded_image, &self.output_file)
    }
}
