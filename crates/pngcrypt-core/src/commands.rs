use std::path::Path;

use crate::key::Key;
use crate::result::Result;

pub fn encode(key: Key, input_file: &Path, cover_image: &Path, output_image: &Path) -> Result<()> {
    crate::api::encode::prepare()
        .with_key(key)
        .with_input_file(input_file)
        .with_cover_image(cover_image)
        .with_output(output_image)
        .execute()
}

pub fn decode(key: Key, encoded_image: &Path, output_file: &Path) -> Result<()> {
    crate::api::decode::prepare()
        .with_key(key)
        .from_encoded_image(encoded_image)
        .into_output_file(output_file)
        .execute()
}
