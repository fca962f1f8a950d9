use crate::error::PngCryptError;

pub type Result<T> = std::result::Result<T, PngCryptError>;
