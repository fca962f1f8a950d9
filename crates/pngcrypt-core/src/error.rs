use thiserror::Error;

#[derive(Error, Debug)]
pub enum PngCryptError {
    /// Represents unusable key material, for example a secret of the wrong length
    /// or one containing non-hex characters
    #[error("Invalid key: {details}")]
    InvalidKey { details: String },

    /// Represents a carrier image too small for the data that should be embedded
    #[error("Capacity error: the cover image holds {capacity} bits but {required} bits are needed. Use a larger cover image or a smaller input file.")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Represents an extracted byte stream too short to even contain a frame header
    #[error("Insufficient data: a frame header needs {expected} bytes, only {actual} were extracted")]
    InsufficientData { expected: usize, actual: usize },

    /// Represents a frame whose declared payload length exceeds the bytes that follow the header
    #[error("Truncated payload: frame declares {declared} bytes but only {available} remain")]
    TruncatedPayload { declared: usize, available: usize },

    /// Represents a payload that does not match its stored CRC32 checksum
    #[error("Checksum mismatch: stored {expected:08x}, computed {actual:08x}. The image data may be corrupted.")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Represents a payload larger than the frame header can describe
    #[error("Payload of {0} bytes does not fit a 32-bit frame length")]
    PayloadTooLarge(usize),

    /// Represents a malformed compressed stream
    #[error("Corrupt data: the compressed payload cannot be inflated")]
    CorruptData { source: std::io::Error },

    /// Represents a cipher failure, typically invalid padding after decryption
    /// caused by a wrong key, corrupted ciphertext or truncated input
    #[error("Decryption failed: wrong key or corrupted ciphertext")]
    Decryption,

    /// Represents a carrier file the pixel codec cannot handle, for example a broken PNG
    #[error("Unsupported image format: the file could not be decoded as a lossless pixel grid")]
    UnsupportedImageFormat,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write a target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No key set")]
    KeyNotSet,

    #[error("No input file set")]
    InputNotSet,

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
