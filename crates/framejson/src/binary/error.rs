//! Binary codec error type.

use framejson_buffers::BufferError;
use thiserror::Error;

/// Errors raised while decoding a framed binary stream.
///
/// All variants are fatal for the decode call; the stream is in-memory
/// and non-transient, so nothing is retried.
#[derive(Debug, Error)]
pub enum BinaryError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unrecognized token tag 0x{0:02x}")]
    UnrecognizedTag(u8),
    #[error("expected an object key or terminator")]
    ExpectedObjectKey,
    #[error("token cannot appear in value position")]
    UnexpectedToken,
    #[error("invalid UTF-8 in text payload")]
    InvalidUtf8,
    #[error("invalid length prefix")]
    InvalidLength,
    /// `Raw` is reserved token space; decoding it to a value is an
    /// unfinished extension point, surfaced rather than silently dropped.
    #[error("raw payloads cannot be decoded to a value")]
    RawUnsupported,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<BufferError> for BinaryError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => BinaryError::UnexpectedEndOfInput,
            BufferError::InvalidUtf8 => BinaryError::InvalidUtf8,
            BufferError::InvalidVarint => BinaryError::InvalidLength,
        }
    }
}
