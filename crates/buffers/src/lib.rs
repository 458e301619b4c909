//! Little-endian binary buffer utilities for framejson.
//!
//! # Overview
//!
//! - [`Reader`] - Checked reads from a byte slice with cursor tracking
//! - [`Writer`] - Writes to an auto-growing buffer, with `u32` back-patching
//!
//! The framed binary format framejson speaks is little-endian throughout,
//! and container length fields are reserved first and patched once the
//! container body has been written; [`Writer::reserve_u32`] and
//! [`Writer::patch_u32`] exist for exactly that.
//!
//! # Example
//!
//! ```
//! use framejson_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u32(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u32().unwrap(), 0x0203);
//! assert_eq!(reader.utf8(5).unwrap(), "hello");
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
    /// A LEB128 varint ran past its maximum width.
    InvalidVarint,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
            BufferError::InvalidVarint => write!(f, "invalid varint"),
        }
    }
}

impl std::error::Error for BufferError {}
