//! JSON text codec: recursive-descent parser and compact/pretty writer.
//!
//! The parser follows RFC 8259 with one intentional deviation: duplicate
//! object keys are rejected ([`ParseError::DuplicateObjectKeys`]) rather
//! than silently overwritten.

mod decoder;
mod encoder;
mod error;
mod scanner;

pub use decoder::{decode, decode_file, decode_reader};
pub use encoder::{encode, encode_file, encode_pretty, TextEncoder};
pub use error::{ParseError, TextPosition};
