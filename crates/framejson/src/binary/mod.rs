//! Framed binary codec.
//!
//! A compact, self-describing format: a stream of `[tag: u8][payload]`
//! records, little-endian fixed-width fields. Containers are bracketed by
//! `*First`/`*Last` tags with a patched `u32` length covering the members'
//! byte span, so a reader can seek past a whole nested container without
//! decoding it. Numeric width (`Int`/`Long`/`Float`/`Double`) is preserved
//! exactly through the tag, unlike the text codec which collapses every
//! number to a double.
//!
//! Encoder and decoder are single-pass and strictly single-writer /
//! single-reader; there is no internal synchronization.

mod decoder;
mod encoder;
mod error;
mod token;

pub use decoder::{decode, decode_file, BinaryDecoder};
pub use encoder::{encode, encode_file, BinaryEncoder};
pub use error::BinaryError;
pub use token::{BinaryToken, Token};
