//! Framed binary encoder.

use std::fs;
use std::io;
use std::path::Path;

use framejson_buffers::Writer;

use super::token::BinaryToken;
use crate::model::{JsonArray, JsonObject, JsonValue, NumberKind};

/// Encodes `value` into a framed binary document.
pub fn encode(value: &JsonValue) -> Vec<u8> {
    let mut encoder = BinaryEncoder::new();
    encoder.write_entry(value);
    encoder.finish()
}

/// Writes the framed binary encoding of `value` to the file at `path`.
pub fn encode_file(path: impl AsRef<Path>, value: &JsonValue) -> io::Result<()> {
    fs::write(path, encode(value))
}

/// Single-pass encoder for the framed binary format.
///
/// Containers are bracketed by `*First`/`*Last` tags. `*First` is followed
/// by a 4-byte length placeholder, patched with the byte span of the
/// container's members once they have been written. The patch happens
/// before the terminator tag goes out, so the recorded span covers members
/// only and a skip lands exactly on `*Last`.
pub struct BinaryEncoder {
    writer: Writer,
}

impl Default for BinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Consumes the encoder and returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.writer.flush()
    }

    /// Writes one value of any kind, dispatching on its tag. Numbers go
    /// out at their recorded width, which is what makes binary round-trips
    /// subtype-exact.
    pub fn write_entry(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Boolean(b) => self.write_boolean(*b),
            JsonValue::Number(v, kind) => match kind {
                NumberKind::Int => self.write_int(*v as i32),
                NumberKind::Long => self.write_long(*v as i64),
                NumberKind::Float => self.write_float(*v as f32),
                NumberKind::Double => self.write_double(*v),
            },
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Object(obj) => self.write_object(&obj.borrow()),
            JsonValue::Array(arr) => self.write_array(&arr.borrow()),
        }
    }

    pub fn write_object(&mut self, obj: &JsonObject) {
        let frame = self.begin(BinaryToken::ObjectFirst);
        for (key, value) in obj.iter() {
            self.write_key(key);
            self.write_entry(value);
        }
        self.end(frame, BinaryToken::ObjectLast);
    }

    pub fn write_array(&mut self, arr: &JsonArray) {
        let frame = self.begin(BinaryToken::ArrayFirst);
        for value in arr.iter() {
            self.write_entry(value);
        }
        self.end(frame, BinaryToken::ArrayLast);
    }

    fn begin(&mut self, token: BinaryToken) -> usize {
        self.tag(token);
        self.writer.reserve_u32()
    }

    fn end(&mut self, frame: usize, token: BinaryToken) {
        let span = self.writer.pos() - frame - 4;
        self.writer.patch_u32(frame, span as u32);
        self.tag(token);
    }

    fn tag(&mut self, token: BinaryToken) {
        self.writer.u8(token as u8);
    }

    pub fn write_null(&mut self) {
        self.tag(BinaryToken::Null);
    }

    pub fn write_boolean(&mut self, value: bool) {
        self.tag(BinaryToken::Boolean);
        self.writer.u8(u8::from(value));
    }

    pub fn write_string(&mut self, value: &str) {
        self.tag(BinaryToken::String);
        self.write_text(value);
    }

    pub fn write_key(&mut self, name: &str) {
        self.tag(BinaryToken::ObjectKey);
        self.write_text(name);
    }

    pub fn write_int(&mut self, value: i32) {
        self.tag(BinaryToken::Int);
        self.writer.i32(value);
    }

    pub fn write_long(&mut self, value: i64) {
        self.tag(BinaryToken::Long);
        self.writer.i64(value);
    }

    pub fn write_float(&mut self, value: f32) {
        self.tag(BinaryToken::Float);
        self.writer.f32(value);
    }

    pub fn write_double(&mut self, value: f64) {
        self.tag(BinaryToken::Double);
        self.writer.f64(value);
    }

    pub fn write_char(&mut self, value: char) {
        self.tag(BinaryToken::Char);
        let mut buf = [0u8; 4];
        self.writer.utf8(value.encode_utf8(&mut buf));
    }

    /// Writes a length-prefixed opaque blob under the reserved `Raw` tag.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.tag(BinaryToken::Raw);
        self.writer.u32(data.len() as u32);
        self.writer.buf(data);
    }

    // Text payloads use the LEB128-length + UTF-8 layout for both strings
    // and object keys.
    fn write_text(&mut self, text: &str) {
        self.writer.varint_u32(text.len() as u32);
        self.writer.utf8(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_layouts() {
        assert_eq!(encode(&JsonValue::Null), vec![0]);
        assert_eq!(encode(&JsonValue::from(true)), vec![1, 1]);
        assert_eq!(encode(&JsonValue::from(false)), vec![1, 0]);
        assert_eq!(encode(&JsonValue::from(1i32)), vec![9, 1, 0, 0, 0]);
        assert_eq!(
            encode(&JsonValue::from("ab")),
            vec![2, 2, b'a', b'b']
        );
    }

    #[test]
    fn empty_object_frame() {
        let bytes = encode(&JsonValue::from(JsonObject::new()));
        // ObjectFirst, length 0, ObjectLast
        assert_eq!(bytes, vec![4, 0, 0, 0, 0, 5]);
    }

    #[test]
    fn container_length_covers_members_only() {
        let mut obj = JsonObject::new();
        obj.insert("a", JsonValue::Null);
        let bytes = encode(&JsonValue::from(obj));
        // members: ObjectKey(6) + varint 1 + 'a' + Null(0) = 4 bytes
        assert_eq!(bytes[0], 4);
        assert_eq!(u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]), 4);
        assert_eq!(*bytes.last().unwrap(), 5);
        assert_eq!(bytes.len(), 1 + 4 + 4 + 1);
    }

    #[test]
    fn nested_array_frames() {
        let inner: JsonArray = [1i32].into_iter().collect();
        let outer: JsonArray = [JsonValue::from(inner)].into_iter().collect();
        let bytes = encode(&JsonValue::from(outer));
        // outer: ArrayFirst len=11 [ inner: ArrayFirst len=5 Int(1) ArrayLast ] ArrayLast
        assert_eq!(bytes[0], 7);
        assert_eq!(u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]), 11);
        assert_eq!(bytes[5], 7);
        assert_eq!(u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]), 5);
        assert_eq!(&bytes[10..15], &[9, 1, 0, 0, 0]);
        assert_eq!(&bytes[15..], &[8, 8]);
    }

    #[test]
    fn char_goes_out_as_utf8() {
        let mut encoder = BinaryEncoder::new();
        encoder.write_char('é');
        assert_eq!(encoder.finish(), vec![12, 0xc3, 0xa9]);
    }
}
