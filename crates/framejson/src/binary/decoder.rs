//! Framed binary decoder.

use std::fs;
use std::path::Path;

use framejson_buffers::Reader;

use super::error::BinaryError;
use super::token::{BinaryToken, Token};
use crate::model::{JsonArray, JsonObject, JsonValue, NumberKind};

/// Decodes one value from a framed binary document.
pub fn decode(data: &[u8]) -> Result<JsonValue, BinaryError> {
    BinaryDecoder::new(data).read_value()
}

/// Decodes the framed binary document in the file at `path`.
///
/// I/O failures surface as [`BinaryError::Io`], untouched.
pub fn decode_file(path: impl AsRef<Path>) -> Result<JsonValue, BinaryError> {
    let data = fs::read(path)?;
    decode(&data)
}

/// Pull decoder over a framed binary byte slice.
///
/// [`BinaryDecoder::read`] consumes exactly one token and its payload.
/// The container-first tokens carry the member byte span, so a caller can
/// [`BinaryDecoder::skip`] that many bytes and land on the matching
/// terminator without interpreting the contents.
pub struct BinaryDecoder<'a> {
    reader: Reader<'a>,
}

impl<'a> BinaryDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.reader.pos()
    }

    /// Advances over `length` bytes without decoding them.
    pub fn skip(&mut self, length: usize) -> Result<(), BinaryError> {
        Ok(self.reader.skip(length)?)
    }

    /// Reads one token and its payload.
    pub fn read(&mut self) -> Result<Token, BinaryError> {
        let byte = self.reader.u8()?;
        let tag = BinaryToken::from_u8(byte).ok_or(BinaryError::UnrecognizedTag(byte))?;
        Ok(match tag {
            BinaryToken::Null => Token::Null,
            BinaryToken::Boolean => Token::Boolean(self.reader.u8()? != 0),
            BinaryToken::String => Token::String(self.read_text()?),
            BinaryToken::ObjectFirst => Token::ObjectFirst(self.reader.u32()?),
            BinaryToken::ObjectLast => Token::ObjectLast,
            BinaryToken::ObjectKey => Token::ObjectKey(self.read_text()?),
            BinaryToken::ArrayFirst => Token::ArrayFirst(self.reader.u32()?),
            BinaryToken::ArrayLast => Token::ArrayLast,
            BinaryToken::Int => Token::Int(self.reader.i32()?),
            BinaryToken::Float => Token::Float(self.reader.f32()?),
            BinaryToken::Double | BinaryToken::Number => Token::Double(self.reader.f64()?),
            BinaryToken::Char => Token::Char(self.reader.utf8_char()?),
            BinaryToken::Long => Token::Long(self.reader.i64()?),
            BinaryToken::Raw => {
                let length = self.reader.u32()? as usize;
                Token::Raw(self.reader.buf(length)?.to_vec())
            }
        })
    }

    /// Reads one complete value, recursing into containers.
    pub fn read_value(&mut self) -> Result<JsonValue, BinaryError> {
        let token = self.read()?;
        self.value_from(token)
    }

    fn value_from(&mut self, token: Token) -> Result<JsonValue, BinaryError> {
        match token {
            Token::Null => Ok(JsonValue::Null),
            Token::Boolean(b) => Ok(JsonValue::Boolean(b)),
            Token::String(s) => Ok(JsonValue::String(s)),
            Token::ObjectFirst(_) => self.read_object(),
            Token::ArrayFirst(_) => self.read_array(),
            Token::Int(v) => Ok(JsonValue::Number(f64::from(v), NumberKind::Int)),
            Token::Long(v) => Ok(JsonValue::Number(v as f64, NumberKind::Long)),
            Token::Float(v) => Ok(JsonValue::Number(f64::from(v), NumberKind::Float)),
            Token::Double(v) => Ok(JsonValue::Number(v, NumberKind::Double)),
            Token::Char(c) => Ok(JsonValue::from(c)),
            Token::Raw(_) => Err(BinaryError::RawUnsupported),
            Token::ObjectKey(_) | Token::ObjectLast | Token::ArrayLast => {
                Err(BinaryError::UnexpectedToken)
            }
        }
    }

    fn read_object(&mut self) -> Result<JsonValue, BinaryError> {
        let mut obj = JsonObject::new();
        loop {
            match self.read()? {
                Token::ObjectLast => break,
                Token::ObjectKey(key) => {
                    let value = self.read_value()?;
                    obj.insert(key, value);
                }
                _ => return Err(BinaryError::ExpectedObjectKey),
            }
        }
        Ok(obj.into())
    }

    fn read_array(&mut self) -> Result<JsonValue, BinaryError> {
        let mut arr = JsonArray::new();
        loop {
            let token = self.read()?;
            if token == Token::ArrayLast {
                break;
            }
            arr.push(self.value_from(token)?);
        }
        Ok(arr.into())
    }

    fn read_text(&mut self) -> Result<String, BinaryError> {
        let length = self.reader.varint_u32()? as usize;
        Ok(self.reader.utf8(length)?.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::encode;

    #[test]
    fn truncated_stream() {
        assert!(matches!(
            decode(&[9, 1, 0]),
            Err(BinaryError::UnexpectedEndOfInput)
        ));
        assert!(matches!(decode(&[]), Err(BinaryError::UnexpectedEndOfInput)));
    }

    #[test]
    fn unrecognized_tag() {
        assert!(matches!(decode(&[200]), Err(BinaryError::UnrecognizedTag(200))));
    }

    #[test]
    fn value_where_key_expected() {
        // ObjectFirst, length 1, then a Null in key position
        let data = [4, 1, 0, 0, 0, 0];
        assert!(matches!(
            decode(&data),
            Err(BinaryError::ExpectedObjectKey)
        ));
    }

    #[test]
    fn key_in_value_position() {
        // ObjectKey "a" at the top level
        let data = [6, 1, b'a'];
        assert!(matches!(decode(&data), Err(BinaryError::UnexpectedToken)));
    }

    #[test]
    fn raw_decode_is_unsupported() {
        let data = [32, 2, 0, 0, 0, 0xde, 0xad];
        assert!(matches!(decode(&data), Err(BinaryError::RawUnsupported)));
    }

    #[test]
    fn skip_lands_on_terminator() {
        let mut obj = JsonObject::new();
        obj.insert("a", 1i32);
        obj.insert("b", "text");
        let bytes = encode(&JsonValue::from(obj));

        let mut decoder = BinaryDecoder::new(&bytes);
        match decoder.read().unwrap() {
            Token::ObjectFirst(span) => decoder.skip(span as usize).unwrap(),
            other => panic!("expected ObjectFirst, got {other:?}"),
        }
        assert_eq!(decoder.read().unwrap(), Token::ObjectLast);
    }

    #[test]
    fn invalid_utf8_in_string_payload() {
        let data = [2, 2, 0xff, 0xfe];
        assert!(matches!(decode(&data), Err(BinaryError::InvalidUtf8)));
    }
}
