//! Recursive-descent JSON text parser.

use std::fs;
use std::io::Read;
use std::path::Path;

use super::error::ParseError;
use super::scanner::Scanner;
use crate::model::{JsonArray, JsonObject, JsonValue, NumberKind};

/// Parses one JSON document from a string.
pub fn decode(text: &str) -> Result<JsonValue, ParseError> {
    TextDecoder::new(text).parse()
}

/// Parses one JSON document from a byte reader (UTF-8).
pub fn decode_reader<R: Read>(mut reader: R) -> Result<JsonValue, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text)
}

/// Parses the JSON document in the file at `path`.
///
/// I/O failures (missing file, permissions) surface as
/// [`ParseError::Io`], untouched.
pub fn decode_file(path: impl AsRef<Path>) -> Result<JsonValue, ParseError> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Single-pass recursive-descent parser with one character of lookahead.
///
/// One instance per invocation; the entry points above construct a fresh
/// decoder each time.
struct TextDecoder {
    scanner: Scanner,
}

impl TextDecoder {
    fn new(text: &str) -> Self {
        Self {
            scanner: Scanner::new(text),
        }
    }

    fn parse(mut self) -> Result<JsonValue, ParseError> {
        self.scanner.skip_whitespace();
        self.read_value()
    }

    fn read_value(&mut self) -> Result<JsonValue, ParseError> {
        self.scanner.skip_whitespace();
        let next = self.scanner.peek()?;
        if next.is_ascii_digit() {
            return self.read_number();
        }
        match next {
            '{' => self.read_object(),
            '[' => self.read_array(),
            '"' => Ok(JsonValue::String(self.read_string()?)),
            '-' => self.read_number(),
            't' | 'f' => self.read_boolean(),
            'n' => self.read_null(),
            _ => Err(ParseError::InvalidOrUnexpectedCharacter(
                self.scanner.position(),
            )),
        }
    }

    fn read_null(&mut self) -> Result<JsonValue, ParseError> {
        self.scanner.expect_keyword("null")?;
        Ok(JsonValue::Null)
    }

    fn read_boolean(&mut self) -> Result<JsonValue, ParseError> {
        match self.scanner.peek()? {
            't' => {
                self.scanner.expect_keyword("true")?;
                Ok(JsonValue::Boolean(true))
            }
            _ => {
                self.scanner.expect_keyword("false")?;
                Ok(JsonValue::Boolean(false))
            }
        }
    }

    fn read_digits(&mut self, buf: &mut String) -> Result<(), ParseError> {
        while self.scanner.can_read() && self.scanner.peek()?.is_ascii_digit() {
            buf.push(self.scanner.read()?);
        }
        Ok(())
    }

    /// Full JSON number grammar; the accumulated text is parsed with the
    /// invariant `f64` parser. Text-sourced numbers are always `Double`.
    fn read_number(&mut self) -> Result<JsonValue, ParseError> {
        let position = self.scanner.position();
        let mut buf = String::new();

        if self.scanner.peek()? == '-' {
            buf.push(self.scanner.read()?);
        }

        if self.scanner.peek()? == '0' {
            buf.push(self.scanner.read()?);
        } else {
            self.read_digits(&mut buf)?;
        }

        if self.scanner.can_read() && self.scanner.peek()? == '.' {
            buf.push(self.scanner.read()?);
            self.read_digits(&mut buf)?;
        }

        if self.scanner.can_read() && self.scanner.peek()?.to_ascii_lowercase() == 'e' {
            buf.push(self.scanner.read()?);
            if matches!(self.scanner.peek()?, '+' | '-') {
                buf.push(self.scanner.read()?);
            }
            self.read_digits(&mut buf)?;
        }

        let number: f64 = buf
            .parse()
            .map_err(|_| ParseError::InvalidOrUnexpectedCharacter(position))?;
        Ok(JsonValue::Number(number, NumberKind::Double))
    }

    fn read_string(&mut self) -> Result<String, ParseError> {
        let mut buf = String::new();
        self.scanner.expect('"')?;
        loop {
            let position = self.scanner.position();
            let c = self.scanner.read()?;
            match c {
                '\\' => {
                    let position = self.scanner.position();
                    let escape = self.scanner.read()?;
                    match escape {
                        '"' | '\\' | '/' => buf.push(escape),
                        'b' => buf.push('\u{8}'),
                        'f' => buf.push('\u{c}'),
                        'n' => buf.push('\n'),
                        'r' => buf.push('\r'),
                        't' => buf.push('\t'),
                        'u' => buf.push(self.read_unicode_literal()?),
                        _ => {
                            return Err(ParseError::InvalidOrUnexpectedCharacter(position));
                        }
                    }
                }
                '"' => break,
                // Raw control characters must arrive escaped.
                c if (c as u32) < 0x20 => {
                    return Err(ParseError::InvalidOrUnexpectedCharacter(position));
                }
                c => buf.push(c),
            }
        }
        Ok(buf)
    }

    fn read_hex_digit(&mut self) -> Result<u32, ParseError> {
        let position = self.scanner.position();
        self.scanner
            .read()?
            .to_digit(16)
            .ok_or(ParseError::InvalidOrUnexpectedCharacter(position))
    }

    fn read_code_unit(&mut self) -> Result<u32, ParseError> {
        let mut value = 0u32;
        for _ in 0..4 {
            value = value * 16 + self.read_hex_digit()?;
        }
        Ok(value)
    }

    /// Reads the four hex digits of a `\uXXXX` escape, assembled big-endian
    /// into one code unit. A high surrogate must be followed by a second
    /// `\uXXXX` escape holding the low half; the pair composes into one
    /// astral character. Unpaired surrogates are rejected.
    fn read_unicode_literal(&mut self) -> Result<char, ParseError> {
        let position = self.scanner.position();
        let unit = self.read_code_unit()?;
        let value = match unit {
            0xd800..=0xdbff => {
                self.scanner.expect('\\')?;
                self.scanner.expect('u')?;
                let low = self.read_code_unit()?;
                if !(0xdc00..=0xdfff).contains(&low) {
                    return Err(ParseError::InvalidOrUnexpectedCharacter(position));
                }
                0x10000 + ((unit - 0xd800) << 10) + (low - 0xdc00)
            }
            _ => unit,
        };
        char::from_u32(value).ok_or(ParseError::InvalidOrUnexpectedCharacter(position))
    }

    fn read_object(&mut self) -> Result<JsonValue, ParseError> {
        let mut obj = JsonObject::new();
        self.scanner.expect('{')?;
        self.scanner.skip_whitespace();

        if self.scanner.peek()? == '}' {
            self.scanner.read()?;
            return Ok(obj.into());
        }

        loop {
            self.scanner.skip_whitespace();

            let key_position = self.scanner.position();
            let key = self.read_string()?;
            if obj.contains_key(&key) {
                return Err(ParseError::DuplicateObjectKeys(key_position));
            }

            self.scanner.skip_whitespace();
            self.scanner.expect(':')?;

            let value = self.read_value()?;
            obj.insert(key, value);

            self.scanner.skip_whitespace();
            let position = self.scanner.position();
            match self.scanner.read()? {
                '}' => break,
                ',' => continue,
                _ => {
                    return Err(ParseError::InvalidOrUnexpectedCharacter(position));
                }
            }
        }
        Ok(obj.into())
    }

    fn read_array(&mut self) -> Result<JsonValue, ParseError> {
        let mut arr = JsonArray::new();
        self.scanner.expect('[')?;
        self.scanner.skip_whitespace();

        if self.scanner.peek()? == ']' {
            self.scanner.read()?;
            return Ok(arr.into());
        }

        loop {
            arr.push(self.read_value()?);

            self.scanner.skip_whitespace();
            let position = self.scanner.position();
            match self.scanner.read()? {
                ']' => break,
                ',' => continue,
                _ => {
                    return Err(ParseError::InvalidOrUnexpectedCharacter(position));
                }
            }
        }
        Ok(arr.into())
    }
}
