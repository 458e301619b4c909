//! Checked binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// Reads little-endian binary data from a byte slice.
///
/// Every read is bounds-checked and returns [`BufferError::EndOfBuffer`]
/// instead of panicking when the slice runs out; binary decoders surface
/// that as a truncated-stream error.
pub struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Current cursor position.
    pub fn pos(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    /// True when the cursor has consumed the whole slice.
    pub fn is_empty(&self) -> bool {
        self.x >= self.data.len()
    }

    /// Advances the cursor by `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }

    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.data.len() {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        self.check(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.x..self.x + N]);
        self.x += N;
        Ok(out)
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let bin = &self.data[self.x..self.x + size];
        self.x += size;
        Ok(bin)
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.data[self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        Ok(i32::from_le_bytes(self.take()?))
    }

    /// Reads a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        Ok(i64::from_le_bytes(self.take()?))
    }

    /// Reads a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_le_bytes(self.take()?))
    }

    /// Reads a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_le_bytes(self.take()?))
    }

    /// Reads a LEB128-encoded unsigned 32-bit integer.
    ///
    /// At most five bytes are consumed; a fifth byte with its continuation
    /// bit set is malformed.
    pub fn varint_u32(&mut self) -> Result<u32, BufferError> {
        let mut value: u32 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.u8()?;
            if shift == 28 && byte > 0x0f {
                return Err(BufferError::InvalidVarint);
            }
            value |= u32::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift > 28 {
                return Err(BufferError::InvalidVarint);
            }
        }
    }

    /// Reads a UTF-8 string of the given byte length.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.buf(size)?;
        str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)
    }

    /// Reads a single UTF-8 encoded scalar value.
    pub fn utf8_char(&mut self) -> Result<char, BufferError> {
        let lead = self.peek()?;
        let width = match lead {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Err(BufferError::InvalidUtf8),
        };
        let text = self.utf8(width)?;
        text.chars().next().ok_or(BufferError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_primitives_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8().unwrap(), 0x01);
        assert_eq!(reader.u32().unwrap(), 0x05040302);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_past_end_errors() {
        let data = [0x01];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32(), Err(BufferError::EndOfBuffer));
        // The failed read does not advance the cursor.
        assert_eq!(reader.u8().unwrap(), 0x01);
    }

    #[test]
    fn skip_and_pos() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        reader.skip(2).unwrap();
        assert_eq!(reader.pos(), 2);
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert_eq!(reader.skip(2), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn varint_round_values() {
        let data = [0x00, 0x7f, 0x80, 0x01, 0xff, 0xff, 0xff, 0xff, 0x0f];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.varint_u32().unwrap(), 0);
        assert_eq!(reader.varint_u32().unwrap(), 127);
        assert_eq!(reader.varint_u32().unwrap(), 128);
        assert_eq!(reader.varint_u32().unwrap(), u32::MAX);
    }

    #[test]
    fn varint_overlong_is_rejected() {
        let data = [0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.varint_u32(), Err(BufferError::InvalidVarint));
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        let data = [0xff, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8(2), Err(BufferError::InvalidUtf8));
    }

    #[test]
    fn utf8_char_multibyte() {
        let data = "é!".as_bytes();
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8_char().unwrap(), 'é');
        assert_eq!(reader.utf8_char().unwrap(), '!');
    }
}
