//! Binary buffer writer with an auto-growing buffer.

/// Writes little-endian binary data to a growable byte buffer.
///
/// The buffer is append-only with one exception: a 4-byte slot can be
/// reserved with [`Writer::reserve_u32`] and filled in later with
/// [`Writer::patch_u32`]. Framed container encoders use this to write a
/// length placeholder up front and patch it once the container body size
/// is known.
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Current write position (also the number of bytes written so far).
    pub fn pos(&self) -> usize {
        self.buf.len()
    }

    /// Consumes the writer and returns the written bytes.
    pub fn flush(self) -> Vec<u8> {
        self.buf
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Writes the UTF-8 bytes of `text` with no length prefix.
    pub fn utf8(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    /// Writes a LEB128-encoded unsigned 32-bit integer.
    pub fn varint_u32(&mut self, mut value: u32) {
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Reserves a zeroed 4-byte slot and returns its offset for a later
    /// [`Writer::patch_u32`].
    pub fn reserve_u32(&mut self) -> usize {
        let offset = self.buf.len();
        self.buf.extend_from_slice(&[0, 0, 0, 0]);
        offset
    }

    /// Overwrites the 4-byte slot at `offset` with `value` (little-endian).
    ///
    /// `offset` must come from a prior [`Writer::reserve_u32`].
    pub fn patch_u32(&mut self, offset: usize, value: u32) {
        self.buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_primitives_little_endian() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u32(0x05040302);
        assert_eq!(writer.flush(), vec![0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn varint_encoding() {
        let mut writer = Writer::new();
        writer.varint_u32(0);
        writer.varint_u32(127);
        writer.varint_u32(128);
        writer.varint_u32(u32::MAX);
        assert_eq!(
            writer.flush(),
            vec![0x00, 0x7f, 0x80, 0x01, 0xff, 0xff, 0xff, 0xff, 0x0f]
        );
    }

    #[test]
    fn reserve_and_patch() {
        let mut writer = Writer::new();
        writer.u8(0xaa);
        let slot = writer.reserve_u32();
        writer.u8(0xbb);
        writer.patch_u32(slot, 0x01020304);
        assert_eq!(writer.flush(), vec![0xaa, 0x04, 0x03, 0x02, 0x01, 0xbb]);
    }

    #[test]
    fn pos_tracks_written_bytes() {
        let mut writer = Writer::new();
        assert_eq!(writer.pos(), 0);
        writer.i64(-1);
        assert_eq!(writer.pos(), 8);
        writer.utf8("abc");
        assert_eq!(writer.pos(), 11);
    }
}
