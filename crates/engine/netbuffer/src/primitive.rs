//! Fixed-width primitives, strings and raw byte blocks.
//!
//! Integers are written as `N / 8` bytes in the buffer's wire order. Signed
//! values go through the unsigned path with an `as` cast, which keeps the
//! two's-complement bit pattern. Floats go through the bit reinterpretation
//! in [`crate::convert`].

use crate::buffer::NetworkBuffer;
use crate::config::MAX_BLOCK_LEN;
use crate::convert::{f32_to_u32, f64_to_u64, u32_to_f32, u64_to_f64};
use crate::error::{BufferError, BufferResult};

/// Encoded size of a string's length prefix.
pub const STRING_PREFIX_LEN: usize = 4;

/// Encoded size of a byte block's length prefix.
pub const BLOCK_PREFIX_LEN: usize = 2;

impl NetworkBuffer {
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.write_byte(value);
    }

    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.write_byte(value as u8);
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        let bytes = self.wire_order().encode_u16(value);
        self.write_bytes(&bytes);
    }

    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        let bytes = self.wire_order().encode_u32(value);
        self.write_bytes(&bytes);
    }

    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        let bytes = self.wire_order().encode_u64(value);
        self.write_bytes(&bytes);
    }

    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(f32_to_u32(value));
    }

    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(f64_to_u64(value));
    }

    /// `1` for true, `0` for false.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(u8::from(value));
    }

    /// Write a character as one byte. Only `U+0000..=U+00FF` fits.
    pub fn write_char(&mut self, value: char) -> BufferResult<()> {
        let byte = u8::try_from(value).map_err(|_| BufferError::CharOutOfRange(value))?;
        self.write_byte(byte);
        Ok(())
    }

    /// Write a 4-byte length prefix followed by the UTF-8 bytes.
    ///
    /// Strings longer than 65,535 bytes are rejected without touching the
    /// buffer.
    pub fn write_string(&mut self, value: &str) -> BufferResult<()> {
        let bytes = value.as_bytes();
        check_block_len(bytes.len())?;
        self.ensure_capacity(STRING_PREFIX_LEN + bytes.len());
        self.write_u32(bytes.len() as u32);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Write raw bytes with no length prefix.
    pub fn write_block(&mut self, bytes: &[u8]) -> BufferResult<()> {
        check_block_len(bytes.len())?;
        self.write_bytes(bytes);
        Ok(())
    }

    /// Write a 2-byte length prefix followed by the bytes.
    ///
    /// `None` and empty slices both encode as a zero prefix.
    pub fn write_bytes_and_size(&mut self, bytes: Option<&[u8]>) -> BufferResult<()> {
        let bytes = bytes.unwrap_or_default();
        check_block_len(bytes.len())?;
        self.ensure_capacity(BLOCK_PREFIX_LEN + bytes.len());
        self.write_u16(bytes.len() as u16);
        self.write_bytes(bytes);
        Ok(())
    }

    #[inline]
    pub fn read_u8(&mut self) -> BufferResult<u8> {
        self.read_byte()
    }

    #[inline]
    pub fn read_i8(&mut self) -> BufferResult<i8> {
        Ok(self.read_byte()? as i8)
    }

    #[inline]
    pub fn read_u16(&mut self) -> BufferResult<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(self.wire_order().decode_u16(bytes))
    }

    #[inline]
    pub fn read_i16(&mut self) -> BufferResult<i16> {
        Ok(self.read_u16()? as i16)
    }

    #[inline]
    pub fn read_u32(&mut self) -> BufferResult<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(self.wire_order().decode_u32(bytes))
    }

    #[inline]
    pub fn read_i32(&mut self) -> BufferResult<i32> {
        Ok(self.read_u32()? as i32)
    }

    #[inline]
    pub fn read_u64(&mut self) -> BufferResult<u64> {
        let bytes = self.read_array::<8>()?;
        Ok(self.wire_order().decode_u64(bytes))
    }

    #[inline]
    pub fn read_i64(&mut self) -> BufferResult<i64> {
        Ok(self.read_u64()? as i64)
    }

    #[inline]
    pub fn read_f32(&mut self) -> BufferResult<f32> {
        Ok(u32_to_f32(self.read_u32()?))
    }

    #[inline]
    pub fn read_f64(&mut self) -> BufferResult<f64> {
        Ok(u64_to_f64(self.read_u64()?))
    }

    /// Only the byte `1` decodes as `true`; `0` and every other value are
    /// `false`. Peers depend on this exact rule.
    #[inline]
    pub fn read_bool(&mut self) -> BufferResult<bool> {
        Ok(self.read_byte()? == 1)
    }

    #[inline]
    pub fn read_char(&mut self) -> BufferResult<char> {
        Ok(char::from(self.read_byte()?))
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// On failure the cursor is left where the prefix started.
    pub fn read_string(&mut self) -> BufferResult<String> {
        let start = self.position();
        let result = self.read_string_inner();
        if result.is_err() {
            self.rewind(start);
        }
        result
    }

    fn read_string_inner(&mut self) -> BufferResult<String> {
        let declared = self.read_u32()? as usize;
        let remaining = self.remaining();
        if declared > remaining {
            return Err(BufferError::MalformedString {
                reason: format!("declared {declared} bytes, {remaining} remaining"),
            });
        }
        let bytes = self.read_bytes(declared)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| BufferError::MalformedString {
                reason: e.to_string(),
            })
    }

    /// Read a 2-byte length prefix and that many bytes.
    pub fn read_bytes_and_size(&mut self) -> BufferResult<Vec<u8>> {
        let start = self.position();
        let len = self.read_u16()? as usize;
        let result = self.read_bytes(len).map(<[u8]>::to_vec);
        if result.is_err() {
            self.rewind(start);
        }
        result
    }
}

fn check_block_len(len: usize) -> BufferResult<()> {
    if len > MAX_BLOCK_LEN {
        return Err(BufferError::OversizedWrite {
            len,
            max: MAX_BLOCK_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BufferConfig;
    use crate::endian::WireOrder;

    fn reader(buffer: &NetworkBuffer) -> NetworkBuffer {
        NetworkBuffer::from_bytes_with_config(
            buffer.snapshot(),
            &BufferConfig::default().with_wire_order(buffer.wire_order()),
        )
    }

    #[test]
    fn integer_extremes_round_trip() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_u8(u8::MAX);
        buffer.write_i8(i8::MIN);
        buffer.write_u16(u16::MAX);
        buffer.write_i16(i16::MIN);
        buffer.write_u32(u32::MAX);
        buffer.write_i32(i32::MIN);
        buffer.write_u64(u64::MAX);
        buffer.write_i64(i64::MIN);
        buffer.write_i32(-1);
        buffer.write_i64(0);

        let mut r = reader(&buffer);
        assert_eq!(r.read_u8(), Ok(u8::MAX));
        assert_eq!(r.read_i8(), Ok(i8::MIN));
        assert_eq!(r.read_u16(), Ok(u16::MAX));
        assert_eq!(r.read_i16(), Ok(i16::MIN));
        assert_eq!(r.read_u32(), Ok(u32::MAX));
        assert_eq!(r.read_i32(), Ok(i32::MIN));
        assert_eq!(r.read_u64(), Ok(u64::MAX));
        assert_eq!(r.read_i64(), Ok(i64::MIN));
        assert_eq!(r.read_i32(), Ok(-1));
        assert_eq!(r.read_i64(), Ok(0));
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn signed_keeps_twos_complement_bits() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_i16(-2);
        assert_eq!(buffer.as_bytes(), &[0xFF, 0xFE]);
        buffer.write_i8(-1);
        assert_eq!(buffer.as_bytes()[2], 0xFF);
    }

    #[test]
    fn big_endian_layout() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_u32(0x0A0B_0C0D);
        buffer.write_f32(1.0);
        assert_eq!(
            buffer.as_bytes(),
            &[0x0A, 0x0B, 0x0C, 0x0D, 0x3F, 0x80, 0x00, 0x00]
        );
    }

    #[test]
    fn native_layout_matches_host() {
        let mut buffer = NetworkBuffer::with_config(&BufferConfig::native());
        buffer.write_u64(0x0102_0304_0506_0708);
        assert_eq!(buffer.as_bytes(), &0x0102_0304_0506_0708u64.to_ne_bytes());

        let mut r = reader(&buffer);
        assert_eq!(r.wire_order(), WireOrder::Native);
        assert_eq!(r.read_u64(), Ok(0x0102_0304_0506_0708));
    }

    #[test]
    fn floats_round_trip() {
        let mut buffer = NetworkBuffer::new();
        for v in [0.0f32, -0.0, 1343.339, f32::MIN, f32::MAX, f32::EPSILON] {
            buffer.write_f32(v);
        }
        for v in [0.1f64, -2.5e300, f64::MIN_POSITIVE] {
            buffer.write_f64(v);
        }

        let mut r = reader(&buffer);
        for v in [0.0f32, -0.0, 1343.339, f32::MIN, f32::MAX, f32::EPSILON] {
            assert_eq!(r.read_f32().unwrap().to_bits(), v.to_bits());
        }
        for v in [0.1f64, -2.5e300, f64::MIN_POSITIVE] {
            assert_eq!(r.read_f64(), Ok(v));
        }
    }

    #[test]
    fn bool_decoding_is_strict() {
        let mut buffer = NetworkBuffer::from_bytes(vec![1, 0, 2, 0xFF, 1]);
        assert_eq!(buffer.read_bool(), Ok(true));
        assert_eq!(buffer.read_bool(), Ok(false));
        assert_eq!(buffer.read_bool(), Ok(false));
        assert_eq!(buffer.read_bool(), Ok(false));
        assert_eq!(buffer.read_bool(), Ok(true));
    }

    #[test]
    fn chars_are_single_bytes() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_char('A').unwrap();
        buffer.write_char('é').unwrap();
        assert_eq!(buffer.as_bytes(), &[0x41, 0xE9]);
        assert_eq!(
            buffer.write_char('日'),
            Err(BufferError::CharOutOfRange('日'))
        );
        assert_eq!(buffer.position(), 2);

        let mut r = reader(&buffer);
        assert_eq!(r.read_char(), Ok('A'));
        assert_eq!(r.read_char(), Ok('é'));
    }

    #[test]
    fn string_layout() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_string("hoge").unwrap();
        assert_eq!(buffer.as_bytes(), &[0, 0, 0, 4, b'h', b'o', b'g', b'e']);
    }

    #[test]
    fn strings_round_trip() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_string("").unwrap();
        buffer.write_string("hogehoge").unwrap();
        buffer.write_string("ネットワーク").unwrap();

        let mut r = reader(&buffer);
        assert_eq!(r.read_string().unwrap(), "");
        assert_eq!(r.read_string().unwrap(), "hogehoge");
        assert_eq!(r.read_string().unwrap(), "ネットワーク");
    }

    #[test]
    fn truncated_string_is_malformed() {
        let mut buffer = NetworkBuffer::from_bytes(vec![0, 0, 0, 5, b'a', b'b']);
        assert!(matches!(
            buffer.read_string(),
            Err(BufferError::MalformedString { .. })
        ));
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut buffer = NetworkBuffer::from_bytes(vec![0, 0, 0, 2, 0xC3, 0x28]);
        assert!(matches!(
            buffer.read_string(),
            Err(BufferError::MalformedString { .. })
        ));
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn missing_prefix_underflows() {
        let mut buffer = NetworkBuffer::from_bytes(vec![0, 0]);
        assert!(matches!(
            buffer.read_string(),
            Err(BufferError::BufferUnderflow { .. })
        ));
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn oversized_string_writes_nothing() {
        let mut buffer = NetworkBuffer::with_capacity(16);
        let text = "x".repeat(MAX_BLOCK_LEN + 1);
        assert_eq!(
            buffer.write_string(&text),
            Err(BufferError::OversizedWrite {
                len: MAX_BLOCK_LEN + 1,
                max: MAX_BLOCK_LEN
            })
        );
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.capacity(), 16);
    }

    #[test]
    fn block_limits() {
        let mut buffer = NetworkBuffer::with_capacity(8);
        let max = vec![7u8; MAX_BLOCK_LEN];
        buffer.write_block(&max).unwrap();
        assert_eq!(buffer.position(), MAX_BLOCK_LEN);

        let capacity = buffer.capacity();
        let too_big = vec![7u8; MAX_BLOCK_LEN + 1];
        assert!(buffer.write_block(&too_big).is_err());
        assert_eq!(buffer.position(), MAX_BLOCK_LEN);
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn sized_bytes_round_trip() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_bytes_and_size(Some(&[1, 2, 3])).unwrap();
        buffer.write_bytes_and_size(None).unwrap();
        buffer.write_bytes_and_size(Some(&[])).unwrap();
        assert_eq!(buffer.as_bytes(), &[0, 3, 1, 2, 3, 0, 0, 0, 0]);

        let mut r = reader(&buffer);
        assert_eq!(r.read_bytes_and_size(), Ok(vec![1, 2, 3]));
        assert_eq!(r.read_bytes_and_size(), Ok(vec![]));
        assert_eq!(r.read_bytes_and_size(), Ok(vec![]));
    }

    #[test]
    fn truncated_sized_bytes_rewinds() {
        let mut buffer = NetworkBuffer::from_bytes(vec![0, 4, 1, 2]);
        assert!(buffer.read_bytes_and_size().is_err());
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn cursor_advances_by_width() {
        let mut buffer = NetworkBuffer::new();
        buffer.write_u16(1);
        assert_eq!(buffer.position(), 2);
        buffer.write_f64(1.0);
        assert_eq!(buffer.position(), 10);
        buffer.write_bool(true);
        assert_eq!(buffer.position(), 11);
        buffer.write_string("abc").unwrap();
        assert_eq!(buffer.position(), 18);
    }
}
