//! Generic read/write surface.
//!
//! Every supported value implements [`Encode`] and [`Decode`], so callers can
//! write `buffer.write(&value)?` and `buffer.read::<T>()?` without picking a
//! named method. The wire format carries no type tags: the reader has to
//! request the same types in the same order as the writer.

use crate::buffer::NetworkBuffer;
use crate::error::BufferResult;
use crate::primitive::STRING_PREFIX_LEN;

/// A value that can be appended to a [`NetworkBuffer`].
pub trait Encode {
    /// Append the encoded form at the cursor.
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()>;

    /// Number of bytes [`Encode::encode`] will append.
    fn encoded_len(&self) -> usize;
}

/// A value that can be read back from a [`NetworkBuffer`].
pub trait Decode: Sized {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self>;
}

impl NetworkBuffer {
    /// Encode `value` at the cursor.
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> BufferResult<()> {
        value.encode(self)
    }

    /// Decode a `T` at the cursor.
    ///
    /// If decoding fails part-way through a composite, the cursor is moved
    /// back to where it was before the call.
    pub fn read<T: Decode>(&mut self) -> BufferResult<T> {
        let start = self.position();
        let result = T::decode(self);
        if result.is_err() {
            self.rewind(start);
        }
        result
    }
}

macro_rules! impl_fixed {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
                    buffer.$write(*self);
                    Ok(())
                }

                #[inline]
                fn encoded_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
                    buffer.$read()
                }
            }
        )*
    };
}

impl_fixed! {
    u8 => write_u8, read_u8;
    i8 => write_i8, read_i8;
    u16 => write_u16, read_u16;
    i16 => write_i16, read_i16;
    u32 => write_u32, read_u32;
    i32 => write_i32, read_i32;
    u64 => write_u64, read_u64;
    i64 => write_i64, read_i64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
    bool => write_bool, read_bool;
}

impl Encode for char {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_char(*self)
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl Decode for char {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        buffer.read_char()
    }
}

impl Encode for str {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_string(self)
    }

    fn encoded_len(&self) -> usize {
        STRING_PREFIX_LEN + self.len()
    }
}

impl Encode for String {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        self.as_str().encode(buffer)
    }

    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }
}

impl Decode for String {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        buffer.read_string()
    }
}
