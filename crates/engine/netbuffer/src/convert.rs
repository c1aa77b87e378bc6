//! Bit-level conversions between integers, floats and byte blocks.
//!
//! The reinterpretation functions alias the bit pattern only; no numeric
//! conversion, rounding or range check takes place. NaN payloads survive.

use crate::endian::WireOrder;
use crate::error::{BufferError, BufferResult};

/// Reads the bits of `value` as an `f32`.
#[inline]
pub fn u32_to_f32(value: u32) -> f32 {
    f32::from_bits(value)
}

/// Reads the bits of `value` as a `u32`.
#[inline]
pub fn f32_to_u32(value: f32) -> u32 {
    value.to_bits()
}

/// Reads the bits of `value` as an `f64`.
#[inline]
pub fn u64_to_f64(value: u64) -> f64 {
    f64::from_bits(value)
}

/// Reads the bits of `value` as a `u64`.
#[inline]
pub fn f64_to_u64(value: f64) -> u64 {
    value.to_bits()
}

/// Encode a single float as four bytes in `order`.
pub fn f32_to_bytes(value: f32, order: WireOrder) -> [u8; 4] {
    order.encode_u32(f32_to_u32(value))
}

/// Encode a double as eight bytes in `order`.
pub fn f64_to_bytes(value: f64, order: WireOrder) -> [u8; 8] {
    order.encode_u64(f64_to_u64(value))
}

/// Decode a float from the first four bytes of `bytes`.
pub fn f32_from_bytes(bytes: &[u8], order: WireOrder) -> BufferResult<f32> {
    let word = leading::<4>(bytes)?;
    Ok(u32_to_f32(order.decode_u32(word)))
}

/// Decode a double from the first eight bytes of `bytes`.
pub fn f64_from_bytes(bytes: &[u8], order: WireOrder) -> BufferResult<f64> {
    let word = leading::<8>(bytes)?;
    Ok(u64_to_f64(order.decode_u64(word)))
}

/// Decode a float stored in `bytes[start..end]`.
pub fn f32_from_range(
    bytes: &[u8],
    start: usize,
    end: usize,
    order: WireOrder,
) -> BufferResult<f32> {
    let slice = bytes.get(start..end).ok_or(BufferError::InvalidRange {
        start,
        end,
        len: bytes.len(),
    })?;
    f32_from_bytes(slice, order)
}

/// Join encoded blocks into one contiguous payload.
pub fn concat(blocks: &[&[u8]]) -> Vec<u8> {
    let total = blocks.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for block in blocks {
        out.extend_from_slice(block);
    }
    out
}

fn leading<const N: usize>(bytes: &[u8]) -> BufferResult<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(BufferError::BufferUnderflow {
            requested: N,
            remaining: bytes.len(),
        })
}
