//! Wire byte order.
//!
//! Two dialects exist on the wire and they are not compatible with each
//! other:
//! - `BigEndian`: multi-byte values always travel high byte first. On a
//!   little-endian host the bytes are reversed on encode and on decode.
//! - `Native`: bytes travel in whatever order the host produces them. Only
//!   correct between hosts of the same endianness.
//!
//! `BigEndian` is the default. A writer and the reader of the same payload
//! must use the same order.

use crate::error::BufferError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte order used for multi-byte values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WireOrder {
    /// High byte first regardless of host.
    #[default]
    BigEndian,
    /// Host order, no conversion.
    Native,
}

/// Host byte order, resolved from the compilation target.
const HOST_IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Returns `true` when the host stores multi-byte values low byte first.
#[inline]
pub const fn host_is_little_endian() -> bool {
    HOST_IS_LITTLE_ENDIAN
}

impl WireOrder {
    /// Whether bytes must be reversed relative to the host's native layout.
    #[inline]
    pub const fn swaps(self) -> bool {
        match self {
            Self::BigEndian => HOST_IS_LITTLE_ENDIAN,
            Self::Native => false,
        }
    }

    /// Reverse `bytes` in place when this order differs from the host.
    ///
    /// Applying it twice restores the input, so the same call serves both
    /// encode and decode.
    #[inline]
    pub fn normalize(self, bytes: &mut [u8]) {
        if self.swaps() {
            bytes.reverse();
        }
    }

    #[inline]
    pub fn encode_u16(self, value: u16) -> [u8; 2] {
        let mut bytes = value.to_ne_bytes();
        self.normalize(&mut bytes);
        bytes
    }

    #[inline]
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        let mut bytes = value.to_ne_bytes();
        self.normalize(&mut bytes);
        bytes
    }

    #[inline]
    pub fn encode_u64(self, value: u64) -> [u8; 8] {
        let mut bytes = value.to_ne_bytes();
        self.normalize(&mut bytes);
        bytes
    }

    #[inline]
    pub fn decode_u16(self, mut bytes: [u8; 2]) -> u16 {
        self.normalize(&mut bytes);
        u16::from_ne_bytes(bytes)
    }

    #[inline]
    pub fn decode_u32(self, mut bytes: [u8; 4]) -> u32 {
        self.normalize(&mut bytes);
        u32::from_ne_bytes(bytes)
    }

    #[inline]
    pub fn decode_u64(self, mut bytes: [u8; 8]) -> u64 {
        self.normalize(&mut bytes);
        u64::from_ne_bytes(bytes)
    }
}

impl fmt::Display for WireOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigEndian => write!(f, "big"),
            Self::Native => write!(f, "native"),
        }
    }
}

impl FromStr for WireOrder {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" | "network" => Ok(Self::BigEndian),
            "native" | "host" => Ok(Self::Native),
            other => Err(BufferError::InvalidConfig(format!(
                "unknown wire order '{other}' (expected 'big' or 'native')"
            ))),
        }
    }
}
