//! Binary network buffer for Crossworld payloads.
//!
//! This crate provides:
//! - A growable byte buffer with a single read/write cursor
//! - Fixed-width integer, float, bool, char and string encoding
//! - `glam` vectors, quaternions and matrices plus color, rect, plane and
//!   ray types as flat field sequences
//! - Bit-level float/integer conversion and wire byte-order handling
//!
//! Payloads have no framing and no type tags. The reader must know the
//! schema the writer used.
//!
//! # Example
//!
//! ```
//! use netbuffer::{NetworkBuffer, Vec3};
//!
//! let mut writer = NetworkBuffer::new();
//! writer.write(&-23412i32)?;
//! writer.write("hogehoge")?;
//! writer.write(&Vec3::new(1.0, 3.0, 8.0))?;
//!
//! let mut reader = NetworkBuffer::from_bytes(writer.snapshot());
//! assert_eq!(reader.read::<i32>()?, -23412);
//! assert_eq!(reader.read::<String>()?, "hogehoge");
//! assert_eq!(reader.read::<Vec3>()?, Vec3::new(1.0, 3.0, 8.0));
//! # Ok::<(), netbuffer::BufferError>(())
//! ```

#![forbid(unsafe_code)]

pub mod buffer;
pub mod codec;
pub mod composite;
pub mod config;
pub mod convert;
pub mod endian;
pub mod error;
pub mod geometry;
pub mod primitive;

pub use buffer::NetworkBuffer;
pub use codec::{Decode, Encode};
pub use config::{
    BufferConfig, CAPACITY_WARNING_THRESHOLD, DEFAULT_CAPACITY, GROWTH_FACTOR, MAX_BLOCK_LEN,
};
pub use endian::WireOrder;
pub use error::{BufferError, BufferResult};
pub use geometry::{Color, Color32, Plane, Ray, Rect};

// Re-export the math types used in the composite codec.
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
