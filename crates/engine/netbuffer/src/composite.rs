//! Composite values as fixed sequences of primitive fields.
//!
//! No padding and no tags. Field orders are part of the wire format:
//!
//! | type      | fields                                  | bytes |
//! |-----------|-----------------------------------------|-------|
//! | `Vec2`    | x, y                                    | 8     |
//! | `Vec3`    | x, y, z                                 | 12    |
//! | `Vec4`    | x, y, z, w                              | 16    |
//! | `Quat`    | x, y, z, w                              | 16    |
//! | `Color`   | r, g, b, a (f32)                        | 16    |
//! | `Color32` | r, g, b, a (u8)                         | 4     |
//! | `Rect`    | x_min, y_min, width, height             | 16    |
//! | `Plane`   | normal (Vec3), distance                 | 16    |
//! | `Ray`     | direction (Vec3), origin (Vec3)         | 24    |
//! | `Mat4`    | 16 floats, row-major (m00, m01, ... m33) | 64    |
//!
//! Decoded values are taken as-is: a quaternion is not renormalised and a
//! plane normal is not rescaled.

use crate::buffer::NetworkBuffer;
use crate::codec::{Decode, Encode};
use crate::error::BufferResult;
use crate::geometry::{Color, Color32, Plane, Ray, Rect};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

const F32_LEN: usize = 4;

impl Encode for Vec2 {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.x);
        buffer.write_f32(self.y);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        2 * F32_LEN
    }
}

impl Decode for Vec2 {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Vec2::new(buffer.read_f32()?, buffer.read_f32()?))
    }
}

impl Encode for Vec3 {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.x);
        buffer.write_f32(self.y);
        buffer.write_f32(self.z);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        3 * F32_LEN
    }
}

impl Decode for Vec3 {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Vec3::new(
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
        ))
    }
}

impl Encode for Vec4 {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.x);
        buffer.write_f32(self.y);
        buffer.write_f32(self.z);
        buffer.write_f32(self.w);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        4 * F32_LEN
    }
}

impl Decode for Vec4 {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Vec4::new(
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
        ))
    }
}

impl Encode for Quat {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.x);
        buffer.write_f32(self.y);
        buffer.write_f32(self.z);
        buffer.write_f32(self.w);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        4 * F32_LEN
    }
}

impl Decode for Quat {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Quat::from_xyzw(
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
        ))
    }
}

impl Encode for Mat4 {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        // glam stores columns; the wire wants rows.
        for value in self.transpose().to_cols_array() {
            buffer.write_f32(value);
        }
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        16 * F32_LEN
    }
}

impl Decode for Mat4 {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        let mut rows = [0.0f32; 16];
        for value in &mut rows {
            *value = buffer.read_f32()?;
        }
        Ok(Mat4::from_cols_array(&rows).transpose())
    }
}

impl Encode for Color {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.r);
        buffer.write_f32(self.g);
        buffer.write_f32(self.b);
        buffer.write_f32(self.a);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        4 * F32_LEN
    }
}

impl Decode for Color {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Color::new(
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
        ))
    }
}

impl Encode for Color32 {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_bytes(&[self.r, self.g, self.b, self.a]);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        4
    }
}

impl Decode for Color32 {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        let [r, g, b, a] = buffer.read_array::<4>()?;
        Ok(Color32::new(r, g, b, a))
    }
}

impl Encode for Rect {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        buffer.write_f32(self.x_min);
        buffer.write_f32(self.y_min);
        buffer.write_f32(self.width);
        buffer.write_f32(self.height);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        4 * F32_LEN
    }
}

impl Decode for Rect {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        Ok(Rect::new(
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
            buffer.read_f32()?,
        ))
    }
}

impl Encode for Plane {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        self.normal.encode(buffer)?;
        buffer.write_f32(self.distance);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        self.normal.encoded_len() + F32_LEN
    }
}

impl Decode for Plane {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        let normal = Vec3::decode(buffer)?;
        let distance = buffer.read_f32()?;
        Ok(Plane::new(normal, distance))
    }
}

impl Encode for Ray {
    fn encode(&self, buffer: &mut NetworkBuffer) -> BufferResult<()> {
        self.direction.encode(buffer)?;
        self.origin.encode(buffer)
    }

    fn encoded_len(&self) -> usize {
        self.direction.encoded_len() + self.origin.encoded_len()
    }
}

impl Decode for Ray {
    fn decode(buffer: &mut NetworkBuffer) -> BufferResult<Self> {
        let direction = Vec3::decode(buffer)?;
        let origin = Vec3::decode(buffer)?;
        Ok(Ray::new(origin, direction))
    }
}
