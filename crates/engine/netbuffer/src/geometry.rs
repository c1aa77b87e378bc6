//! Geometric value types that `glam` does not provide.
//!
//! Vectors, quaternions and matrices are plain `glam` types; the types here
//! fill the remaining gaps with the same plain-old-data shape.

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Linear RGBA color with float channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

/// RGBA color packed into four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Color32 {
    /// Channels are clamped to `[0, 1]` and rounded to the nearest byte.
    fn from(c: Color) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_byte(c.r), to_byte(c.g), to_byte(c.b), to_byte(c.a))
    }
}

impl From<Color32> for Color {
    fn from(c: Color32) -> Self {
        let to_float = |v: u8| f32::from(v) / 255.0;
        Self::new(to_float(c.r), to_float(c.g), to_float(c.b), to_float(c.a))
    }
}

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x_min: f32, y_min: f32, width: f32, height: f32) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x_min, self.y_min)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_min + self.width, self.y_min + self.height)
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Inclusive of the minimum edges, exclusive of the maximum edges.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.x_min && point.x < max.x && point.y >= self.y_min && point.y < max.y
    }
}

/// Plane in Hessian normal form: `dot(normal, p) + distance = 0`.
///
/// The normal is stored as given. Decoded planes are not renormalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing along `normal` (normalised here).
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self::new(normal, -normal.dot(point))
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Half-line from `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_conversion_clamps_and_rounds() {
        let packed = Color32::from(Color::new(1.5, 0.5, -1.0, 1.0));
        assert_eq!(packed, Color32::new(255, 128, 0, 255));
        assert_eq!(Color::from(Color32::new(255, 0, 0, 255)), Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn color_vec4_conversion() {
        let v: Vec4 = Color::WHITE.into();
        assert_eq!(v, Vec4::ONE);
        assert_eq!(Color::from(Vec4::new(0.0, 0.0, 0.0, 1.0)), Color::BLACK);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::from_min_max(Vec2::new(-1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(rect, Rect::new(-1.0, 2.0, 4.0, 2.0));
        assert_eq!(rect.center(), Vec2::new(1.0, 3.0));
        assert!(rect.contains(Vec2::new(-1.0, 2.0)));
        assert!(!rect.contains(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn plane_distance() {
        let plane = Plane::from_normal_and_point(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(plane.normal, Vec3::Y);
        assert_eq!(plane.distance, -5.0);
        assert_eq!(plane.signed_distance(Vec3::new(1.0, 7.0, 1.0)), 2.0);
    }

    #[test]
    fn ray_point() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.point_at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn serde_round_trip() {
        let color = Color::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);

        let packed = Color32::new(1, 2, 3, 4);
        let json = serde_json::to_string(&packed).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":4}"#);
        assert_eq!(serde_json::from_str::<Color32>(&json).unwrap(), packed);

        let rect = Rect::new(-1.0, 2.0, 4.0, 2.0);
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(serde_json::from_str::<Rect>(&json).unwrap(), rect);

        let plane = Plane::new(Vec3::Y, -5.0);
        let json = serde_json::to_string(&plane).unwrap();
        assert_eq!(serde_json::from_str::<Plane>(&json).unwrap(), plane);

        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        let json = serde_json::to_string(&ray).unwrap();
        assert_eq!(serde_json::from_str::<Ray>(&json).unwrap(), ray);
    }
}
