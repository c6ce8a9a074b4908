//! Bounded checkerboard floor.

use crate::{
    hittable::{HitRecord, Hittable},
    Color, Material, Ray,
};
use tinyray_math::{Interval, Vec3};

/// Rays whose vertical component is smaller than this are treated as
/// parallel to the floor.
const PARALLEL_EPSILON: f32 = 1e-3;

/// A horizontal plane `y = height`, clipped to a rectangle in X and Z and
/// painted with a procedural two-color checker pattern.
///
/// Squares are 2 units wide. The surface is purely diffuse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    /// Height of the plane on the Y axis
    pub height: f32,
    /// Open range of X the floor covers
    pub x_range: Interval,
    /// Open range of Z the floor covers
    pub z_range: Interval,
    /// Shifts the X pattern so that `floor()` sees positive values
    pub offset: f32,
    /// Color of squares with odd parity
    pub odd_color: Color,
    /// Color of squares with even parity
    pub even_color: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_range: Interval::new(-10.0, 10.0),
            z_range: Interval::new(-30.0, -10.0),
            offset: 1000.0,
            odd_color: Color::new(1.0, 1.0, 1.0) * 0.3,
            even_color: Color::new(1.0, 0.7, 0.3) * 0.3,
        }
    }
}

impl Checkerboard {
    /// Diffuse color of the square containing `point`.
    pub fn color_at(&self, point: Vec3) -> Color {
        let cell = (0.5 * point.x + self.offset).floor() as i64 + (0.5 * point.z).floor() as i64;
        if cell & 1 == 1 {
            self.odd_color
        } else {
            self.even_color
        }
    }

    /// Check that the plane, both ranges and both colors are finite and the
    /// rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        let extent_ok = |range: Interval| {
            range.min.is_finite() && range.max.is_finite() && range.size() > 0.0
        };

        self.height.is_finite()
            && self.offset.is_finite()
            && extent_ok(self.x_range)
            && extent_ok(self.z_range)
            && self.odd_color.is_finite()
            && self.even_color.is_finite()
    }

    /// Whether `point` lies strictly inside the floor rectangle.
    pub fn covers(&self, point: Vec3) -> bool {
        self.x_range.surrounds(point.x) && self.z_range.surrounds(point.z)
    }
}

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let dir = ray.direction();
        if dir.y.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin().y - self.height) / dir.y;
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);
        if !self.covers(point) {
            return None;
        }

        Some(HitRecord {
            t,
            point,
            normal: Vec3::Y,
            material: Material::diffuse(self.color_at(point)),
        })
    }
}
