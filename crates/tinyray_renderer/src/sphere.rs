//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use tinyray_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Both parametric roots of the ray/sphere equation, nearest first.
    ///
    /// Projects the origin-to-center vector onto the ray instead of solving
    /// the full quadratic, so `ray.direction` must be unit length. Roots may
    /// be negative (behind the origin).
    pub fn intersect_roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }

    /// Distance to the nearest non-negative root, if any.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let (t0, t1) = self.intersect_roots(ray)?;
        // Origin inside the sphere: the far root is the exit point
        let t = if t0 < 0.0 { t1 } else { t0 };
        (t >= 0.0).then_some(t)
    }

    /// Check that the sphere has a finite center, a positive radius and a
    /// valid material.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.material.is_valid()
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = self.ray_intersect(ray)?;
        let point = ray.at(t);

        Some(HitRecord {
            t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        })
    }
}
