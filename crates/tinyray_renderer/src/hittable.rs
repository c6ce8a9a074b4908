//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use tinyray_math::Vec3;

/// Record of a ray-object intersection.
///
/// Records are recomputed for every query and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

impl HitRecord {
    /// Keep whichever of two optional hits is nearer along the ray.
    pub fn nearest(a: Option<HitRecord>, b: Option<HitRecord>) -> Option<HitRecord> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.t < a.t { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection in front of the ray origin.
    ///
    /// The returned normal always points outward, never flipped to face
    /// the ray; shading decides which side of the surface it is on.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;
}
