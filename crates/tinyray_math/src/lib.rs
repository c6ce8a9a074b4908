// Re-export glam for convenience
pub use glam::*;

// tinyray math types
mod albedo;
mod error;
mod interval;
mod optics;
mod ray;

pub use albedo::Albedo;
pub use error::MathError;
pub use interval::Interval;
pub use optics::{reflect, refract, try_refract, TOTAL_INTERNAL_REFLECTION};
pub use ray::Ray;

/// Normalize `v`, failing on zero-length or non-finite input.
///
/// `Vec3::normalize` is the permissive variant used on the hot path: it
/// silently produces NaN/Inf components for a zero vector. Callers that
/// build directions from untrusted data (camera setup, scene validation)
/// should go through this instead.
pub fn try_normalized(v: Vec3) -> Result<Vec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateVector(v))
}
