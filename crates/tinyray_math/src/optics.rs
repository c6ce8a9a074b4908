//! Mirror reflection and Snell's-law refraction.

use crate::{Interval, Vec3};

/// Placeholder direction returned by [`refract`] under total internal
/// reflection. It has no physical meaning; materials that can hit this case
/// are expected to carry a small refraction weight.
pub const TOTAL_INTERNAL_REFLECTION: Vec3 = Vec3::X;

/// Reflect `incident` about the surface normal `normal`.
///
/// `normal` must be unit length; `incident` need not be.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface with normal `normal`.
///
/// `eta_t` is the refractive index on the far side of the surface and
/// `eta_i` the index the ray is travelling through (1.0 for air). When the
/// ray is leaving the medium (`incident` and `normal` point the same way)
/// the normal is flipped and the indices swapped.
///
/// Under total internal reflection this returns
/// [`TOTAL_INTERNAL_REFLECTION`] instead of failing; use [`try_refract`] to
/// detect that case.
#[inline]
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    try_refract(incident, normal, eta_t, eta_i).unwrap_or(TOTAL_INTERNAL_REFLECTION)
}

/// Like [`refract`], but returns `None` on total internal reflection.
pub fn try_refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Option<Vec3> {
    let mut cosi = -Interval::COSINE.clamp(incident.dot(normal));
    let (mut n, mut eta_i, mut eta_t) = (normal, eta_i, eta_t);

    if cosi < 0.0 {
        // Inside the object: swap the media and face the normal outwards
        cosi = -cosi;
        n = -n;
        std::mem::swap(&mut eta_i, &mut eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }

    Some(incident * eta + n * (eta * cosi - k.sqrt()))
}
