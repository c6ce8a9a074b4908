//! Surface materials.

use tinyray_math::{Albedo, Vec3};

/// Color type alias (linear RGB, unclamped, typically 0-1)
pub type Color = Vec3;

/// Describes how a surface interacts with light.
///
/// Materials are plain values: every sphere owns its own copy and nothing
/// is shared by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction of the medium behind the surface (1.0 = air)
    pub refractive_index: f32,
    /// Weights of the diffuse, specular, reflection and refraction terms
    pub albedo: Albedo,
    /// Base color scaled by the diffuse term
    pub diffuse_color: Color,
    /// Phong exponent; higher values give tighter highlights
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Albedo::default(),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: impl Into<Albedo>,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo: albedo.into(),
            diffuse_color,
            specular_exponent,
        }
    }

    /// A purely diffuse material of the given color.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    /// Off-white with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(1.0, [0.6, 0.3, 0.1, 0.0], Color::new(0.4, 0.4, 0.3), 50.0)
    }

    /// Mostly transmissive with a sharp highlight.
    pub fn glass() -> Self {
        Self::new(1.5, [0.0, 0.5, 0.1, 0.8], Color::new(0.6, 0.7, 0.8), 125.0)
    }

    /// Matte red.
    pub fn red_rubber() -> Self {
        Self::new(1.0, [0.9, 0.1, 0.0, 0.0], Color::new(0.3, 0.1, 0.1), 10.0)
    }

    /// Near-perfect mirror with a very bright, very tight highlight.
    pub fn mirror() -> Self {
        Self::new(1.0, [0.0, 10.0, 0.8, 0.0], Color::new(1.0, 1.0, 1.0), 1425.0)
    }

    /// Whether every field is finite and the refractive index is positive.
    pub fn is_valid(&self) -> bool {
        self.refractive_index.is_finite()
            && self.refractive_index > 0.0
            && self.albedo.is_finite()
            && self.diffuse_color.is_finite()
            && self.specular_exponent.is_finite()
    }
}
