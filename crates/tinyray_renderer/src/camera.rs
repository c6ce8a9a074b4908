//! Pinhole camera for primary ray generation.

use crate::{error::Result, Ray, RenderError};
use tinyray_math::{try_normalized, Vec3};

/// Pinhole camera looking down -Z with +Y up.
///
/// One ray per pixel through the pixel center; no lens, no jitter.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in degrees
    vfov: f32,
    /// Eye position
    origin: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            vfov: 60.0,
            origin: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Number of pixels in the image, or `None` if it does not fit in a `u32`.
    pub fn pixel_count(&self) -> Option<u32> {
        self.image_width.checked_mul(self.image_height)
    }

    /// Check that the camera can produce finite rays and a countable image.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.pixel_count().is_none() {
            return Err(RenderError::InvalidConfig(format!(
                "image size {}x{} has too many pixels",
                self.image_width, self.image_height
            )));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::InvalidConfig(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.vfov
            )));
        }
        if !self.origin.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "camera origin is not finite: {}",
                self.origin
            )));
        }

        // A degenerate corner ray would mean every pixel is garbage
        try_normalized(self.direction(0, 0))?;
        Ok(())
    }

    /// Generate the primary ray through the center of pixel (i, j).
    ///
    /// (0, 0) is the top-left pixel.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.origin, self.direction(i, j).normalize())
    }

    /// Unnormalized direction through pixel (i, j).
    ///
    /// The image plane sits at the distance where its height spans exactly
    /// `image_height` units under the field of view.
    fn direction(&self, i: u32, j: u32) -> Vec3 {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let half_fov = self.vfov.to_radians() / 2.0;

        Vec3::new(
            (i as f32 + 0.5) - width / 2.0,
            -((j as f32 + 0.5) - height / 2.0),
            -height / (2.0 * half_fov.tan()),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_center_ray_points_down_negative_z() {
        // Odd resolution so a pixel center sits on the optical axis
        let camera = Camera::new().with_resolution(101, 101);
        let ray = camera.get_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_rays_are_normalized() {
        let camera = Camera::new().with_resolution(64, 48).with_fov(90.0);
        for (i, j) in [(0, 0), (63, 0), (0, 47), (63, 47), (32, 24)] {
            let d = camera.get_ray(i, j).direction();
            assert!((d.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_image_axes() {
        let camera = Camera::new().with_resolution(100, 100);

        // Top-left pixel looks up and to the left
        let top_left = camera.get_ray(0, 0).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        // Bottom-right pixel looks down and to the right
        let bottom_right = camera.get_ray(99, 99).direction();
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_fov_edge_angle() {
        // With a 90 degree vertical fov the top edge of the image is at 45 degrees
        let camera = Camera::new().with_resolution(1, 2).with_fov(90.0);
        let d = camera.direction(0, 0);

        // Pixel center is half a pixel below the edge: y = 0.5, z = -1
        assert!((d.y - 0.5).abs() < EPS);
        assert!((d.z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_with_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new().with_origin(origin);
        assert_eq!(camera.get_ray(0, 0).origin(), origin);
    }

    #[test]
    fn test_validate() {
        assert!(Camera::new().validate().is_ok());
        assert!(Camera::new().with_resolution(0, 10).validate().is_err());
        assert!(Camera::new().with_fov(0.0).validate().is_err());
        assert!(Camera::new().with_fov(180.0).validate().is_err());
        assert!(Camera::new().with_fov(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_pixel_count_overflow() {
        let camera = Camera::new().with_resolution(65536, 65536);
        assert_eq!(camera.pixel_count(), None);
        assert!(matches!(camera.validate(), Err(RenderError::InvalidConfig(_))));

        // Largest image whose pixel count still fits
        let camera = Camera::new().with_resolution(65535, 65537);
        assert_eq!(camera.pixel_count(), Some(u32::MAX));
        assert!(camera.validate().is_ok());
    }
}
