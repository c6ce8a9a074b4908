//! Core Whitted ray tracer.
//!
//! Implements recursive ray tracing with:
//! - Diffuse and Phong specular lighting from point lights
//! - Hard shadows via shadow rays
//! - Mirror reflection and Snell refraction up to a depth limit

use std::time::Instant;

use crate::{
    error::Result, hittable::HitRecord, Camera, Color, ImageBuffer, RenderError, Scene,
};
use tinyray_math::{reflect, refract, Ray, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Recursion stops once the depth exceeds this value
    pub max_depth: u32,
    /// Color returned when a ray escapes or recursion stops
    pub background: Color,
    /// Offset applied along the normal to secondary ray origins
    pub bias: f32,
    /// Hits at or beyond this distance count as misses
    pub max_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: Color::new(0.2, 0.7, 0.8),
            bias: 1e-3,
            max_distance: 1000.0,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration yields a terminating, finite render.
    pub fn validate(&self) -> Result<()> {
        if !self.background.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "background color is not finite: {}",
                self.background
            )));
        }
        if !(self.bias.is_finite() && self.bias >= 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "bias must be finite and non-negative, got {}",
                self.bias
            )));
        }
        if !(self.max_distance > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "max distance must be positive, got {}",
                self.max_distance
            )));
        }
        if self.bias == 0.0 {
            log::warn!("Zero bias: expect shadow acne from self-intersection");
        }
        Ok(())
    }
}

/// Diffuse and specular intensities accumulated over all lights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalLighting {
    pub diffuse: f32,
    pub specular: f32,
}

/// Move `point` off the surface by `bias` on the side `direction` leaves
/// through, so the new ray does not immediately re-hit the same surface.
#[inline]
fn offset_origin(point: Vec3, direction: Vec3, normal: Vec3, bias: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * bias
    } else {
        point + normal * bias
    }
}

/// Sum the unshadowed Lambert and Phong terms of every light at `rec`.
///
/// `view_dir` is the direction of the ray that produced the hit.
pub fn local_lighting(
    rec: &HitRecord,
    view_dir: Vec3,
    scene: &Scene,
    config: &RenderConfig,
) -> LocalLighting {
    let mut lighting = LocalLighting::default();

    for light in scene.lights() {
        let to_light = light.position - rec.point;
        let light_distance = to_light.length();
        let light_dir = to_light / light_distance;

        let shadow_ray = Ray::new(
            offset_origin(rec.point, light_dir, rec.normal, config.bias),
            light_dir,
        );
        if let Some(blocker) = scene.intersect(&shadow_ray, config.max_distance) {
            if blocker.t < light_distance {
                continue;
            }
        }

        lighting.diffuse += light.intensity * light_dir.dot(rec.normal).max(0.0);

        let highlight = reflect(-light_dir, rec.normal).dot(-view_dir).max(0.0);
        lighting.specular += light.intensity * highlight.powf(rec.material.specular_exponent);
    }

    lighting
}

/// Compute the color seen along a ray.
///
/// This is the core recursive function. `depth` is 0 for camera rays and
/// grows by one per bounce; once it exceeds `config.max_depth` the
/// background is returned without touching the scene.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(rec) = scene.intersect(ray, config.max_distance) else {
        return config.background;
    };

    let dir = ray.direction();
    debug_assert!(dir.is_normalized(), "ray direction not normalized: {dir}");
    debug_assert!(rec.normal.is_normalized(), "surface normal not normalized: {}", rec.normal);

    let material = rec.material;
    let albedo = material.albedo;

    // A zero weight contributes nothing, so skip tracing that branch
    let reflect_color = if albedo.reflect != 0.0 {
        let reflect_dir = reflect(dir, rec.normal).normalize();
        let origin = offset_origin(rec.point, reflect_dir, rec.normal, config.bias);
        cast_ray(&Ray::new(origin, reflect_dir), scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let refract_color = if albedo.refract != 0.0 {
        let refract_dir = refract(dir, rec.normal, material.refractive_index, 1.0).normalize();
        let origin = offset_origin(rec.point, refract_dir, rec.normal, config.bias);
        cast_ray(&Ray::new(origin, refract_dir), scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let lighting = local_lighting(&rec, dir, scene, config);

    material.diffuse_color * lighting.diffuse * albedo.diffuse
        + Color::ONE * lighting.specular * albedo.specular
        + reflect_color * albedo.reflect
        + refract_color * albedo.refract
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    cast_ray(&camera.get_ray(x, y), scene, 0, config)
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded, row by row. Inputs are not checked; see [`try_render`].
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::info!(
        "Rendering {}x{} (fov {}, max depth {}, {} spheres, {} lights)",
        camera.image_width,
        camera.image_height,
        camera.vfov(),
        config.max_depth,
        scene.spheres().len(),
        scene.lights().len()
    );

    let progress_step = (camera.image_height / 10).max(1);
    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            image.set(x, y, render_pixel(camera, scene, x, y, config));
        }
        if (y + 1) % progress_step == 0 {
            log::debug!("Rendered {}/{} rows", y + 1, camera.image_height);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Validate the camera, scene and config, then render.
pub fn try_render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer> {
    camera.validate()?;
    config.validate()?;
    scene.validate()?;
    Ok(render(camera, scene, config))
}
