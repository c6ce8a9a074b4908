//! tinyray renderer - Whitted-style recursive ray tracing
//!
//! Spheres and a bounded checkerboard floor lit by point lights, with
//! hard shadows, Phong highlights, mirror reflection and refraction.
//! Everything is brute force: each ray is tested against every primitive.
//!
//! # Example
//!
//! ```no_run
//! use tinyray_renderer::{demo_scene, try_render, Camera, RenderConfig};
//!
//! let camera = Camera::new().with_resolution(1024, 768).with_fov(60.0);
//! let image = try_render(&camera, &demo_scene(), &RenderConfig::default())?;
//! image.save_png("out.png")?;
//! # Ok::<(), tinyray_renderer::RenderError>(())
//! ```

mod camera;
mod checkerboard;
mod error;
mod hittable;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use checkerboard::Checkerboard;
pub use error::{RenderError, Result};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Material};
pub use output::{color_to_rgba, tone_map, ImageBuffer};
pub use renderer::{
    cast_ray, local_lighting, render, render_pixel, try_render, LocalLighting, RenderConfig,
};
pub use scene::{demo_scene, Light, Scene};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from tinyray_math
pub use tinyray_math::{Albedo, Interval, Ray, Vec3};
