//! Scene description and the nearest-hit query.

use crate::{
    error::{RenderError, Result},
    hittable::{HitRecord, Hittable},
    Checkerboard, Material, Ray, Sphere,
};
use tinyray_math::Vec3;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Everything a ray can interact with.
///
/// Built once by the caller and only read while rendering. There is no
/// acceleration structure: every query scans every sphere.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    checkerboard: Option<Checkerboard>,
}

impl Scene {
    /// Create a new empty scene with no floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Set or remove the checkerboard floor.
    pub fn set_checkerboard(&mut self, checkerboard: Option<Checkerboard>) {
        self.checkerboard = checkerboard;
    }

    /// Builder form of [`Scene::set_checkerboard`].
    pub fn with_checkerboard(mut self, checkerboard: Checkerboard) -> Self {
        self.checkerboard = Some(checkerboard);
        self
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn checkerboard(&self) -> Option<&Checkerboard> {
        self.checkerboard.as_ref()
    }

    /// Find the nearest surface hit by `ray` across all spheres and the floor.
    ///
    /// Hits at or beyond `max_distance` count as the ray escaping to the
    /// background and are reported as `None`.
    pub fn intersect(&self, ray: &Ray, max_distance: f32) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for sphere in &self.spheres {
            closest = HitRecord::nearest(closest, sphere.hit(ray));
        }

        if let Some(board) = &self.checkerboard {
            closest = HitRecord::nearest(closest, board.hit(ray));
        }

        closest.filter(|rec| rec.t < max_distance)
    }

    /// Reject geometry the tracer cannot handle.
    ///
    /// The tracer never checks its inputs, so a zero-radius sphere or a
    /// NaN light position would otherwise silently poison the image.
    pub fn validate(&self) -> Result<()> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !sphere.is_valid() {
                return Err(RenderError::InvalidScene(format!(
                    "sphere {i} is degenerate: {sphere:?}"
                )));
            }
        }

        for (i, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() || !light.intensity.is_finite() {
                return Err(RenderError::InvalidScene(format!(
                    "light {i} is not finite: {light:?}"
                )));
            }
        }

        if let Some(board) = &self.checkerboard {
            if !board.is_valid() {
                return Err(RenderError::InvalidScene(format!(
                    "checkerboard is degenerate: {board:?}"
                )));
            }
        }

        if self.lights.is_empty() {
            log::warn!("Scene has no lights; only reflections of the background will be visible");
        }

        log::debug!(
            "Scene validated: {} spheres, {} lights, floor: {}",
            self.spheres.len(),
            self.lights.len(),
            self.checkerboard.is_some()
        );

        Ok(())
    }
}

/// The classic four-sphere scene over a checkerboard.
///
/// Ivory, glass, red rubber and mirror spheres lit by three point lights.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new().with_checkerboard(Checkerboard::default());

    scene.add_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()));
    scene.add_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()));
    scene.add_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()));
    scene.add_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
    scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Interval};

    const FAR: f32 = 1000.0;
    const EPS: f32 = 1e-4;

    #[test]
    fn test_empty_scene_never_hits() {
        let scene = Scene::new();
        for dir in [Vec3::NEG_Z, Vec3::Y, Vec3::new(0.3, -0.8, -0.5).normalize()] {
            assert!(scene.intersect(&Ray::new(Vec3::ZERO, dir), FAR).is_none());
        }
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let mut scene = Scene::new();
        let far = Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, Material::red_rubber());
        let near = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::ivory());
        scene.add_sphere(far);
        scene.add_sphere(near);

        let rec = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), FAR).unwrap();
        assert!((rec.t - 9.0).abs() < EPS);
        assert!((rec.normal - Vec3::Z).length() < EPS);
        assert_eq!(rec.material, Material::ivory());
    }

    #[test]
    fn test_floor_hit_when_no_sphere_in_the_way() {
        let scene = Scene::new().with_checkerboard(Checkerboard::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -5.0).normalize());

        let rec = scene.intersect(&ray, FAR).unwrap();
        assert_eq!(rec.normal, Vec3::Y);
        assert!((rec.point.y + 4.0).abs() < EPS);
    }

    #[test]
    fn test_sphere_in_front_of_floor_wins() {
        let mut scene = Scene::new().with_checkerboard(Checkerboard::default());
        let dir = Vec3::new(0.0, -1.0, -5.0).normalize();
        scene.add_sphere(Sphere::new(dir * 8.0, 1.0, Material::glass()));

        let rec = scene.intersect(&Ray::new(Vec3::ZERO, dir), FAR).unwrap();
        assert!((rec.t - 7.0).abs() < EPS);
        assert_eq!(rec.material, Material::glass());
    }

    #[test]
    fn test_max_distance_cutoff() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -2000.0), 1.0, Material::ivory()));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.intersect(&ray, FAR).is_none());
        assert!(scene.intersect(&ray, 5000.0).is_some());
    }

    #[test]
    fn test_validate() {
        assert!(demo_scene().validate().is_ok());

        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 0.0, Material::ivory()));
        assert!(matches!(scene.validate(), Err(RenderError::InvalidScene(_))));

        let mut scene = Scene::new();
        scene.add_light(Light::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0));
        assert!(matches!(scene.validate(), Err(RenderError::InvalidScene(_))));
    }

    #[test]
    fn test_validate_rejects_nan_checkerboard() {
        let board = Checkerboard {
            z_range: Interval::new(-30.0, f32::NAN),
            ..Checkerboard::default()
        };
        let scene = Scene::new().with_checkerboard(board);
        assert!(matches!(scene.validate(), Err(RenderError::InvalidScene(_))));

        let board = Checkerboard {
            odd_color: Color::splat(f32::INFINITY),
            ..Checkerboard::default()
        };
        let scene = Scene::new().with_checkerboard(board);
        assert!(matches!(scene.validate(), Err(RenderError::InvalidScene(_))));
    }

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene();
        assert_eq!(scene.spheres().len(), 4);
        assert_eq!(scene.lights().len(), 3);
        assert!(scene.checkerboard().is_some());
    }
}
