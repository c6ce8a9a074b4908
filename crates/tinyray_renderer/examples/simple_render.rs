//! Simple ray tracer example.
//!
//! Builds a small scene by hand (a glass sphere in front of a mirror over
//! the checkerboard) and saves it as PNG.

use tinyray_renderer::{
    try_render, Camera, Checkerboard, Color, Light, Material, RenderConfig, Scene, Sphere, Vec3,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new().with_resolution(640, 480).with_fov(60.0);

    // Deeper recursion so the glass shows the mirror shows the glass
    let config = RenderConfig {
        max_depth: 6,
        ..RenderConfig::default()
    };

    let image = try_render(&camera, &scene, &config).expect("Failed to render");

    let filename = "simple_render.png";
    image.save_png(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new().with_checkerboard(Checkerboard {
        odd_color: Color::new(0.05, 0.05, 0.05),
        even_color: Color::new(0.3, 0.3, 0.3),
        ..Checkerboard::default()
    });

    scene.add_sphere(Sphere::new(Vec3::new(0.0, -1.0, -13.0), 2.0, Material::glass()));
    scene.add_sphere(Sphere::new(Vec3::new(0.0, 2.0, -24.0), 5.0, Material::mirror()));
    scene.add_sphere(Sphere::new(Vec3::new(-6.0, -2.5, -18.0), 1.5, Material::red_rubber()));
    scene.add_sphere(Sphere::new(Vec3::new(6.0, -2.5, -18.0), 1.5, Material::ivory()));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));

    println!("Created {} spheres, {} lights", scene.spheres().len(), scene.lights().len());
    scene
}
