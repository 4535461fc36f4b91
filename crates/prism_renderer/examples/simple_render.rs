//! Simple Whitted ray tracer example.
//!
//! Renders a glass sphere over a matte floor and saves to PPM format.

use prism_renderer::{
    render, Camera, Color, Light, Material, MaterialKind, Scene, Sphere, TriangleMesh, Vec3,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();

    let camera = Camera::new()
        .with_resolution(640, 480)
        .with_fov(50.0)
        .with_max_recursions(5)
        .with_background(Color::new(0.1, 0.4, 0.6));

    let start = std::time::Instant::now();
    let image = render(&scene, &camera);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Floor
    let floor = TriangleMesh::new(
        &[
            Vec3::new(-10.0, -1.0, 0.0),
            Vec3::new(10.0, -1.0, 0.0),
            Vec3::new(10.0, -1.0, -30.0),
            Vec3::new(-10.0, -1.0, -30.0),
        ],
        &[0, 1, 3, 1, 2, 3],
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
    )
    .expect("floor indices are in range");
    scene.add_surface(floor, Material::diffuse(Color::new(0.3, 0.1, 0.4)));

    // Glass
    scene.add_surface(
        Sphere::new(Vec3::new(-1.2, 0.0, -6.0), 1.0),
        Material::new(MaterialKind::ReflectiveRefractive)
            .with_ior(1.5)
            .with_reflection(0.9)
            .with_alpha(0.9),
    );

    // Matte
    scene.add_surface(
        Sphere::new(Vec3::new(1.4, 0.0, -8.0), 1.0),
        Material::diffuse(Color::new(0.05, 0.4, 0.7)),
    );

    // Half-transparent
    scene.add_surface(
        Sphere::new(Vec3::new(0.5, -0.5, -4.0), 0.5),
        Material::diffuse(Color::new(0.8, 1.0, 1.0)).with_alpha(0.5),
    );

    scene.add_light(Light::new(Vec3::new(-4.0, 8.0, 2.0), Vec3::splat(0.8)));
    scene.add_light(
        Light::new(Vec3::new(4.0, 2.0, -2.0), Vec3::splat(0.5)).with_color(Color::new(0.8, 0.5, 0.9)),
    );

    scene
}
