//! The built-in demo scene: five spheres in a walled room, four lights.

use prism_renderer::{
    Camera, Color, Light, Material, MaterialKind, MeshError, Scene, Sphere, TriangleMesh, Vec3,
};

/// st coordinates shared by every wall quad
const QUAD_ST: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
];

/// Camera settings the demo scene was composed for.
pub fn demo_camera() -> Camera {
    Camera::new()
        .with_resolution(2048, 2048)
        .with_fov(45.0)
        .with_max_recursions(5)
        .with_background(Color::new(0.1, 0.4, 0.6))
}

fn quad(corners: [Vec3; 4], indices: [u32; 6]) -> Result<TriangleMesh, MeshError> {
    TriangleMesh::new(&corners, &indices, &QUAD_ST)
}

pub fn build_demo_scene() -> Result<Scene, MeshError> {
    let mut scene = Scene::new();

    // Spheres
    scene.add_surface(
        Sphere::new(Vec3::new(1.0, 1.0, -6.0), 1.0),
        Material::diffuse(Color::new(0.05, 0.4, 0.7)),
    );
    scene.add_surface(
        Sphere::new(Vec3::new(-2.0, 2.0, -10.0), 2.5),
        Material::new(MaterialKind::ReflectiveRefractive)
            .with_ior(10.0)
            .with_reflection(0.9)
            .with_alpha(0.9),
    );
    scene.add_surface(
        Sphere::new(Vec3::new(2.0, -2.0, -12.0), 1.0),
        Material::diffuse(Color::new(0.8, 1.0, 1.0)).with_alpha(0.5),
    );
    scene.add_surface(
        Sphere::new(Vec3::new(2.0, 2.0, 12.0), 4.0),
        Material::diffuse(Color::new(1.0, 0.6, 0.2)),
    );
    scene.add_surface(
        Sphere::new(Vec3::new(2.0, 16.0, 40.0), 16.0),
        Material::diffuse(Color::new(1.0, 0.4, 0.8)),
    );

    // Back wall
    let back_wall = quad(
        [
            Vec3::new(-20.0, -5.0, -25.0),
            Vec3::new(20.0, -5.0, -25.0),
            Vec3::new(20.0, 15.0, -25.0),
            Vec3::new(-20.0, 15.0, -25.0),
        ],
        [0, 1, 3, 1, 2, 3],
    )?;
    scene.add_surface(back_wall, Material::diffuse(Color::new(0.8, 0.6, 0.2)));

    // Floor
    let floor = quad(
        [
            Vec3::new(-20.0, -3.0, 25.0),
            Vec3::new(20.0, -3.0, 25.0),
            Vec3::new(20.0, -3.0, -25.0),
            Vec3::new(-20.0, -3.0, -25.0),
        ],
        [0, 1, 3, 1, 2, 3],
    )?;
    scene.add_surface(floor, Material::diffuse(Color::new(0.3, 0.1, 0.4)));

    // Side walls: partly mirrored, facing into the room
    let wall = Material::new(MaterialKind::ReflectiveRefractive)
        .with_diffuse_color(Color::new(0.4, 0.8, 0.2))
        .with_reflection(0.2)
        .with_ior(10.0);

    let left_wall = quad(
        [
            Vec3::new(-8.0, -5.0, 0.0),
            Vec3::new(-8.0, 100.0, 0.0),
            Vec3::new(-8.0, 100.0, -25.0),
            Vec3::new(-8.0, -5.0, -25.0),
        ],
        [3, 1, 0, 3, 2, 1],
    )?;
    scene.add_surface(left_wall, wall);

    let right_wall = quad(
        [
            Vec3::new(8.0, -5.0, 0.0),
            Vec3::new(8.0, 100.0, 0.0),
            Vec3::new(8.0, 100.0, -25.0),
            Vec3::new(8.0, -5.0, -25.0),
        ],
        [0, 1, 2, 0, 2, 3],
    )?;
    scene.add_surface(right_wall, wall);

    // Lights
    scene.add_light(Light::new(Vec3::new(0.0, 70.0, 0.0), Vec3::splat(0.8)));
    scene.add_light(
        Light::new(Vec3::new(4.0, 2.0, -2.0), Vec3::splat(0.6)).with_color(Color::new(0.8, 0.5, 0.9)),
    );
    scene.add_light(
        Light::new(Vec3::new(-4.0, 8.0, -2.0), Vec3::splat(0.4)).with_color(Color::new(0.5, 0.8, 0.6)),
    );
    scene.add_light(
        Light::new(Vec3::new(0.0, 16.0, 12.0), Vec3::splat(0.5)).with_color(Color::new(0.6, 0.9, 0.2)),
    );

    Ok(scene)
}
