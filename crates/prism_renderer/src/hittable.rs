//! Hittable trait and the closed set of surface shapes.

use crate::{Material, Ray, Sphere, TriangleMesh};
use prism_math::{Vec2, Vec3};

/// Result of a successful ray/shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Sub-primitive that was hit (triangle index for meshes, 0 for spheres)
    pub index: usize,
    /// Barycentric (u, v) within the hit triangle; zero for spheres
    pub uv: Vec2,
}

/// Geometric data at a hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProperties {
    /// Unit geometric normal, oriented by the shape (not by the ray)
    pub normal: Vec3,
    /// Interpolated parametric coordinate; zero when the shape has none
    pub st: Vec3,
}

/// Trait for shapes that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection of `ray` with this shape, if any.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// Normal and surface coordinate at `point`, found by `intersect`.
    fn surface_properties(&self, point: Vec3, direction: Vec3, hit: &Hit) -> SurfaceProperties;
}

/// The shapes Prism can render.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Mesh(TriangleMesh),
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Mesh(mesh) => mesh.intersect(ray),
        }
    }

    fn surface_properties(&self, point: Vec3, direction: Vec3, hit: &Hit) -> SurfaceProperties {
        match self {
            Shape::Sphere(sphere) => sphere.surface_properties(point, direction, hit),
            Shape::Mesh(mesh) => mesh.surface_properties(point, direction, hit),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<TriangleMesh> for Shape {
    fn from(mesh: TriangleMesh) -> Self {
        Shape::Mesh(mesh)
    }
}

/// A shape paired with its material. This is what the scene stores.
///
/// Surfaces are compared by identity, never by value: two identical spheres
/// at the same spot are still different surfaces.
#[derive(Debug, Clone)]
pub struct Surface {
    shape: Shape,
    material: Material,
}

impl Surface {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Check if `other` is this very surface.
    #[inline]
    pub fn is(&self, other: &Surface) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Hittable for Surface {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }

    #[inline]
    fn surface_properties(&self, point: Vec3, direction: Vec3, hit: &Hit) -> SurfaceProperties {
        self.shape.surface_properties(point, direction, hit)
    }
}
