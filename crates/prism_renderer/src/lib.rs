//! Prism Renderer - Recursive Whitted-style CPU ray tracing
//!
//! Direct Phong lighting with partial shadows from see-through occluders,
//! plus Fresnel-weighted reflection and refraction traced to a fixed depth.
//! Surfaces are scanned linearly; there is no acceleration structure.

mod hittable;
mod mesh;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod trace;

pub use hittable::{Hit, Hittable, Shape, Surface, SurfaceProperties};
pub use mesh::ray_triangle_intersect;
pub use renderer::{clamp_01, color_to_rgb, render, ImageBuffer};
pub use scene::Scene;
pub use shading::{cast_ray, SENTINEL_COLOR};
pub use sphere::Sphere;
pub use trace::{trace, Intersection};

/// Re-export scene description types from prism_core
pub use prism_core::{Camera, Color, Light, Material, MaterialKind, MeshError, TriangleMesh};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Ray, Vec2, Vec3};
