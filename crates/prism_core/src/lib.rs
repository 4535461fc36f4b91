//! Prism Core - Scene description types for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Materials and lights**: `Material`, `MaterialKind`, `Light`
//! - **Geometry buffers**: `TriangleMesh` with validated index data
//! - **Camera settings**: `Camera`, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{Camera, Material, MaterialKind};
//!
//! let camera = Camera::load("camera.json")?;
//! let glass = Material::new(MaterialKind::ReflectiveRefractive).with_ior(1.5);
//! ```

pub mod camera;
pub mod light;
pub mod material;
pub mod mesh;

// Re-export commonly used types
pub use camera::{Camera, ConfigError};
pub use light::Light;
pub use material::{Color, Material, MaterialKind};
pub use mesh::{MeshError, TriangleMesh};
