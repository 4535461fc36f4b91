//! Renderable scene: surfaces plus point lights.

use crate::{Light, Material, Shape, Surface};

/// An ordered collection of surfaces and lights.
///
/// Built once before rendering and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface built from a shape and its material.
    pub fn add_surface(&mut self, shape: impl Into<Shape>, material: Material) {
        log::debug!("Adding surface #{} ({:?})", self.surfaces.len(), material.kind);
        self.surfaces.push(Surface::new(shape, material));
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
