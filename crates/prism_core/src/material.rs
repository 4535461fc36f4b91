//! Phong-style surface material.
//!
//! Every surface in a Prism scene carries one of these. The shader branches
//! on [`MaterialKind`] and reads the remaining coefficients directly.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1, unclamped)
pub type Color = Vec3;

/// How the shader treats a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Diffuse + specular direct lighting only.
    #[default]
    DiffuseGlossy,
    /// Fresnel-weighted reflection and refraction, blended with direct lighting.
    ReflectiveRefractive,
    /// Shaded like `DiffuseGlossy`.
    Reflective,
}

/// Material coefficients attached to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub kind: MaterialKind,

    /// Diffuse reflectance
    pub kd: f32,

    /// Specular reflectance
    pub ks: f32,

    pub diffuse_color: Color,

    /// Emitted color. Carried with the surface but not used by the shader.
    pub emission_color: Color,

    /// Phong shininess exponent
    pub specular_exponent: f32,

    /// Index of refraction. Must be > 0; not checked.
    pub ior: f32,

    /// Opacity (0 = fully transparent, 1 = opaque)
    pub alpha: f32,

    /// Weight of the reflected/refracted color against local lighting.
    /// Values >= 1 make the surface a pure mirror.
    pub reflection: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::DiffuseGlossy,
            kd: 0.8,
            ks: 0.2,
            diffuse_color: Color::splat(0.2),
            emission_color: Color::ZERO,
            specular_exponent: 25.0,
            ior: 1.3,
            alpha: 1.0,
            reflection: 0.0,
        }
    }
}

impl Material {
    /// Create a default material of the given kind.
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a diffuse/glossy material with the given color.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: MaterialKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_diffuse_color(mut self, color: Color) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Set the diffuse and specular coefficients.
    pub fn with_phong(mut self, kd: f32, ks: f32, specular_exponent: f32) -> Self {
        self.kd = kd;
        self.ks = ks;
        self.specular_exponent = specular_exponent;
        self
    }

    pub fn with_ior(mut self, ior: f32) -> Self {
        self.ior = ior;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = reflection;
        self
    }

    /// Diffuse color at a surface coordinate.
    ///
    /// Constant per surface; `st` is accepted so textured lookups can slot
    /// in without changing callers.
    pub fn diffuse_at(&self, _st: Vec3) -> Color {
        self.diffuse_color
    }

    /// Check if this material lets light through.
    pub fn is_transparent(&self) -> bool {
        self.alpha < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let mat = Material::default();
        assert_eq!(mat.kind, MaterialKind::DiffuseGlossy);
        assert_eq!(mat.kd, 0.8);
        assert_eq!(mat.ks, 0.2);
        assert_eq!(mat.diffuse_color, Color::splat(0.2));
        assert_eq!(mat.specular_exponent, 25.0);
        assert_eq!(mat.ior, 1.3);
        assert_eq!(mat.alpha, 1.0);
        assert_eq!(mat.reflection, 0.0);
        assert!(!mat.is_transparent());
    }

    #[test]
    fn test_material_builders() {
        let mat = Material::new(MaterialKind::ReflectiveRefractive)
            .with_ior(10.0)
            .with_reflection(0.9)
            .with_alpha(0.9);

        assert_eq!(mat.kind, MaterialKind::ReflectiveRefractive);
        assert_eq!(mat.ior, 10.0);
        assert_eq!(mat.reflection, 0.9);
        assert!(mat.is_transparent());
    }

    #[test]
    fn test_diffuse_at_is_constant() {
        let mat = Material::diffuse(Color::new(0.8, 0.6, 0.2));
        assert_eq!(mat.diffuse_at(Vec3::ZERO), mat.diffuse_color);
        assert_eq!(mat.diffuse_at(Vec3::new(0.7, 0.3, 0.0)), mat.diffuse_color);
    }

    #[test]
    fn test_material_json_partial() {
        let mat: Material = serde_json::from_str(r#"{ "kind": "Reflective", "alpha": 0.5 }"#).unwrap();
        assert_eq!(mat.kind, MaterialKind::Reflective);
        assert_eq!(mat.alpha, 0.5);
        assert_eq!(mat.kd, 0.8);
    }
}
