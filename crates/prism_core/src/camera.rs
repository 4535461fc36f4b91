//! Camera and render settings.
//!
//! A passive pinhole camera sitting at the world origin and looking down -Z.
//! Besides the image resolution and field of view it carries the knobs the
//! shader reads: recursion limit, background color and secondary-ray bias.

use std::path::Path;

use prism_math::{deg_to_rad, normalize, Ray, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Color;

/// Errors from loading or validating camera settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid camera JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image resolution must be non-zero, got {width}x{height}")]
    Resolution { width: u32, height: u32 },

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("Bias must be positive and finite, got {0}")]
    Bias(f32),
}

/// Camera configuration consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub width: u32,
    pub height: u32,

    /// Field of view in degrees
    pub fov: f32,

    /// Deepest recursion level that is still shaded
    pub max_recursions: u32,

    /// Color returned for rays that escape the scene
    pub background: Color,

    /// Offset applied to secondary-ray origins along the surface normal
    pub bias: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            fov: 90.0,
            max_recursions: 4,
            background: Color::ZERO,
            bias: 0.001,
        }
    }
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set field of view (degrees).
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_max_recursions(mut self, max_recursions: u32) -> Self {
        self.max_recursions = max_recursions;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let camera: Camera = serde_json::from_str(json)?;
        camera.validate()?;
        Ok(camera)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading camera settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the settings the pixel loop and shader rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Resolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov));
        }
        if !(self.bias > 0.0 && self.bias.is_finite()) {
            return Err(ConfigError::Bias(self.bias));
        }
        Ok(())
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Unit direction through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_direction(&self, i: u32, j: u32) -> Vec3 {
        let scale = deg_to_rad(self.fov * 0.5).tan();
        let x = (2.0 * (i as f32 + 0.5) / self.width as f32 - 1.0) * self.aspect_ratio() * scale;
        let y = (1.0 - 2.0 * (j as f32 + 0.5) / self.height as f32) * scale;
        normalize(Vec3::new(x, y, -1.0))
    }

    /// Primary ray from the eye through pixel (i, j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(Vec3::ZERO, self.primary_direction(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::new();
        assert_eq!(camera.width, 500);
        assert_eq!(camera.height, 500);
        assert_eq!(camera.fov, 90.0);
        assert_eq!(camera.max_recursions, 4);
        assert_eq!(camera.background, Color::ZERO);
        assert_eq!(camera.bias, 0.001);
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn test_camera_builders() {
        let camera = Camera::new()
            .with_resolution(2048, 1024)
            .with_fov(45.0)
            .with_max_recursions(5)
            .with_background(Color::new(0.1, 0.4, 0.6))
            .with_bias(0.01);

        assert_eq!(camera.aspect_ratio(), 2.0);
        assert_eq!(camera.max_recursions, 5);
        assert_eq!(camera.background, Color::new(0.1, 0.4, 0.6));
        assert_eq!(camera.bias, 0.01);
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert!(matches!(
            Camera::new().with_resolution(0, 10).validate(),
            Err(ConfigError::Resolution { .. })
        ));
        assert!(matches!(
            Camera::new().with_fov(180.0).validate(),
            Err(ConfigError::FieldOfView(_))
        ));
        assert!(matches!(
            Camera::new().with_bias(0.0).validate(),
            Err(ConfigError::Bias(_))
        ));
    }

    #[test]
    fn test_camera_from_json() {
        let camera = Camera::from_json_str(r#"{ "fov": 45.0, "max_recursions": 5 }"#).unwrap();
        assert_eq!(camera.fov, 45.0);
        assert_eq!(camera.max_recursions, 5);
        // Untouched fields keep defaults
        assert_eq!(camera.width, 500);
        assert_eq!(camera.bias, 0.001);
    }

    #[test]
    fn test_camera_from_json_rejects_invalid() {
        assert!(matches!(
            Camera::from_json_str(r#"{ "width": 0 }"#),
            Err(ConfigError::Resolution { .. })
        ));
        assert!(matches!(
            Camera::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_center_ray_points_down_negative_z() {
        let camera = Camera::new().with_resolution(101, 101);
        let dir = camera.primary_direction(50, 50);
        assert!((dir - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::new().with_resolution(100, 100);

        let top_left = camera.primary_ray(0, 0);
        assert_eq!(top_left.origin, Vec3::ZERO);
        assert!(top_left.direction.x < 0.0);
        assert!(top_left.direction.y > 0.0);
        assert!((top_left.direction.length() - 1.0).abs() < 1e-5);

        let bottom_right = camera.primary_direction(99, 99);
        assert!(bottom_right.x > 0.0);
        assert!(bottom_right.y < 0.0);
    }
}
