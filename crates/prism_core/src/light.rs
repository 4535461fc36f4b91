use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    /// Per-channel magnitude
    pub intensity: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a white light.
    pub fn new(position: Vec3, intensity: Vec3) -> Self {
        Self {
            position,
            intensity,
            color: Color::ONE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_defaults_to_white() {
        let light = Light::new(Vec3::new(0.0, 70.0, 0.0), Vec3::splat(0.8));
        assert_eq!(light.color, Color::ONE);

        let tinted = light.with_color(Color::new(0.8, 0.5, 0.9));
        assert_eq!(tinted.color, Color::new(0.8, 0.5, 0.9));
        assert_eq!(tinted.intensity, Vec3::splat(0.8));
    }
}
