//! Pixel loop and image buffer.
//!
//! One primary ray per pixel, traced in row-major order from the top-left
//! corner. No sampling, no gamma: colors are clamped to [0, 1] on output.

use std::path::Path;
use std::time::Instant;

use crate::{cast_ray, Camera, Color, Scene};

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

/// Row-major offset of (x, y), computed in `usize` so large images don't wrap.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_index(width, 0, height)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_index(self.width, x, y)] = color;
    }

    /// Convert to RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the image to disk. The format follows the file extension
    /// (`.png`, `.ppm`).
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y)))
        });
        img.save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; every pixel gets exactly one primary ray at depth 0.
pub fn render(scene: &Scene, camera: &Camera) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.width, camera.height);
    if scene.is_empty() {
        log::warn!("Scene has no surfaces, every pixel will be background");
    }

    log::info!(
        "Rendering {}x{} ({} surfaces, {} lights, max recursion {})",
        camera.width,
        camera.height,
        scene.surfaces().len(),
        scene.lights().len(),
        camera.max_recursions
    );
    let start = Instant::now();

    for y in 0..camera.height {
        for x in 0..camera.width {
            let ray = camera.primary_ray(x, y);
            let color = cast_ray(&ray, scene, camera, 0, None);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Material, Sphere, Vec3};

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(0.0, 1.0, 0.5)), [0, 255, 127]);
        assert_eq!(color_to_rgb(Color::new(-2.0, 3.0, 1.0)), [0, 255, 255]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_index_does_not_wrap() {
        // 70000 * 70000 exceeds u32::MAX
        assert_eq!(pixel_index(70_000, 0, 70_000), 4_900_000_000);
        assert_eq!(pixel_index(70_000, 69_999, 69_999), 4_899_999_999);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);
        assert_eq!(image.get(3, 2), Color::ZERO);

        image.set(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.pixels[11], Color::ONE);

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[33..], &[255, 255, 255]);
    }

    #[test]
    fn test_render_small_scene() {
        let mut scene = Scene::new();
        scene.add_surface(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), Material::diffuse(Color::ONE));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE));

        let background = Color::new(0.1, 0.4, 0.6);
        let camera = Camera::new()
            .with_resolution(9, 9)
            .with_fov(45.0)
            .with_background(background);

        let image = render(&scene, &camera);

        // Corner escapes, center hits the sphere
        assert_eq!(image.get(0, 0), background);
        assert_ne!(image.get(4, 4), background);
    }
}
