use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::{render, Camera};

mod cli;
mod logger;
mod scene;

use cli::Args;
use logger::init_logger;
use scene::{build_demo_scene, demo_camera};

/// Start from the demo camera (or a JSON file) and apply CLI overrides.
fn resolve_camera(args: &Args) -> Result<Camera> {
    let mut camera = match &args.config {
        Some(path) => Camera::load(path)
            .with_context(|| format!("Failed to load camera settings from {}", path.display()))?,
        None => demo_camera(),
    };

    if let Some(width) = args.width {
        camera.width = width;
    }
    if let Some(height) = args.height {
        camera.height = height;
    }
    if let Some(fov) = args.fov {
        camera.fov = fov;
    }
    if let Some(max_recursions) = args.max_recursions {
        camera.max_recursions = max_recursions;
    }

    camera.validate().context("Invalid camera settings")?;
    Ok(camera)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let camera = resolve_camera(&args)?;
    let scene = build_demo_scene().context("Failed to build demo scene")?;
    log::info!(
        "Scene ready: {} surfaces, {} lights",
        scene.surfaces().len(),
        scene.lights().len()
    );

    let image = render(&scene, &camera);

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_camera_overrides_demo() {
        let args = Args::parse_from(["prism", "--width", "64", "--height", "32", "--fov", "60"]);
        let camera = resolve_camera(&args).unwrap();

        assert_eq!(camera.width, 64);
        assert_eq!(camera.height, 32);
        assert_eq!(camera.fov, 60.0);
        // Untouched settings come from the demo camera
        assert_eq!(camera.max_recursions, demo_camera().max_recursions);
        assert_eq!(camera.background, demo_camera().background);
    }

    #[test]
    fn test_resolve_camera_rejects_invalid_override() {
        let args = Args::parse_from(["prism", "--width", "0"]);
        assert!(resolve_camera(&args).is_err());
    }

    #[test]
    fn test_resolve_camera_missing_config_file() {
        let args = Args::parse_from(["prism", "--config", "/nonexistent/prism-camera.json"]);
        assert!(resolve_camera(&args).is_err());
    }
}
