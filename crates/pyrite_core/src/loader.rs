//! Scene file loading and validation.
//!
//! Scenes are stored as JSON documents mirroring [`SceneDescription`].
//! Everything the tracer assumes about its inputs (nonzero radii, positive
//! sample counts, a well-formed camera basis) is checked here, once, before
//! a render starts.

use std::fs;
use std::path::Path;

use pyrite_math::{Interval, Vec3};
use thiserror::Error;

use crate::scene::{Background, MaterialDesc, SceneDescription, MAX_RESOLUTION};

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidRender(String),

    #[error("Invalid sphere {index}: {message}")]
    InvalidSphere { index: usize, message: String },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded scene {} ({} spheres, {} emitters)",
        path.display(),
        scene.sphere_count(),
        scene.emitter_count()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    validate(&scene)?;
    Ok(scene)
}

/// Check a scene for values the renderer cannot handle.
pub fn validate(scene: &SceneDescription) -> SceneResult<()> {
    let camera = &scene.camera;
    if camera.width == 0 || camera.height == 0 {
        return Err(SceneError::InvalidCamera(format!(
            "resolution must be nonzero, got {}x{}",
            camera.width, camera.height
        )));
    }
    if camera.width > MAX_RESOLUTION || camera.height > MAX_RESOLUTION {
        return Err(SceneError::InvalidCamera(format!(
            "resolution {}x{} exceeds {} pixels per side",
            camera.width, camera.height, MAX_RESOLUTION
        )));
    }
    if !Interval::new(0.0, 180.0).surrounds(camera.vfov) {
        return Err(SceneError::InvalidCamera(format!(
            "vfov must be in (0, 180) degrees, got {}",
            camera.vfov
        )));
    }
    let view = camera.look_from - camera.look_at;
    if view.length_squared() == 0.0 {
        return Err(SceneError::InvalidCamera(
            "look_from and look_at coincide".to_string(),
        ));
    }
    if camera.vup.cross(view).length_squared() < 1e-12 {
        return Err(SceneError::InvalidCamera(
            "vup is parallel to the view direction".to_string(),
        ));
    }

    let render = &scene.render;
    if render.samples_per_pixel == 0 {
        return Err(SceneError::InvalidRender(
            "samples_per_pixel must be at least 1".to_string(),
        ));
    }
    if render.max_depth == 0 {
        return Err(SceneError::InvalidRender(
            "max_depth must be at least 1".to_string(),
        ));
    }
    if render.bucket_size == 0 {
        return Err(SceneError::InvalidRender(
            "bucket_size must be at least 1".to_string(),
        ));
    }
    if let Background::Solid(color) = render.background {
        if color.min_element() < 0.0 || !color.is_finite() {
            return Err(SceneError::InvalidRender(format!(
                "background color must be finite and non-negative, got {color}"
            )));
        }
    }

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let invalid = |message: String| SceneError::InvalidSphere { index, message };

        if !sphere.center.is_finite() {
            return Err(invalid(format!("center is not finite: {}", sphere.center)));
        }
        if sphere.radius == 0.0 || !sphere.radius.is_finite() {
            return Err(invalid(format!(
                "radius must be finite and nonzero, got {}",
                sphere.radius
            )));
        }

        match sphere.material {
            MaterialDesc::Diffuse { albedo } | MaterialDesc::Metal { albedo, .. }
                if albedo.min_element() < 0.0 =>
            {
                return Err(invalid(format!("albedo must be non-negative, got {albedo}")));
            }
            MaterialDesc::Metal { fuzz, .. } if fuzz < 0.0 || !fuzz.is_finite() => {
                return Err(invalid(format!("fuzz must be non-negative, got {fuzz}")));
            }
            MaterialDesc::Dielectric { ior } if ior <= 0.0 || !ior.is_finite() => {
                return Err(invalid(format!("ior must be positive, got {ior}")));
            }
            MaterialDesc::Emissive { emission } if emission.min_element() < 0.0 => {
                return Err(invalid(format!(
                    "emission must be non-negative, got {emission}"
                )));
            }
            _ => {}
        }
    }

    if scene.emitter_count() == 0 && render.background == Background::Solid(Vec3::ZERO) {
        log::warn!("Scene has no emitters and a black background, the image will be black");
    }

    Ok(())
}
