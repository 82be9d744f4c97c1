//! Pyrite Core - Scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDesc`, `MaterialDesc`,
//!   `CameraSettings`, `RenderSettings`
//! - **Scene files**: JSON loading and validation
//!
//! # Example
//!
//! ```ignore
//! use pyrite_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres", scene.sphere_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, validate, SceneError, SceneResult};
pub use scene::{
    Background, CameraSettings, MaterialDesc, RenderSettings, SceneDescription, SphereDesc,
    DEFAULT_BUCKET_SIZE, MAX_RESOLUTION,
};
