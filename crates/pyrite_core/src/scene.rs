//! Scene description types for Pyrite.
//!
//! This module defines the renderer-agnostic, serializable description of a
//! render: the camera, the sampling settings and the ordered list of spheres.
//! The renderer builds its own runtime scene from it.

use pyrite_math::Vec3;
use serde::{Deserialize, Serialize};

/// Surface material of a sphere, tagged by `kind` in JSON.
///
/// Each kind carries its own explicitly named parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// Lambertian surface with the given albedo (RGB, 0-1)
    Diffuse { albedo: Vec3 },

    /// Mirror-like surface. `fuzz` = 0 is a perfect mirror.
    Metal { albedo: Vec3, fuzz: f32 },

    /// Clear refractive material (1.0 = air, 1.5 = glass)
    Dielectric { ior: f32 },

    /// Light source; emits `emission` and never scatters.
    Emissive { emission: Vec3 },
}

impl MaterialDesc {
    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        matches!(self, MaterialDesc::Emissive { emission } if emission.max_element() > 0.0)
    }
}

/// A sphere placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,

    /// Signed radius; negative flips the normal (hollow shells)
    pub radius: f32,

    pub material: MaterialDesc,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: MaterialDesc) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// What a ray sees when it leaves the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// White at the horizon blending to sky blue overhead
    #[default]
    Sky,

    /// Constant color
    Solid(Vec3),
}

/// Pinhole camera placement and output resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    /// Vertical field of view in degrees
    pub vfov: f32,

    pub width: u32,
    pub height: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            width: 800,
            height: 600,
        }
    }
}

impl CameraSettings {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Largest accepted image width or height in pixels.
pub const MAX_RESOLUTION: u32 = 32_768;

/// Sampling and integration settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Samples per pixel for anti-aliasing and noise reduction
    pub samples_per_pixel: u32,

    /// Maximum ray bounce depth
    pub max_depth: u32,

    /// Base seed for the per-bucket random streams
    pub seed: u64,

    pub background: Background,

    /// Tile edge length in pixels for the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 50,
            max_depth: 10,
            seed: 0,
            background: Background::Sky,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Everything needed to render one image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraSettings,

    #[serde(default)]
    pub render: RenderSettings,

    /// Ordered spheres; order only breaks exact distance ties
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with default camera and render settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: SphereDesc) -> usize {
        let index = self.spheres.len();
        self.spheres.push(sphere);
        index
    }

    /// Builder form of [`add_sphere`](Self::add_sphere).
    pub fn with_sphere(mut self, sphere: SphereDesc) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Number of spheres that emit light.
    pub fn emitter_count(&self) -> usize {
        self.spheres
            .iter()
            .filter(|s| s.material.is_emissive())
            .count()
    }

    /// The built-in demo scene.
    ///
    /// A large ground sphere, a red diffuse ball, a silver mirror, a fuzzy
    /// gold ball, a hollow glass bubble and a small warm light.
    pub fn reference() -> Self {
        let diffuse = |r, g, b| MaterialDesc::Diffuse {
            albedo: Vec3::new(r, g, b),
        };
        let glass = MaterialDesc::Dielectric { ior: 1.5 };

        Self::new()
            .with_sphere(SphereDesc::new(
                Vec3::new(0.0, -101.0, -5.0),
                100.0,
                diffuse(0.5, 0.5, 0.5),
            ))
            .with_sphere(SphereDesc::new(
                Vec3::new(0.0, 2.0, -5.0),
                1.0,
                diffuse(0.8, 0.2, 0.2),
            ))
            .with_sphere(SphereDesc::new(
                Vec3::new(-2.0, 0.0, -4.0),
                1.0,
                MaterialDesc::Metal {
                    albedo: Vec3::new(0.8, 0.8, 0.8),
                    fuzz: 0.0,
                },
            ))
            .with_sphere(SphereDesc::new(
                Vec3::new(2.0, 0.0, -6.0),
                1.0,
                MaterialDesc::Metal {
                    albedo: Vec3::new(0.8, 0.6, 0.2),
                    fuzz: 0.8,
                },
            ))
            // Hollow bubble: the inner negative radius turns its normals inward
            .with_sphere(SphereDesc::new(Vec3::new(0.0, -0.35, -3.0), 0.6, glass))
            .with_sphere(SphereDesc::new(Vec3::new(0.0, -0.35, -3.0), -0.5, glass))
            .with_sphere(SphereDesc::new(
                Vec3::new(1.2, -0.7, -3.2),
                0.25,
                MaterialDesc::Emissive {
                    emission: Vec3::new(4.0, 3.2, 2.4),
                },
            ))
    }
}
