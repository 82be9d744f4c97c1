//! Pinhole camera.
//!
//! The image plane sits one unit in front of `look_from`. Row 0 is the top
//! of the image and each sample lands uniformly inside its pixel.

use pyrite_core::CameraSettings;
use pyrite_math::{Ray, Vec3};
use rand::Rng;

/// Pinhole camera generating jittered primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    /// Vertical field of view, degrees
    vfov: f32,

    // Derived by initialize()
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Camera at the origin looking down -Z, 90 degree vfov, 800x600.
    ///
    /// Call [`Camera::initialize`] after changing any setting.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        }
    }

    /// Ready-to-use camera for a scene's camera block.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self::new()
            .with_resolution(settings.width, settings.height)
            .with_position(settings.look_from, settings.look_at, settings.vup)
            .with_fov(settings.vfov);
        camera.initialize();
        camera
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Recompute the view basis and the pixel grid.
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        // Right-handed basis, w points backwards out of the screen
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        let half_height = (self.vfov.to_radians() / 2.0).tan();
        let half_width = half_height * self.aspect_ratio();

        // Full image-plane edges; v runs downwards so rows grow with j
        let across = 2.0 * half_width * self.u;
        let down = -2.0 * half_height * self.v;

        self.pixel_delta_u = across / self.image_width as f32;
        self.pixel_delta_v = down / self.image_height as f32;

        let top_left = self.center - self.w - 0.5 * (across + down);
        self.pixel00_loc = top_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Primary ray through a random point of pixel (i, j); `j` counts rows
    /// from the top.
    pub fn get_ray<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Ray {
        let (dx, dy) = pixel_jitter(rng);
        let target = self.pixel00_loc
            + (i as f32 + dx) * self.pixel_delta_u
            + (j as f32 + dy) * self.pixel_delta_v;

        Ray::new(self.center, target - self.center)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform offset in [-0.5, 0.5) on both axes.
fn pixel_jitter<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    (rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
}
