//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a bounce budget
//! - Anti-aliasing via multi-sampling
//! - A single-threaded reference render loop

use pyrite_core::{Background, RenderSettings};
use pyrite_math::Ray;
use rand::Rng;

use crate::{hittable::hit_window, Camera, Color, Hittable};

/// Compute the radiance arriving along a ray.
///
/// This is the core path tracing function. It traces the ray through the
/// scene, bouncing off surfaces and accumulating color, until it escapes,
/// is absorbed, hits a light or runs out of `depth`.
pub fn trace<R: Rng + ?Sized>(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: &Background,
    rng: &mut R,
) -> Color {
    // Bounce budget exhausted: no more light gathered along this path
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, hit_window()) else {
        return background_color(ray, background);
    };

    // Get emission from material (for lights)
    let emission = rec.material.emitted();

    match rec.material.scatter(ray, &rec, rng) {
        Some((attenuation, scattered)) => {
            let scattered_color = trace(&scattered, world, depth - 1, background, rng);
            emission + attenuation * scattered_color
        }
        None => emission,
    }
}

/// Color seen by a ray that leaves the scene.
pub fn background_color(ray: &Ray, background: &Background) -> Color {
    match background {
        Background::Sky => sky_gradient(ray),
        Background::Solid(color) => *color,
    }
}

/// Compute sky gradient background.
///
/// Blends white to sky blue by the ray's vertical direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let a = 0.5 * (ray.direction().y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
///
/// Returns the linear average of `samples_per_pixel` radiance estimates.
pub fn render_pixel<R: Rng + ?Sized>(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut R,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..settings.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += trace(&ray, world, settings.max_depth, &settings.background, rng);
    }

    // Average the samples
    pixel_color / settings.samples_per_pixel as f32
}

/// Linear-space image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
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
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Row-major offset of (x, y), computed in `usize` so large frames do
    /// not wrap.
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Mean linear color over all pixels.
    pub fn mean(&self) -> Color {
        if self.pixels.is_empty() {
            return Color::ZERO;
        }
        self.pixels.iter().copied().sum::<Color>() / self.pixels.len() as f32
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded row-major scan sharing one random stream, so the result
/// depends on the generator and on the pixel visiting order.
pub fn render<R: Rng + ?Sized>(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    rng: &mut R,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let report_every = (camera.image_height / 10).max(1);

    for y in 0..camera.image_height {
        if y % report_every == 0 {
            log::info!("Row {}/{}", y, camera.image_height);
        }
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, settings, rng);
            image.set(x, y, color);
        }
    }

    image
}
