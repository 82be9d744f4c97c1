//! Parallel rendering over image tiles.
//!
//! Each bucket is one rayon work item with its own random stream derived
//! from the render seed and the bucket index, so the image is identical no
//! matter how buckets land on threads.

use std::sync::atomic::{AtomicUsize, Ordering};

use pyrite_core::RenderSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, Color, Hittable, ImageBuffer};

/// Image tile; `(x, y)` is its top-left pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in render order, also the random stream id
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Random stream for this bucket.
    pub fn rng(&self, seed: u64) -> StdRng {
        // Golden-ratio stride keeps neighbouring indices far apart
        StdRng::seed_from_u64(seed ^ (self.index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Tile a `width` x `height` image, center tiles first.
///
/// Edge tiles are clipped to the image. Indices are renumbered after
/// sorting.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size as usize;
    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step)
        .flat_map(|y| {
            (0..width).step_by(step).map(move |x| {
                Bucket::new(x, y, bucket_size.min(width - x), bucket_size.min(height - y), 0)
            })
        })
        .collect();

    sort_spiral(&mut buckets, width, height);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Order buckets by the distance of their centers to the image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable sort: equal distances keep grid order
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Render one bucket with its own random stream; pixels come back
/// row-major within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
) -> Vec<Color> {
    let mut rng = bucket.rng(settings.seed);
    let rows = bucket.y..bucket.y + bucket.height;
    let cols = bucket.x..bucket.x + bucket.width;

    rows.flat_map(|y| cols.clone().map(move |x| (x, y)))
        .map(|(x, y)| render_pixel(camera, world, x, y, settings, &mut rng))
        .collect()
}

/// Rendered pixels of one bucket, row-major.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into place.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let b = &self.bucket;
        for (row, chunk) in self.pixels.chunks(b.width as usize).enumerate() {
            let start = image.index(b.x, b.y + row as u32);
            image.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }
}

/// Render the whole frame on the rayon thread pool.
///
/// Deterministic for a given `settings.seed`, independent of the pool size.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
) -> ImageBuffer {
    let buckets = generate_buckets(camera.image_width, camera.image_height, settings.bucket_size);
    let total = buckets.len();
    let report_every = (total / 10).max(1);
    let done = AtomicUsize::new(0);

    log::debug!(
        "Rendering {} buckets of {}px on {} threads",
        total,
        settings.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, world, settings);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            if finished % report_every == 0 || finished == total {
                log::info!("Buckets {}/{}", finished, total);
            }
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        result.write_into(&mut image);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Scene, Sphere};
    use pyrite_core::CameraSettings;
    use pyrite_math::Vec3;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_write_into() {
        let mut image = ImageBuffer::new(4, 4);
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let pixels = vec![Color::X, Color::Y, Color::Z, Color::ONE];
        BucketResult::new(bucket, pixels).write_into(&mut image);

        assert_eq!(image.get(2, 1), Color::X);
        assert_eq!(image.get(3, 1), Color::Y);
        assert_eq!(image.get(2, 2), Color::Z);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.get(1, 1), Color::ZERO);
    }

    #[test]
    fn test_parallel_render_is_deterministic() {
        let scene = Scene::new().with(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Material::Diffuse {
                albedo: Color::splat(0.5),
            },
        ));
        let camera = Camera::from_settings(&CameraSettings {
            width: 24,
            height: 18,
            ..Default::default()
        });
        let settings = RenderSettings {
            samples_per_pixel: 2,
            max_depth: 4,
            seed: 17,
            bucket_size: 8,
            ..Default::default()
        };

        let a = render_parallel(&camera, &scene, &settings);
        let b = render_parallel(&camera, &scene, &settings);
        assert_eq!(a, b);

        // Every pixel was written
        assert!(a.pixels.iter().all(|p| p.length() > 0.0));

        let reseeded = RenderSettings { seed: 18, ..settings };
        assert_ne!(render_parallel(&camera, &scene, &reseeded), a);
    }
}
