//! Pyrite Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metal, dielectric
//! and emissive materials.

mod bucket;
mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult};
pub use camera::Camera;
pub use hittable::{hit_window, HitRecord, Hittable, T_MIN};
pub use material::{reflectance, Color, Material};
pub use output::{
    color_to_rgb8, linear_to_gamma, save_image, save_png, save_ppm, write_ppm, OutputError,
    OutputFormat, OutputResult, Rgb8,
};
pub use renderer::{background_color, render, render_pixel, sky_gradient, trace, ImageBuffer};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from pyrite_math
pub use pyrite_math::{Interval, Ray, Vec3};
