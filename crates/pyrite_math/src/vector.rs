//! Vector geometry and sampling helpers.
//!
//! Reflection and refraction follow the usual ray tracing conventions: `n` is
//! a unit normal and incident directions point *towards* the surface.

use crate::Vec3;
use rand::Rng;

/// Reflect a vector about a normal.
///
/// `v - 2 (v . n) n`
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface using Snell's law.
///
/// `eta_ratio` is the ratio of refractive indices (incident over transmitted).
/// The perpendicular part is scaled by `eta_ratio`; the parallel part is
/// rebuilt so the result stays unit length.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    // Radicand can dip below zero from rounding
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).max(0.0).sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Generate a random unit vector uniformly distributed on the unit sphere.
///
/// Rejection-samples a point inside the unit ball and projects it onto the
/// surface. Normalizing a raw cube sample would bias towards the corners.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if p.length_squared() < 1.0 {
            return p.normalize();
        }
    }
}
