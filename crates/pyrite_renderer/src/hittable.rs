//! Hittable trait and HitRecord for ray-object intersection.

use pyrite_math::{Interval, Ray, Vec3};

use crate::Material;

/// Minimum accepted hit distance.
///
/// Bounced rays start exactly on a surface; rounding would otherwise let them
/// hit that same surface again (shadow acne).
pub const T_MIN: f32 = 0.001;

/// The hit window used for every traced ray.
pub fn hit_window() -> Interval {
    Interval::new(T_MIN, f32::INFINITY)
}

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal (unit length; flipped for negative radii)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Orient the normal against the incoming ray.
    ///
    /// Returns `(front_face, normal)`: `front_face` is true when the ray
    /// arrives from the side the outward normal points to.
    pub fn face_normal(&self, ray: &Ray) -> (bool, Vec3) {
        let front_face = ray.direction().dot(self.normal) < 0.0;
        let normal = if front_face { self.normal } else { -self.normal };
        (front_face, normal)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}
