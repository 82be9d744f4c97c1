//! Sphere primitive for ray tracing.

use pyrite_core::SphereDesc;
use pyrite_math::{Interval, Ray, Vec3};

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};

/// A sphere primitive.
///
/// The radius is signed: a negative radius keeps the same surface but flips
/// the outward normal, which models the inner wall of a hollow glass shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along `ray` to the nearest intersection inside `ray_t`.
    ///
    /// Solves `a t^2 + b t + c = 0` with `a = d.d`, `b = 2 oc.d`,
    /// `c = oc.oc - r^2`. Returns `None` on a miss or when neither root
    /// lies strictly inside the window.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range; the far root is
        // needed when the ray starts inside the sphere
        let root = (-half_b - sqrtd) / a;
        if ray_t.surrounds(root) {
            return Some(root);
        }
        let root = (-half_b + sqrtd) / a;
        ray_t.surrounds(root).then_some(root)
    }

    /// Outward unit normal at a surface point.
    #[inline]
    pub fn outward_normal(&self, p: Vec3) -> Vec3 {
        (p - self.center) / self.radius
    }
}

impl From<&SphereDesc> for Sphere {
    fn from(desc: &SphereDesc) -> Self {
        Sphere::new(desc.center, desc.radius, desc.material.into())
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = self.intersect(ray, ray_t)?;
        let p = ray.at(t);

        Some(HitRecord {
            p,
            normal: self.outward_normal(p),
            t,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::hit_window;

    fn gray() -> Material {
        Material::Diffuse {
            albedo: Vec3::new(0.5, 0.5, 0.5),
        }
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, hit_window()).unwrap();
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_distance_towards_center() {
        let center = Vec3::new(3.0, -2.0, -7.0);
        let sphere = Sphere::new(center, 1.25, gray());
        let origin = Vec3::new(-1.0, 1.0, 2.0);
        let ray = Ray::new(origin, center - origin);

        let t = sphere.intersect(&ray, hit_window()).unwrap();
        let expected = (origin - center).length() - 1.25;
        assert!((t - expected).abs() < 1e-4, "t = {t}, expected = {expected}");
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(sphere.intersect(&ray, hit_window()), None);

        // Ray passing beside it
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, hit_window()).is_none());
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, gray());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray, hit_window()).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_epsilon_rejects_self_hit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray());
        // Starting on the surface and heading outward
        let ray = Ray::new(Vec3::X, Vec3::X);
        assert_eq!(sphere.intersect(&ray, hit_window()), None);
    }

    #[test]
    fn test_window_max_excludes_far_hits() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, gray());
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(sphere.intersect(&ray, hit_window().with_max(5.0)), None);
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let shell = Sphere::new(Vec3::new(0.0, 0.0, -1.0), -0.5, gray());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = shell.hit(&ray, hit_window()).unwrap();
        assert!((rec.t - 0.5).abs() < 0.001);
        // Points into the sphere instead of back at the camera
        assert!((rec.normal - (-Vec3::Z)).length() < 1e-6);
    }
}
