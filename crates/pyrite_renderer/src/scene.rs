//! The runtime scene: an ordered list of spheres.

use pyrite_core::SceneDescription;
use pyrite_math::{Interval, Ray};

use crate::{HitRecord, Hittable, Sphere};

/// An ordered, read-only collection of spheres.
///
/// There is no spatial index; every ray is tested against every sphere.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the renderable scene from its description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let spheres: Vec<Sphere> = desc.spheres.iter().map(Sphere::from).collect();
        log::debug!("Built scene with {} spheres", spheres.len());
        Self { spheres }
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<(f32, &Sphere)> = None;

        for sphere in &self.spheres {
            let window = closest.map_or(ray_t, |(t, _)| ray_t.with_max(t));
            if let Some(t) = sphere.intersect(ray, window) {
                closest = Some((t, sphere));
            }
        }

        // Shading data is only computed for the winner
        let (t, sphere) = closest?;
        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: sphere.outward_normal(p),
            t,
            material: sphere.material(),
        })
    }
}
