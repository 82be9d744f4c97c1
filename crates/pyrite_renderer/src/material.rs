//! Surface materials and how they scatter light.

use pyrite_core::MaterialDesc;
use pyrite_math::{random_unit_vector, reflect, refract, Ray, Vec3};
use rand::Rng;

use crate::hittable::HitRecord;

/// Color type alias (linear RGB, 0 and up)
pub type Color = Vec3;

/// The closed set of materials a sphere can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian (diffuse) surface.
    Diffuse { albedo: Color },

    /// Metal (specular) surface.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror
    Metal { albedo: Color, fuzz: f32 },

    /// Dielectric (glass) with index of refraction `ior`.
    Dielectric { ior: f32 },

    /// Light emitter. Never scatters.
    Emissive { emission: Color },
}

impl Material {
    /// Scatter an incoming ray.
    ///
    /// Returns Some((attenuation, scattered_ray)) if the ray scatters,
    /// or None if the ray is absorbed.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        match *self {
            Material::Diffuse { albedo } => {
                // Zero-length sums are not guarded; the resulting NaN stays in this sample
                let scatter_direction = rec.normal + random_unit_vector(rng);
                Some((albedo, Ray::new(rec.p, scatter_direction)))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction(), rec.normal);
                let scattered_dir = reflected + fuzz * random_unit_vector(rng);

                // Fuzz can push the bounce below the surface: absorbed
                if scattered_dir.dot(rec.normal) > 0.0 {
                    Some((albedo, Ray::new(rec.p, scattered_dir)))
                } else {
                    None
                }
            }
            Material::Dielectric { ior } => {
                let (front_face, normal) = rec.face_normal(ray_in);
                let refraction_ratio = if front_face { 1.0 / ior } else { ior };

                let unit_direction = ray_in.direction();
                let cos_theta = (-unit_direction).dot(normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Check for total internal reflection
                let cannot_refract = refraction_ratio * sin_theta > 1.0;

                let direction = if cannot_refract
                    || reflectance(cos_theta, refraction_ratio) > rng.gen::<f32>()
                {
                    reflect(unit_direction, normal)
                } else {
                    refract(unit_direction, normal, refraction_ratio)
                };

                // Clear glass: no attenuation
                Some((Color::ONE, Ray::new(rec.p, direction)))
            }
            Material::Emissive { .. } => None,
        }
    }

    /// Get emitted light from this material.
    ///
    /// Only emitters return something other than black.
    pub fn emitted(&self) -> Color {
        match *self {
            Material::Emissive { emission } => emission,
            _ => Color::ZERO,
        }
    }
}

impl From<MaterialDesc> for Material {
    fn from(desc: MaterialDesc) -> Self {
        match desc {
            MaterialDesc::Diffuse { albedo } => Material::Diffuse { albedo },
            MaterialDesc::Metal { albedo, fuzz } => Material::Metal { albedo, fuzz },
            MaterialDesc::Dielectric { ior } => Material::Dielectric { ior },
            MaterialDesc::Emissive { emission } => Material::Emissive { emission },
        }
    }
}

/// Schlick's approximation for reflectance
pub fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
