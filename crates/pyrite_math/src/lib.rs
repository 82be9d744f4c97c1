// Re-export glam for convenience
pub use glam::*;

// Pyrite math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{random_unit_vector, reflect, refract};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        // Elementwise product is how colors attenuate
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize_is_unit_length() {
        let directions = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(1e4, -3e3, 7e2),
            Vec3::new(0.0, 0.0, -1.0),
        ];

        for d in directions {
            assert!((d.normalize().length() - 1.0).abs() < 1e-5, "d = {d:?}");
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        // Callers guarantee nonzero directions; nothing guards this
        assert!(Vec3::ZERO.normalize().is_nan());
    }
}
