/// A closed range of real numbers `[min, max]`.
///
/// Used for the accepted hit distances along a ray and for clamping color
/// channels before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Returns a copy with `max` replaced, used to shrink the hit window.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval::new(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.001, f32::INFINITY);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(-1.0));

        assert!(interval.surrounds(0.0011));
        assert!(interval.surrounds(1e20));
    }

    #[test]
    fn test_interval_clamp() {
        let unit = Interval::UNIT;

        assert_eq!(unit.clamp(-5.0), 0.0);
        assert_eq!(unit.clamp(0.5), 0.5);
        assert_eq!(unit.clamp(1.0), 1.0);
        assert_eq!(unit.clamp(15.0), 1.0);
    }

    #[test]
    fn test_interval_with_max() {
        let window = Interval::new(0.001, f32::INFINITY).with_max(4.0);

        assert_eq!(window.min, 0.001);
        assert_eq!(window.max, 4.0);
        assert!(!window.surrounds(4.0));
    }
}
