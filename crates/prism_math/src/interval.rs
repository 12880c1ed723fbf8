/// A closed range of `f32` values, used for ray parameter windows and
/// channel clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// An interval from `min` to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
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

    /// Same interval with a tighter upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// The range of an 8-bit color channel.
    pub const CHANNEL: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
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

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
    }

    #[test]
    fn test_from_min_is_open_ended() {
        let interval = Interval::from_min(0.001);
        assert!(interval.surrounds(1e30));
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(f32::INFINITY));
    }

    #[test]
    fn test_with_max() {
        let shadow = Interval::from_min(0.001).with_max(1.0);
        assert_eq!(shadow, Interval::new(0.001, 1.0));
    }

    #[test]
    fn test_channel_clamp() {
        assert_eq!(Interval::CHANNEL.clamp(-5.0), 0.0);
        assert_eq!(Interval::CHANNEL.clamp(128.5), 128.5);
        assert_eq!(Interval::CHANNEL.clamp(1e9), 255.0);
        assert!(Interval::UNIT.contains(1.0));
    }
}
