/// The inclusive range of raw values scanned for enumerators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: i128,
    max: i128,
}

impl Bounds {
    /// `[-128, 127]`, used when neither the type nor the environment says otherwise.
    pub const DEFAULT: Self = Self::new(-128, 127);

    /// Creates bounds covering `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `max <= min`. In a constant this stops compilation.
    pub const fn new(min: i128, max: i128) -> Self {
        assert!(max > min, "enumeration bounds must satisfy max > min");
        Self { min, max }
    }

    /// The smallest raw value scanned.
    pub const fn min(self) -> i128 {
        self.min
    }

    /// The largest raw value scanned.
    pub const fn max(self) -> i128 {
        self.max
    }

    /// Checks whether `raw` lies within the bounds.
    pub const fn contains(self, raw: i128) -> bool {
        self.min <= raw && raw <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::Bounds;

    #[test]
    fn default_bounds() {
        let bounds = Bounds::default();
        assert_eq!((bounds.min(), bounds.max()), (-128, 127));
        assert!(bounds.contains(-128));
        assert!(bounds.contains(127));
        assert!(!bounds.contains(128));
        assert!(!bounds.contains(-129));
    }

    #[test]
    #[should_panic(expected = "enumeration bounds must satisfy max > min")]
    fn inverted_bounds() {
        Bounds::new(7, 0);
    }

    #[test]
    #[should_panic(expected = "enumeration bounds must satisfy max > min")]
    fn empty_bounds() {
        Bounds::new(3, 3);
    }
}
