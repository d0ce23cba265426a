// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

/// The narrowest (`min`) and widest (`max`) width that some content could use, within the
/// upper bound that was given to [`crate::Renderable::measure`]. `min <= max` always
/// holds, which is enforced by the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Measurement {
    min: usize,
    max: usize,
}

impl Measurement {
    /// If `min > max` is passed in, `min` is lowered to `max`.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    #[must_use]
    pub fn min(&self) -> usize { self.min }

    #[must_use]
    pub fn max(&self) -> usize { self.max }

    /// Clamp both bounds so that neither exceeds `max_width`.
    #[must_use]
    pub fn clamp(self, max_width: usize) -> Self {
        Self::new(self.min.min(max_width), self.max.min(max_width))
    }

    /// The smallest measurement that contains both `self` and `other`, eg: the
    /// measurement of two renderables stacked on top of each other.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.max(other.min), self.max.max(other.max))
    }
}

/// Widen both bounds by the same amount, eg: to account for padding.
impl Add<usize> for Measurement {
    type Output = Self;
    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.min.saturating_add(rhs), self.max.saturating_add(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(2, 5, (2, 5))]
    #[test_case(7, 5, (5, 5))]
    #[test_case(0, 0, (0, 0))]
    fn test_new_keeps_min_le_max(min: usize, max: usize, expected: (usize, usize)) {
        let it = Measurement::new(min, max);
        assert_eq2!((it.min(), it.max()), expected);
    }

    #[test]
    fn test_clamp_union_and_add() {
        assert_eq2!(Measurement::new(3, 10).clamp(4), Measurement::new(3, 4));
        assert_eq2!(
            Measurement::new(3, 4).union(Measurement::new(1, 9)),
            Measurement::new(3, 9)
        );
        assert_eq2!(Measurement::new(2, 2) + 2, Measurement::new(4, 4));
    }
}
