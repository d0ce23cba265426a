// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Blank space around the content of a [`crate::Padder`], in lines (`top`, `bottom`)
/// and columns (`left`, `right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Default for Padding {
    fn default() -> Self { Self::all(1) }
}

impl Padding {
    #[must_use]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn all(it: usize) -> Self { Self::new(it, it, it, it) }

    /// `vertical` lines above and below, `horizontal` columns left and right.
    #[must_use]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    #[must_use]
    pub const fn horizontal_width(&self) -> usize { self.left + self.right }
}

impl From<(usize, usize, usize, usize)> for Padding {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_constructors() {
        assert_eq2!(Padding::default(), Padding::new(1, 1, 1, 1));
        assert_eq2!(Padding::symmetric(0, 2), Padding::from((0, 2)));
        assert_eq2!(Padding::from((1, 2, 3, 4)).horizontal_width(), 6);
    }
}
