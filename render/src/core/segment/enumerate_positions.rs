// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          iter::Peekable};

/// Where an item sits in a sequence. Lets composites special case boundary lines
/// without scanning the sequence twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl Position {
    #[must_use]
    pub fn is_middle(&self) -> bool { !self.is_first && !self.is_last }
}

/// Created by [`EnumeratePositionsExt::enumerate_positions`].
pub struct EnumeratePositions<I: Iterator> {
    iter: Peekable<I>,
    index: usize,
}

impl<I: Iterator> Debug for EnumeratePositions<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumeratePositions")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Iterator for EnumeratePositions<I> {
    type Item = (Position, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let position = Position {
            index: self.index,
            is_first: self.index == 0,
            is_last: self.iter.peek().is_none(),
        };
        self.index += 1;
        Some((position, item))
    }
}

pub trait EnumeratePositionsExt: Iterator + Sized {
    /// ```
    /// use r3bl_render::EnumeratePositionsExt;
    ///
    /// let it = ["a", "b", "c"]
    ///     .into_iter()
    ///     .enumerate_positions()
    ///     .map(|(pos, item)| (item, pos.is_first, pos.is_last))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(it, vec![("a", true, false), ("b", false, false), ("c", false, true)]);
    /// ```
    fn enumerate_positions(self) -> EnumeratePositions<Self> {
        EnumeratePositions {
            iter: self.peekable(),
            index: 0,
        }
    }
}

impl<I: Iterator> EnumeratePositionsExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_single_item_is_first_and_last() {
        let it = std::iter::once(1).enumerate_positions().collect::<Vec<_>>();
        assert_eq2!(it.len(), 1);
        assert!(it[0].0.is_first && it[0].0.is_last);
        assert!(!it[0].0.is_middle());
    }

    #[test]
    fn test_middle_items() {
        let middles = (0..4)
            .enumerate_positions()
            .filter(|(pos, _)| pos.is_middle())
            .map(|(_, it)| it)
            .collect::<Vec<_>>();
        assert_eq2!(middles, vec![1, 2]);
    }

    #[test]
    fn test_empty() {
        assert_eq2!(std::iter::empty::<u8>().enumerate_positions().count(), 0);
    }
}
