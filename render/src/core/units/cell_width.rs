// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal column (cell) widths.
//!
//! The display width of a string is the sum, over each of its code points, of that code
//! point's terminal column width:
//!
//! | Code point                      | Width |
//! | :------------------------------ | :---- |
//! | Combining mark, zero width, ctl | 0     |
//! | Normal width                    | 1     |
//! | Wide / East Asian, most emoji   | 2     |
//!
//! Splitting text for layout happens on grapheme cluster boundaries (see
//! [`graphemes_with_width`]), so a combining mark always travels with its base
//! character, and a cluster's width is the sum of the widths of its code points.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Width of a single code point. Control characters have no printable width, so they
/// are counted as 0. This includes `\t`, which a terminal would advance to the next tab
/// stop; [`Paragraph`](crate::Paragraph) expands tabs to spaces before measuring, so
/// text that goes through a paragraph is never affected.
#[must_use]
pub fn cell_width_char(ch: char) -> usize { UnicodeWidthChar::width(ch).unwrap_or(0) }

/// Width of a string, which is the sum of [`cell_width_char`] over its code points.
///
/// ```
/// use r3bl_render::cell_width_str;
///
/// assert_eq!(cell_width_str("hello"), 5);
/// assert_eq!(cell_width_str("日本"), 4);
/// assert_eq!(cell_width_str("e\u{301}"), 1);
/// ```
#[must_use]
pub fn cell_width_str(text: &str) -> usize { text.chars().map(cell_width_char).sum() }

/// Iterate over the extended grapheme clusters in `text`, along with the display width
/// of each one.
pub fn graphemes_with_width(text: &str) -> impl Iterator<Item = (&str, usize)> {
    text.graphemes(true)
        .map(|grapheme| (grapheme, cell_width_str(grapheme)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("", 0)]
    #[test_case("hi", 2)]
    #[test_case("日本語", 6)]
    #[test_case("a\u{0300}b", 2)]
    #[test_case("😃", 2)]
    #[test_case("\t", 0)]
    fn test_cell_width_str(input: &str, expected: usize) {
        assert_eq2!(cell_width_str(input), expected);
    }

    #[test]
    fn test_graphemes_keep_combining_marks_with_base() {
        let clusters = graphemes_with_width("e\u{301}x").collect::<Vec<_>>();
        assert_eq2!(clusters, vec![("e\u{301}", 1), ("x", 1)]);
    }
}
