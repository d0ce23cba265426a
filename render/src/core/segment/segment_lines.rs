// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Segment, SegmentLine};

/// Iterator that splits a flat sequence of [`Segment`]s into lines. Non break segments
/// are buffered, and each [`Segment::LineBreak`] yields the buffer as one line (which may
/// be empty). Created by [`split_lines`].
///
/// Segments that trail the last line break are yielded as a final line, so that nothing
/// is silently dropped if a producer forgets to terminate its last line.
#[derive(Debug)]
pub struct SegmentLines<I> {
    iter: I,
}

impl<I> Iterator for SegmentLines<I>
where
    I: Iterator<Item = Segment>,
{
    type Item = SegmentLine;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = SegmentLine::new();
        for segment in self.iter.by_ref() {
            match segment {
                Segment::LineBreak => return Some(buffer),
                text @ Segment::Text(_) => buffer.push(text),
            }
        }
        if buffer.is_empty() { None } else { Some(buffer) }
    }
}

/// ```
/// use r3bl_render::{Segment, split_lines};
///
/// let segments = vec![
///     Segment::plain("a"),
///     Segment::LineBreak,
///     Segment::LineBreak,
///     Segment::plain("b"),
///     Segment::LineBreak,
/// ];
/// let lines = split_lines(segments).collect::<Vec<_>>();
/// assert_eq!(lines.len(), 3);
/// assert!(lines[1].is_empty());
/// ```
pub fn split_lines<I>(segments: I) -> SegmentLines<I::IntoIter>
where
    I: IntoIterator<Item = Segment>,
{
    SegmentLines {
        iter: segments.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TuiStyle, assert_eq2, line_text};

    #[test]
    fn test_each_line_break_yields_one_line() {
        let segments = vec![
            Segment::plain("he"),
            Segment::new(TuiStyle::bold(), "llo"),
            Segment::LineBreak,
            Segment::plain("world"),
            Segment::LineBreak,
        ];
        let lines = split_lines(segments)
            .map(|it| line_text(&it).to_string())
            .collect::<Vec<_>>();
        assert_eq2!(lines, vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_no_segments_no_lines() {
        assert_eq2!(split_lines(Vec::new()).count(), 0);
    }

    #[test]
    fn test_only_line_breaks_yield_empty_lines() {
        let lines = split_lines(vec![Segment::LineBreak, Segment::LineBreak])
            .collect::<Vec<_>>();
        assert_eq2!(lines, vec![SegmentLine::new(), SegmentLine::new()]);
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        let lines = split_lines(vec![Segment::plain("x")]).collect::<Vec<_>>();
        assert_eq2!(lines, vec![vec![Segment::plain("x")]]);
    }
}
