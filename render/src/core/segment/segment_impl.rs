// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StringTuiStyledText, TuiStyle, TuiStyledText, cell_width_str, get_spaces};

/// The atomic unit of rendered output.
///
/// - [`Segment::Text`] is a run of text that shares one style.
/// - [`Segment::LineBreak`] marks the end of a line. It carries no text, so the
///   combination "line break with text" can't be represented.
///
/// Every line produced by a [`crate::Renderable`] ends with a [`Segment::LineBreak`],
/// including the last one. Use [`crate::SegmentLines`] to split a flat sequence back into
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(TuiStyledText),
    LineBreak,
}

/// A rendered line (without its terminating [`Segment::LineBreak`]).
pub type SegmentLine = Vec<Segment>;

impl Segment {
    pub fn new(style: TuiStyle, text: impl AsRef<str>) -> Self {
        Segment::Text(TuiStyledText::new(style, text))
    }

    pub fn plain(text: impl AsRef<str>) -> Self { Segment::new(TuiStyle::default(), text) }

    /// A run of `count` unstyled spaces.
    #[must_use]
    pub fn padding(count: usize) -> Self { Segment::plain(get_spaces(count)) }

    #[must_use]
    pub fn is_line_break(&self) -> bool { matches!(self, Segment::LineBreak) }

    /// The text of this segment, [`None`] for a line break.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Segment::Text(it) => Some(it.get_text()),
            Segment::LineBreak => None,
        }
    }

    #[must_use]
    pub fn style(&self) -> Option<&TuiStyle> {
        match self {
            Segment::Text(it) => Some(it.get_style()),
            Segment::LineBreak => None,
        }
    }

    /// Display width of this segment. A line break contributes 0.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        match self {
            Segment::Text(it) => cell_width_str(&it.text),
            Segment::LineBreak => 0,
        }
    }
}

impl From<TuiStyledText> for Segment {
    fn from(styled_text: TuiStyledText) -> Self { Segment::Text(styled_text) }
}

impl From<&TuiStyledText> for Segment {
    fn from(styled_text: &TuiStyledText) -> Self { Segment::Text(styled_text.clone()) }
}

/// Sum of the display width of each segment in the line.
///
/// # Panics
///
/// In debug builds, if `line` contains a [`Segment::LineBreak`]. A line break is never
/// part of a line, it terminates one.
#[must_use]
pub fn line_cell_width(line: &[Segment]) -> usize {
    debug_assert!(
        !line.iter().any(Segment::is_line_break),
        "line break found in the middle of a line"
    );
    line.iter().map(Segment::cell_width).sum()
}

/// Concatenate the text of all the segments in a line, eg for tests and plain text
/// sinks.
#[must_use]
pub fn line_text(line: &[Segment]) -> StringTuiStyledText {
    let mut acc = StringTuiStyledText::new();
    for text in line.iter().filter_map(Segment::text) {
        acc.push_str(text);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_line_break_has_no_text_and_no_width() {
        assert_eq2!(Segment::LineBreak.text(), None);
        assert_eq2!(Segment::LineBreak.cell_width(), 0);
        assert_eq2!(Segment::LineBreak.style(), None);
    }

    #[test]
    fn test_line_cell_width_sums_segments() {
        let line = vec![
            Segment::plain("ab"),
            Segment::new(TuiStyle::bold(), "日本"),
            Segment::padding(3),
        ];
        assert_eq2!(line_cell_width(&line), 9);
        assert_eq2!(line_text(&line).as_str(), "ab日本   ");
    }
}
