// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Segment, StringTuiStyledText, TuiStyle, TuiStyledText, TuiStyledTexts,
            cell_width_str, graphemes_with_width};

/// A single grapheme cluster borrowed from a styled run, along with its display width.
/// This is the unit that reflow works with, so that a combining mark is never separated
/// from its base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub text: &'a str,
    pub width: usize,
    pub style: &'a TuiStyle,
}

pub type Glyphs<'a> = Vec<Glyph<'a>>;

mod constants {
    pub const TAB: &str = "\t";
    pub const TAB_WIDTH: usize = 4;
}

impl<'a> Glyph<'a> {
    #[must_use]
    pub fn new(text: &'a str, style: &'a TuiStyle) -> Self {
        Self {
            text,
            width: cell_width_str(text),
            style,
        }
    }

    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.text.chars().all(char::is_whitespace) }
}

/// Flatten the runs of a line into glyphs. A tab becomes a fixed run of spaces, since
/// its real width depends on the column it lands in once reflow is done.
#[must_use]
pub fn line_to_glyphs(line: &TuiStyledTexts) -> Glyphs<'_> {
    use constants::{TAB, TAB_WIDTH};

    let mut acc = Glyphs::new();
    for run in line.iter() {
        let style = run.get_style();
        for (text, width) in graphemes_with_width(run.get_text()) {
            if text == TAB {
                acc.extend(std::iter::repeat_n(Glyph::new(" ", style), TAB_WIDTH));
            } else {
                acc.push(Glyph { text, width, style });
            }
        }
    }
    acc
}

#[must_use]
pub fn glyphs_width(glyphs: &[Glyph<'_>]) -> usize { glyphs.iter().map(|it| it.width).sum() }

/// Convert glyphs back into segments, joining consecutive glyphs that share a style
/// into a single [`Segment`]. No [`Segment::LineBreak`] is added.
pub fn push_glyphs_as_segments(glyphs: &[Glyph<'_>], acc: &mut Vec<Segment>) {
    let mut pending: Option<(&TuiStyle, StringTuiStyledText)> = None;

    for glyph in glyphs {
        match pending.as_mut() {
            Some((style, text)) if *style == glyph.style => text.push_str(glyph.text),
            _ => {
                if let Some((style, text)) = pending.take() {
                    acc.push(flush(style, text));
                }
                pending = Some((glyph.style, StringTuiStyledText::from_str(glyph.text)));
            }
        }
    }

    if let Some((style, text)) = pending {
        acc.push(flush(style, text));
    }

    fn flush(style: &TuiStyle, text: StringTuiStyledText) -> Segment {
        Segment::Text(TuiStyledText {
            style: style.clone(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, push_merged};

    #[test]
    fn test_line_to_glyphs_keeps_clusters() {
        let mut line = TuiStyledTexts::new();
        push_merged(&mut line, &TuiStyle::default(), "e\u{301} ");
        push_merged(&mut line, &TuiStyle::bold(), "日");
        let glyphs = line_to_glyphs(&line);
        assert_eq2!(glyphs.len(), 3);
        assert_eq2!(glyphs[0].text, "e\u{301}");
        assert!(glyphs[1].is_whitespace());
        assert_eq2!(glyphs[2].width, 2);
        assert_eq2!(glyphs_width(&glyphs), 4);
    }

    #[test]
    fn test_line_to_glyphs_expands_tabs() {
        let mut line = TuiStyledTexts::new();
        push_merged(&mut line, &TuiStyle::default(), "a\tb");
        let glyphs = line_to_glyphs(&line);
        assert_eq2!(glyphs_width(&glyphs), 6);
        assert!(glyphs.iter().all(|it| it.text != "\t"));
        assert!(glyphs[1..5].iter().all(Glyph::is_whitespace));
    }

    #[test]
    fn test_push_glyphs_as_segments_merges_same_style() {
        let plain = TuiStyle::default();
        let bold = TuiStyle::bold();
        let glyphs = vec![
            Glyph::new("a", &plain),
            Glyph::new("b", &plain),
            Glyph::new("c", &bold),
            Glyph::new("d", &plain),
        ];
        let mut acc = vec![];
        push_glyphs_as_segments(&glyphs, &mut acc);
        assert_eq2!(
            acc,
            vec![
                Segment::plain("ab"),
                Segment::new(TuiStyle::bold(), "c"),
                Segment::plain("d"),
            ]
        );
    }
}
