// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Justify, Measurement, Overflow, RenderContext, Renderable, Segment,
            TuiStyle, TuiStyledTexts, glyphs_width, line_to_glyphs, push_merged,
            push_reflowed_lines, widest_word};

/// Ordered lines of styled runs, plus optional alignment and overflow settings. When a
/// setting is [`None`] it is inherited from the [`RenderContext`] (and then from the
/// type default) at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<TuiStyledTexts>,
    alignment: Option<Justify>,
    overflow: Option<Overflow>,
}

impl Default for Paragraph {
    fn default() -> Self { Self::new(vec![TuiStyledTexts::new()]) }
}

impl Paragraph {
    #[must_use]
    pub fn new(lines: Vec<TuiStyledTexts>) -> Self {
        Self {
            lines,
            alignment: None,
            overflow: None,
        }
    }

    /// Plain text in a single style. Each `\n` (or `\r\n`) starts a new line.
    #[must_use]
    pub fn from_text(style: &TuiStyle, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| {
                let mut acc = TuiStyledTexts::new();
                push_merged(&mut acc, style, line.strip_suffix('\r').unwrap_or(line));
                acc
            })
            .collect();
        Self::new(lines)
    }

    #[must_use]
    pub fn lines(&self) -> &[TuiStyledTexts] { &self.lines }

    #[must_use]
    pub fn alignment(&self) -> Option<Justify> { self.alignment }

    pub fn set_alignment(&mut self, alignment: Option<Justify>) { self.alignment = alignment; }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Justify) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn overflow(&self) -> Option<Overflow> { self.overflow }

    pub fn set_overflow(&mut self, overflow: Option<Overflow>) { self.overflow = overflow; }

    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }
}

impl Renderable for Paragraph {
    /// - `max` is the widest line, or all of `max_width` if the lines are justified.
    /// - `min` is the widest word when folding, and the widest line otherwise.
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        let overflow = context.resolve_overflow(self.overflow);
        let justify = context.resolve_justify(self.alignment);

        let (widest_line, widest_unbreakable) =
            self.lines.iter().fold((0, 0), |(acc_line, acc_word), line| {
                let glyphs = line_to_glyphs(line);
                let line_width = glyphs_width(&glyphs);
                let word_width = match overflow {
                    Overflow::Fold => widest_word(&glyphs),
                    Overflow::Crop | Overflow::Ellipsis => line_width,
                };
                (acc_line.max(line_width), acc_word.max(word_width))
            });

        let max = if justify.is_some() { max_width } else { widest_line };

        Measurement::new(widest_unbreakable, max).clamp(max_width)
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        let overflow = context.resolve_overflow(self.overflow);
        let justify = context.resolve_justify(self.alignment);
        let mut acc = Vec::with_capacity(self.lines.len() * 2);

        if max_width == 0 {
            tracing::trace!(
                message = "Paragraph rendered at zero width",
                line_count = self.lines.len()
            );
            acc.extend(std::iter::repeat_n(Segment::LineBreak, self.lines.len()));
            return acc;
        }

        for line in &self.lines {
            push_reflowed_lines(
                &line_to_glyphs(line),
                max_width,
                overflow,
                justify,
                context.ellipsis(),
                &mut acc,
            );
        }

        if !context.capabilities.links {
            for segment in &mut acc {
                if let Segment::Text(it) = segment {
                    it.style.link = None;
                }
            }
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, assert_eq2, line_cell_width, line_text, split_lines};
    use test_case::test_case;

    fn render_to_strings(paragraph: &Paragraph, context: &RenderContext, width: usize) -> Vec<String> {
        split_lines(paragraph.render(context, width))
            .map(|it| line_text(&it).to_string())
            .collect()
    }

    #[test]
    fn test_from_text_splits_lines() {
        let paragraph = Paragraph::from_text(&TuiStyle::default(), "a\r\nb\n");
        assert_eq2!(paragraph.lines().len(), 3);
        assert!(paragraph.lines()[2].is_empty());
    }

    #[test_case(None, 80, (5, 11))]
    #[test_case(Some(Overflow::Crop), 80, (11, 11))]
    #[test_case(None, 8, (5, 8))]
    #[test_case(None, 3, (3, 3))]
    #[test_case(None, 0, (0, 0))]
    fn test_measure(overflow: Option<Overflow>, width: usize, expected: (usize, usize)) {
        let mut paragraph = Paragraph::from_text(&TuiStyle::default(), "hello world\nab");
        paragraph.set_overflow(overflow);
        let it = paragraph.measure(&RenderContext::new(80), width);
        assert_eq2!((it.min(), it.max()), expected);
    }

    #[test]
    fn test_measure_justified_uses_all_width() {
        let paragraph =
            Paragraph::from_text(&TuiStyle::default(), "hi").with_alignment(Justify::Center);
        let it = paragraph.measure(&RenderContext::new(80), 10);
        assert_eq2!((it.min(), it.max()), (2, 10));
        assert_eq2!(render_to_strings(&paragraph, &RenderContext::new(80), 10), vec![
            "    hi    ".to_string()
        ]);
    }

    #[test]
    fn test_context_defaults_are_inherited() {
        let paragraph = Paragraph::from_text(&TuiStyle::default(), "hello world");
        let context = RenderContext::new(80)
            .with_overflow(Overflow::Ellipsis)
            .with_justify(Justify::Right);
        assert_eq2!(render_to_strings(&paragraph, &context, 8), vec!["hello w…".to_string()]);
        assert_eq2!(render_to_strings(&paragraph, &context, 12), vec![
            " hello world".to_string()
        ]);

        // Widget setting wins over the context default.
        let paragraph = paragraph.with_overflow(Overflow::Fold);
        assert_eq2!(render_to_strings(&paragraph, &context, 8), vec![
            "   hello".to_string(),
            "   world".to_string()
        ]);
    }

    #[test]
    fn test_zero_width_renders_empty_lines() {
        let paragraph = Paragraph::from_text(&TuiStyle::default(), "a\nb");
        let segments = paragraph.render(&RenderContext::new(80), 0);
        assert_eq2!(segments, vec![Segment::LineBreak, Segment::LineBreak]);
    }

    #[test]
    fn test_every_line_fits_and_is_terminated() {
        let paragraph = Paragraph::from_text(
            &TuiStyle::bold(),
            "The quick brown fox jumps over the lazy dog\n日本語のテキスト",
        );
        let context = RenderContext::new(80);
        for width in 0..=20 {
            let segments = paragraph.render(&context, width);
            assert_eq2!(segments.last(), Some(&Segment::LineBreak));
            for line in split_lines(segments) {
                assert!(line_cell_width(&line) <= width);
            }
            let it = paragraph.measure(&context, width);
            assert!(it.min() <= it.max());
            assert!(it.max() <= width);
        }
    }

    #[test]
    fn test_links_are_dropped_when_not_supported() {
        let paragraph =
            Paragraph::from_text(&TuiStyle::default().with_link("https://r3bl.com"), "r3bl");
        let has_link = |context: &RenderContext| {
            paragraph
                .render(context, 10)
                .iter()
                .filter_map(Segment::style)
                .any(|it| it.link.is_some())
        };
        assert!(has_link(&RenderContext::new(10)));
        let context = RenderContext::new(10).with_capabilities(Capabilities {
            unicode: true,
            links: false,
        });
        assert!(!has_link(&context));
    }

    #[test]
    fn test_render_keeps_styles_of_runs() {
        let mut line = TuiStyledTexts::new();
        push_merged(&mut line, &TuiStyle::bold(), "ab");
        push_merged(&mut line, &TuiStyle::default(), " cd");
        let paragraph = Paragraph::new(vec![line]);
        assert_eq2!(paragraph.render(&RenderContext::new(80), 80), vec![
            Segment::new(TuiStyle::bold(), "ab"),
            Segment::plain(" cd"),
            Segment::LineBreak,
        ]);
    }
}
