// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crate::{Justify, MarkupParseError, Measurement, Overflow, Paragraph, RenderContext,
            Renderable, Segment, TuiStyle, parse_markup};

/// A [`Renderable`] built from markup text. The text is parsed once, when the widget is
/// created, so a [`MarkupParseError`] is never deferred to render time.
///
/// The alignment and overflow settings are the ones of the wrapped [`Paragraph`].
///
/// ```
/// use r3bl_render::{Markup, Overflow, RenderContext, render_plain_text};
///
/// let mut markup = Markup::try_new("[bold red]Error[/] file not found").unwrap();
/// markup.set_overflow(Some(Overflow::Ellipsis));
/// let text = render_plain_text(&markup, &RenderContext::new(12));
/// assert_eq!(text, "Error file…\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    paragraph: Paragraph,
}

impl Markup {
    /// # Errors
    ///
    /// Returns a [`MarkupParseError`] if `text` isn't well formed markup.
    pub fn try_new(text: &str) -> Result<Self, MarkupParseError> {
        Ok(Self {
            paragraph: parse_markup(text, None)?,
        })
    }

    /// Like [`Markup::try_new`], with `style` at the bottom of the scope stack.
    ///
    /// # Errors
    ///
    /// Returns a [`MarkupParseError`] if `text` isn't well formed markup.
    pub fn try_new_with_style(text: &str, style: TuiStyle) -> Result<Self, MarkupParseError> {
        Ok(Self {
            paragraph: parse_markup(text, Some(style))?,
        })
    }

    #[must_use]
    pub fn paragraph(&self) -> &Paragraph { &self.paragraph }

    #[must_use]
    pub fn alignment(&self) -> Option<Justify> { self.paragraph.alignment() }

    pub fn set_alignment(&mut self, alignment: Option<Justify>) {
        self.paragraph.set_alignment(alignment);
    }

    #[must_use]
    pub fn overflow(&self) -> Option<Overflow> { self.paragraph.overflow() }

    pub fn set_overflow(&mut self, overflow: Option<Overflow>) {
        self.paragraph.set_overflow(overflow);
    }
}

impl FromStr for Markup {
    type Err = MarkupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_new(s) }
}

impl From<Markup> for Paragraph {
    fn from(markup: Markup) -> Self { markup.paragraph }
}

impl Renderable for Markup {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        self.paragraph.measure(context, max_width)
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        self.paragraph.render(context, max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, render_lines};

    #[test]
    fn test_parse_error_surfaces_at_construction() {
        assert!(Markup::try_new("[bold]unterminated").is_err());
        assert!("[bold]ok[/]".parse::<Markup>().is_ok());
    }

    #[test]
    fn test_settings_proxy_to_paragraph() {
        let mut markup = Markup::try_new("hi").unwrap();
        assert_eq2!(markup.alignment(), None);
        markup.set_alignment(Some(Justify::Right));
        assert_eq2!(markup.paragraph().alignment(), Some(Justify::Right));

        let lines = render_lines(&markup, &RenderContext::new(5));
        assert_eq2!(lines, vec![vec![Segment::padding(3), Segment::plain("hi")]]);

        markup.set_alignment(None);
        let lines = render_lines(&markup, &RenderContext::new(5));
        assert_eq2!(lines, vec![vec![Segment::plain("hi")]]);
    }

    #[test]
    fn test_base_style_applies_to_all_text() {
        let markup = Markup::try_new_with_style("a[b]b[/]", TuiStyle::dim()).unwrap();
        let lines = render_lines(&markup, &RenderContext::new(80));
        assert_eq2!(lines, vec![vec![
            Segment::new(TuiStyle::dim(), "a"),
            Segment::new(TuiStyle::dim().overlay(&TuiStyle::bold()), "b"),
        ]]);
    }
}
