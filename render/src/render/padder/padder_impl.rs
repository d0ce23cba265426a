// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Measurement, Padding, RenderContext, Renderable, Segment, line_cell_width,
            split_lines};

/// Wraps a single child [`Renderable`] in [`Padding`].
///
/// Every line that it renders has the same width, which is the child's widest desired
/// width (or all of `max_width` when `expand` is set) plus the horizontal padding. The
/// child's own overflow policy decides what happens to content that doesn't fit, the
/// padder never cuts anything.
///
/// ```
/// use r3bl_render::{Markup, Padder, Padding, RenderContext, render_plain_text};
///
/// let padder = Padder::new(Markup::try_new("hi").unwrap())
///     .with_padding(Padding::symmetric(0, 2))
///     .with_expand(true);
/// let text = render_plain_text(&padder, &RenderContext::new(8));
/// assert_eq!(text, "  hi    \n");
/// ```
#[derive(Debug)]
pub struct Padder {
    child: Box<dyn Renderable>,
    padding: Padding,
    expand: bool,
}

impl Padder {
    pub fn new(child: impl Renderable + 'static) -> Self {
        Self {
            child: Box::new(child),
            padding: Padding::default(),
            expand: false,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    #[must_use]
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    #[must_use]
    pub fn padding(&self) -> Padding { self.padding }

    #[must_use]
    pub fn expand(&self) -> bool { self.expand }
}

impl Renderable for Padder {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        let padding_width = self.padding.horizontal_width();
        if max_width < padding_width {
            return Measurement::default();
        }
        self.child.measure(context, max_width - padding_width) + padding_width
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = self.padding;
        let padding_width = left + right;

        if max_width < padding_width {
            tracing::debug!(
                message = "Padder is wider than the available width, nothing rendered",
                max_width,
                padding_width
            );
            return vec![];
        }

        let child_width = max_width - padding_width;
        let working_width = if self.expand {
            child_width
        } else {
            self.child.measure(context, child_width).max()
        };
        let box_width = working_width + padding_width;

        let child_lines = split_lines(self.child.render(context, child_width));
        let mut acc = vec![];

        push_blank_lines(top, box_width, &mut acc);

        for line in child_lines {
            let fill = working_width.saturating_sub(line_cell_width(&line));
            if left > 0 {
                acc.push(Segment::padding(left));
            }
            acc.extend(line);
            if right + fill > 0 {
                acc.push(Segment::padding(right + fill));
            }
            acc.push(Segment::LineBreak);
        }

        push_blank_lines(bottom, box_width, &mut acc);

        acc
    }
}

fn push_blank_lines(count: usize, width: usize, acc: &mut Vec<Segment>) {
    for _ in 0..count {
        if width > 0 {
            acc.push(Segment::padding(width));
        }
        acc.push(Segment::LineBreak);
    }
}
