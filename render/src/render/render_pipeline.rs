// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entry points for an output sink. These run a single render pass at
//! [`RenderContext::max_width`]. Turning a [`crate::TuiStyle`] into terminal escape
//! sequences is up to the sink.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{RenderContext, Renderable, Segment, SegmentLine, split_lines};

/// The full sequence of segments for one pass.
pub fn render_segments<R: Renderable + ?Sized>(
    renderable: &R,
    context: &RenderContext,
) -> Vec<Segment> {
    let max_width = context.max_width;
    tracing::trace!(message = "Render pass start", max_width);
    let segments = renderable.render(context, max_width);
    tracing::trace!(
        message = "Render pass end",
        max_width,
        segment_count = segments.len()
    );
    segments
}

/// Same as [`render_segments`], split into lines without the line breaks.
pub fn render_lines<R: Renderable + ?Sized>(
    renderable: &R,
    context: &RenderContext,
) -> Vec<SegmentLine> {
    split_lines(render_segments(renderable, context)).collect()
}

/// The text of every segment, with a `\n` for each line break. Styles are dropped.
pub fn render_plain_text<R: Renderable + ?Sized>(
    renderable: &R,
    context: &RenderContext,
) -> String {
    let mut acc = String::new();
    for segment in render_segments(renderable, context) {
        match segment {
            Segment::Text(it) => acc.push_str(it.get_text()),
            Segment::LineBreak => acc.push('\n'),
        }
    }
    acc
}

/// Write [`render_plain_text`] to `sink`.
///
/// # Errors
///
/// Returns an error if writing to `sink` fails.
pub fn write_plain_text<R: Renderable + ?Sized, W: Write>(
    renderable: &R,
    context: &RenderContext,
    sink: &mut W,
) -> miette::Result<()> {
    sink.write_all(render_plain_text(renderable, context).as_bytes())
        .into_diagnostic()?;
    sink.flush().into_diagnostic()?;
    crate::ok!()
}
