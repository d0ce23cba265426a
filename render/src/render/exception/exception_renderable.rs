// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, path::Path};

use crate::{ExceptionFormat, ExceptionFormats, ExceptionInfo, Padder, Padding,
            Paragraph, RenderContext, Rows, StackFrameInfo, TuiStyle, TuiStyledTexts,
            push_merged, tui_color, write_plain_text};

mod constants {
    pub const FRAME_INDENT: usize = 2;
    pub const INNER_PREFIX: &str = " ---> ";
    pub const HEADER_SEPARATOR: &str = ": ";
    pub const FRAME_AT: &str = "at ";
    pub const FRAME_IN: &str = " in ";
    pub const FRAME_LINE: &str = ":line ";
    pub const FILE_URI_SCHEME: &str = "file://";
}

/// Styles for each part of a rendered exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionStyle {
    pub exception: TuiStyle,
    pub message: TuiStyle,
    pub method: TuiStyle,
    pub path: TuiStyle,
    pub line_number: TuiStyle,
    /// Used for the glue text, eg: `at`, `in`, and the inner exception arrow.
    pub non_emphasized: TuiStyle,
}

impl Default for ExceptionStyle {
    fn default() -> Self {
        Self {
            exception: TuiStyle::default().with_fg(tui_color!(white)),
            message: TuiStyle::default().with_fg(tui_color!(red)),
            method: TuiStyle::default().with_fg(tui_color!(yellow)),
            path: TuiStyle::default().with_fg(tui_color!(yellow)),
            line_number: TuiStyle::default().with_fg(tui_color!(blue)),
            non_emphasized: TuiStyle::default().with_fg(tui_color!(gray)),
        }
    }
}

impl ExceptionInfo {
    /// Build a [`Rows`] renderable for this exception, with [`ExceptionStyle::default`].
    ///
    /// ```
    /// use r3bl_render::{ExceptionFormat, ExceptionInfo, RenderContext, StackFrameInfo,
    ///                   render_plain_text};
    ///
    /// let info = ExceptionInfo::new("app::errors::ConfigError", "missing key")
    ///     .with_frame(StackFrameInfo::new("app::config::load()").with_location("/src/config.rs", Some(42)));
    /// let renderable = info.to_renderable(ExceptionFormat::ShortenTypes | ExceptionFormat::ShortenPaths);
    /// let text = render_plain_text(&renderable, &RenderContext::new(80));
    /// assert_eq!(text, "ConfigError: missing key\n  at app::config::load() in config.rs:line 42\n");
    /// ```
    #[must_use]
    pub fn to_renderable(&self, formats: impl Into<ExceptionFormats>) -> Rows {
        self.to_renderable_with_style(formats, &ExceptionStyle::default())
    }

    #[must_use]
    pub fn to_renderable_with_style(
        &self,
        formats: impl Into<ExceptionFormats>,
        style: &ExceptionStyle,
    ) -> Rows {
        exception_to_rows(self, &formats.into(), style)
    }
}

/// Render `info`, as plain text, to `sink`. The width comes from `context`.
///
/// # Errors
///
/// Returns an error if writing to `sink` fails.
pub fn write_exception<W: Write>(
    sink: &mut W,
    info: &ExceptionInfo,
    formats: impl Into<ExceptionFormats>,
    context: &RenderContext,
) -> miette::Result<()> {
    write_plain_text(&info.to_renderable(formats), context, sink)
}

/// Walk the cause chain from the innermost exception outwards. Each exception gets its
/// header, then (indented) the already built rows of its inner exception, then its own
/// frames.
fn exception_to_rows(
    info: &ExceptionInfo,
    formats: &ExceptionFormats,
    style: &ExceptionStyle,
) -> Rows {
    let chain = info.chain().collect::<Vec<_>>();
    chain
        .iter()
        .enumerate()
        .rev()
        .fold(None, |nested: Option<Rows>, (depth, it)| {
            Some(one_exception_to_rows(it, nested, formats, style, depth > 0))
        })
        .unwrap_or_default()
}

fn one_exception_to_rows(
    info: &ExceptionInfo,
    nested: Option<Rows>,
    formats: &ExceptionFormats,
    style: &ExceptionStyle,
    is_inner: bool,
) -> Rows {
    let mut body = Rows::default();

    if let Some(nested) = nested {
        body.push(nested);
    }

    let frames = frames_paragraph(&info.frames, formats, style);
    if !frames.lines().is_empty() {
        body.push(frames);
    }

    let mut rows = Rows::default().with_row(header_paragraph(info, formats, style, is_inner));
    if !body.is_empty() {
        rows.push(
            Padder::new(body).with_padding(Padding::new(0, 0, 0, constants::FRAME_INDENT)),
        );
    }
    rows
}

fn header_paragraph(
    info: &ExceptionInfo,
    formats: &ExceptionFormats,
    style: &ExceptionStyle,
    is_inner: bool,
) -> Paragraph {
    let type_name = if formats.contains(ExceptionFormat::ShortenTypes) {
        shorten_qualified_name(&info.type_name)
    } else {
        &info.type_name
    };

    let mut line = TuiStyledTexts::new();
    if is_inner {
        push_merged(&mut line, &style.non_emphasized, constants::INNER_PREFIX);
    }
    push_merged(&mut line, &style.exception, type_name);
    push_merged(&mut line, &style.non_emphasized, constants::HEADER_SEPARATOR);
    push_merged(&mut line, &style.message, &info.message);

    Paragraph::new(vec![line])
}

fn frames_paragraph(
    frames: &[StackFrameInfo],
    formats: &ExceptionFormats,
    style: &ExceptionStyle,
) -> Paragraph {
    let hide_non_public = formats.contains(ExceptionFormat::HideNonPublic);
    let lines = frames
        .iter()
        .filter(|frame| frame.is_public || !hide_non_public)
        .map(|frame| frame_line(frame, formats, style))
        .collect();
    Paragraph::new(lines)
}

fn frame_line(
    frame: &StackFrameInfo,
    formats: &ExceptionFormats,
    style: &ExceptionStyle,
) -> TuiStyledTexts {
    let method = if formats.contains(ExceptionFormat::ShortenMethods) {
        shorten_qualified_name(&frame.method)
    } else {
        &frame.method
    };

    let mut line = TuiStyledTexts::new();
    push_merged(&mut line, &style.non_emphasized, constants::FRAME_AT);
    push_merged(&mut line, &style.method, method);

    if let Some(location) = &frame.location {
        let path = if formats.contains(ExceptionFormat::ShortenPaths) {
            shorten_path(&location.path)
        } else {
            &location.path
        };
        let path_style = if formats.contains(ExceptionFormat::ShowLinks) {
            style
                .path
                .clone()
                .with_link(format!("{}{}", constants::FILE_URI_SCHEME, location.path))
        } else {
            style.path.clone()
        };

        push_merged(&mut line, &style.non_emphasized, constants::FRAME_IN);
        push_merged(&mut line, &path_style, path);

        if let Some(line_number) = location.line {
            push_merged(&mut line, &style.non_emphasized, constants::FRAME_LINE);
            push_merged(&mut line, &style.line_number, &line_number.to_string());
        }
    }

    line
}

/// Drop the qualifiers, ie: everything up to the last `::` or `.` that comes before any
/// generic arguments or parameter list.
///
/// ```
/// use r3bl_render::shorten_qualified_name;
///
/// assert_eq!(shorten_qualified_name("std::io::Error"), "Error");
/// assert_eq!(shorten_qualified_name("System.IO.File.Open(string path)"), "Open(string path)");
/// assert_eq!(shorten_qualified_name("app::Reader<std::fs::File>::read"), "Reader<std::fs::File>::read");
/// assert_eq!(shorten_qualified_name("main"), "main");
/// ```
#[must_use]
pub fn shorten_qualified_name(name: &str) -> &str {
    let head_end = name.find(['<', '(']).unwrap_or(name.len());
    let head = &name[..head_end];
    let start = match (head.rfind("::"), head.rfind('.')) {
        (Some(colons), Some(dot)) => (colons + 2).max(dot + 1),
        (Some(colons), None) => colons + 2,
        (None, Some(dot)) => dot + 1,
        (None, None) => 0,
    };
    &name[start..]
}

#[must_use]
pub fn shorten_path(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|it| it.to_str())
        .unwrap_or(path)
}
