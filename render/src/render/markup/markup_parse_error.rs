// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::SourceSpan;

use crate::ColorParseError;

/// Everything that can go wrong when parsing markup. Each variant carries the byte
/// offset of the problem, and the source text along with a labelled span so that
/// [`miette`] can point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum MarkupParseError {
    #[error("style scope opened at byte {position} is never closed")]
    #[diagnostic(
        code(r3bl_render::markup::unterminated_scope),
        help("Close every `[style]` with a matching `[/]`.")
    )]
    UnterminatedScope {
        position: usize,
        #[source_code]
        source_code: String,
        #[label("opened here")]
        span: SourceSpan,
    },

    #[error("close tag at byte {position} has no matching open tag")]
    #[diagnostic(
        code(r3bl_render::markup::stray_close_tag),
        help("Remove the `[/]`, or write a literal `[` as `[[`.")
    )]
    StrayCloseTag {
        position: usize,
        #[source_code]
        source_code: String,
        #[label("nothing to close")]
        span: SourceSpan,
    },

    #[error("unrecognized style token `{token}` at byte {position}")]
    #[diagnostic(
        code(r3bl_render::markup::unrecognized_style_token),
        help(
            "Use a decoration (eg: `bold`), a color (eg: `red`, `#ff0000`), `on <color>`, \
             or `link=<uri>`."
        )
    )]
    UnrecognizedStyleToken {
        token: String,
        position: usize,
        #[source]
        cause: Option<ColorParseError>,
        #[source_code]
        source_code: String,
        #[label("this token")]
        span: SourceSpan,
    },

    #[error("malformed tag at byte {position}")]
    #[diagnostic(
        code(r3bl_render::markup::malformed_tag),
        help("A tag is `[style]` on a single line. Write a literal `[` as `[[`.")
    )]
    MalformedTag {
        position: usize,
        #[source_code]
        source_code: String,
        #[label("tag starts here")]
        span: SourceSpan,
    },

    #[error("unescaped `]` at byte {position}")]
    #[diagnostic(
        code(r3bl_render::markup::unescaped_close_bracket),
        help("Write a literal `]` as `]]`.")
    )]
    UnescapedCloseBracket {
        position: usize,
        #[source_code]
        source_code: String,
        #[label("here")]
        span: SourceSpan,
    },
}

impl MarkupParseError {
    /// Byte offset into the markup source.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            MarkupParseError::UnterminatedScope { position, .. }
            | MarkupParseError::StrayCloseTag { position, .. }
            | MarkupParseError::UnrecognizedStyleToken { position, .. }
            | MarkupParseError::MalformedTag { position, .. }
            | MarkupParseError::UnescapedCloseBracket { position, .. } => *position,
        }
    }

    pub(crate) fn unterminated_scope(source: &str, position: usize, len: usize) -> Self {
        MarkupParseError::UnterminatedScope {
            position,
            source_code: source.to_string(),
            span: (position, len).into(),
        }
    }

    pub(crate) fn stray_close_tag(source: &str, position: usize, len: usize) -> Self {
        MarkupParseError::StrayCloseTag {
            position,
            source_code: source.to_string(),
            span: (position, len).into(),
        }
    }

    pub(crate) fn unrecognized_style_token(
        source: &str,
        position: usize,
        token: &str,
        cause: Option<ColorParseError>,
    ) -> Self {
        MarkupParseError::UnrecognizedStyleToken {
            token: token.to_string(),
            position,
            cause,
            source_code: source.to_string(),
            span: (position, token.len()).into(),
        }
    }

    pub(crate) fn malformed_tag(source: &str, position: usize, len: usize) -> Self {
        MarkupParseError::MalformedTag {
            position,
            source_code: source.to_string(),
            span: (position, len).into(),
        }
    }

    pub(crate) fn unescaped_close_bracket(source: &str, position: usize) -> Self {
        MarkupParseError::UnescapedCloseBracket {
            position,
            source_code: source.to_string(),
            span: (position, 1).into(),
        }
    }
}
