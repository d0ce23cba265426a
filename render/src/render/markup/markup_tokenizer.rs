// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Split markup source into [`MarkupToken`]s. This layer only knows about brackets and
//! line endings. The meaning of a tag body is handled by
//! [`parse_style_tokens`](crate::parse_style_tokens), and scoping by
//! [`ScopeStack`](crate::ScopeStack).

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{is_not, tag, take_till},
          combinator::{map, value},
          sequence::delimited};

use crate::constants::{CARRIAGE_RETURN, CLOSE_TAG_OPEN, ESCAPED_TAG_CLOSE,
                       ESCAPED_TAG_OPEN, NEW_LINE, NEW_LINE_CRLF, TAG_BODY_STOP_CHARS,
                       TAG_CLOSE, TAG_OPEN, TEXT_STOP_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupToken<'a> {
    /// Literal text that contains no brackets and no line endings.
    Text(&'a str),
    /// `[[`, ie: a literal `[`.
    EscapedOpen,
    /// `]]`, ie: a literal `]`.
    EscapedClose,
    /// The body of an open tag, eg: `bold red` for `[bold red]`.
    OpenTag(&'a str),
    /// `[/]` or `[/name]`. The name is ignored.
    CloseTag,
    /// `\n` or `\r\n`.
    NewLine,
}

/// Parse a single token from the start of `input`. The parsers are tried in order,
/// and the first one that matches wins.
///
/// ```
/// use r3bl_render::{MarkupToken, parse_markup_token};
///
/// assert_eq!(parse_markup_token("[[x"), Ok(("x", MarkupToken::EscapedOpen)));
/// assert_eq!(parse_markup_token("[b]x"), Ok(("x", MarkupToken::OpenTag("b"))));
/// assert_eq!(parse_markup_token("a[/]"), Ok(("[/]", MarkupToken::Text("a"))));
/// ```
///
/// # Errors
///
/// Returns a [`nom`] error if `input` starts with a `[` that doesn't begin a well
/// formed tag, or with a lone `]`.
pub fn parse_markup_token(input: &str) -> IResult<&str, MarkupToken<'_>> {
    alt((
        value(MarkupToken::EscapedOpen, tag(ESCAPED_TAG_OPEN)),
        value(MarkupToken::EscapedClose, tag(ESCAPED_TAG_CLOSE)),
        value(MarkupToken::NewLine, alt((tag(NEW_LINE_CRLF), tag(NEW_LINE)))),
        value(
            MarkupToken::CloseTag,
            delimited(
                tag(CLOSE_TAG_OPEN),
                take_till(|it: char| TAG_BODY_STOP_CHARS.contains(it)),
                tag(TAG_CLOSE),
            ),
        ),
        map(
            delimited(tag(TAG_OPEN), is_not(TAG_BODY_STOP_CHARS), tag(TAG_CLOSE)),
            MarkupToken::OpenTag,
        ),
        map(is_not(TEXT_STOP_CHARS), MarkupToken::Text),
        // A carriage return that isn't part of `\r\n` is kept as text.
        map(tag(CARRIAGE_RETURN), MarkupToken::Text),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("plain text", "", MarkupToken::Text("plain text"))]
    #[test_case("]]rest", "rest", MarkupToken::EscapedClose)]
    #[test_case("\r\nrest", "rest", MarkupToken::NewLine)]
    #[test_case("\nrest", "rest", MarkupToken::NewLine)]
    #[test_case("\rrest", "rest", MarkupToken::Text("\r"))]
    #[test_case("[/]rest", "rest", MarkupToken::CloseTag)]
    #[test_case("[/bold]rest", "rest", MarkupToken::CloseTag)]
    #[test_case("[bold on red]rest", "rest", MarkupToken::OpenTag("bold on red"))]
    #[test_case("[link=https://r3bl.com]x", "x", MarkupToken::OpenTag("link=https://r3bl.com"))]
    fn test_parse_markup_token(input: &str, remainder: &str, expected: MarkupToken<'_>) {
        assert_eq2!(parse_markup_token(input), Ok((remainder, expected)));
    }

    #[test_case("[")]
    #[test_case("[]")]
    #[test_case("[bold")]
    #[test_case("[bo[ld]")]
    #[test_case("[bo\nld]")]
    #[test_case("]")]
    #[test_case("")]
    fn test_parse_markup_token_fails(input: &str) {
        assert!(parse_markup_token(input).is_err());
    }
}
