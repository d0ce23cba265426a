// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MarkupParseError, MarkupToken, Paragraph, ScopeStack, TuiStyle,
            TuiStyledTexts, constants::{TAG_CLOSE, TAG_OPEN}, parse_markup_token,
            parse_style_tokens, push_merged};

/// Parse `text` into a [`Paragraph`].
///
/// - Every run of literal text is tagged with the style on top of the scope stack,
///   which starts out with `base_style` (or the default style).
/// - `[spec]` pushes `spec` overlaid on the current style, and `[/]` (or `[/name]`)
///   pops it.
/// - `[[` and `]]` are a literal `[` and `]`.
/// - `\n` and `\r\n` start a new line.
///
/// Adjacent runs that end up with the same style are joined.
///
/// ```
/// use r3bl_render::{TuiStyle, parse_markup};
///
/// let paragraph = parse_markup("[bold]A[italic]B[/]C[/]", None).unwrap();
/// let runs = &paragraph.lines()[0];
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[1].get_text(), "B");
/// assert_eq!(runs[1].get_style(), &TuiStyle::bold().overlay(&TuiStyle::italic()));
/// ```
///
/// # Errors
///
/// Returns a [`MarkupParseError`] for the first problem found. No partial result is
/// returned.
pub fn parse_markup(
    text: &str,
    base_style: Option<TuiStyle>,
) -> Result<Paragraph, MarkupParseError> {
    let result = try_parse_lines(text, base_style.unwrap_or_default());
    if let Err(ref error) = result {
        tracing::debug!(
            message = "Markup parse failed",
            position = error.position(),
            error = %error
        );
    }
    result.map(Paragraph::new)
}

fn try_parse_lines(
    text: &str,
    base_style: TuiStyle,
) -> Result<Vec<TuiStyledTexts>, MarkupParseError> {
    let mut stack = ScopeStack::new(base_style);
    let mut lines = vec![];
    let mut current_line = TuiStyledTexts::new();
    let mut input = text;

    while !input.is_empty() {
        let position = text.len() - input.len();

        let Ok((remainder, token)) = parse_markup_token(input) else {
            return Err(classify_tokenizer_error(text, position, input));
        };
        let tag_len = input.len() - remainder.len();

        match token {
            MarkupToken::Text(it) => push_merged(&mut current_line, stack.current(), it),
            MarkupToken::EscapedOpen => {
                push_merged(&mut current_line, stack.current(), TAG_OPEN);
            }
            MarkupToken::EscapedClose => {
                push_merged(&mut current_line, stack.current(), TAG_CLOSE);
            }
            MarkupToken::NewLine => lines.push(std::mem::take(&mut current_line)),
            MarkupToken::OpenTag(body) => {
                if body.trim().is_empty() {
                    return Err(MarkupParseError::malformed_tag(text, position, tag_len));
                }
                let delta = parse_style_tokens(text, position + TAG_OPEN.len(), body)?;
                stack.push(&delta, position, tag_len);
            }
            MarkupToken::CloseTag => {
                if stack.pop().is_none() {
                    return Err(MarkupParseError::stray_close_tag(text, position, tag_len));
                }
            }
        }

        input = remainder;
    }

    if let Some(scope) = stack.innermost() {
        return Err(MarkupParseError::unterminated_scope(
            text,
            scope.position,
            scope.tag_len,
        ));
    }

    lines.push(current_line);
    Ok(lines)
}

/// The tokenizer only fails at a `[` that doesn't start a well formed tag, or at a
/// lone `]`.
fn classify_tokenizer_error(text: &str, position: usize, input: &str) -> MarkupParseError {
    if input.starts_with(TAG_CLOSE) {
        MarkupParseError::unescaped_close_bracket(text, position)
    } else {
        let len = input.find('\n').unwrap_or(input.len()).max(1);
        MarkupParseError::malformed_tag(text, position, len)
    }
}

/// Escape `text` so that [`parse_markup`] reads it back literally.
///
/// ```
/// use r3bl_render::{escape_markup, parse_markup};
///
/// let escaped = escape_markup("[not a tag]");
/// assert_eq!(escaped, "[[not a tag]]");
/// let paragraph = parse_markup(&escaped, None).unwrap();
/// assert_eq!(paragraph.lines()[0][0].get_text(), "[not a tag]");
/// ```
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '[' => acc.push_str("[["),
            ']' => acc.push_str("]]"),
            _ => acc.push(ch),
        }
    }
    acc
}
