// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MarkupParseError, TuiColor, TuiStyle,
            constants::{BACKGROUND_PREFIX, DEFAULT_COLOR, LINK_PREFIX},
            tui_style_attrib};

/// Parse the body of an open tag (eg: `bold not_a_color on red`) into the style that
/// the tag overlays onto the enclosing scope. Tokens are applied left to right, so when
/// the same attribute is set more than once, the last token wins.
///
/// `body_position` is the byte offset of `body` in `source`, and is used to report the
/// position of a bad token.
///
/// # Errors
///
/// Returns [`MarkupParseError::UnrecognizedStyleToken`] for the first token that isn't
/// a decoration, a color, `on <color>`, or `link=<uri>`.
pub fn parse_style_tokens(
    source: &str,
    body_position: usize,
    body: &str,
) -> Result<TuiStyle, MarkupParseError> {
    let mut acc = TuiStyle::default();
    let mut tokens = tokens_with_offsets(body);

    while let Some((offset, token)) = tokens.next() {
        let position = body_position + offset;

        let delta = if token.eq_ignore_ascii_case(BACKGROUND_PREFIX) {
            let Some((color_offset, color_token)) = tokens.next() else {
                return Err(MarkupParseError::unrecognized_style_token(
                    source, position, token, None,
                ));
            };
            let color = parse_color_token(source, body_position + color_offset, color_token)?;
            TuiStyle::default().with_bg(color)
        } else if let Some(uri) = token.strip_prefix(LINK_PREFIX) {
            if uri.is_empty() {
                return Err(MarkupParseError::unrecognized_style_token(
                    source, position, token, None,
                ));
            }
            TuiStyle::default().with_link(uri)
        } else if let Some(style) = parse_decoration(token) {
            style
        } else {
            TuiStyle::default().with_fg(parse_color_token(source, position, token)?)
        };

        acc += &delta;
    }

    Ok(acc)
}

/// Decoration keywords and their short forms.
#[must_use]
pub fn parse_decoration(token: &str) -> Option<TuiStyle> {
    let token = token.to_ascii_lowercase();
    let style = match token.as_str() {
        "bold" | "b" => TuiStyle::bold(),
        "italic" | "i" => TuiStyle::italic(),
        "dim" => TuiStyle::dim(),
        "underline" | "u" => TuiStyle {
            underline: Some(tui_style_attrib::Underline),
            ..Default::default()
        },
        "blink" | "slowblink" | "rapidblink" => TuiStyle {
            blink: Some(tui_style_attrib::Blink),
            ..Default::default()
        },
        "reverse" | "invert" => TuiStyle {
            reverse: Some(tui_style_attrib::Reverse),
            ..Default::default()
        },
        "hidden" | "conceal" => TuiStyle {
            hidden: Some(tui_style_attrib::Hidden),
            ..Default::default()
        },
        "strikethrough" | "strike" | "s" => TuiStyle {
            strikethrough: Some(tui_style_attrib::Strikethrough),
            ..Default::default()
        },
        _ => return None,
    };
    Some(style)
}

fn parse_color_token(
    source: &str,
    position: usize,
    token: &str,
) -> Result<TuiColor, MarkupParseError> {
    if token.eq_ignore_ascii_case(DEFAULT_COLOR) {
        return Ok(TuiColor::Reset);
    }
    TuiColor::try_parse(token).map_err(|error| {
        MarkupParseError::unrecognized_style_token(source, position, token, Some(error))
    })
}

/// Whitespace separated tokens, along with their byte offset in `body`.
fn tokens_with_offsets(body: &str) -> impl Iterator<Item = (usize, &str)> {
    body.split_whitespace()
        .map(move |token| (token.as_ptr() as usize - body.as_ptr() as usize, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorParseError, assert_eq2, tui_color};
    use test_case::test_case;

    #[test]
    fn test_decorations_and_colors_compose() {
        let style = parse_style_tokens("[b u red on #0000ff]", 1, "b u red on #0000ff").unwrap();
        assert!(style.bold.is_some());
        assert!(style.underline.is_some());
        assert!(style.italic.is_none());
        assert_eq2!(style.color_fg, Some(tui_color!(red)));
        assert_eq2!(style.color_bg, Some(tui_color!(0, 0, 255)));
    }

    #[test]
    fn test_short_hex_colors() {
        let style = parse_style_tokens("[#f00 on #0f0]", 1, "#f00 on #0f0").unwrap();
        assert_eq2!(style.color_fg, Some(tui_color!(255, 0, 0)));
        assert_eq2!(style.color_bg, Some(tui_color!(0, 255, 0)));
    }

    #[test]
    fn test_last_token_wins_for_same_attribute() {
        let style = parse_style_tokens("", 0, "red blue on green on default").unwrap();
        assert_eq2!(style.color_fg, Some(tui_color!(blue)));
        assert_eq2!(style.color_bg, Some(TuiColor::Reset));
    }

    #[test]
    fn test_link_token() {
        let style = parse_style_tokens("", 0, "link=https://r3bl.com italic").unwrap();
        assert_eq2!(
            style.link.as_ref().map(tui_style_attrib::Link::uri),
            Some("https://r3bl.com")
        );
        assert!(style.italic.is_some());
    }

    #[test_case("bold sparkly", 6, "sparkly")]
    #[test_case("on", 0, "on")]
    #[test_case("bold on", 5, "on")]
    #[test_case("link italic", 0, "link")]
    #[test_case("link=", 0, "link=")]
    #[test_case("on #12345", 3, "#12345")]
    fn test_unrecognized_token(body: &str, offset: usize, expected_token: &str) {
        let source = format!("[{body}]");
        let Err(error) = parse_style_tokens(&source, 1, body) else {
            panic!("expected an error for {body:?}");
        };
        assert_eq2!(error.position(), 1 + offset);
        let MarkupParseError::UnrecognizedStyleToken { token, .. } = error else {
            panic!("unexpected error {error:?}");
        };
        assert_eq2!(token, expected_token);
    }

    #[test]
    fn test_color_error_is_kept_as_cause() {
        let Err(MarkupParseError::UnrecognizedStyleToken { cause, .. }) =
            parse_style_tokens("", 0, "rgb(1,2,300)")
        else {
            panic!();
        };
        assert_eq2!(cause, Some(ColorParseError::InvalidRgb("rgb(1,2,300)".into())));
    }

    #[test]
    fn test_decoration_is_case_insensitive() {
        assert_eq2!(parse_decoration("BOLD"), Some(TuiStyle::bold()));
        assert_eq2!(parse_decoration("sparkly"), None);
    }
}
