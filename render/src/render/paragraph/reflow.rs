// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fit one line of [`Glyph`]s into a given width, according to an [`Overflow`] policy,
//! and then fill the result out according to a [`Justify`] policy.

use crate::{EnumeratePositionsExt, Glyph, Glyphs, Justify, Overflow, Segment,
            glyphs_width, push_glyphs_as_segments};

/// Apply `overflow` to a single source line. Always returns at least one output line,
/// and no output line is wider than `width`.
#[must_use]
pub fn reflow_line<'a>(
    glyphs: &[Glyph<'a>],
    width: usize,
    overflow: Overflow,
    ellipsis: &'a str,
) -> Vec<Glyphs<'a>> {
    match overflow {
        Overflow::Fold => fold(glyphs, width),
        Overflow::Crop => vec![crop(glyphs, width)],
        Overflow::Ellipsis => vec![crop_with_ellipsis(glyphs, width, ellipsis)],
    }
}

/// Wrap at word boundaries. Whitespace at a wrap point is dropped, as is the leading
/// whitespace of continuation lines. A word wider than `width` is broken between
/// glyphs, and a glyph wider than `width` is dropped.
#[must_use]
pub fn fold<'a>(glyphs: &[Glyph<'a>], width: usize) -> Vec<Glyphs<'a>> {
    let mut lines: Vec<Glyphs<'a>> = vec![];
    let mut current: Glyphs<'a> = vec![];
    let mut current_width = 0;

    for token in split_words(glyphs) {
        let token_width = glyphs_width(token);
        let is_whitespace = token.iter().all(Glyph::is_whitespace);

        if current_width + token_width <= width {
            // Continuation lines don't start with whitespace.
            if !(is_whitespace && current.is_empty() && !lines.is_empty()) {
                current.extend_from_slice(token);
                current_width += token_width;
            }
            continue;
        }

        if is_whitespace {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            continue;
        }

        if !current.is_empty() {
            trim_trailing_whitespace(&mut current);
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if token_width <= width {
            current.extend_from_slice(token);
            current_width = token_width;
            continue;
        }

        // Hard break.
        for glyph in token.iter().filter(|it| it.width <= width) {
            if current_width + glyph.width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(*glyph);
            current_width += glyph.width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Keep the glyphs that fit, drop the rest.
#[must_use]
pub fn crop<'a>(glyphs: &[Glyph<'a>], width: usize) -> Glyphs<'a> {
    let mut acc_width = 0;
    glyphs
        .iter()
        .take_while(|it| {
            acc_width += it.width;
            acc_width <= width
        })
        .copied()
        .collect()
}

/// Like [`crop`], but if anything was cut off, make room for `ellipsis` and add it at
/// the end (in the style of the last glyph that was kept). If even the ellipsis doesn't
/// fit, this is the same as [`crop`].
#[must_use]
pub fn crop_with_ellipsis<'a>(
    glyphs: &[Glyph<'a>],
    width: usize,
    ellipsis: &'a str,
) -> Glyphs<'a> {
    if glyphs_width(glyphs) <= width {
        return glyphs.to_vec();
    }

    let Some(last) = glyphs.last() else {
        return vec![];
    };

    let marker = Glyph::new(ellipsis, last.style);
    if marker.width > width {
        return crop(glyphs, width);
    }

    let mut acc = crop(glyphs, width - marker.width);
    trim_trailing_whitespace(&mut acc);
    let style = acc.last().map_or(last.style, |it| it.style);
    acc.push(Glyph { style, ..marker });
    acc
}

/// Fill `line` out to `width` according to `justify` and append it to `acc`, followed
/// by a [`Segment::LineBreak`]. `is_last` is whether this is the last output line of
/// its source line, which [`Justify::Full`] leaves ragged.
pub fn push_justified_line(
    line: &[Glyph<'_>],
    width: usize,
    justify: Option<Justify>,
    is_last: bool,
    acc: &mut Vec<Segment>,
) {
    let extra = width.saturating_sub(glyphs_width(line));

    let (lead, trail) = match justify {
        None => (0, 0),
        Some(Justify::Left) => (0, extra),
        Some(Justify::Center) => (extra / 2, extra - extra / 2),
        Some(Justify::Right) => (extra, 0),
        Some(Justify::Full) if !is_last => match spread_words(line, extra) {
            Some(spread) => {
                push_glyphs_as_segments(&spread, acc);
                acc.push(Segment::LineBreak);
                return;
            }
            None => (0, extra),
        },
        Some(Justify::Full) => (0, extra),
    };

    if lead > 0 {
        acc.push(Segment::padding(lead));
    }
    push_glyphs_as_segments(line, acc);
    if trail > 0 {
        acc.push(Segment::padding(trail));
    }
    acc.push(Segment::LineBreak);
}

/// Apply `overflow` and `justify` to every source line and emit the segments.
pub fn push_reflowed_lines(
    line: &[Glyph<'_>],
    width: usize,
    overflow: Overflow,
    justify: Option<Justify>,
    ellipsis: &str,
    acc: &mut Vec<Segment>,
) {
    for (position, output_line) in reflow_line(line, width, overflow, ellipsis)
        .into_iter()
        .enumerate_positions()
    {
        push_justified_line(&output_line, width, justify, position.is_last, acc);
    }
}

/// Distribute `extra` spaces over the whitespace gaps between words. Returns [`None`]
/// if there are no gaps.
fn spread_words<'a>(line: &[Glyph<'a>], extra: usize) -> Option<Glyphs<'a>> {
    let tokens = split_words(line).collect::<Vec<_>>();
    let gap_count = tokens
        .iter()
        .filter(|it| it.iter().all(Glyph::is_whitespace))
        .count();

    if gap_count == 0 {
        return None;
    }

    let (per_gap, remainder) = (extra / gap_count, extra % gap_count);
    let mut acc = Glyphs::with_capacity(line.len() + extra);
    let mut gap_index = 0;

    for token in tokens {
        acc.extend_from_slice(token);
        if let Some(last) = token.last().filter(|it| it.is_whitespace()) {
            let count = per_gap + usize::from(gap_index < remainder);
            acc.extend(std::iter::repeat_n(Glyph::new(" ", last.style), count));
            gap_index += 1;
        }
    }

    Some(acc)
}

/// Split glyphs into alternating runs of whitespace and non whitespace.
fn split_words<'a, 'b>(glyphs: &'b [Glyph<'a>]) -> impl Iterator<Item = &'b [Glyph<'a>]> {
    glyphs.chunk_by(|lhs, rhs| lhs.is_whitespace() == rhs.is_whitespace())
}

fn trim_trailing_whitespace(glyphs: &mut Glyphs<'_>) {
    while glyphs.last().is_some_and(Glyph::is_whitespace) {
        glyphs.pop();
    }
}

/// The widest run of non whitespace glyphs, ie: the narrowest a folded line can be
/// without breaking a word.
#[must_use]
pub fn widest_word(glyphs: &[Glyph<'_>]) -> usize {
    split_words(glyphs)
        .filter(|it| !it.iter().all(Glyph::is_whitespace))
        .map(glyphs_width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TuiStyle, assert_eq2, line_text, split_lines};
    use test_case::test_case;

    fn glyphs<'a>(text: &'a str, style: &'a TuiStyle) -> Glyphs<'a> {
        crate::graphemes_with_width(text)
            .map(|(text, width)| Glyph { text, width, style })
            .collect()
    }

    fn texts(lines: &[Glyphs<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.iter().map(|it| it.text).collect())
            .collect()
    }

    #[test_case("hello world", 5, &["hello", "world"])]
    #[test_case("hello world", 11, &["hello world"])]
    #[test_case("hello world", 8, &["hello", "world"])]
    #[test_case("a b c d", 3, &["a b", "c d"])]
    #[test_case("abcdefgh", 3, &["abc", "def", "gh"])]
    #[test_case("ab cdefgh", 4, &["ab", "cdef", "gh"])]
    #[test_case("  indented", 10, &["  indented"])]
    #[test_case("", 5, &[""])]
    #[test_case("日本語", 3, &["日", "本", "語"])]
    #[test_case("日本語", 1, &[""])]
    fn test_fold(input: &str, width: usize, expected: &[&str]) {
        let style = TuiStyle::default();
        let lines = fold(&glyphs(input, &style), width);
        assert_eq2!(texts(&lines), expected.to_vec());
        for line in &lines {
            assert!(glyphs_width(line) <= width);
        }
    }

    #[test_case("hello world", 5, "hello")]
    #[test_case("hi", 5, "hi")]
    #[test_case("日本語", 5, "日本")]
    fn test_crop(input: &str, width: usize, expected: &str) {
        let style = TuiStyle::default();
        assert_eq2!(texts(&[crop(&glyphs(input, &style), width)]), vec![expected]);
    }

    #[test_case("hello world", 8, "…", "hello w…")]
    #[test_case("hello world", 6, "…", "hello…")]
    #[test_case("hello world", 11, "…", "hello world")]
    #[test_case("hello world", 7, "...", "hell...")]
    #[test_case("hello world", 2, "...", "he")]
    fn test_crop_with_ellipsis(input: &str, width: usize, ellipsis: &str, expected: &str) {
        let style = TuiStyle::default();
        let line = crop_with_ellipsis(&glyphs(input, &style), width, ellipsis);
        assert_eq2!(texts(&[line.clone()]), vec![expected]);
        assert!(glyphs_width(&line) <= width);
    }

    #[test]
    fn test_ellipsis_takes_style_of_last_kept_glyph() {
        let bold = TuiStyle::bold();
        let line = crop_with_ellipsis(&glyphs("abcdef", &bold), 4, "…");
        assert_eq2!(line.last().map(|it| it.style), Some(&bold));
    }

    #[test_case(None, "ab")]
    #[test_case(Some(Justify::Left), "ab    ")]
    #[test_case(Some(Justify::Center), "  ab  ")]
    #[test_case(Some(Justify::Right), "    ab")]
    #[test_case(Some(Justify::Full), "ab    ")]
    fn test_justify_single_line(justify: Option<Justify>, expected: &str) {
        let style = TuiStyle::default();
        let mut acc = vec![];
        push_justified_line(&glyphs("ab", &style), 6, justify, true, &mut acc);
        let lines = split_lines(acc).collect::<Vec<_>>();
        assert_eq2!(lines.len(), 1);
        assert_eq2!(line_text(&lines[0]).as_str(), expected);
    }

    #[test]
    fn test_full_justify_spreads_all_but_last_line() {
        let style = TuiStyle::default();
        let mut acc = vec![];
        push_reflowed_lines(
            &glyphs("a b c d e", &style),
            6,
            Overflow::Fold,
            Some(Justify::Full),
            "…",
            &mut acc,
        );
        let lines = split_lines(acc)
            .map(|it| line_text(&it).to_string())
            .collect::<Vec<_>>();
        assert_eq2!(lines, vec!["a  b c".to_string(), "d e   ".to_string()]);
    }

    #[test]
    fn test_widest_word() {
        let style = TuiStyle::default();
        assert_eq2!(widest_word(&glyphs("a bbb  cc", &style)), 3);
        assert_eq2!(widest_word(&glyphs("   ", &style)), 0);
    }
}
