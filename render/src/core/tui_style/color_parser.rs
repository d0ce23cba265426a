// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for the color literals that can appear in a markup tag:
//!
//! | Literal       | Example      | Result                 |
//! | :------------ | :----------- | :--------------------- |
//! | Hex           | `#FF0000`    | [`TuiColor::Rgb`]      |
//! | Short hex     | `#F00`       | [`TuiColor::Rgb`]      |
//! | RGB function  | `rgb(1,2,3)` | [`TuiColor::Rgb`]      |
//! | Palette index | `color(42)`  | [`TuiColor::Ansi`]     |
//! | Name          | `dark_red`   | See [`TuiColor::from_name`] |

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          character::complete::{digit1, space0},
          combinator::{all_consuming, map_res},
          sequence::delimited};

use crate::{AnsiValue, RgbValue, TuiColor};

mod constants {
    pub const HEX_COLOR_PREFIX: &str = "#";
    pub const RGB_FN_OPEN: &str = "rgb(";
    pub const PALETTE_FN_OPEN: &str = "color(";
    pub const FN_CLOSE: &str = ")";
    pub const ARG_SEPARATOR: &str = ",";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorParseError {
    #[error("invalid hex color `{0}`")]
    #[diagnostic(
        code(r3bl_render::color::invalid_hex),
        help("Hex colors are written as `#RRGGBB` or `#RGB`, eg: `#FF8000` or `#F80`.")
    )]
    InvalidHex(String),

    #[error("invalid rgb color `{0}`")]
    #[diagnostic(
        code(r3bl_render::color::invalid_rgb),
        help("RGB colors are written as `rgb(r,g,b)` with each value in 0..=255.")
    )]
    InvalidRgb(String),

    #[error("invalid palette color `{0}`")]
    #[diagnostic(
        code(r3bl_render::color::invalid_palette_index),
        help("Palette colors are written as `color(n)` with n in 0..=255.")
    )]
    InvalidPaletteIndex(String),

    #[error("unknown color name `{0}`")]
    #[diagnostic(code(r3bl_render::color::unknown_name))]
    UnknownName(String),
}

impl TuiColor {
    /// Parse a single color literal (see the [module docs](self) for the accepted
    /// forms). The whole input must be consumed.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] naming the literal that could not be parsed.
    pub fn try_parse(input: &str) -> Result<TuiColor, ColorParseError> {
        use constants::{HEX_COLOR_PREFIX, PALETTE_FN_OPEN, RGB_FN_OPEN};

        if input.starts_with(HEX_COLOR_PREFIX) {
            all_consuming(parse_hex_color)
                .parse(input)
                .map(|(_, rgb)| TuiColor::Rgb(rgb))
                .map_err(|_| ColorParseError::InvalidHex(input.to_string()))
        } else if input.starts_with(RGB_FN_OPEN) {
            all_consuming(parse_rgb_fn_color)
                .parse(input)
                .map(|(_, rgb)| TuiColor::Rgb(rgb))
                .map_err(|_| ColorParseError::InvalidRgb(input.to_string()))
        } else if input.starts_with(PALETTE_FN_OPEN) {
            all_consuming(parse_palette_fn_color)
                .parse(input)
                .map(|(_, ansi)| TuiColor::Ansi(ansi))
                .map_err(|_| ColorParseError::InvalidPaletteIndex(input.to_string()))
        } else {
            TuiColor::from_name(input)
                .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
        }
    }
}

/// Parse function that generates an [`RgbValue`] from a valid hex color string, eg:
/// `#FF0000` for red. The short form `#F00` repeats each digit, so it is the same color.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    use helper_fns::{parse_hex_digit, parse_hex_seg};
    let (input, _) = tag(constants::HEX_COLOR_PREFIX).parse(input)?;
    let (input, (red, green, blue)) = alt((
        (parse_hex_seg, parse_hex_seg, parse_hex_seg),
        (parse_hex_digit, parse_hex_digit, parse_hex_digit),
    ))
    .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Parse `rgb(r,g,b)`. Spaces are allowed around each number.
pub fn parse_rgb_fn_color(input: &str) -> IResult<&str, RgbValue> {
    use constants::{ARG_SEPARATOR, FN_CLOSE, RGB_FN_OPEN};
    let (input, (_, red, _, green, _, blue, _)) = (
        tag(RGB_FN_OPEN),
        helper_fns::parse_dec_u8,
        tag(ARG_SEPARATOR),
        helper_fns::parse_dec_u8,
        tag(ARG_SEPARATOR),
        helper_fns::parse_dec_u8,
        tag(FN_CLOSE),
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Parse `color(n)`, an index into the 256 color palette.
pub fn parse_palette_fn_color(input: &str) -> IResult<&str, AnsiValue> {
    use constants::{FN_CLOSE, PALETTE_FN_OPEN};
    let (input, index) =
        delimited(tag(PALETTE_FN_OPEN), helper_fns::parse_dec_u8, tag(FN_CLOSE))
            .parse(input)?;
    Ok((input, AnsiValue::new(index)))
}

/// Helper functions to match and parse digits.
mod helper_fns {
    use super::{IResult, Parser, delimited, digit1, map_res, space0, take_while_m_n};

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()), |it| {
            u8::from_str_radix(it, 16)
        })
        .parse(input)
    }

    /// A single hex digit, doubled, eg: `F` is `FF`.
    pub fn parse_hex_digit(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, |it: char| it.is_ascii_hexdigit()), |it| {
            u8::from_str_radix(it, 16).map(|digit| digit * 17)
        })
        .parse(input)
    }

    /// A decimal number that must fit in a [u8], eg: `255` is ok but `256` is not.
    pub fn parse_dec_u8(input: &str) -> IResult<&str, u8> {
        delimited(space0, map_res(digit1, str::parse::<u8>), space0).parse(input)
    }
}
