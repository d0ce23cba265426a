// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// Creates a [`TuiColor`] instance using various convenient syntaxes.
///
/// ```
/// use r3bl_render::{TuiColor, ANSIBasicColor, tui_color};
///
/// assert_eq!(tui_color!(red), TuiColor::Basic(ANSIBasicColor::Red));
/// let _custom = tui_color!(255, 128, 0);
/// let _ansi = tui_color!(ansi 42);
/// ```
#[macro_export]
macro_rules! tui_color {
    (reset) => {
        $crate::TuiColor::Reset
    };

    (red) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::Red)
    };

    (green) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::Green)
    };

    (yellow) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::Yellow)
    };

    (blue) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::Blue)
    };

    (white) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::White)
    };

    (gray) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::Gray)
    };

    (dark_gray) => {
        $crate::TuiColor::Basic($crate::ANSIBasicColor::DarkGray)
    };

    (
        ansi $arg_value : expr
    ) => {
        $crate::TuiColor::Ansi($crate::AnsiValue::new($arg_value))
    };

    (
        $arg_r : expr,
        $arg_g : expr,
        $arg_b : expr
        $(,)? /* optional trailing comma */
    ) => {
        $crate::TuiColor::Rgb($crate::RgbValue::from_u8($arg_r, $arg_g, $arg_b))
    };
}

/// A color reference. How it turns into terminal bytes (and how it is degraded when the
/// terminal can't display it) is the concern of the output sink, not of this crate.
///
/// - [`TuiColor::Reset`] is an explicit request for the terminal's default color. Since
///   it is a value, it overrides an inherited color when styles are overlaid.
#[derive(Clone, PartialEq, Eq, Copy, Hash, Debug)]
pub enum TuiColor {
    Reset,
    /// ANSI 16 basic colors.
    Basic(ANSIBasicColor),
    /// An RGB color. See [RGB color model] for more info.
    ///
    /// [RGB color model]: https://en.wikipedia.org/wiki/RGB_color_model
    Rgb(RgbValue),
    /// An index into the 256 color palette. See [256 colors - cheat sheet].
    ///
    /// [256 colors - cheat sheet]: https://jonasjacek.github.io/colors/
    Ansi(AnsiValue),
}

#[derive(Clone, PartialEq, Eq, Copy, Hash, Debug, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ANSIBasicColor {
    Black,
    White,
    Gray,
    DarkGray,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
}

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// An index into the 256 color palette.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct AnsiValue {
    pub index: u8,
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

mod convenience_conversions {
    use super::{ANSIBasicColor, AnsiValue, RgbValue, TuiColor};

    impl From<ANSIBasicColor> for TuiColor {
        fn from(basic_color: ANSIBasicColor) -> Self { TuiColor::Basic(basic_color) }
    }

    impl From<RgbValue> for TuiColor {
        fn from(rgb_value: RgbValue) -> Self { TuiColor::Rgb(rgb_value) }
    }

    impl From<AnsiValue> for TuiColor {
        fn from(ansi_value: AnsiValue) -> Self { TuiColor::Ansi(ansi_value) }
    }
}

/// Names that markup can use to refer to a color, in addition to the snake case names of
/// [`ANSIBasicColor`] (eg: `dark_red`).
pub const NAMED_COLORS: &[(&str, TuiColor)] = &[
    // Aliases for the basic colors.
    ("grey", TuiColor::Basic(ANSIBasicColor::Gray)),
    ("maroon", TuiColor::Basic(ANSIBasicColor::DarkRed)),
    ("olive", TuiColor::Basic(ANSIBasicColor::DarkYellow)),
    ("navy", TuiColor::Basic(ANSIBasicColor::DarkBlue)),
    ("purple", TuiColor::Basic(ANSIBasicColor::DarkMagenta)),
    ("teal", TuiColor::Basic(ANSIBasicColor::DarkCyan)),
    ("silver", TuiColor::Basic(ANSIBasicColor::Gray)),
    ("lime", TuiColor::Basic(ANSIBasicColor::Green)),
    ("fuchsia", TuiColor::Basic(ANSIBasicColor::Magenta)),
    ("aqua", TuiColor::Basic(ANSIBasicColor::Cyan)),
    // Truecolor palette.
    ("lizard_green", TuiColor::Rgb(RgbValue::from_u8(20, 244, 0))),
    ("dark_lizard_green", TuiColor::Rgb(RgbValue::from_u8(10, 122, 0))),
    ("hot_pink", TuiColor::Rgb(RgbValue::from_u8(255, 0, 214))),
    ("soft_pink", TuiColor::Rgb(RgbValue::from_u8(255, 181, 234))),
    ("lavender", TuiColor::Rgb(RgbValue::from_u8(203, 170, 250))),
    ("sky_blue", TuiColor::Rgb(RgbValue::from_u8(117, 215, 236))),
    ("frozen_blue", TuiColor::Rgb(RgbValue::from_u8(171, 204, 242))),
    ("slate_gray", TuiColor::Rgb(RgbValue::from_u8(94, 103, 111))),
    ("silver_metallic", TuiColor::Rgb(RgbValue::from_u8(213, 217, 220))),
    ("guards_red", TuiColor::Rgb(RgbValue::from_u8(200, 1, 1))),
    ("orange", TuiColor::Rgb(RgbValue::from_u8(255, 132, 18))),
    ("night_blue", TuiColor::Rgb(RgbValue::from_u8(14, 17, 23))),
];

impl TuiColor {
    /// Look up a color by name. Names are case insensitive.
    ///
    /// ```
    /// use r3bl_render::{ANSIBasicColor, TuiColor};
    ///
    /// assert_eq!(TuiColor::from_name("Dark_Red"), Some(TuiColor::Basic(ANSIBasicColor::DarkRed)));
    /// assert_eq!(TuiColor::from_name("no_such_color"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<TuiColor> {
        let name = name.to_ascii_lowercase();
        if let Ok(basic) = name.parse::<ANSIBasicColor>() {
            return Some(TuiColor::Basic(basic));
        }
        NAMED_COLORS
            .iter()
            .find(|(it, _)| *it == name)
            .map(|(_, color)| *color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_every_basic_color_is_reachable_by_name() {
        for basic in ANSIBasicColor::iter() {
            let name = basic.to_string();
            assert_eq2!(TuiColor::from_name(&name), Some(TuiColor::Basic(basic)));
        }
    }

    #[test_case("red", tui_color!(red))]
    #[test_case("RED", tui_color!(red))]
    #[test_case("grey", tui_color!(gray))]
    #[test_case("orange", tui_color!(255, 132, 18))]
    fn test_from_name(name: &str, expected: TuiColor) {
        assert_eq2!(TuiColor::from_name(name), Some(expected));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq2!(TuiColor::from_name("bolt"), None);
    }
}
