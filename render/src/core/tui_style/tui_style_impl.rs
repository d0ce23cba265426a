// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          ops::{Add, AddAssign},
          sync::Arc};

use smallvec::SmallVec;

use super::TuiColor;

/// An immutable description of how a run of text should look: foreground and
/// background colors, a set of decorations, and an optional hyperlink.
///
/// Every attribute is an [`Option`], where [`None`] means "not specified, inherit". This
/// is what makes overlay composition work (see [`TuiStyle::overlay`]):
///
/// ```
/// use r3bl_render::{TuiStyle, tui_color, tui_style_attrib};
///
/// let base = TuiStyle {
///     bold: Some(tui_style_attrib::Bold),
///     color_fg: Some(tui_color!(red)),
///     ..Default::default()
/// };
/// let top = TuiStyle {
///     italic: Some(tui_style_attrib::Italic),
///     color_fg: Some(tui_color!(blue)),
///     ..Default::default()
/// };
///
/// let combined = base.overlay(&top);
/// assert!(combined.bold.is_some());
/// assert!(combined.italic.is_some());
/// assert_eq!(combined.color_fg, Some(tui_color!(blue)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct TuiStyle {
    // XMARK: Use of newtype pattern `Option<T>` instead of `bool`
    pub bold: Option<tui_style_attrib::Bold>,
    pub italic: Option<tui_style_attrib::Italic>,
    pub dim: Option<tui_style_attrib::Dim>,
    pub underline: Option<tui_style_attrib::Underline>,
    pub blink: Option<tui_style_attrib::Blink>,
    pub reverse: Option<tui_style_attrib::Reverse>,
    pub hidden: Option<tui_style_attrib::Hidden>,
    pub strikethrough: Option<tui_style_attrib::Strikethrough>,
    pub color_fg: Option<TuiColor>,
    pub color_bg: Option<TuiColor>,
    pub link: Option<tui_style_attrib::Link>,
}

pub mod tui_style_attrib {
    use super::Arc;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Bold;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Italic;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Dim;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Underline;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Blink;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Reverse;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Hidden;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Strikethrough;

    /// Hyperlink target. The URI is shared, so cloning a style never copies it.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Link(pub Arc<str>);

    impl Link {
        #[must_use]
        pub fn uri(&self) -> &str { &self.0 }
    }

    impl From<&str> for Link {
        fn from(uri: &str) -> Self { Link(Arc::from(uri)) }
    }

    impl From<String> for Link {
        fn from(uri: String) -> Self { Link(Arc::from(uri)) }
    }
}

impl TuiStyle {
    /// Overlay `other` on top of `self`. Each attribute that is set in `other` replaces
    /// the one in `self`; each attribute that is not set in `other` is inherited from
    /// `self`. Neither input is modified.
    #[must_use]
    pub fn overlay(&self, other: &TuiStyle) -> TuiStyle {
        TuiStyle {
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            dim: other.dim.or(self.dim),
            underline: other.underline.or(self.underline),
            blink: other.blink.or(self.blink),
            reverse: other.reverse.or(self.reverse),
            hidden: other.hidden.or(self.hidden),
            strikethrough: other.strikethrough.or(self.strikethrough),
            color_fg: other.color_fg.or(self.color_fg),
            color_bg: other.color_bg.or(self.color_bg),
            link: other.link.clone().or_else(|| self.link.clone()),
        }
    }

    /// `true` if nothing is specified, ie: this is the same as `TuiStyle::default()`.
    #[must_use]
    pub fn is_plain(&self) -> bool { *self == TuiStyle::default() }

    #[must_use]
    pub fn with_link(mut self, uri: impl Into<tui_style_attrib::Link>) -> Self {
        self.link = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_fg(mut self, color: TuiColor) -> Self {
        self.color_fg = Some(color);
        self
    }

    #[must_use]
    pub fn with_bg(mut self, color: TuiColor) -> Self {
        self.color_bg = Some(color);
        self
    }

    #[must_use]
    pub fn bold() -> Self {
        TuiStyle {
            bold: Some(tui_style_attrib::Bold),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn italic() -> Self {
        TuiStyle {
            italic: Some(tui_style_attrib::Italic),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn dim() -> Self {
        TuiStyle {
            dim: Some(tui_style_attrib::Dim),
            ..Default::default()
        }
    }
}

mod addition {
    use super::{Add, AddAssign, TuiStyle};

    /// `lhs + rhs` is `lhs.overlay(&rhs)`.
    impl Add for TuiStyle {
        type Output = Self;
        fn add(self, other: Self) -> Self { self.overlay(&other) }
    }

    impl AddAssign<&TuiStyle> for TuiStyle {
        fn add_assign(&mut self, rhs: &TuiStyle) { *self = self.overlay(rhs); }
    }
}

mod style_helper {
    use super::{Debug, Formatter, SmallVec, TuiStyle};

    impl Debug for TuiStyle {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            // This accumulator is needed to be able to add `+` delimiter between
            // attributes.
            let mut acc_attrs: SmallVec<[&str; 8]> = SmallVec::new();

            if self.bold.is_some() {
                acc_attrs.push("bold");
            }

            if self.italic.is_some() {
                acc_attrs.push("italic");
            }

            if self.dim.is_some() {
                acc_attrs.push("dim");
            }

            if self.underline.is_some() {
                acc_attrs.push("underline");
            }

            if self.blink.is_some() {
                acc_attrs.push("blink");
            }

            if self.reverse.is_some() {
                acc_attrs.push("reverse");
            }

            if self.hidden.is_some() {
                acc_attrs.push("hidden");
            }

            if self.strikethrough.is_some() {
                acc_attrs.push("strikethrough");
            }

            write!(
                f,
                "Style {{ {attrs} | fg: {fg:?} | bg: {bg:?} | link: {link:?} }}",
                attrs = acc_attrs.join(" + "),
                fg = self.color_fg,
                bg = self.color_bg,
                link = self.link.as_ref().map(super::tui_style_attrib::Link::uri),
            )
        }
    }
}

#[cfg(test)]
mod test_style {
    use super::*;
    use crate::{assert_eq2, tui_color};

    #[test]
    fn test_overlay_replaces_present_and_inherits_absent() {
        let base = TuiStyle {
            bold: Some(tui_style_attrib::Bold),
            color_fg: Some(tui_color!(red)),
            color_bg: Some(tui_color!(white)),
            ..Default::default()
        }
        .with_link("https://r3bl.com");
        let top = TuiStyle {
            italic: Some(tui_style_attrib::Italic),
            color_fg: Some(tui_color!(blue)),
            ..Default::default()
        };

        let combined = base.overlay(&top);

        assert!(combined.bold.is_some());
        assert!(combined.italic.is_some());
        assert_eq2!(combined.color_fg, Some(tui_color!(blue)));
        assert_eq2!(combined.color_bg, Some(tui_color!(white)));
        assert_eq2!(
            combined.link.as_ref().map(tui_style_attrib::Link::uri),
            Some("https://r3bl.com")
        );
    }

    #[test]
    fn test_overlay_leaves_inputs_untouched() {
        let base = TuiStyle::bold();
        let top = TuiStyle::italic();
        let _ = base.overlay(&top);
        assert_eq2!(base, TuiStyle::bold());
        assert_eq2!(top, TuiStyle::italic());
    }

    #[test]
    fn test_reset_color_overrides_inherited() {
        let base = TuiStyle::default().with_fg(tui_color!(red));
        let top = TuiStyle::default().with_fg(tui_color!(reset));
        assert_eq2!((base + top).color_fg, Some(TuiColor::Reset));
    }

    #[test]
    fn test_add_assign() {
        let mut style = TuiStyle::bold();
        style += &TuiStyle::dim();
        assert!(style.bold.is_some());
        assert!(style.dim.is_some());
        assert!(!style.is_plain());
        assert!(TuiStyle::default().is_plain());
    }

    #[test]
    fn test_debug_lists_only_set_attributes() {
        let style = TuiStyle::bold().overlay(&TuiStyle::italic());
        let it = format!("{style:?}");
        assert!(it.starts_with("Style { bold + italic |"));
    }
}
