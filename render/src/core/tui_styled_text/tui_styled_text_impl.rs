// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;

use crate::{TuiStyle, cell_width_str};

/// Default internal storage for [`TuiStyledText`]. Most runs produced by markup are a
/// word or two, so they stay inline.
pub type StringTuiStyledText = SmallString<[u8; MAX_CHARS_IN_SMALL_STRING]>;
const MAX_CHARS_IN_SMALL_STRING: usize = 16;

/// One line of styled runs.
pub type TuiStyledTexts = Vec<TuiStyledText>;

/// Macro to make building [`TuiStyledText`] easy.
///
/// ```
/// use r3bl_render::*;
///
/// let style = TuiStyle::default();
/// let st = tui_styled_text!(@style: style, @text: "Hello World");
/// assert_eq!(st.get_text(), "Hello World");
/// ```
#[macro_export]
macro_rules! tui_styled_text {
    (
        @style: $style_arg: expr,
        @text: $text_arg: expr
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) => {
        $crate::TuiStyledText::new($style_arg, $text_arg)
    };
}

/// A run of text that shares a single [`TuiStyle`]. Use [`tui_styled_text`!] macro for
/// easier construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiStyledText {
    pub style: TuiStyle,
    pub text: StringTuiStyledText,
}

impl TuiStyledText {
    pub fn new(style: TuiStyle, arg_styled_text: impl AsRef<str>) -> Self {
        TuiStyledText {
            style,
            text: StringTuiStyledText::from_str(arg_styled_text.as_ref()),
        }
    }

    #[must_use]
    pub fn get_text(&self) -> &str { self.text.as_str() }

    #[must_use]
    pub fn get_style(&self) -> &TuiStyle { &self.style }

    #[must_use]
    pub fn cell_width(&self) -> usize { cell_width_str(&self.text) }
}

/// Append `text` to the last run in `line` if it has the same style, otherwise start a
/// new run. Empty text is ignored.
pub fn push_merged(line: &mut TuiStyledTexts, style: &TuiStyle, text: &str) {
    if text.is_empty() {
        return;
    }
    match line.last_mut() {
        Some(last) if last.style == *style => last.text.push_str(text),
        _ => line.push(TuiStyledText::new(style.clone(), text)),
    }
}
