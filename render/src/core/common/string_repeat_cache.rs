// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Padding is emitted for every line of every box, every render pass. Instead of calling
//! [`str::repeat`] each time, common widths are served from a static cache.

use std::{borrow::Cow, sync::LazyLock};

pub const SPACE: &str = " ";

/// Largest run of spaces kept in [`SPACE_CACHE`]. Covers the width of most terminals.
const MAX_CACHED_SPACES: usize = 256;

/// Pre-computed space strings, indexed by their length.
static SPACE_CACHE: LazyLock<Vec<String>> =
    LazyLock::new(|| (0..=MAX_CACHED_SPACES).map(|it| SPACE.repeat(it)).collect());

/// Get a string of `count` spaces. Falls back to allocation for counts larger than
/// [`MAX_CACHED_SPACES`].
///
/// ```
/// use r3bl_render::get_spaces;
///
/// assert_eq!(get_spaces(3), "   ");
/// assert_eq!(get_spaces(1000).len(), 1000);
/// ```
#[must_use]
pub fn get_spaces(count: usize) -> Cow<'static, str> {
    match SPACE_CACHE.get(count) {
        Some(cached) => Cow::Borrowed(cached.as_str()),
        None => Cow::Owned(SPACE.repeat(count)),
    }
}
