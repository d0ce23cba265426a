// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{BitOr, BitOrAssign};

use smallvec::SmallVec;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A single option that changes how an exception is rendered. Options are combined
/// into an [`ExceptionFormats`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ExceptionFormat {
    /// Only show the file name of a source path.
    ShortenPaths,
    /// Drop the namespace / module qualifiers of type names.
    ShortenTypes,
    /// Drop the namespace / module / type qualifiers of method names.
    ShortenMethods,
    /// Attach a `file://` link to each source path.
    ShowLinks,
    /// Leave out frames that aren't public.
    HideNonPublic,
}

/// A set of [`ExceptionFormat`]s. Combining two sets is their union.
///
/// ```
/// use r3bl_render::{ExceptionFormat, ExceptionFormats};
///
/// let formats = ExceptionFormat::ShortenPaths | ExceptionFormat::ShowLinks;
/// assert!(formats.contains(ExceptionFormat::ShowLinks));
/// assert!(!formats.contains(ExceptionFormat::ShortenTypes));
/// assert!(ExceptionFormats::none().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionFormats {
    inner: SmallVec<[ExceptionFormat; 5]>,
}

impl ExceptionFormats {
    /// The default, nothing is shortened, hidden, or linked.
    #[must_use]
    pub fn none() -> Self { Self::default() }

    #[must_use]
    pub fn shorten_everything() -> Self {
        ExceptionFormat::ShortenPaths
            | ExceptionFormat::ShortenTypes
            | ExceptionFormat::ShortenMethods
    }

    #[must_use]
    pub fn all() -> Self { ExceptionFormat::iter().collect() }

    #[must_use]
    pub fn contains(&self, format: ExceptionFormat) -> bool { self.inner.contains(&format) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    pub fn insert(&mut self, format: ExceptionFormat) {
        if !self.contains(format) {
            self.inner.push(format);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ExceptionFormat> + '_ {
        self.inner.iter().copied()
    }
}

impl From<ExceptionFormat> for ExceptionFormats {
    fn from(format: ExceptionFormat) -> Self {
        let mut it = Self::default();
        it.insert(format);
        it
    }
}

impl FromIterator<ExceptionFormat> for ExceptionFormats {
    fn from_iter<T: IntoIterator<Item = ExceptionFormat>>(iter: T) -> Self {
        let mut acc = Self::default();
        for format in iter {
            acc.insert(format);
        }
        acc
    }
}

mod set_union {
    use super::{BitOr, BitOrAssign, ExceptionFormat, ExceptionFormats};

    impl BitOr for ExceptionFormats {
        type Output = Self;
        fn bitor(mut self, rhs: Self) -> Self {
            self |= rhs;
            self
        }
    }

    impl BitOr<ExceptionFormat> for ExceptionFormats {
        type Output = Self;
        fn bitor(mut self, rhs: ExceptionFormat) -> Self {
            self.insert(rhs);
            self
        }
    }

    impl BitOr for ExceptionFormat {
        type Output = ExceptionFormats;
        fn bitor(self, rhs: Self) -> ExceptionFormats { ExceptionFormats::from(self) | rhs }
    }

    impl BitOrAssign for ExceptionFormats {
        fn bitor_assign(&mut self, rhs: Self) {
            for format in rhs.inner {
                self.insert(format);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_union_is_idempotent_and_order_free() {
        let lhs = ExceptionFormat::ShortenTypes | ExceptionFormat::ShowLinks;
        let rhs = ExceptionFormat::ShowLinks | ExceptionFormat::ShortenTypes;
        let both = lhs.clone() | rhs.clone();
        for format in ExceptionFormat::iter() {
            assert_eq2!(lhs.contains(format), rhs.contains(format));
            assert_eq2!(both.contains(format), lhs.contains(format));
        }
        assert_eq2!(both.iter().count(), 2);
    }

    #[test]
    fn test_shorten_everything() {
        let it = ExceptionFormats::shorten_everything();
        assert!(it.contains(ExceptionFormat::ShortenPaths));
        assert!(it.contains(ExceptionFormat::ShortenTypes));
        assert!(it.contains(ExceptionFormat::ShortenMethods));
        assert!(!it.contains(ExceptionFormat::ShowLinks));
        assert_eq2!(ExceptionFormats::all().iter().count(), 5);
    }

    #[test]
    fn test_parse_from_name() {
        assert_eq2!("show_links".parse::<ExceptionFormat>(), Ok(ExceptionFormat::ShowLinks));
        assert!("show_everything".parse::<ExceptionFormat>().is_err());
    }
}
