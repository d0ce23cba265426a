// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use crate::DEFAULT_TERMINAL_WIDTH;

/// How a line that is narrower than the working width is filled out to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Justify {
    Left,
    Center,
    Right,
    /// Spread the words of every wrapped line (except the last one) across the width.
    Full,
}

/// What happens to content that is wider than the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Overflow {
    /// Wrap at word boundaries, breaking words that don't fit on a line of their own.
    #[default]
    Fold,
    /// Discard whatever doesn't fit.
    Crop,
    /// Discard whatever doesn't fit, and mark the cut with an ellipsis.
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// The sink can display non ASCII glyphs (eg: `…`).
    pub unicode: bool,
    /// The sink understands hyperlinks. When `false`, links are left out of the
    /// rendered segments.
    pub links: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            unicode: true,
            links: true,
        }
    }
}

/// Read only configuration for a single render pass. It is created by the caller, passed
/// by reference to every [`crate::Renderable`] in the tree, and dropped when the pass is
/// done.
///
/// ```
/// use r3bl_render::{Justify, Overflow, RenderContext};
///
/// let context = RenderContext::new(40)
///     .with_justify(Justify::Center)
///     .with_overflow(Overflow::Ellipsis);
/// assert_eq!(context.max_width, 40);
/// assert_eq!(context.ellipsis(), "…");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub max_width: usize,
    pub capabilities: Capabilities,
    /// Used by widgets that don't have their own alignment set.
    pub justify: Option<Justify>,
    /// Used by widgets that don't have their own overflow policy set.
    pub overflow: Option<Overflow>,
}

impl RenderContext {
    #[must_use]
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            capabilities: Capabilities::default(),
            justify: None,
            overflow: None,
        }
    }

    /// Use the width of the terminal attached to this process, falling back to
    /// [`DEFAULT_TERMINAL_WIDTH`] when there isn't one.
    #[must_use]
    pub fn from_terminal_size() -> Self {
        let max_width = match crossterm::terminal::size() {
            Ok((columns, _rows)) if columns > 0 => usize::from(columns),
            _ => {
                tracing::debug!(
                    message = "Can't get terminal size, using default width",
                    width = DEFAULT_TERMINAL_WIDTH
                );
                DEFAULT_TERMINAL_WIDTH
            }
        };
        Self::new(max_width)
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// The marker that [`Overflow::Ellipsis`] appends to cut lines.
    #[must_use]
    pub fn ellipsis(&self) -> &'static str {
        if self.capabilities.unicode { "…" } else { "..." }
    }

    /// Widget setting, else the context default, else [`Overflow::default`].
    #[must_use]
    pub fn resolve_overflow(&self, own: Option<Overflow>) -> Overflow {
        own.or(self.overflow).unwrap_or_default()
    }

    /// Widget setting, else the context default. [`None`] means the line is left as is
    /// (ragged, no fill).
    #[must_use]
    pub fn resolve_justify(&self, own: Option<Justify>) -> Option<Justify> {
        own.or(self.justify)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_resolution_order() {
        let context = RenderContext::new(10);
        assert_eq2!(context.resolve_overflow(None), Overflow::Fold);
        assert_eq2!(context.resolve_justify(None), None);

        let context = context.with_overflow(Overflow::Crop).with_justify(Justify::Right);
        assert_eq2!(context.resolve_overflow(None), Overflow::Crop);
        assert_eq2!(context.resolve_overflow(Some(Overflow::Ellipsis)), Overflow::Ellipsis);
        assert_eq2!(context.resolve_justify(None), Some(Justify::Right));
        assert_eq2!(context.resolve_justify(Some(Justify::Left)), Some(Justify::Left));
    }

    #[test]
    fn test_ellipsis_depends_on_unicode() {
        let context = RenderContext::new(10).with_capabilities(Capabilities {
            unicode: false,
            links: false,
        });
        assert_eq2!(context.ellipsis(), "...");
        assert_eq2!(RenderContext::new(10).ellipsis(), "…");
    }

    #[test_case("center", Justify::Center)]
    #[test_case("full", Justify::Full)]
    fn test_parse_justify(input: &str, expected: Justify) {
        assert_eq2!(input.parse::<Justify>(), Ok(expected));
    }

    #[test]
    fn test_overflow_names_round_trip() {
        for it in Overflow::iter() {
            assert_eq2!(it.to_string().parse::<Overflow>(), Ok(it));
        }
    }
}
