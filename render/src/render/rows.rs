// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Measurement, RenderContext, Renderable, Segment};

/// Renderables stacked on top of each other, each one rendered at the full width.
///
/// ```
/// use r3bl_render::{Markup, RenderContext, Rows, render_plain_text};
///
/// let rows = Rows::default()
///     .with_row(Markup::try_new("one").unwrap())
///     .with_row(Markup::try_new("two").unwrap());
/// assert_eq!(render_plain_text(&rows, &RenderContext::new(10)), "one\ntwo\n");
/// ```
#[derive(Debug, Default)]
pub struct Rows {
    rows: Vec<Box<dyn Renderable>>,
}

impl Rows {
    #[must_use]
    pub fn new(rows: Vec<Box<dyn Renderable>>) -> Self { Self { rows } }

    #[must_use]
    pub fn with_row(mut self, row: impl Renderable + 'static) -> Self {
        self.push(row);
        self
    }

    pub fn push(&mut self, row: impl Renderable + 'static) { self.rows.push(Box::new(row)); }

    #[must_use]
    pub fn len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

impl Renderable for Rows {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        self.rows
            .iter()
            .map(|row| row.measure(context, max_width))
            .fold(Measurement::default(), Measurement::union)
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        self.rows
            .iter()
            .flat_map(|row| row.render(context, max_width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Markup, Padder, Padding, assert_eq2};

    #[test]
    fn test_measure_is_union_of_rows() {
        let rows = Rows::default()
            .with_row(Markup::try_new("a bb").unwrap())
            .with_row(
                Padder::new(Markup::try_new("ccc").unwrap()).with_padding(Padding::symmetric(0, 1)),
            );
        let it = rows.measure(&RenderContext::new(80), 80);
        assert_eq2!((it.min(), it.max()), (5, 5));
        assert_eq2!(rows.len(), 2);
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        let rows = Rows::default();
        assert!(rows.is_empty());
        assert!(rows.render(&RenderContext::new(80), 80).is_empty());
        assert_eq2!(rows.measure(&RenderContext::new(80), 80), Measurement::default());
    }
}
