// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{Measurement, RenderContext, Segment};

/// The two phase contract that every widget implements.
///
/// 1. [`measure`](Renderable::measure) reports the narrowest and widest layout the
///    content could use within `max_width`.
/// 2. [`render`](Renderable::render) produces the [`Segment`]s for `max_width`. Every
///    line is terminated by a [`Segment::LineBreak`], and no line is wider than
///    `max_width` cells.
///
/// Both are pure: calling them again with the same `context` and `max_width` on an
/// unmodified receiver returns the same result.
///
/// Composites own their children as `Box<dyn Renderable>`.
pub trait Renderable: Debug {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement;

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment>;
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        self.as_ref().measure(context, max_width)
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        self.as_ref().render(context, max_width)
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn measure(&self, context: &RenderContext, max_width: usize) -> Measurement {
        (**self).measure(context, max_width)
    }

    fn render(&self, context: &RenderContext, max_width: usize) -> Vec<Segment> {
        (**self).render(context, max_width)
    }
}
