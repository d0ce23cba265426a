// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_render
//!
//! Turns structured content into width constrained sequences of styled text runs that
//! are ready to be written to a terminal. There are three kinds of content shipped in
//! this crate:
//!
//! 1. Inline styled markup text, eg: `"[bold red]Error[/] file not found"`.
//! 2. Padded boxes that wrap any other renderable.
//! 3. Formatted exception traces (a header, a list of stack frames, and a cause chain).
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [The composition protocol](#the-composition-protocol)
//! - [Segments and cell widths](#segments-and-cell-widths)
//! - [Markup grammar](#markup-grammar)
//! - [Logging and errors](#logging-and-errors)
//! <!-- /TOC -->
//!
//! # The composition protocol
//!
//! Every widget implements [`Renderable`], which is a two phase contract:
//!
//! - [`Renderable::measure`] returns a [`Measurement`] (min, max) describing how much
//!   horizontal space the content needs within an upper bound. It is cheap, and never
//!   materializes any output.
//! - [`Renderable::render`] returns a flat [`Vec`] of [`Segment`]s. Every line, including
//!   the last one, is terminated by a [`Segment::LineBreak`]. No line is ever wider than
//!   the `max_width` that was passed in.
//!
//! Composites (eg: [`Padder`], [`Rows`]) own their children exclusively, and measure and
//! render them depth first before decorating the result.
//!
//! ```
//! use r3bl_render::{Markup, Padder, RenderContext, render_plain_text};
//!
//! let markup = Markup::try_new("[bold]hi[/]").unwrap();
//! let padder = Padder::new(markup);
//! let context = RenderContext::new(80);
//! let text = render_plain_text(&padder, &context);
//! assert_eq!(text, "    \n hi \n    \n");
//! ```
//!
//! # Segments and cell widths
//!
//! The display width of a line is the sum, over all of its code points, of each code
//! point's terminal column width (0 for combining marks, 1 for normal width, 2 for wide
//! East Asian characters). See [`cell_width_str`] and [`SegmentLines`].
//!
//! # Markup grammar
//!
//! | Syntax          | Meaning                                          |
//! | :-------------- | :----------------------------------------------- |
//! | `[spec]`        | Open a style scope, overlaying `spec` on the top |
//! | `[/]`           | Close the innermost scope                        |
//! | `[[` and `]]`   | A literal `[` and `]`                            |
//! | `\n`            | Start a new line                                 |
//!
//! See [`parse_markup`] for the details, and [`MarkupParseError`] for the errors that
//! are reported (with source position) at construction time.
//!
//! # Logging and errors
//!
//! - Errors are [`thiserror`] enums that also implement [`miette::Diagnostic`].
//! - Log output goes through [`tracing`]. Use [`try_initialize_logging_global`] to wire
//!   up a subscriber.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod core;
pub mod render;

// Re-export.
pub use core::*;
pub use render::*;
