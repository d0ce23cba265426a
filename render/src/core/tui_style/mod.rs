// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_parser;
pub mod tui_color;
pub mod tui_style_impl;

// Re-export.
pub use color_parser::*;
pub use tui_color::*;
pub use tui_style_impl::*;
