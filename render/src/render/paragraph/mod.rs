// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod glyph;
pub mod paragraph_impl;
pub mod reflow;

// Re-export.
pub use glyph::*;
pub use paragraph_impl::*;
pub use reflow::*;
