// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod tui_styled_text_impl;

// Re-export.
pub use tui_styled_text_impl::*;
