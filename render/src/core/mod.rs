// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod segment;
pub mod tui_style;
pub mod tui_styled_text;
pub mod units;

// Re-export.
pub use common::*;
pub use log::*;
pub use segment::*;
pub use tui_style::*;
pub use tui_styled_text::*;
pub use units::*;
