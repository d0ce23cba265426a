// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cell_width;

// Re-export.
pub use cell_width::*;
