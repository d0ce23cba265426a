// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod enumerate_positions;
pub mod measurement;
pub mod segment_impl;
pub mod segment_lines;

// Re-export.
pub use enumerate_positions::*;
pub use measurement::*;
pub use segment_impl::*;
pub use segment_lines::*;
