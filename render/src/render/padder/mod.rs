// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod padder_impl;
pub mod padding;

// Re-export.
pub use padder_impl::*;
pub use padding::*;
