// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod exception_formats;
pub mod exception_info;
pub mod exception_renderable;

// Re-export.
pub use exception_formats::*;
pub use exception_info::*;
pub use exception_renderable::*;
