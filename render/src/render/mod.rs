// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod exception;
pub mod markup;
pub mod padder;
pub mod paragraph;
pub mod render_context;
pub mod render_pipeline;
pub mod renderable;
pub mod rows;

// Re-export.
pub use exception::*;
pub use markup::*;
pub use padder::*;
pub use paragraph::*;
pub use render_context::*;
pub use render_pipeline::*;
pub use renderable::*;
pub use rows::*;
