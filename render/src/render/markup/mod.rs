// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod markup_constants;
pub mod markup_parse_error;
pub mod markup_tokenizer;
pub mod markup_widget;
pub mod parse_markup;
pub mod scope_stack;
pub mod style_token_parser;

// Re-export.
pub use markup_constants::*;
pub use markup_parse_error::*;
pub use markup_tokenizer::*;
pub use markup_widget::*;
pub use parse_markup::*;
pub use scope_stack::*;
pub use style_token_parser::*;
