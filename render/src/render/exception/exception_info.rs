// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Where a stack frame's code lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub path: String,
    pub line: Option<u32>,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrameInfo {
    /// Fully qualified method signature, eg: `app::io::Reader::read(path: &Path)`.
    pub method: String,
    pub location: Option<SourceLocation>,
    pub is_public: bool,
}

impl StackFrameInfo {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            location: None,
            is_public: true,
        }
    }

    #[must_use]
    pub fn with_location(mut self, path: impl Into<String>, line: Option<u32>) -> Self {
        self.location = Some(SourceLocation::new(path, line));
        self
    }

    #[must_use]
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

/// An exception like value: a type name, a message, the stack frames (innermost call
/// first), and an optional inner exception that caused this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,
    pub frames: Vec<StackFrameInfo>,
    pub inner: Option<Box<ExceptionInfo>>,
}

impl ExceptionInfo {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: vec![],
            inner: None,
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: StackFrameInfo) -> Self {
        self.frames.push(frame);
        self
    }

    #[must_use]
    pub fn with_inner(mut self, inner: ExceptionInfo) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// This exception followed by its inner exceptions, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &ExceptionInfo> {
        std::iter::successors(Some(self), |it| it.inner.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_chain_is_outermost_first() {
        let info = ExceptionInfo::new("Outer", "a")
            .with_inner(ExceptionInfo::new("Middle", "b").with_inner(ExceptionInfo::new("Inner", "c")));
        let names = info.chain().map(|it| it.type_name.as_str()).collect::<Vec<_>>();
        assert_eq2!(names, vec!["Outer", "Middle", "Inner"]);
    }

    #[test]
    fn test_frame_builder() {
        let frame = StackFrameInfo::new("main").with_location("src/main.rs", Some(3)).with_public(false);
        assert_eq2!(frame.location, Some(SourceLocation::new("src/main.rs", Some(3))));
        assert!(!frame.is_public);
    }
}
