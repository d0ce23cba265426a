// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TuiStyle;

/// The styles that are active while a single markup string is parsed. The bottom of
/// the stack is the base style, which can't be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeStack {
    base: TuiStyle,
    scopes: Vec<Scope>,
}

/// Style that was in effect inside an open tag, and where that tag starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub style: TuiStyle,
    pub position: usize,
    pub tag_len: usize,
}

impl ScopeStack {
    #[must_use]
    pub fn new(base: TuiStyle) -> Self {
        Self {
            base,
            scopes: vec![],
        }
    }

    /// The style that literal text is tagged with right now.
    #[must_use]
    pub fn current(&self) -> &TuiStyle { self.scopes.last().map_or(&self.base, |it| &it.style) }

    /// Open a scope whose style is `delta` overlaid on [`ScopeStack::current`].
    pub fn push(&mut self, delta: &TuiStyle, position: usize, tag_len: usize) {
        let style = self.current().overlay(delta);
        self.scopes.push(Scope {
            style,
            position,
            tag_len,
        });
    }

    /// Close the innermost scope. Returns [`None`] if there's only the base style left.
    pub fn pop(&mut self) -> Option<Scope> { self.scopes.pop() }

    #[must_use]
    pub fn innermost(&self) -> Option<&Scope> { self.scopes.last() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_push_overlays_and_pop_restores() {
        let mut stack = ScopeStack::new(TuiStyle::dim());
        stack.push(&TuiStyle::bold(), 0, 6);
        stack.push(&TuiStyle::italic(), 7, 8);
        assert_eq2!(
            stack.current(),
            &TuiStyle::dim().overlay(&TuiStyle::bold()).overlay(&TuiStyle::italic())
        );
        assert_eq2!(stack.innermost().map(|it| it.tag_len), Some(8));

        assert_eq2!(stack.pop().map(|it| it.position), Some(7));
        assert_eq2!(stack.current(), &TuiStyle::dim().overlay(&TuiStyle::bold()));
        assert_eq2!(stack.pop().map(|it| it.position), Some(0));
        assert_eq2!(stack.current(), &TuiStyle::dim());
        assert_eq2!(stack.pop(), None);
        assert_eq2!(stack.current(), &TuiStyle::dim());
    }
}
