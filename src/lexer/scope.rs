//! Scope tracking for the scanner.
//!
//! A [`ScopeStack`] belongs to exactly one scan. `Global` is the implicit
//! bottom entry: it is reported by [`ScopeStack::current`] when nothing is
//! open, but is never stored.

use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ScopeKind {
    Global,
    Parens,
    Brackets,
    Braces,
}

impl ScopeKind {
    pub fn from_opener(c: char) -> Option<ScopeKind> {
        match c {
            '(' => Some(ScopeKind::Parens),
            '[' => Some(ScopeKind::Brackets),
            '{' => Some(ScopeKind::Braces),
            _ => None,
        }
    }

    pub fn from_closer(c: char) -> Option<ScopeKind> {
        match c {
            ')' => Some(ScopeKind::Parens),
            ']' => Some(ScopeKind::Brackets),
            '}' => Some(ScopeKind::Braces),
            _ => None,
        }
    }

    pub fn closer(&self) -> Option<char> {
        match self {
            ScopeKind::Global => None,
            ScopeKind::Parens => Some(')'),
            ScopeKind::Brackets => Some(']'),
            ScopeKind::Braces => Some('}'),
        }
    }
}

impl Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenScope {
    pub kind: ScopeKind,
    pub opened_at: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<OpenScope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: vec![] }
    }

    pub fn push(&mut self, kind: ScopeKind, opened_at: u32) {
        debug_assert_ne!(kind, ScopeKind::Global, "the global scope is implicit");
        self.scopes.push(OpenScope { kind, opened_at });
    }

    /// Pops the innermost scope if it is of kind `closing`.
    ///
    /// On mismatch the stack is left untouched and the kind that was
    /// expected to close instead is returned.
    pub fn pop(&mut self, closing: ScopeKind) -> Result<OpenScope, ScopeKind> {
        match self.scopes.last() {
            Some(top) if top.kind == closing => {}
            _ => return Err(self.current()),
        }

        self.scopes.pop().ok_or(ScopeKind::Global)
    }

    pub fn current(&self) -> ScopeKind {
        self.scopes
            .last()
            .map(|scope| scope.kind)
            .unwrap_or(ScopeKind::Global)
    }

    pub fn innermost(&self) -> Option<&OpenScope> {
        self.scopes.last()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScopeKind, ScopeStack};

    #[test]
    fn test_empty_stack_is_global() {
        let stack = ScopeStack::new();

        assert!(stack.is_empty());
        assert_eq!(stack.current(), ScopeKind::Global);
        assert!(stack.innermost().is_none());
    }

    #[test]
    fn test_push_and_pop_matching() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeKind::Braces, 0);
        stack.push(ScopeKind::Parens, 4);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current(), ScopeKind::Parens);

        let popped = stack.pop(ScopeKind::Parens).unwrap();
        assert_eq!(popped.opened_at, 4);
        assert_eq!(stack.current(), ScopeKind::Braces);

        stack.pop(ScopeKind::Braces).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_mismatch_leaves_stack_alone() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeKind::Brackets, 2);

        assert_eq!(stack.pop(ScopeKind::Braces), Err(ScopeKind::Brackets));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_on_empty_reports_global() {
        let mut stack = ScopeStack::new();

        assert_eq!(stack.pop(ScopeKind::Parens), Err(ScopeKind::Global));
    }

    #[test]
    fn test_delimiter_mapping() {
        assert_eq!(ScopeKind::from_opener('('), Some(ScopeKind::Parens));
        assert_eq!(ScopeKind::from_opener('{'), Some(ScopeKind::Braces));
        assert_eq!(ScopeKind::from_closer(']'), Some(ScopeKind::Brackets));
        assert_eq!(ScopeKind::from_closer('('), None);
        assert_eq!(ScopeKind::Braces.closer(), Some('}'));
        assert_eq!(ScopeKind::Global.closer(), None);
    }
}
