use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Operator, // operators and punctuation alike
    Keyword,

    ScopeOpen,
    ScopeClose,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Token {
    /// The full source text this token was scanned from, delimiters included.
    ///
    /// `source` must be the text the token was produced from.
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start.0 as usize..self.span.end.0 as usize]
    }
}
