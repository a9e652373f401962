use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::scope::ScopeKind, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedScope { .. } => "UnterminatedScope",
            ErrorImpl::MismatchedScopeClose { .. } => "MismatchedScopeClose",
            ErrorImpl::UnclassifiableCharacter { .. } => "UnclassifiableCharacter",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { quote, opened_at } => ErrorTip::Suggestion(format!(
                "String opened at offset {} is missing its closing `{}`",
                opened_at, quote
            )),
            ErrorImpl::UnterminatedScope { scope, opened_at } => match scope.closer() {
                Some(closer) => ErrorTip::Suggestion(format!(
                    "{} opened at offset {} is never closed, expected `{}`",
                    scope, opened_at, closer
                )),
                None => ErrorTip::None,
            },
            ErrorImpl::MismatchedScopeClose { expected, found } => match expected.closer() {
                Some(closer) => ErrorTip::Suggestion(format!(
                    "Expected `{}` to close {}, found the end of {}",
                    closer, expected, found
                )),
                None => ErrorTip::Suggestion(format!(
                    "Nothing is open here, found the end of {}",
                    found
                )),
            },
            ErrorImpl::UnclassifiableCharacter { .. } => ErrorTip::None,
            ErrorImpl::SourceTooLarge { length } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, offsets only reach {}",
                length,
                u32::MAX
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string opened at offset {opened_at:?}")]
    UnterminatedString { quote: char, opened_at: u32 },
    #[error("unterminated scope {scope} opened at offset {opened_at:?}")]
    UnterminatedScope { scope: ScopeKind, opened_at: u32 },
    #[error("mismatched scope close: expected end of {expected}, found end of {found}")]
    MismatchedScopeClose { expected: ScopeKind, found: ScopeKind },
    #[error("unclassifiable character: {character:?}")]
    UnclassifiableCharacter { character: char },
    #[error("source of {length} bytes exceeds the 32-bit offset range")]
    SourceTooLarge { length: usize },
}
