//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from a start offset to the lexer's cursor
//!
//! These macros reduce boilerplate in the scan routines.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span running from `$start` to the current cursor of `$lexer`.
///
/// ```ignore
/// let start = lexer.pos;
/// lexer.advance_while(|c| c.is_ascii_digit());
/// let span = MK_SPAN!(lexer, start);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr) => {
        Span {
            start: Position($start as u32, Arc::clone(&$lexer.file)),
            end: Position($lexer.pos as u32, Arc::clone(&$lexer.file)),
        }
    };
}
