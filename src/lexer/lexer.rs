use std::sync::Arc;

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::{
    classes::{default_config, CharClass, CharSet, LexerConfig},
    scope::{ScopeKind, ScopeStack},
    tokens::{Token, TokenKind},
};

/// State of a single left-to-right scan.
///
/// Created for one source text and consumed by it: the cursor only moves
/// forward and the scope stack is never shared with another scan.
pub struct Lexer<'cfg> {
    config: &'cfg LexerConfig,
    tokens: Vec<Token>,
    scopes: ScopeStack,
    source: String,
    pos: usize,
    file: Arc<String>,
}

impl<'cfg> Lexer<'cfg> {
    pub fn new(source: String, file: Option<String>, config: &'cfg LexerConfig) -> Lexer<'cfg> {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            config,
            tokens: vec![],
            scopes: ScopeStack::new(),
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(
            kind = %token.kind,
            value = %token.value,
            start = token.span.start.0,
            end = token.span.end.0,
            depth = self.scopes.depth(),
            "token"
        );
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    fn advance_while(&mut self, set: &CharSet) {
        while let Some(c) = self.at() {
            if !set.contains(c) {
                break;
            }
            self.advance_n(c.len_utf8());
        }
    }

    fn at_line_comment(&self) -> bool {
        match self.config.line_comment.as_deref() {
            Some(marker) => !marker.is_empty() && self.remainder().starts_with(marker),
            None => false,
        }
    }

    fn skip_trivia(&mut self) {
        let config = self.config;

        loop {
            self.advance_while(&config.whitespace);

            if !self.at_line_comment() {
                break;
            }
            let comment = self.remainder().find('\n').unwrap_or(self.remainder().len());
            self.advance_n(comment);
        }
    }

    /// Runs the dispatch loop to the end of input.
    ///
    /// Each iteration classifies one character and hands it to exactly one
    /// handler. Tokens scanned before an error stay in [`Lexer::tokens`].
    pub fn scan(&mut self) -> Result<(), Error> {
        let config = self.config;

        check_source_length(self.source.len())
            .map_err(|error_impl| Error::new(error_impl, self.position()))?;

        loop {
            self.skip_trivia();

            let Some(c) = self.at() else {
                break;
            };

            match config.classify(c) {
                Some(CharClass::Quote(quote)) => string_handler(self, quote)?,
                Some(CharClass::IdentifierStart) => symbol_handler(self),
                Some(CharClass::Operator) => run_handler(self, TokenKind::Operator, &config.operators),
                Some(CharClass::Punctuation) => {
                    run_handler(self, TokenKind::Operator, &config.punctuation)
                }
                Some(CharClass::Digit) => run_handler(self, TokenKind::Number, &config.number),
                Some(CharClass::ScopeOpen(kind)) => scope_open_handler(self, kind),
                Some(CharClass::ScopeClose(kind)) => scope_close_handler(self, kind)?,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnclassifiableCharacter { character: c },
                        self.position(),
                    ))
                }
            }
        }

        if let Some(open) = self.scopes.innermost() {
            return Err(Error::new(
                ErrorImpl::UnterminatedScope {
                    scope: open.kind,
                    opened_at: open.opened_at,
                },
                self.position(),
            ));
        }

        Ok(())
    }
}

/// Offsets are stored as `u32`, so longer sources are refused up front.
pub(crate) fn check_source_length(length: usize) -> Result<(), ErrorImpl> {
    match u32::try_from(length) {
        Ok(_) => Ok(()),
        Err(_) => Err(ErrorImpl::SourceTooLarge { length }),
    }
}

/// Consumes the current character plus every following one in `set`.
///
/// A line comment marker ends the run even when it is made of characters
/// in `set`.
fn consume_run(lexer: &mut Lexer<'_>, set: &CharSet) -> (usize, String) {
    let start = lexer.pos;

    if let Some(c) = lexer.at() {
        lexer.advance_n(c.len_utf8());
    }
    while let Some(c) = lexer.at() {
        if !set.contains(c) || lexer.at_line_comment() {
            break;
        }
        lexer.advance_n(c.len_utf8());
    }

    (start, lexer.source[start..lexer.pos].to_string())
}

fn run_handler(lexer: &mut Lexer<'_>, kind: TokenKind, set: &CharSet) {
    let (start, value) = consume_run(lexer, set);

    let span = MK_SPAN!(lexer, start);
    lexer.push(MK_TOKEN!(kind, value, span));
}

fn symbol_handler(lexer: &mut Lexer<'_>) {
    let config = lexer.config;
    let (start, value) = consume_run(lexer, &config.identifier);

    let kind = if config.is_keyword(&value) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let span = MK_SPAN!(lexer, start);
    lexer.push(MK_TOKEN!(kind, value, span));
}

fn string_handler(lexer: &mut Lexer<'_>, quote: char) -> Result<(), Error> {
    let start = lexer.pos;
    lexer.advance_n(quote.len_utf8());

    let Some(length) = lexer.remainder().find(quote) else {
        let rest = lexer.remainder().len();
        lexer.advance_n(rest);

        return Err(Error::new(
            ErrorImpl::UnterminatedString {
                quote,
                opened_at: start as u32,
            },
            lexer.position(),
        ));
    };

    let content_start = lexer.pos;
    lexer.advance_n(length);
    let value = lexer.source[content_start..lexer.pos].to_string();
    lexer.advance_n(quote.len_utf8());

    let span = MK_SPAN!(lexer, start);
    lexer.push(MK_TOKEN!(TokenKind::String, value, span));
    Ok(())
}

fn scope_open_handler(lexer: &mut Lexer<'_>, kind: ScopeKind) {
    let start = lexer.pos;
    lexer.scopes.push(kind, start as u32);
    lexer.advance_n(1);

    let value = lexer.source[start..lexer.pos].to_string();
    let span = MK_SPAN!(lexer, start);
    lexer.push(MK_TOKEN!(TokenKind::ScopeOpen, value, span));
}

fn scope_close_handler(lexer: &mut Lexer<'_>, kind: ScopeKind) -> Result<(), Error> {
    let start = lexer.pos;

    if let Err(expected) = lexer.scopes.pop(kind) {
        return Err(Error::new(
            ErrorImpl::MismatchedScopeClose {
                expected,
                found: kind,
            },
            lexer.position(),
        ));
    }
    lexer.advance_n(1);

    let value = lexer.source[start..lexer.pos].to_string();
    let span = MK_SPAN!(lexer, start);
    lexer.push(MK_TOKEN!(TokenKind::ScopeClose, value, span));
    Ok(())
}

/// Scans `source` and also hands back whatever was tokenized before a
/// failure, for diagnostics. Those tokens are not a usable result.
#[tracing::instrument(level = "debug", skip_all, fields(file = ?file, bytes = source.len()))]
pub fn tokenize_partial(
    source: String,
    file: Option<String>,
    config: &LexerConfig,
) -> (Vec<Token>, Result<(), Error>) {
    let mut lex = Lexer::new(source, file, config);
    let result = lex.scan();

    match &result {
        Ok(()) => debug!(tokens = lex.tokens.len(), "scan finished"),
        Err(error) => debug!(%error, tokens = lex.tokens.len(), "scan failed"),
    }

    (lex.tokens, result)
}

pub fn tokenize_with(
    source: String,
    file: Option<String>,
    config: &LexerConfig,
) -> Result<Vec<Token>, Error> {
    let (tokens, result) = tokenize_partial(source, file, config);
    result.map(|()| tokens)
}

/// Scans `source` with the default tables.
///
/// Sources longer than `u32::MAX` bytes are rejected with
/// `SourceTooLarge`, since positions are 32-bit byte offsets.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, default_config())
}
