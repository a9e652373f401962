use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};

use super::scope::ScopeKind;

pub const DIGITS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const OPERATORS: &str = "+-*/=<>!&|";
pub const PUNCTUATION: &str = "?|$@,.^";
pub const QUOTES: &str = "'\"";
pub const WHITESPACE: &str = " \t\n\r";

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("bool");
        set.insert("string");
        set
    };
    static ref DEFAULT_CONFIG: LexerConfig = LexerConfig::default();
}

pub fn default_config() -> &'static LexerConfig {
    &DEFAULT_CONFIG
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn insert(&mut self, c: char) {
        self.0.insert(c);
    }

    pub fn union(mut self, other: &str) -> CharSet {
        self.0.extend(other.chars());
        self
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        CharSet(chars.chars().collect())
    }
}

/// The tables the scanner classifies characters with.
///
/// Every scan borrows one of these; nothing in it changes during a scan.
#[derive(Debug, Clone)]
pub struct LexerConfig {
    pub keywords: HashSet<String>,
    pub identifier_start: CharSet,
    pub identifier: CharSet,
    pub number_start: CharSet,
    pub number: CharSet,
    pub operators: CharSet,
    pub punctuation: CharSet,
    pub quotes: CharSet,
    pub whitespace: CharSet,
    /// Marker that starts a comment running to the end of the line.
    pub line_comment: Option<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            identifier_start: CharSet::from(LETTERS).union("_"),
            identifier: CharSet::from(LETTERS).union(DIGITS).union("_"),
            number_start: CharSet::from(DIGITS),
            number: CharSet::from(DIGITS).union("."),
            operators: CharSet::from(OPERATORS),
            punctuation: CharSet::from(PUNCTUATION),
            quotes: CharSet::from(QUOTES),
            whitespace: CharSet::from(WHITESPACE),
            line_comment: None,
        }
    }
}

impl LexerConfig {
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.insert(keyword.to_string());
        self
    }

    pub fn with_operator(mut self, c: char) -> Self {
        self.operators.insert(c);
        self
    }

    pub fn with_punctuation(mut self, c: char) -> Self {
        self.punctuation.insert(c);
        self
    }

    pub fn with_line_comment(mut self, marker: &str) -> Self {
        self.line_comment = Some(marker.to_string());
        self
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    /// Picks the single scan routine responsible for `c`.
    ///
    /// Classes are tried in a fixed order, so a character listed in two
    /// tables (`|` is both an operator and punctuation) resolves to the
    /// first.
    pub fn classify(&self, c: char) -> Option<CharClass> {
        if self.quotes.contains(c) {
            Some(CharClass::Quote(c))
        } else if self.identifier_start.contains(c) {
            Some(CharClass::IdentifierStart)
        } else if self.operators.contains(c) {
            Some(CharClass::Operator)
        } else if self.punctuation.contains(c) {
            Some(CharClass::Punctuation)
        } else if self.number_start.contains(c) {
            Some(CharClass::Digit)
        } else if let Some(kind) = ScopeKind::from_opener(c) {
            Some(CharClass::ScopeOpen(kind))
        } else {
            ScopeKind::from_closer(c).map(CharClass::ScopeClose)
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Quote(char),
    IdentifierStart,
    Operator,
    Punctuation,
    Digit,
    ScopeOpen(ScopeKind),
    ScopeClose(ScopeKind),
}
