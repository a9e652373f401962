//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into a
//! stream of tokens while tracking nested scopes. It handles:
//!
//! - Exclusive character classification against configurable tables
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Scope open/close checking with a per-scan scope stack
//! - Token position tracking for error reporting

pub mod classes;
pub mod lexer;
pub mod scope;
pub mod tokens;
