//! Error types for the scanner.
//!
//! Every error aborts the scan and carries the position it was raised at:
//!
//! - Unterminated strings and scopes (reported at the end of input)
//! - Mismatched scope closers
//! - Characters outside every class
//! - Sources too long for 32-bit offsets

pub mod errors;
