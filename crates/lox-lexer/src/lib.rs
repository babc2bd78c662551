//! Lox Lexer
//!
//! Tokenizes Lox source text into a flat, ordered stream of tokens.
//! Handles single- and two-character operators, line comments, string
//! and number literals, and case-insensitive keyword detection.
//!
//! Malformed input never aborts a scan: each lexical error is recorded
//! as a diagnostic and the scanner resumes at the next character, so a
//! single pass surfaces every problem in a file.
//!
//! # Example
//!
//! ```
//! use lox_lexer::Scanner;
//!
//! let out = Scanner::scan("");
//! assert_eq!(out.tokens.len(), 1); // just EOF
//! assert!(out.diagnostics.is_empty());
//! ```

pub mod scanner;
pub mod token;

pub use scanner::{ScanOutput, Scanner};
pub use token::{Token, TokenKind};

/// A lexical diagnostic. Non-fatal: the scanner records it and keeps
/// scanning from the next character.
///
/// The `Display` form is the shape downstream tooling matches on:
/// `[line <N>] Error: <message>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal reached end of input before its closing quote.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },

    /// A character matched no recognized lexeme start.
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter { line: usize },
}

impl LexError {
    /// Line on which the error originated. For an unterminated string
    /// this is the line the string opened on, not where input ended.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line } | LexError::UnexpectedCharacter { line } => *line,
        }
    }
}
