//! Syntax diagnostics for MEL parsing
//!
//! The parser never halts on bad input: every problem is recorded as a
//! [`SyntaxError`] and parsing continues at the next statement boundary.
//! Whether any diagnostic is fatal is the caller's decision.

use thiserror::Error;

use crate::lexer::Token;

/// A parse diagnostic with a 1-based source position.
///
/// Renders as `line:<row>.<column> <message>`, the format surfaced by
/// `Parser::errors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line:{row}.{column} {message}")]
pub struct SyntaxError {
    pub message: String,
    pub row: usize,
    pub column: usize,
}

impl SyntaxError {
    /// Create a new diagnostic at an explicit position.
    pub fn new(message: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            row,
            column,
        }
    }

    /// Create a new diagnostic at a token's position.
    pub fn at_token(message: impl Into<String>, token: &Token) -> Self {
        Self::new(message, token.row, token.column)
    }
}
