//! Error type for filter query parsing.

use thiserror::Error;

/// Error raised when a query string does not conform to the filter grammar.
///
/// Raised once at compile time; no partial expression is produced. Carries
/// the byte position in the original query where parsing failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at byte {position}: {message}")]
pub struct SyntaxError {
    /// Error message.
    pub message: String,
    /// Byte position in the query where the error occurred.
    pub position: usize,
    /// The original query string.
    pub query: String,
}

impl SyntaxError {
    /// Creates a new syntax error.
    pub fn new(message: impl Into<String>, position: usize, query: &str) -> Self {
        Self {
            message: message.into(),
            position,
            query: query.to_string(),
        }
    }

    /// Formats the error with a caret pointing at the failing position.
    ///
    /// The caret column is counted in characters, not bytes, so it stays
    /// aligned when the query contains multibyte (e.g. accented) words.
    pub fn format_with_context(&self) -> String {
        let clamped = self.position.min(self.query.len());
        let column = self.query[..clamped].chars().count();
        format!(
            "query syntax error: {}\n  {}\n  {}^",
            self.message,
            self.query,
            " ".repeat(column)
        )
    }
}
