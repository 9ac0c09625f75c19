//! PDF Lexer Module
//!
//! This module implements the lexical front end of a PDF reader: it turns a
//! raw byte buffer into the lexemes an object parser consumes, according to
//! ISO 32000-1 Section 7.2 and 7.3.

pub mod anchor;
pub mod charset;
pub mod context;
pub mod cursor;
pub mod lexeme;
pub mod lexer;
pub mod navigation;
mod scanner;
pub mod stream_reader;

pub use self::context::DiagnosticContext;
pub use self::cursor::ByteCursor;
pub use self::lexeme::{Keyword, Lexeme};
pub use self::lexer::Lexer;
pub use self::stream_reader::StreamReader;

/// Default size in bytes of the window shown around a lexical error
pub const DEFAULT_CONTEXT_SIZE: usize = 200;

/// Result type for lexer operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Lexer errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("{message}\n\n{context}")]
    LexicalError {
        message: String,
        position: usize,
        context: Box<DiagnosticContext>,
    },

    #[error("No move in history")]
    EmptyMoveHistory,

    #[error("No lexeme has been read yet")]
    NoCurrentLexeme,
}

impl ParseError {
    /// Absolute offset of a lexical error
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::LexicalError { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Options controlling lexer diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Number of bytes shown around the position of a lexical error
    pub context_size: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }
}

impl LexerOptions {
    /// Set the number of bytes captured around a lexical error
    pub fn with_context_size(mut self, context_size: usize) -> Self {
        self.context_size = context_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        assert_eq!(LexerOptions::default().context_size, 200);
        assert_eq!(
            LexerOptions::default().with_context_size(31).context_size,
            31
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::EmptyMoveHistory.to_string(), "No move in history");
        assert_eq!(
            ParseError::InvalidSource("not seekable".to_string()).to_string(),
            "Invalid source: not seekable"
        );
        assert_eq!(ParseError::NoCurrentLexeme.position(), None);
    }
}
