//! Test Suite for pdflex
//!
//! This module provides testing infrastructure for validating the lexer
//! against generated documents, the way an object parser drives it.

pub mod generators;

pub use generators::{GeneratedPdf, LineEnding, PdfVersion, TestPdfBuilder};

/// Common test utilities
pub mod utils {
    use pdflex::{Lexeme, Lexer, ParseResult};

    /// Pull every lexeme from `lexer` until the end of the input
    pub fn lex_to_end<'a>(lexer: &mut Lexer<'a>) -> ParseResult<Vec<Lexeme<'a>>> {
        let mut lexemes = Vec::new();
        while let Some(lexeme) = lexer.next_lexeme()? {
            lexemes.push(lexeme);
        }
        Ok(lexemes)
    }

    /// Lexemes of a whole document plus the stream bodies read along the way
    #[derive(Debug, Default)]
    pub struct DocumentLexemes<'a> {
        pub lexemes: Vec<Lexeme<'a>>,
        pub stream_bodies: Vec<Vec<u8>>,
    }

    /// Pull every lexeme of a document the way an object parser does: a stream
    /// body is read with the `/Length` value seen before it and lexing resumes
    /// at `endstream`.
    pub fn lex_document<'a>(lexer: &mut Lexer<'a>) -> ParseResult<DocumentLexemes<'a>> {
        let mut document = DocumentLexemes::default();
        let mut expecting_length = false;
        let mut length = 0usize;

        while let Some(lexeme) = lexer.next_lexeme()? {
            if expecting_length {
                if let Some(value) = lexeme.as_integer() {
                    length = usize::try_from(value).unwrap_or(0);
                }
                expecting_length = false;
            }
            if lexeme.as_name() == Some("Length") {
                expecting_length = true;
            }

            let resume_at = match &lexeme {
                Lexeme::Stream(reader) => {
                    document.stream_bodies.push(reader.read(length)?);
                    Some(reader.end_offset(length))
                }
                _ => None,
            };
            document.lexemes.push(lexeme);

            if let Some(offset) = resume_at {
                if let Some(next) = lexer.move_to(offset)? {
                    document.lexemes.push(next);
                }
            }
        }
        Ok(document)
    }

    /// Create a temporary directory for test outputs
    pub fn create_test_output_dir() -> anyhow::Result<tempfile::TempDir> {
        Ok(tempfile::tempdir()?)
    }
}
