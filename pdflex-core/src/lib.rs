//! # pdflex
//!
//! The lexical front end of a PDF reader: a pull-based tokenizer that turns a
//! byte buffer into the lexemes an object parser consumes.
//!
//! ## Features
//!
//! - **Zero-copy input**: lexes borrowed `&[u8]` buffers, or loads any `Read + Seek` source once
//! - **Full PDF lexical grammar**: numbers, names, literal and hex strings, keywords, singletons
//! - **Deferred stream bodies**: `stream` yields a reader that extracts the body once its length is known
//! - **Backtracking**: one-lexeme push-back and a positional move history
//! - **Reverse anchor search**: finds the last `startxref` line without scanning the whole file
//! - **Diagnostics**: every lexical error carries its offset and a context window with a caret
//!
//! ## Quick Start
//!
//! ```rust
//! use pdflex::{Keyword, Lexeme, Lexer, ParseResult};
//!
//! # fn main() -> ParseResult<()> {
//! let data = b"1 0 obj\n<< /Length 5 >>\nstream\nHello\nendstream\nendobj";
//! let mut lexer = Lexer::new(data);
//!
//! assert_eq!(lexer.next_lexeme()?, Some(Lexeme::Integer(1)));
//! assert_eq!(lexer.next_lexeme()?, Some(Lexeme::Integer(0)));
//! assert_eq!(lexer.next_lexeme()?, Some(Lexeme::Keyword(Keyword::Obj)));
//!
//! while let Some(lexeme) = lexer.next_lexeme()? {
//!     if let Lexeme::Stream(reader) = lexeme {
//!         assert_eq!(reader.read(5)?, b"Hello");
//!         lexer.move_to(reader.end_offset(5))?;
//!         assert!(lexer.current()?.is_keyword(Keyword::EndStream));
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Locating the cross-reference table
//!
//! ```rust
//! use pdflex::{Lexeme, Lexer};
//!
//! # fn main() -> pdflex::ParseResult<()> {
//! let data = b"%PDF-1.4\n...\nstartxref\n1234\n%%EOF\n";
//! let mut lexer = Lexer::new(data);
//!
//! if lexer.find_anchor_backward(b"startxref")?.is_some() {
//!     assert_eq!(lexer.next_lexeme()?, Some(Lexeme::Integer(1234)));
//! }
//! # Ok(())
//! # }
//! ```

pub mod parser;

pub use parser::{
    ByteCursor, DiagnosticContext, Keyword, Lexeme, Lexer, LexerOptions, ParseError,
    ParseResult, StreamReader,
};

/// Current version of pdflex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
