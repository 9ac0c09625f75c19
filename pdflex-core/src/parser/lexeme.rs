//! Lexeme types produced by the lexer

use super::stream_reader::StreamReader;

/// Keywords of the closed PDF file-structure vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `<<`
    DictStart,
    /// `>>`
    DictEnd,
    EndObj,
    Obj,
    Trailer,
    XRef,
    Null,
    StartXRef,
    EndStream,
}

impl Keyword {
    /// Keywords in the order the tokenizer tries them.
    ///
    /// `endobj` precedes `obj` and every keyword precedes the one-byte
    /// singletons, so `null` is never split into `n` plus leftovers.
    pub const MATCH_ORDER: [Keyword; 9] = [
        Keyword::DictStart,
        Keyword::DictEnd,
        Keyword::EndObj,
        Keyword::Obj,
        Keyword::Trailer,
        Keyword::XRef,
        Keyword::Null,
        Keyword::StartXRef,
        Keyword::EndStream,
    ];

    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Keyword::DictStart => b"<<",
            Keyword::DictEnd => b">>",
            Keyword::EndObj => b"endobj",
            Keyword::Obj => b"obj",
            Keyword::Trailer => b"trailer",
            Keyword::XRef => b"xref",
            Keyword::Null => b"null",
            Keyword::StartXRef => b"startxref",
            Keyword::EndStream => b"endstream",
        }
    }
}

/// A classified lexeme
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme<'a> {
    Integer(i64),

    Real(f64),

    Boolean(bool),

    /// Name with `#xx` escapes resolved (e.g. `/Lime#20Green` is `Lime Green`)
    Name(String),

    Keyword(Keyword),

    /// One-byte structural token: `{ } [ ] n f R`
    Singleton(u8),

    /// Raw hex digits between `<` and `>`, blanks removed, not yet decoded
    HexString(Vec<u8>),

    /// Literal string with escapes resolved
    String(String),

    /// Deferred reader for the body following a `stream` keyword
    Stream(StreamReader<'a>),
}

impl<'a> Lexeme<'a> {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Lexeme::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Lexeme::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&StreamReader<'a>> {
        match self {
            Lexeme::Stream(reader) => Some(reader),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Lexeme::Keyword(k) if *k == keyword)
    }

    pub fn is_singleton(&self, byte: u8) -> bool {
        matches!(self, Lexeme::Singleton(b) if *b == byte)
    }
}
