//! PDF Lexer
//!
//! Tokenizes PDF syntax according to ISO 32000-1 Section 7.2. The lexer is a
//! pull-based state object: each call to [`Lexer::next_lexeme`] recognizes one
//! lexeme by greedy longest match over the lookahead byte, or reports the end
//! of the input with `Ok(None)`.

use super::charset::{
    decode_text, hex_value, is_blank, is_delimiter, is_singleton, string_escape,
    CARRIAGE_RETURN, LINE_FEED,
};
use super::context::DiagnosticContext;
use super::cursor::ByteCursor;
use super::lexeme::{Keyword, Lexeme};
use super::navigation::MoveSnapshot;
use super::scanner::{Scanner, SharedScanner};
use super::stream_reader::StreamReader;
use super::{LexerOptions, ParseError, ParseResult};
use std::cell::RefCell;
use std::io::{Read, Seek};
use std::rc::Rc;

/// PDF Lexer over one immutable byte buffer
pub struct Lexer<'a> {
    pub(super) scanner: SharedScanner<'a>,
    pub(super) current: Option<Lexeme<'a>>,
    pub(super) pending: Option<Lexeme<'a>>,
    pub(super) history: Vec<MoveSnapshot<'a>>,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `data` with default options
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, LexerOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: LexerOptions) -> Self {
        Self::from_cursor(ByteCursor::new(data), options)
    }

    /// Create a lexer starting at the cursor's current position
    pub fn from_cursor(cursor: ByteCursor<'a>, options: LexerOptions) -> Self {
        let scanner = Scanner::new(cursor, options.context_size);
        Self {
            scanner: Rc::new(RefCell::new(scanner)),
            current: None,
            pending: None,
            history: Vec::new(),
            options,
        }
    }

    /// Get the next lexeme, or `None` at the end of the input.
    ///
    /// A lexeme stored with [`Lexer::put_back`] is returned first.
    pub fn next_lexeme(&mut self) -> ParseResult<Option<Lexeme<'a>>> {
        if let Some(lexeme) = self.pending.take() {
            self.current = Some(lexeme.clone());
            return Ok(Some(lexeme));
        }
        self.tokenize()
    }

    /// Run the tokenizer from the lookahead byte, bypassing the push-back slot
    pub(super) fn tokenize(&mut self) -> ParseResult<Option<Lexeme<'a>>> {
        let lexeme = self.scanner.borrow_mut().scan(&self.scanner)?;
        if let Some(lexeme) = &lexeme {
            self.current = Some(lexeme.clone());
        }
        Ok(lexeme)
    }

    /// The most recently produced lexeme
    pub fn current(&self) -> ParseResult<&Lexeme<'a>> {
        self.current.as_ref().ok_or(ParseError::NoCurrentLexeme)
    }

    /// Absolute cursor position (one past the lookahead byte)
    pub fn position(&self) -> usize {
        self.scanner.borrow().cursor.tell()
    }

    /// Absolute offset of the lookahead byte
    pub fn offset(&self) -> usize {
        self.scanner.borrow().offset()
    }

    /// Total length of the input
    pub fn len(&self) -> usize {
        self.scanner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the lookahead has run past the last byte
    pub fn is_ended(&self) -> bool {
        self.scanner.borrow().is_ended()
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Context window around the lookahead byte, for the caller's own diagnostics
    pub fn diagnostic_context(&self) -> DiagnosticContext {
        let mut scanner = self.scanner.borrow_mut();
        let position = scanner.offset();
        scanner.context_at(position)
    }
}

impl Lexer<'static> {
    /// Create a lexer over the content of a seekable source
    pub fn from_reader<R: Read + Seek>(reader: R, options: LexerOptions) -> ParseResult<Self> {
        Ok(Self::from_cursor(ByteCursor::from_reader(reader)?, options))
    }
}

impl<'a> Scanner<'a> {
    /// Recognize one lexeme starting at the lookahead byte
    fn scan(&mut self, handle: &SharedScanner<'a>) -> ParseResult<Option<Lexeme<'a>>> {
        if !self.skip_blanks_and_comments() {
            return Ok(None);
        }

        let lexeme = match self.current() {
            b'(' => Lexeme::String(self.scan_literal_string()?),
            b'<' if self.peek(1) != Some(b'<') => Lexeme::HexString(self.scan_hex_string()?),
            b'/' => Lexeme::Name(self.scan_name()?),
            b'0'..=b'9' | b'+' | b'-' | b'.' => self.scan_number()?,
            _ => self.scan_word(handle)?,
        };
        Ok(Some(lexeme))
    }

    /// Skip blanks and `%` comments. Returns false at the end of the input.
    fn skip_blanks_and_comments(&mut self) -> bool {
        loop {
            if self.is_ended() {
                return false;
            }
            match self.current() {
                b'%' => {
                    while !self.is_ended() && self.current() != LINE_FEED {
                        self.advance();
                    }
                }
                byte if is_blank(byte) => self.advance(),
                _ => return true,
            }
        }
    }

    /// Booleans, `stream`, keywords and singletons, in that priority
    fn scan_word(&mut self, handle: &SharedScanner<'a>) -> ParseResult<Lexeme<'a>> {
        if self.match_literal(b"true") {
            return Ok(Lexeme::Boolean(true));
        }
        if self.match_literal(b"false") {
            return Ok(Lexeme::Boolean(false));
        }
        if self.match_literal(b"stream") {
            let origin = self.scan_stream_origin()?;
            return Ok(Lexeme::Stream(StreamReader::new(origin, Rc::clone(handle))));
        }
        for keyword in Keyword::MATCH_ORDER {
            if self.match_literal(keyword.as_bytes()) {
                return Ok(Lexeme::Keyword(keyword));
            }
        }

        let byte = self.current();
        if is_singleton(byte) {
            self.advance();
            return Ok(Lexeme::Singleton(byte));
        }
        Err(self.error("Invalid characters sequence in input stream."))
    }

    /// Offset of the first body byte after `stream` and its optional end-of-line.
    ///
    /// The line feed itself stays as lookahead.
    fn scan_stream_origin(&mut self) -> ParseResult<usize> {
        if self.lookahead() == Some(CARRIAGE_RETURN) {
            self.advance();
            if self.lookahead() != Some(LINE_FEED) {
                return Err(self.error(
                    "Carriage return not followed by a line feed after 'stream' keyword.",
                ));
            }
        }
        match self.lookahead() {
            Some(LINE_FEED) => Ok(self.offset() + 1),
            _ => Ok(self.offset()),
        }
    }

    /// Read a literal string (parentheses)
    fn scan_literal_string(&mut self) -> ParseResult<String> {
        let start = self.offset();
        self.advance(); // consume '('
        let mut buffer = Vec::new();
        let mut depth = 1usize;

        loop {
            let Some(byte) = self.lookahead() else {
                return Err(self.error_at(start, "Unterminated string literal."));
            };
            match byte {
                b'(' => {
                    depth += 1;
                    buffer.push(byte);
                    self.advance();
                }
                b')' => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        break;
                    }
                    buffer.push(byte);
                }
                b'\\' => {
                    self.advance();
                    let Some(escaped) = self.lookahead() else {
                        return Err(self.error_at(start, "Unterminated string literal."));
                    };
                    match escaped {
                        b'0'..=b'7' => buffer.push(self.scan_octal_escape()),
                        b'8' | b'9' => {
                            return Err(self.error("Invalid octal digit in string escape."));
                        }
                        _ => {
                            buffer.push(string_escape(escaped).unwrap_or(escaped));
                            self.advance();
                        }
                    }
                }
                _ => {
                    buffer.push(byte);
                    self.advance();
                }
            }
        }

        Ok(decode_text(buffer))
    }

    /// Up to three octal digits, most significant first; overflow wraps to a byte
    fn scan_octal_escape(&mut self) -> u8 {
        let mut value: u32 = 0;
        for _ in 0..3 {
            match self.lookahead() {
                Some(digit @ b'0'..=b'7') => {
                    value = value * 8 + u32::from(digit - b'0');
                    self.advance();
                }
                _ => break,
            }
        }
        (value & 0xFF) as u8
    }

    /// Read the raw digits of a hexadecimal string
    fn scan_hex_string(&mut self) -> ParseResult<Vec<u8>> {
        self.advance(); // consume '<'
        let mut digits = Vec::new();

        while let Some(byte) = self.lookahead() {
            if is_blank(byte) {
                self.advance();
            } else if hex_value(byte).is_some() {
                digits.push(byte);
                self.advance();
            } else {
                break;
            }
        }

        if self.lookahead() != Some(b'>') {
            return Err(self.error("Expected '>' to end hexadecimal string."));
        }
        self.advance();
        Ok(digits)
    }

    /// Read a name object (e.g., /Type)
    fn scan_name(&mut self) -> ParseResult<String> {
        self.advance(); // consume '/'
        let mut buffer = Vec::new();

        while let Some(byte) = self.lookahead() {
            if !(b'!'..=b'~').contains(&byte) || is_delimiter(byte) {
                break;
            }
            if byte == b'#' {
                self.advance();
                let high = self.name_hex_digit()?;
                self.advance();
                let low = self.name_hex_digit()?;
                buffer.push((high << 4) | low);
            } else {
                buffer.push(byte);
            }
            self.advance();
        }

        Ok(decode_text(buffer))
    }

    fn name_hex_digit(&mut self) -> ParseResult<u8> {
        match self.lookahead().and_then(hex_value) {
            Some(value) => Ok(value),
            None => Err(self.error("Invalid hexadecimal digit in name escape.")),
        }
    }

    /// Read a number: optional sign, digits, optional '.' and digits
    fn scan_number(&mut self) -> ParseResult<Lexeme<'a>> {
        let start = self.offset();
        let mut text = String::new();

        if let Some(sign @ (b'+' | b'-')) = self.lookahead() {
            text.push(sign as char);
            self.advance();
        }
        self.take_digits(&mut text);

        if self.lookahead() != Some(b'.') {
            return match text.parse::<i64>() {
                Ok(value) => Ok(Lexeme::Integer(value)),
                Err(_) => Err(self.error_at(start, format!("Invalid integer: '{text}'"))),
            };
        }

        text.push('.');
        self.advance();
        self.take_digits(&mut text);

        match text.parse::<f64>() {
            Ok(value) => Ok(Lexeme::Real(value)),
            Err(_) => Err(self.error_at(start, format!("Invalid real number: '{text}'"))),
        }
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(digit @ b'0'..=b'9') = self.lookahead() {
            text.push(digit as char);
            self.advance();
        }
    }
}
