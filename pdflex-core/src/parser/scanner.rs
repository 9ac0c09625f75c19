//! Lookahead state over a byte cursor
//!
//! The scanner owns the cursor together with the one byte of lookahead the
//! tokenizer dispatches on. Invariant: unless `ended` is set, `current` is the
//! byte at `cursor.tell() - 1`; once the buffer is exhausted `current` holds a
//! blank sentinel and `ended` is true.

use super::context::DiagnosticContext;
use super::cursor::ByteCursor;
use super::ParseError;
use std::cell::RefCell;
use std::io::SeekFrom;
use std::rc::Rc;

/// Scanner shared between a lexer and the stream readers it hands out
pub(crate) type SharedScanner<'a> = Rc<RefCell<Scanner<'a>>>;

const SENTINEL: u8 = b' ';

pub(crate) struct Scanner<'a> {
    pub(crate) cursor: ByteCursor<'a>,
    length: usize,
    current: u8,
    ended: bool,
    context_size: usize,
}

/// Saved scanner state, restored verbatim
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanMark {
    position: usize,
    current: u8,
    ended: bool,
}

impl<'a> Scanner<'a> {
    /// Measure the buffer, restore the cursor and preload one lookahead byte
    pub(crate) fn new(mut cursor: ByteCursor<'a>, context_size: usize) -> Self {
        let start = cursor.tell();
        let length = cursor.seek(SeekFrom::End(0));
        cursor.seek(SeekFrom::Start(start as u64));

        let mut scanner = Self {
            cursor,
            length,
            current: SENTINEL,
            ended: false,
            context_size,
        };
        scanner.prime();
        scanner
    }

    /// Load the byte at the cursor as lookahead, or the sentinel at the end
    pub(crate) fn prime(&mut self) {
        match self.cursor.read_byte() {
            Some(byte) => {
                self.current = byte;
                self.ended = false;
            }
            None => {
                self.current = SENTINEL;
                self.ended = true;
            }
        }
    }

    /// Consume the lookahead byte. A no-op once the buffer is exhausted.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.ended {
            self.prime();
        }
    }

    /// Make the byte at `offset` the lookahead byte
    pub(crate) fn seek_lookahead(&mut self, offset: usize) {
        self.cursor.seek(SeekFrom::Start(offset as u64));
        self.prime();
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.current
    }

    #[inline]
    pub(crate) fn is_ended(&self) -> bool {
        self.ended
    }

    /// Lookahead byte, or `None` once the buffer is exhausted
    #[inline]
    pub(crate) fn lookahead(&self) -> Option<u8> {
        if self.ended {
            None
        } else {
            Some(self.current)
        }
    }

    /// Absolute offset of the lookahead byte
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        if self.ended {
            self.length
        } else {
            self.cursor.tell() - 1
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.length
    }

    /// Byte `k` positions past the lookahead byte, without consuming anything
    #[inline]
    pub(crate) fn peek(&self, k: usize) -> Option<u8> {
        if self.ended {
            return None;
        }
        self.cursor.byte_at(self.offset() + k)
    }

    /// Consume `literal` if the input continues with it
    pub(crate) fn match_literal(&mut self, literal: &[u8]) -> bool {
        let matched = literal
            .iter()
            .enumerate()
            .all(|(k, &byte)| self.peek(k) == Some(byte));
        if matched {
            for _ in 0..literal.len() {
                self.advance();
            }
        }
        matched
    }

    pub(crate) fn mark(&self) -> ScanMark {
        ScanMark {
            position: self.cursor.tell(),
            current: self.current,
            ended: self.ended,
        }
    }

    pub(crate) fn reset(&mut self, mark: ScanMark) {
        self.cursor.seek(SeekFrom::Start(mark.position as u64));
        self.current = mark.current;
        self.ended = mark.ended;
    }

    pub(crate) fn context_at(&mut self, position: usize) -> DiagnosticContext {
        DiagnosticContext::capture(&mut self.cursor, position, self.context_size)
    }

    /// Lexical error anchored at the lookahead byte
    pub(crate) fn error(&mut self, message: impl Into<String>) -> ParseError {
        let position = self.offset();
        self.error_at(position, message)
    }

    pub(crate) fn error_at(&mut self, position: usize, message: impl Into<String>) -> ParseError {
        ParseError::LexicalError {
            message: message.into(),
            position,
            context: Box::new(self.context_at(position)),
        }
    }
}
