//! Deferred stream body extraction
//!
//! The length of a stream body lives in the stream dictionary, and may be an
//! indirect reference that is resolved only after the `stream` keyword has been
//! tokenized. The lexer therefore hands out a [`StreamReader`] bound to the
//! offset of the first body byte, and the body is read once the length is known.

use super::charset::{CARRIAGE_RETURN, LINE_FEED};
use super::scanner::SharedScanner;
use super::ParseResult;
use std::fmt;
use std::io::SeekFrom;
use std::rc::Rc;

/// Reader for the body of a stream, bound to the body's first byte
#[derive(Clone)]
pub struct StreamReader<'a> {
    origin: usize,
    scanner: SharedScanner<'a>,
}

impl<'a> StreamReader<'a> {
    pub(crate) fn new(origin: usize, scanner: SharedScanner<'a>) -> Self {
        Self { origin, scanner }
    }

    /// Absolute offset of the first byte of the stream body
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Read exactly `length` body bytes.
    ///
    /// The result does not depend on where the lexer currently is, and the
    /// lexer state (cursor position and lookahead) is the same after the call
    /// as before it. Must not be called while the owning lexer is mid-pull.
    pub fn read(&self, length: usize) -> ParseResult<Vec<u8>> {
        let mut scanner = self.scanner.borrow_mut();
        let mark = scanner.mark();

        scanner.cursor.seek(SeekFrom::Start(self.origin as u64));
        let data = scanner.cursor.read(length).to_vec();
        scanner.reset(mark);

        if data.len() < length {
            return Err(scanner.error_at(
                self.origin,
                format!(
                    "Stream declares {length} bytes but only {} are available.",
                    data.len()
                ),
            ));
        }

        tracing::trace!(origin = self.origin, length, "read deferred stream body");
        Ok(data)
    }

    /// Offset just past `length` body bytes and one optional end-of-line.
    ///
    /// This is where `endstream` is expected to begin.
    pub fn end_offset(&self, length: usize) -> usize {
        let scanner = self.scanner.borrow();
        let end = self.origin.saturating_add(length).min(scanner.len());
        match (scanner.cursor.byte_at(end), scanner.cursor.byte_at(end + 1)) {
            (Some(CARRIAGE_RETURN), Some(LINE_FEED)) => end + 2,
            (Some(CARRIAGE_RETURN), _) | (Some(LINE_FEED), _) => end + 1,
            _ => end,
        }
    }
}

impl fmt::Debug for StreamReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamReader")
            .field("origin", &self.origin)
            .finish()
    }
}

impl PartialEq for StreamReader<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && Rc::ptr_eq(&self.scanner, &other.scanner)
    }
}
