//! Reverse anchor search
//!
//! Locates the last line of the input that consists exactly of a keyword, such
//! as the final `startxref`, without a forward scan over the whole file.

use super::charset::is_end_of_line;
use super::lexer::Lexer;
use super::ParseResult;

impl<'a> Lexer<'a> {
    /// Search backward, line by line, for the last line equal to `keyword`.
    ///
    /// On success the lookahead is moved to the byte right after the keyword
    /// (its end-of-line), the push-back slot is cleared, and that offset is
    /// returned: the next pull tokenizes whatever follows the anchor line.
    /// The keyword itself is not tokenized, so [`Lexer::current`] still holds
    /// the lexeme pulled before the search.
    /// Returns `Ok(None)` and leaves the lexer untouched when no line matches.
    pub fn find_anchor_backward(&mut self, keyword: &[u8]) -> ParseResult<Option<usize>> {
        let found = {
            let scanner = self.scanner.borrow();
            find_line_backward(scanner.cursor.as_bytes(), keyword)
        };

        let Some(line_start) = found else {
            tracing::debug!(
                keyword = %String::from_utf8_lossy(keyword),
                "anchor not found"
            );
            return Ok(None);
        };

        let position = line_start + keyword.len();
        self.pending = None;
        self.scanner.borrow_mut().seek_lookahead(position);
        tracing::debug!(
            keyword = %String::from_utf8_lossy(keyword),
            line_start,
            position,
            "anchor found"
        );
        Ok(Some(position))
    }
}

/// Start offset of the last line of `data` equal to `keyword`
fn find_line_backward(data: &[u8], keyword: &[u8]) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }

    let mut end = data.len();
    loop {
        let start = data[..end]
            .iter()
            .rposition(|&byte| is_end_of_line(byte))
            .map_or(0, |eol| eol + 1);
        if &data[start..end] == keyword {
            return Some(start);
        }
        if start == 0 {
            return None;
        }
        end = start - 1;
    }
}
