//! Backtracking and lookahead
//!
//! Two independent mechanisms sit on top of the tokenizer. The push-back slot
//! replays one lexeme on the next pull, for one-token lookahead such as telling
//! `N G R` apart from a bare integer. The move history lets the caller jump to
//! an absolute offset (an xref entry, an object) and later return to exactly
//! where it was.

use super::lexeme::Lexeme;
use super::lexer::Lexer;
use super::{ParseError, ParseResult};

/// State saved by [`Lexer::move_to`]
#[derive(Debug, Clone)]
pub(super) struct MoveSnapshot<'a> {
    lexeme: Option<Lexeme<'a>>,
    offset: usize,
    pending: Option<Lexeme<'a>>,
}

impl<'a> Lexer<'a> {
    /// Jump to `position` and tokenize the lexeme found there.
    ///
    /// The current lexeme and lookahead are pushed onto the move history. A
    /// pending push-back is saved with them and does not leak into the new
    /// position.
    pub fn move_to(&mut self, position: usize) -> ParseResult<Option<Lexeme<'a>>> {
        let offset = self.offset();
        self.history.push(MoveSnapshot {
            lexeme: self.current.clone(),
            offset,
            pending: self.pending.take(),
        });
        tracing::debug!(
            from = offset,
            to = position,
            depth = self.history.len(),
            "move lexer"
        );

        self.scanner.borrow_mut().seek_lookahead(position);
        self.tokenize()
    }

    /// Return to the state saved by the most recent [`Lexer::move_to`]
    pub fn move_back(&mut self) -> ParseResult<()> {
        let snapshot = self.history.pop().ok_or(ParseError::EmptyMoveHistory)?;
        self.scanner.borrow_mut().seek_lookahead(snapshot.offset);
        self.current = snapshot.lexeme;
        self.pending = snapshot.pending;
        tracing::debug!(
            to = snapshot.offset,
            depth = self.history.len(),
            "move lexer back"
        );
        Ok(())
    }

    /// Queue `lexeme` to be returned by the next pull.
    ///
    /// There is a single slot; a lexeme already queued is displaced and returned.
    pub fn put_back(&mut self, lexeme: Lexeme<'a>) -> Option<Lexeme<'a>> {
        self.pending.replace(lexeme)
    }

    /// Undo the last pull: the current lexeme is queued again and `previous`
    /// becomes current.
    pub fn undo_next(&mut self, previous: Lexeme<'a>) {
        if let Some(current) = self.current.replace(previous) {
            self.pending = Some(current);
        }
    }

    /// Number of saved moves
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }
}
