//! Diagnostic context for lexical errors
//!
//! Given a window size `C` and an error position `P`, the context is the run of
//! at most `C` bytes starting at `max(P - C / 2, 0)`.

use super::charset::has_letter_escape;
use super::cursor::ByteCursor;
use std::fmt;
use std::io::SeekFrom;

/// Bytes surrounding an error position, with a caret column for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticContext {
    /// Absolute offset the context is anchored to
    pub position: usize,
    /// Absolute offset of the first context byte
    pub window_start: usize,
    /// Raw bytes of the window
    pub bytes: Vec<u8>,
    /// Column of the caret under the rendered bytes
    pub caret_column: usize,
}

impl DiagnosticContext {
    /// Capture the window around `position`. The cursor position is restored.
    pub fn capture(cursor: &mut ByteCursor<'_>, position: usize, size: usize) -> Self {
        let saved = cursor.tell();
        let window_start = position.saturating_sub(size / 2);
        let relative = position - window_start;

        cursor.seek(SeekFrom::Start(window_start as u64));
        let bytes = cursor.read(size).to_vec();
        cursor.seek(SeekFrom::Start(saved as u64));

        // Letter escapes render two columns wide. Other control bytes render
        // as four-column \xNN escapes but are counted here as one column.
        let widened = bytes[..relative.min(bytes.len())]
            .iter()
            .filter(|&&b| has_letter_escape(b))
            .count();

        Self {
            position,
            window_start,
            bytes,
            caret_column: relative + widened,
        }
    }

    /// Printable rendering of the window bytes
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len());
        for &byte in &self.bytes {
            match byte {
                b'\n' => out.push_str("\\n"),
                b'\r' => out.push_str("\\r"),
                b'\t' => out.push_str("\\t"),
                0x08 => out.push_str("\\b"),
                0x0C => out.push_str("\\f"),
                0x20..=0x7E => out.push(byte as char),
                _ => out.push_str(&format!("\\x{byte:02x}")),
            }
        }
        out
    }
}

impl fmt::Display for DiagnosticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}, context:\n\t{}\n\t{}^",
            self.position,
            self.rendered(),
            " ".repeat(self.caret_column)
        )
    }
}
