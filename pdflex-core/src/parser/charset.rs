//! Byte classes and text decoding
//!
//! Character classes follow ISO 32000-1 Section 7.2.2. Decoded text is UTF-8
//! when the bytes are valid UTF-8 and Windows-1252 otherwise, so that no
//! literal is rejected for encoding reasons alone.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Blank bytes skipped between lexemes: NUL, TAB, LF, FF, CR, SPACE
#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, 0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// PDF delimiters: ( ) < > [ ] { } / %
#[inline]
pub fn is_delimiter(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// One-byte structural lexemes, including the xref entry markers and `R`
#[inline]
pub fn is_singleton(byte: u8) -> bool {
    matches!(byte, b'{' | b'}' | b'[' | b']' | b'n' | b'f' | b'R')
}

#[inline]
pub fn is_end_of_line(byte: u8) -> bool {
    byte == LINE_FEED || byte == CARRIAGE_RETURN
}

/// Value of a hexadecimal digit, case-insensitive
#[inline]
pub fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Control byte for a literal-string escape letter (`\n`, `\r`, `\b`, `\t`, `\f`)
#[inline]
pub fn string_escape(letter: u8) -> Option<u8> {
    match letter {
        b'n' => Some(LINE_FEED),
        b'r' => Some(CARRIAGE_RETURN),
        b'b' => Some(0x08),
        b't' => Some(0x09),
        b'f' => Some(0x0C),
        _ => None,
    }
}

/// Control bytes that have a two-column escaped rendering (`\n`, `\r`, `\b`, `\t`, `\f`)
#[inline]
pub fn has_letter_escape(byte: u8) -> bool {
    matches!(byte, 0x0A | 0x0D | 0x08 | 0x09 | 0x0C)
}

lazy_static! {
    /// Windows-1252 code points for the 0x80-0x9F range.
    ///
    /// The five bytes code page 1252 leaves undefined (0x81, 0x8D, 0x8F,
    /// 0x90, 0x9D) are absent and decode to the C1 control of the same value.
    static ref WINDOWS_1252_EXTENSIONS: HashMap<u8, char> = [
        (0x80, '\u{20AC}'), // Euro sign
        (0x82, '\u{201A}'), // Single low-9 quotation mark
        (0x83, '\u{0192}'), // Latin small letter f with hook
        (0x84, '\u{201E}'), // Double low-9 quotation mark
        (0x85, '\u{2026}'), // Horizontal ellipsis
        (0x86, '\u{2020}'), // Dagger
        (0x87, '\u{2021}'), // Double dagger
        (0x88, '\u{02C6}'), // Modifier letter circumflex accent
        (0x89, '\u{2030}'), // Per mille sign
        (0x8A, '\u{0160}'), // Latin capital letter S with caron
        (0x8B, '\u{2039}'), // Single left-pointing angle quotation mark
        (0x8C, '\u{0152}'), // Latin capital ligature OE
        (0x8E, '\u{017D}'), // Latin capital letter Z with caron
        (0x91, '\u{2018}'), // Left single quotation mark
        (0x92, '\u{2019}'), // Right single quotation mark
        (0x93, '\u{201C}'), // Left double quotation mark
        (0x94, '\u{201D}'), // Right double quotation mark
        (0x95, '\u{2022}'), // Bullet
        (0x96, '\u{2013}'), // En dash
        (0x97, '\u{2014}'), // Em dash
        (0x98, '\u{02DC}'), // Small tilde
        (0x99, '\u{2122}'), // Trade mark sign
        (0x9A, '\u{0161}'), // Latin small letter s with caron
        (0x9B, '\u{203A}'), // Single right-pointing angle quotation mark
        (0x9C, '\u{0153}'), // Latin small ligature oe
        (0x9E, '\u{017E}'), // Latin small letter z with caron
        (0x9F, '\u{0178}'), // Latin capital letter Y with diaeresis
    ]
    .into_iter()
    .collect();
}

/// Decode bytes as Windows-1252. Every byte maps to some character.
pub fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| match WINDOWS_1252_EXTENSIONS.get(&byte) {
            Some(&ch) => ch,
            None => char::from(byte),
        })
        .collect()
}

/// Decode lexeme text: UTF-8 first, Windows-1252 on failure
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => decode_windows_1252(err.as_bytes()),
    }
}
