//! Integration tests for the PDF lexer
//!
//! Drives the public pull API over complete fragments of PDF syntax.

use pdflex::{ByteCursor, Keyword, Lexeme, Lexer, LexerOptions, ParseError};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Seek, SeekFrom, Write};

fn lex_all(input: &[u8]) -> Vec<Lexeme<'_>> {
    let mut lexer = Lexer::new(input);
    let mut lexemes = Vec::new();
    while let Some(lexeme) = lexer.next_lexeme().unwrap() {
        lexemes.push(lexeme);
    }
    lexemes
}

fn name(text: &str) -> Lexeme<'static> {
    Lexeme::Name(text.to_string())
}

#[test]
fn test_object_definition() {
    let input = b"4 0 obj\n<< /Type /Page /MediaBox [0 0 612.0 792] /Contents 5 0 R >>\nendobj";
    assert_eq!(
        lex_all(input),
        vec![
            Lexeme::Integer(4),
            Lexeme::Integer(0),
            Lexeme::Keyword(Keyword::Obj),
            Lexeme::Keyword(Keyword::DictStart),
            name("Type"),
            name("Page"),
            name("MediaBox"),
            Lexeme::Singleton(b'['),
            Lexeme::Integer(0),
            Lexeme::Integer(0),
            Lexeme::Real(612.0),
            Lexeme::Integer(792),
            Lexeme::Singleton(b']'),
            name("Contents"),
            Lexeme::Integer(5),
            Lexeme::Integer(0),
            Lexeme::Singleton(b'R'),
            Lexeme::Keyword(Keyword::DictEnd),
            Lexeme::Keyword(Keyword::EndObj),
        ]
    );
}

#[test]
fn test_xref_table_and_trailer() {
    let input = b"xref\n0 2\n0000000000 65535 f\r\n0000000017 00000 n\r\ntrailer\n<< /Size 2 /Root 1 0 R >>\nstartxref\n120\n%%EOF";
    assert_eq!(
        lex_all(input),
        vec![
            Lexeme::Keyword(Keyword::XRef),
            Lexeme::Integer(0),
            Lexeme::Integer(2),
            Lexeme::Integer(0),
            Lexeme::Integer(65535),
            Lexeme::Singleton(b'f'),
            Lexeme::Integer(17),
            Lexeme::Integer(0),
            Lexeme::Singleton(b'n'),
            Lexeme::Keyword(Keyword::Trailer),
            Lexeme::Keyword(Keyword::DictStart),
            name("Size"),
            Lexeme::Integer(2),
            name("Root"),
            Lexeme::Integer(1),
            Lexeme::Integer(0),
            Lexeme::Singleton(b'R'),
            Lexeme::Keyword(Keyword::DictEnd),
            Lexeme::Keyword(Keyword::StartXRef),
            Lexeme::Integer(120),
        ]
    );
}

#[test]
fn test_blank_only_input_ends_sequence() {
    let inputs: [&[u8]; 5] = [
        b"",
        b"   ",
        b"\x00\t\r\n\x0c ",
        b"%only a comment",
        b"% a\n% b\r\n  ",
    ];
    for input in inputs {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_lexeme().unwrap(), None);
        assert!(lexer.is_ended());
    }
}

#[test]
fn test_null_is_never_split() {
    assert_eq!(lex_all(b"null"), vec![Lexeme::Keyword(Keyword::Null)]);
    assert_eq!(
        lex_all(b"[null n]"),
        vec![
            Lexeme::Singleton(b'['),
            Lexeme::Keyword(Keyword::Null),
            Lexeme::Singleton(b'n'),
            Lexeme::Singleton(b']'),
        ]
    );
}

#[test]
fn test_hex_string_decodes_like_literal() {
    let lexemes = lex_all(b"<4E6F76> (Nov)");
    let Lexeme::HexString(digits) = &lexemes[0] else {
        panic!("expected hex string, got {:?}", lexemes[0]);
    };
    let decoded = hex::decode(digits).unwrap();
    let Lexeme::String(text) = &lexemes[1] else {
        panic!("expected string, got {:?}", lexemes[1]);
    };
    assert_eq!(decoded, text.as_bytes());
}

#[test]
fn test_odd_length_hex_string_is_kept_raw() {
    assert_eq!(lex_all(b"<901FA>"), vec![Lexeme::HexString(b"901FA".to_vec())]);
}

#[test]
fn test_octal_escapes_give_plus_sign() {
    assert_eq!(
        lex_all(br"(\053) (\53)"),
        vec![
            Lexeme::String("+".to_string()),
            Lexeme::String("+".to_string()),
        ]
    );
}

#[test]
fn test_string_escape_matches_literal_newline() {
    let lexemes = lex_all(b"(These \\nare the same.) (These \nare the same.)");
    assert_eq!(lexemes[0], lexemes[1]);
}

#[test]
fn test_string_keeps_carriage_return() {
    assert_eq!(
        lex_all(b"(a\r\nb)"),
        vec![Lexeme::String("a\r\nb".to_string())]
    );
}

#[test]
fn test_lone_tilde_is_a_lexical_error() {
    let mut lexer = Lexer::new(b"~");
    let err = lexer.next_lexeme().unwrap_err();
    assert_eq!(err.position(), Some(0));
    assert!(err.to_string().contains("Position 0"));

    let mut lexer = Lexer::new(b"1 2 ~ 3");
    lexer.next_lexeme().unwrap();
    lexer.next_lexeme().unwrap();
    let err = lexer.next_lexeme().unwrap_err();
    assert_eq!(err.position(), Some(4));
}

#[test]
fn test_error_message_layout() {
    let mut lexer = Lexer::new(b"12 ~");
    lexer.next_lexeme().unwrap();
    let err = lexer.next_lexeme().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid characters sequence in input stream.\n\nPosition 3, context:\n\t12 ~\n\t   ^"
    );
}

#[test]
fn test_error_context_respects_window_size() {
    let mut input = vec![b' '; 1000];
    input.push(b'~');
    let options = LexerOptions::default().with_context_size(10);
    let err = Lexer::with_options(&input, options).next_lexeme().unwrap_err();
    match err {
        ParseError::LexicalError {
            position, context, ..
        } => {
            assert_eq!(position, 1000);
            assert_eq!(context.window_start, 995);
            assert_eq!(context.bytes.len(), 6);
            assert_eq!(context.caret_column, 5);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_lexer_from_cursor_starts_at_cursor_position() {
    let mut cursor = ByteCursor::new(b"garbage ~ 42");
    cursor.seek(SeekFrom::Start(10));
    let mut lexer = Lexer::from_cursor(cursor, LexerOptions::default());
    assert_eq!(lexer.next_lexeme().unwrap(), Some(Lexeme::Integer(42)));
    assert_eq!(lexer.len(), 12);
}

#[test]
fn test_lexer_from_reader() {
    let reader = Cursor::new(b"<< /Length 3 >>".to_vec());
    let mut lexer = Lexer::from_reader(reader, LexerOptions::default()).unwrap();
    assert_eq!(
        lexer.next_lexeme().unwrap(),
        Some(Lexeme::Keyword(Keyword::DictStart))
    );
    assert_eq!(lexer.next_lexeme().unwrap(), Some(name("Length")));
}

#[test]
fn test_lexer_from_temp_file() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"%PDF-1.7\n1 0 obj\nnull\nendobj\n").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut lexer = Lexer::from_reader(file, LexerOptions::default()).unwrap();
    let mut lexemes = Vec::new();
    while let Some(lexeme) = lexer.next_lexeme().unwrap() {
        lexemes.push(lexeme);
    }
    assert_eq!(
        lexemes,
        vec![
            Lexeme::Integer(1),
            Lexeme::Integer(0),
            Lexeme::Keyword(Keyword::Obj),
            Lexeme::Keyword(Keyword::Null),
            Lexeme::Keyword(Keyword::EndObj),
        ]
    );
}

#[test]
fn test_current_before_first_pull() {
    let lexer = Lexer::new(b"1");
    assert!(matches!(lexer.current(), Err(ParseError::NoCurrentLexeme)));
}
