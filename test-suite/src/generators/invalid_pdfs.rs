//! Invalid PDF Generators
//!
//! Generates deliberately malformed PDF fragments for lexical error tests.
//! Every case records the offset the lexer is expected to report.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// A malformed input and the lexical error it must produce
#[derive(Debug, Clone)]
pub struct MalformedCase {
    pub name: &'static str,
    pub data: Vec<u8>,
    /// Offset of the byte the error is anchored to
    pub error_offset: usize,
    /// Leading text of the error message
    pub message: &'static str,
}

impl MalformedCase {
    fn new(name: &'static str, data: &[u8], error_offset: usize, message: &'static str) -> Self {
        Self {
            name,
            data: data.to_vec(),
            error_offset,
            message,
        }
    }
}

/// All malformed cases, each failing at a known offset
pub fn lexical_error_cases() -> Vec<MalformedCase> {
    vec![
        MalformedCase::new(
            "invalid_character",
            b"1 0 obj\n<< /Type ~ >>\nendobj",
            17,
            "Invalid characters sequence in input stream.",
        ),
        MalformedCase::new(
            "lone_greater_than",
            b"<< /Kids [3 0 R] > >>",
            17,
            "Invalid characters sequence in input stream.",
        ),
        MalformedCase::new(
            "unterminated_hex_string",
            b"<< /ID [<0A1B2C3D] >>",
            17,
            "Expected '>' to end hexadecimal string.",
        ),
        MalformedCase::new(
            "hex_string_at_end_of_file",
            b"<< /ID [<0A1B",
            13,
            "Expected '>' to end hexadecimal string.",
        ),
        MalformedCase::new(
            "bad_name_escape",
            b"<< /Lime#2GGreen 1 >>",
            10,
            "Invalid hexadecimal digit in name escape.",
        ),
        MalformedCase::new(
            "truncated_name_escape",
            b"/Lime#2",
            7,
            "Invalid hexadecimal digit in name escape.",
        ),
        MalformedCase::new(
            "stream_with_bare_carriage_return",
            b"<< /Length 3 >>\nstream\rabc\nendstream",
            23,
            "Carriage return not followed by a line feed after 'stream' keyword.",
        ),
        MalformedCase::new(
            "unterminated_string",
            b"<< /Title (Unbalanced (parens) >>",
            10,
            "Unterminated string literal.",
        ),
        MalformedCase::new(
            "invalid_octal_digit",
            b"(tab\\9)",
            5,
            "Invalid octal digit in string escape.",
        ),
        MalformedCase::new("bare_sign", b"[1 - 2]", 3, "Invalid integer: '-'"),
        MalformedCase::new("bare_dot", b"[1 . 2]", 3, "Invalid real number: '.'"),
        MalformedCase::new(
            "truncated_xref_entry",
            b"xref\n0 4\n0000000000 655?",
            23,
            "Invalid characters sequence in input stream.",
        ),
    ]
}

/// Write every malformed case as `<name>.pdf` into `output_dir`
pub fn generate_all<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    for case in lexical_error_cases() {
        let path = output_dir.join(format!("{}.pdf", case.name));
        fs::write(&path, &case.data)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_names_are_unique() {
        let cases = lexical_error_cases();
        let mut names: Vec<_> = cases.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn test_error_offsets_are_in_bounds() {
        for case in lexical_error_cases() {
            assert!(case.error_offset <= case.data.len(), "{}", case.name);
        }
    }

    #[test]
    fn test_generate_all_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        generate_all(dir.path()).unwrap();
        let written = fs::read(dir.path().join("bad_name_escape.pdf")).unwrap();
        assert_eq!(written, b"<< /Lime#2GGreen 1 >>");
    }
}
