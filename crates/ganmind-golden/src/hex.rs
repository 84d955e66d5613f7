//! `$readmemh` memory images
//!
//! ## Input tables
//!
//! One word per line. Blank lines and lines starting with `//` are skipped;
//! every other line must be 1–4 hex digits (either case), read as a 16-bit
//! two's-complement word.
//!
//! ## Snapshots
//!
//! One word per line, exactly four lowercase hex digits, newline-terminated,
//! no header.

use crate::error::{GoldenError, Result};
use crate::fixed::{from_word, to_word, Fixed16};
use std::fs;
use std::path::Path;

/// Maximum digits of one hex word.
const MAX_DIGITS: usize = 4;

fn parse_word(token: &str) -> Option<u16> {
    if token.is_empty() || token.len() > MAX_DIGITS || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(token, 16).ok()
}

/// Parse the text of a weight/bias table.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `Parse` with the 1-based line number of the first bad word.
pub fn parse_table(text: &str, path: &Path) -> Result<Vec<Fixed16>> {
    let mut values = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let word = parse_word(line).ok_or_else(|| GoldenError::parse(path, idx + 1, line))?;
        values.push(from_word(word));
    }
    Ok(values)
}

/// Read a file as text; bytes that are not UTF-8 are a `Parse` error on
/// the line holding the first bad byte.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GoldenError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        let bytes = e.as_bytes();
        let bad = e.utf8_error().valid_up_to();
        let line_start = bytes[..bad].iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        let line_end = bytes[bad..].iter().position(|&b| b == b'\n').map_or(bytes.len(), |i| bad + i);
        let line = bytes[..bad].iter().filter(|&&b| b == b'\n').count() + 1;
        GoldenError::parse(path, line, String::from_utf8_lossy(&bytes[line_start..line_end]).trim())
    })
}

/// Read a weight/bias table from disk.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `Parse` if a line is not hex.
pub fn read_table(path: &Path) -> Result<Vec<Fixed16>> {
    let text = read_text(path)?;
    let values = parse_table(&text, path)?;
    tracing::debug!("Loaded {} words from {}", values.len(), path.display());
    Ok(values)
}

/// Render a vector in snapshot format.
pub fn format_snapshot(values: &[Fixed16]) -> String {
    values.iter().map(|&v| format!("{:04x}\n", to_word(v))).collect()
}

/// Write a vector as a snapshot file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn write_snapshot(path: &Path, values: &[Fixed16]) -> Result<()> {
    fs::write(path, format_snapshot(values)).map_err(|e| GoldenError::io(path, e))?;
    tracing::debug!("Wrote {} words to {}", values.len(), path.display());
    Ok(())
}

/// Parse snapshot text, accepting only the strict four-digit format.
///
/// # Errors
///
/// Returns `Parse` for any line that is not exactly four hex digits.
pub fn parse_snapshot(text: &str, path: &Path) -> Result<Vec<Fixed16>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            if line.len() != MAX_DIGITS {
                return Err(GoldenError::parse(path, idx + 1, line.trim()));
            }
            parse_word(line)
                .map(from_word)
                .ok_or_else(|| GoldenError::parse(path, idx + 1, line))
        })
        .collect()
}

/// Read a snapshot file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `Parse` if it is malformed.
pub fn read_snapshot(path: &Path) -> Result<Vec<Fixed16>> {
    let text = read_text(path)?;
    parse_snapshot(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn p() -> &'static Path {
        Path::new("test.hex")
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "// layer 1 bias\n014b\n\n  feaf  \n// end\nFF6A\n";
        assert_eq!(parse_table(text, p()).unwrap(), vec![0x014b, -0x0151, -0x0096]);
    }

    #[test]
    fn short_tokens_are_zero_extended() {
        assert_eq!(parse_table("1\nff\n7ff\n", p()).unwrap(), vec![1, 255, 2047]);
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = parse_table("0001\n0002\nzz\n", p()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            GoldenError::Parse { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "zz");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn rejects_oversized_and_prefixed_tokens() {
        assert!(parse_table("10000\n", p()).is_err());
        assert!(parse_table("0x10\n", p()).is_err());
        assert!(parse_table("-1\n", p()).is_err());
        assert!(parse_table("+1\n", p()).is_err());
    }

    #[test]
    fn snapshot_format_is_lowercase_four_digits() {
        assert_eq!(format_snapshot(&[0, 1, -1, 256, i16::MIN]), "0000\n0001\nffff\n0100\n8000\n");
        assert_eq!(format_snapshot(&[]), "");
    }

    #[test]
    fn snapshot_text_reads_back() {
        let values = vec![-300, 0, 17, 1024, i16::MAX];
        let text = format_snapshot(&values);
        assert_eq!(parse_snapshot(&text, p()).unwrap(), values);
    }

    #[test]
    fn snapshot_parser_is_strict() {
        assert!(parse_snapshot("abc\n", p()).is_err());
        assert!(parse_snapshot("0000\n\n", p()).is_err());
        assert!(parse_snapshot("00000\n", p()).is_err());
    }

    #[test]
    fn non_utf8_table_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.hex");
        fs::write(&path, b"0001\n0002\n00\xff3\n0004\n").unwrap();

        let err = read_table(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            GoldenError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(read_snapshot(&path).unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_table(Path::new("/nonexistent/ganmind/table.hex")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
