//! Plain-text extractor: UTF-8 decode, one candidate per non-blank line.

use super::ExtractResult;

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<Vec<String>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(lines_of(text))
}

/// Split text on line breaks, trim each line, drop the blanks.
pub(super) fn lines_of(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractError;

    #[test]
    fn test_extract_drops_blank_lines() {
        let lines = extract(b"hello\n\nworld\n").unwrap();
        assert_eq!(lines, vec!["hello", "world"]);
    }

    #[test]
    fn test_extract_trims_lines() {
        let lines = extract(b"  padded  \n\t\nlast").unwrap();
        assert_eq!(lines, vec!["padded", "last"]);
    }

    #[test]
    fn test_extract_empty_file() {
        assert!(extract(b"").unwrap().is_empty());
        assert!(extract(b"\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_extract_rejects_invalid_utf8() {
        let err = extract(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8(_)));
    }

    #[test]
    fn test_extract_handles_crlf() {
        let lines = extract(b"one\r\ntwo\r\n").unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }
}
