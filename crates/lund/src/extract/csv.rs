//! CSV extractor: one candidate per row of the mandatory `text` column.

use csv::ReaderBuilder;

use super::{ExtractError, ExtractResult, SourceFormat};

/// Column the table must carry, exactly this name, case-sensitive.
const TEXT_COLUMN: &str = "text";

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<Vec<String>> {
    let mut reader = ReaderBuilder::new().from_reader(bytes);

    let headers = reader.headers().map_err(|e| ExtractError::Parse {
        format: SourceFormat::Csv,
        source: e.into(),
    })?;
    let text_idx = headers
        .iter()
        .position(|h| h == TEXT_COLUMN)
        .ok_or(ExtractError::MissingColumn)?;

    // Rows are records: keep them as-is, empty cells included, in row order.
    // Other columns are ignored here; the presentation layer may still show
    // them.
    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Parse {
            format: SourceFormat::Csv,
            source: e.into(),
        })?;
        lines.push(record.get(text_idx).unwrap_or("").to_string());
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_column_in_row_order() {
        let data = b"id,text\n1,first post\n2,second post\n3,third post\n";
        let lines = extract(data).unwrap();
        assert_eq!(lines, vec!["first post", "second post", "third post"]);
    }

    #[test]
    fn test_extract_keeps_empty_rows() {
        let data = b"text\nfirst\n\"\"\nlast\n";
        let lines = extract(data).unwrap();
        assert_eq!(lines, vec!["first", "", "last"]);
    }

    #[test]
    fn test_extract_missing_text_column() {
        let data = b"id,body\n1,hello\n";
        let err = extract(data).unwrap_err();
        assert!(matches!(err, ExtractError::MissingColumn));
    }

    #[test]
    fn test_extract_column_name_is_case_sensitive() {
        let data = b"id,Text\n1,hello\n";
        assert!(matches!(
            extract(data).unwrap_err(),
            ExtractError::MissingColumn
        ));
    }

    #[test]
    fn test_extract_ignores_other_columns() {
        let data = b"author,text,likes\nana,good vibes,3\nbo,rough week,0\n";
        let lines = extract(data).unwrap();
        assert_eq!(lines, vec!["good vibes", "rough week"]);
    }

    #[test]
    fn test_extract_ragged_row_is_an_error() {
        let data = b"text,extra\nok,1\nonly-one-field\n";
        let err = extract(data).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }

    #[test]
    fn test_extract_header_only() {
        let lines = extract(b"text\n").unwrap();
        assert!(lines.is_empty());
    }
}
