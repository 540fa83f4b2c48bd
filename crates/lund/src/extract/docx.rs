//! Word-document extractor: one candidate per non-blank paragraph.

use docx_rs::{read_docx, DocumentChild};

use super::{ExtractError, ExtractResult, SourceFormat};

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<Vec<String>> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Parse {
        format: SourceFormat::Docx,
        source: anyhow::anyhow!(e),
    })?;

    let lines = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph.raw_text()),
            _ => None,
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(lines)
}
