//! PDF extractor: per-page text in page order, split into lines.

use lopdf::Document;

use super::{plain, ExtractError, ExtractResult, SourceFormat};

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<Vec<String>> {
    let document = Document::load_mem(bytes).map_err(|e| ExtractError::Parse {
        format: SourceFormat::Pdf,
        source: e.into(),
    })?;

    let mut lines = Vec::new();
    for (&page_no, _) in document.get_pages().iter() {
        // A page without extractable text (a scanned image, say) contributes
        // zero lines; that is not an error.
        match document.extract_text(&[page_no]) {
            Ok(text) => lines.extend(plain::lines_of(&text)),
            Err(e) => log::debug!("page {page_no}: no extractable text ({e})"),
        }
    }

    Ok(lines)
}
