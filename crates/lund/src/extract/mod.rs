//! Source extractors: raw uploaded bytes to an ordered list of text lines.
//!
//! Each supported format has one adapter with the same contract: bytes in,
//! ordered candidate lines out, blank candidates dropped. Parsing failures are
//! surfaced as a single descriptive [`ExtractError`] per request; they never
//! panic and never leak partial garbage lines.

mod csv;
mod docx;
mod image;
mod pdf;
mod plain;

use std::fmt;
use std::path::Path;

use thiserror::Error;

pub use image::{OcrEngine, TesseractCli};

/// Errors raised while turning an uploaded artifact into text lines.
///
/// These are per-request: the host keeps serving after reporting one.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File extension outside the supported set.
    #[error("unsupported file format: '{0}' (expected txt, csv, docx, pdf, png or jpg)")]
    UnsupportedFormat(String),

    /// Recognized format, but the required structure is missing.
    #[error("no column named 'text' in CSV header")]
    MissingColumn,

    /// Bytes of a text format that do not decode as UTF-8.
    #[error("file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Recognized format whose content could not be parsed.
    #[error("failed to read {format} input: {source}")]
    Parse {
        format: SourceFormat,
        #[source]
        source: anyhow::Error,
    },

    /// Optical character recognition failed.
    #[error("OCR failed: {0}")]
    Ocr(String),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Supported input formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Csv,
    Docx,
    Pdf,
    Image,
}

impl SourceFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "txt" => Ok(SourceFormat::PlainText),
            "csv" => Ok(SourceFormat::Csv),
            "docx" => Ok(SourceFormat::Docx),
            "pdf" => Ok(SourceFormat::Pdf),
            "png" | "jpg" | "jpeg" => Ok(SourceFormat::Image),
            _ => Err(ExtractError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// True for the batch file formats; false for the interactive image flow.
    pub fn is_document(&self) -> bool {
        !matches!(self, SourceFormat::Image)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::PlainText => "plain text",
            SourceFormat::Csv => "CSV",
            SourceFormat::Docx => "Word document",
            SourceFormat::Pdf => "PDF",
            SourceFormat::Image => "image",
        };
        f.write_str(name)
    }
}

/// Extract the ordered candidate lines from an uploaded artifact.
///
/// For [`SourceFormat::Image`] the default OCR engine (the `tesseract` binary
/// on PATH) is used and the whole recognized blob is one candidate; the
/// interactive flow uses [`ocr_image`] with its own [`OcrEngine`] instead.
pub fn extract_lines(format: SourceFormat, bytes: &[u8]) -> ExtractResult<Vec<String>> {
    match format {
        SourceFormat::PlainText => plain::extract(bytes),
        SourceFormat::Csv => csv::extract(bytes),
        SourceFormat::Docx => docx::extract(bytes),
        SourceFormat::Pdf => pdf::extract(bytes),
        SourceFormat::Image => image::extract_with(bytes, &TesseractCli::default()),
    }
}

/// Run OCR over image bytes and return the raw recognized text blob.
///
/// The interactive image flow wants the blob itself (to echo back to the
/// user), not a line list; this is that entry point.
pub fn ocr_image(bytes: &[u8], engine: &dyn OcrEngine) -> ExtractResult<String> {
    image::recognize(bytes, engine)
}
