//! Image extractor: OCR over the decoded raster, whole blob as one candidate.
//!
//! Unlike the file extractors, the recognized text is not split into lines:
//! the interactive "predict this image" flow treats a screenshot as a single
//! post. The OCR backend sits behind [`OcrEngine`] so tests can substitute a
//! stub; the default engine shells out to the `tesseract` binary.

use std::process::Command;

use image::{DynamicImage, ImageFormat};

use super::{ExtractError, ExtractResult, SourceFormat};

/// Converts raster pixels into a text string.
pub trait OcrEngine {
    fn image_to_text(&self, image: &DynamicImage) -> ExtractResult<String>;
}

/// Default OCR engine: the `tesseract` command-line tool.
///
/// The image is written to a temporary PNG and `tesseract <file> stdout` is
/// invoked; requires the binary on PATH (or an explicit path).
pub struct TesseractCli {
    binary: String,
    language: String,
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

impl TesseractCli {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

impl OcrEngine for TesseractCli {
    fn image_to_text(&self, image: &DynamicImage) -> ExtractResult<String> {
        let file = tempfile::Builder::new()
            .prefix("lund-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| ExtractError::Ocr(format!("failed to create temp image: {e}")))?;
        image
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(|e| ExtractError::Ocr(format!("failed to write temp image: {e}")))?;

        let output = Command::new(&self.binary)
            .arg(file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| ExtractError::Ocr(format!("failed to run {}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Ocr(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Decode image bytes and run OCR, returning the raw recognized blob.
pub(super) fn recognize(bytes: &[u8], engine: &dyn OcrEngine) -> ExtractResult<String> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ExtractError::Parse {
        format: SourceFormat::Image,
        source: e.into(),
    })?;
    engine.image_to_text(&decoded)
}

/// Extract candidates from image bytes: at most one, the trimmed OCR blob.
pub(super) fn extract_with(bytes: &[u8], engine: &dyn OcrEngine) -> ExtractResult<Vec<String>> {
    let blob = recognize(bytes, engine)?;
    let trimmed = blob.trim();
    if trimmed.is_empty() {
        Ok(vec![])
    } else {
        Ok(vec![trimmed.to_string()])
    }
}
