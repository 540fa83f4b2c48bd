//! OCR flow: extract text from an image and predict it as one post.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::*;

use lund::{ocr_image, SentimentModel, SourceFormat, TesseractCli};

use crate::commands::predict::format_single;

pub fn run(
    model: &SentimentModel,
    path: &Path,
    no_echo: bool,
    format: &str,
    quiet: bool,
) -> Result<()> {
    let source = SourceFormat::from_path(path)?;
    if source != SourceFormat::Image {
        return Err(anyhow!(
            "'{}' is not an image; use `lund file` for documents",
            path.display()
        ));
    }

    let bytes = fs::read(path)
        .map_err(|e| anyhow!("Failed to read image '{}': {}", path.display(), e))?;
    let text = ocr_image(&bytes, &TesseractCli::default())?;

    if !no_echo && !quiet {
        eprintln!("{}", "Extracted text:".dimmed());
        eprintln!("{}", text.trim_end());
    }

    // The whole recognized blob is one candidate post.
    if text.trim().is_empty() {
        eprintln!(
            "{} no readable text found in the image",
            "warning:".yellow()
        );
        return Ok(());
    }

    let sentiment = model.predict(&text);
    let output = format_single(text.trim(), sentiment, format, quiet)?;
    print!("{output}");

    Ok(())
}
