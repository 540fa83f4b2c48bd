//! Batch prediction over a text-based file.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::*;

use lund::{extract_lines, predict_lines, Prediction, SentimentModel, SourceFormat};

use crate::commands::display;

pub fn run(model: &SentimentModel, path: &Path, format: &str, quiet: bool) -> Result<()> {
    let source = SourceFormat::from_path(path)?;
    if !source.is_document() {
        return Err(anyhow!(
            "'{}' is an image; use `lund image` for the OCR flow",
            path.display()
        ));
    }

    let bytes = fs::read(path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", path.display(), e))?;
    let lines = extract_lines(source, &bytes)?;

    if lines.is_empty() {
        eprintln!(
            "{} no extractable text in '{}'",
            "warning:".yellow(),
            path.display()
        );
        return Ok(());
    }

    log::info!("classifying {} lines from {}", lines.len(), path.display());
    let predictions = predict_lines(model, lines);
    let output = format_batch(&predictions, format, quiet)?;
    print!("{output}");

    Ok(())
}

pub fn format_batch(predictions: &[Prediction], format: &str, quiet: bool) -> Result<String> {
    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(predictions)?)),
        "jsonl" => {
            let mut output = String::new();
            for prediction in predictions {
                output.push_str(&serde_json::to_string(prediction)?);
                output.push('\n');
            }
            Ok(output)
        }
        "text" => {
            if quiet {
                let mut output = String::new();
                for prediction in predictions {
                    output.push_str(prediction.sentiment.label());
                    output.push('\n');
                }
                Ok(output)
            } else {
                let mut output = String::new();
                output.push('\n');
                for prediction in predictions {
                    output.push_str(&format!(
                        "  {}  \"{}\"\n",
                        display::padded_label(prediction.sentiment, 5),
                        display::snippet(&prediction.text, 60)
                    ));
                }
                output.push_str(&format!(
                    "\n  {}\n",
                    format!("{} lines classified", predictions.len()).dimmed()
                ));
                Ok(output)
            }
        }
        _ => Err(anyhow!(
            "Unknown format: '{}'. Use: json, jsonl, text",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use lund::Sentiment;

    use super::*;

    fn predictions() -> Vec<Prediction> {
        vec![
            Prediction {
                text: "good day".to_string(),
                sentiment: Sentiment::Happy,
            },
            Prediction {
                text: "rough week".to_string(),
                sentiment: Sentiment::Sad,
            },
        ]
    }

    #[test]
    fn test_format_batch_json() {
        let output = format_batch(&predictions(), "json", false).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["text"], "good day");
        assert_eq!(parsed[0]["sentiment"], "happy");
        assert_eq!(parsed[1]["sentiment"], "sad");
    }

    #[test]
    fn test_format_batch_jsonl() {
        let output = format_batch(&predictions(), "jsonl", false).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["text"], "good day");
    }

    #[test]
    fn test_format_batch_text_quiet() {
        let output = format_batch(&predictions(), "text", true).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();

        assert_eq!(lines, vec!["HAPPY", "SAD"]);
    }

    #[test]
    fn test_format_batch_text_keeps_input_order() {
        let output = format_batch(&predictions(), "text", false).unwrap();

        let happy_at = output.find("HAPPY").unwrap();
        let sad_at = output.find("SAD").unwrap();
        assert!(happy_at < sad_at);
        assert!(output.contains("good day"));
        assert!(output.contains("2 lines classified"));
    }

    #[test]
    fn test_format_batch_unknown_format() {
        let err = format_batch(&predictions(), "csv", false).unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }

    #[test]
    fn test_format_batch_empty() {
        let output = format_batch(&[], "json", false).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_empty());
    }
}
