//! Single-post prediction with colored terminal output.

use anyhow::{anyhow, Result};
use colored::*;

use lund::{Sentiment, SentimentModel};

use crate::commands::display;

pub fn run(model: &SentimentModel, text: Option<&str>, format: &str, quiet: bool) -> Result<()> {
    let text = crate::commands::util::resolve_input(text)?;

    // Blank input is an advisory, not an error: nothing to predict.
    if text.trim().is_empty() {
        eprintln!("{} enter a post before predicting", "warning:".yellow());
        return Ok(());
    }

    let sentiment = model.predict(&text);
    let output = format_single(&text, sentiment, format, quiet)?;
    print!("{output}");

    Ok(())
}

pub fn format_single(
    text: &str,
    sentiment: Sentiment,
    format: &str,
    quiet: bool,
) -> Result<String> {
    match format {
        "json" => {
            let output = serde_json::json!({
                "text": text,
                "sentiment": sentiment,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        "jsonl" => {
            let output = serde_json::json!({
                "text": text,
                "sentiment": sentiment,
            });
            Ok(format!("{}\n", serde_json::to_string(&output)?))
        }
        "text" => {
            if quiet {
                Ok(format!("{}\n", sentiment.label()))
            } else {
                Ok(format_pretty_single(text, sentiment))
            }
        }
        _ => Err(anyhow!(
            "Unknown format: '{}'. Use: json, jsonl, text",
            format
        )),
    }
}

fn format_pretty_single(text: &str, sentiment: Sentiment) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n  {} \"{}\"\n\n",
        "Input".dimmed(),
        display::snippet(text, 60).white()
    ));
    output.push_str(&format!("  {}\n\n", display::sentiment_label(sentiment)));

    output
}
