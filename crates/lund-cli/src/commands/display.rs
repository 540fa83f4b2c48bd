use colored::*;

use lund::Sentiment;

/// Colored uppercase label: green for happy, red for sad.
pub fn sentiment_label(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Happy => sentiment.label().green().bold(),
        Sentiment::Sad => sentiment.label().red().bold(),
    }
}

/// Like [`sentiment_label`], width-padded before coloring so ANSI codes do not
/// break column alignment.
pub fn padded_label(sentiment: Sentiment, width: usize) -> ColoredString {
    let text = format!("{:<width$}", sentiment.label());
    match sentiment {
        Sentiment::Happy => text.green().bold(),
        Sentiment::Sad => text.red().bold(),
    }
}

/// Truncate text and replace newlines, with dimmed style
pub fn snippet(text: &str, max_len: usize) -> ColoredString {
    let clean = text.replace('\n', " ").replace('\r', "");
    let truncated = if clean.chars().count() > max_len {
        let cut: String = clean.chars().take(max_len - 1).collect();
        format!("{cut}…")
    } else {
        clean
    };
    truncated.dimmed()
}

/// Horizontal separator
pub fn separator(width: usize) -> ColoredString {
    "─".repeat(width).dimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_label_text() {
        assert!(sentiment_label(Sentiment::Happy).to_string().contains("HAPPY"));
        assert!(sentiment_label(Sentiment::Sad).to_string().contains("SAD"));
    }

    #[test]
    fn test_snippet_short_text_untouched() {
        assert!(snippet("short", 10).to_string().contains("short"));
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "a".repeat(50);
        let out = snippet(&long, 10).to_string();
        assert!(out.contains('…'));
        assert!(!out.contains(&long));
    }

    #[test]
    fn test_snippet_flattens_newlines() {
        let out = snippet("one\ntwo\r", 20).to_string();
        assert!(out.contains("one two"));
    }
}
