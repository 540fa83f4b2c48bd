//! Text cleaning for the bag-of-words pipeline.
//!
//! The vectorizer vocabulary was fit against text cleaned exactly this way, so
//! the transform must stay byte-for-byte stable: URLs, mentions and hashtags are
//! stripped, then everything that is not an ASCII letter or whitespace, then the
//! result is lowercased and trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// Normalize raw post text into the token stream the vectorizer expects.
///
/// The output contains only lowercase ASCII letters and whitespace, with no
/// leading or trailing whitespace. Pure and deterministic; empty input yields
/// empty output.
pub fn clean_text(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = MENTION.replace_all(&text, "");
    let text = HASHTAG.replace_all(&text, "");
    let text = NON_LETTER.replace_all(&text, "");
    text.to_lowercase().trim().to_string()
}
