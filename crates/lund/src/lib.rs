//! Lund - happy/sad sentiment prediction for social media posts.
//!
//! A thin pipeline around two frozen artifacts: a bag-of-words vectorizer and a
//! linear classifier, fit together offline and loaded once at startup. Text is
//! cleaned, vectorized and classified into one of two labels.
//!
//! # Quick Start
//!
//! ```ignore
//! use lund::SentimentModel;
//!
//! let model = SentimentModel::load(Path::new("models"))?;
//! let sentiment = model.predict("I love this!");
//! println!("{}", sentiment); // "happy"
//! ```
//!
//! Batch inputs (plain text, CSV, Word documents, PDFs, images via OCR) go
//! through the [`extract`] module, which turns raw file bytes into an ordered
//! list of candidate text lines.

pub mod cleaner;
pub mod extract;
pub mod model;

pub use cleaner::clean_text;
pub use extract::{
    extract_lines, ocr_image, ExtractError, ExtractResult, OcrEngine, SourceFormat, TesseractCli,
};
pub use model::{
    predict_lines, CountVectorizer, FeatureVector, LinearClassifier, ModelError, ModelResult,
    Prediction, Sentiment, SentimentModel, SentimentPredictor,
};
