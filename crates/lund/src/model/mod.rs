//! The frozen sentiment model and the prediction pipeline around it.
//!
//! A model is two artifacts fit together offline: a bag-of-words vectorizer and
//! a binary linear classifier. Both are loaded once at startup and are
//! read-only afterwards, so a loaded [`SentimentModel`] can be shared freely
//! across requests.
//!
//! # Quick Start
//!
//! ```ignore
//! use lund::SentimentModel;
//!
//! let model = SentimentModel::load(Path::new("models"))?;
//! assert_eq!(model.predict("what a great day").to_string(), "happy");
//! ```

mod linear;
mod types;
mod vectorizer;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cleaner::clean_text;

pub use linear::LinearClassifier;
pub use types::{ModelError, ModelResult, Prediction, Sentiment};
pub use vectorizer::{CountVectorizer, FeatureVector};

/// Artifact schema version both files must carry.
pub const ARTIFACT_VERSION: u32 = 1;

/// Vectorizer artifact file name inside the model directory.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Classifier artifact file name inside the model directory.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// Anything that can map raw post text to a [`Sentiment`].
///
/// [`SentimentModel`] is the production implementation; tests substitute
/// doubles so extraction and presentation code can be exercised without
/// artifacts on disk.
pub trait SentimentPredictor {
    fn predict(&self, text: &str) -> Sentiment;
}

/// A loaded vectorizer/classifier pair behind one `predict` call.
///
/// Hides the two-stage clean -> transform -> decide pipeline so callers never
/// touch the artifacts individually.
#[derive(Debug)]
pub struct SentimentModel {
    vectorizer: CountVectorizer,
    classifier: LinearClassifier,
}

impl SentimentModel {
    /// Load both artifacts from a model directory and validate that they were
    /// fit together.
    ///
    /// Any failure here means the process cannot serve predictions at all;
    /// callers should abort rather than retry per-request.
    pub fn load(dir: &Path) -> ModelResult<Self> {
        if !dir.is_dir() {
            return Err(ModelError::DirNotFound(dir.display().to_string()));
        }

        let vectorizer =
            CountVectorizer::from_artifact(read_artifact(&dir.join(VECTORIZER_FILE), VECTORIZER_FILE)?)?;
        let classifier =
            LinearClassifier::from_artifact(read_artifact(&dir.join(CLASSIFIER_FILE), CLASSIFIER_FILE)?)?;

        if vectorizer.dim() != classifier.dim() {
            return Err(ModelError::DimensionMismatch {
                vectorizer: vectorizer.dim(),
                classifier: classifier.dim(),
            });
        }

        log::info!(
            "loaded sentiment model ({} features) from {}",
            vectorizer.dim(),
            dir.display()
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Classify one piece of text.
    ///
    /// Deterministic: the same input always yields the same label. An empty or
    /// all-noise input cleans to an empty string and an all-zero vector; the
    /// classifier then decides on the intercept alone, with no special-casing
    /// here. Guarding blank input for a friendlier user experience is the
    /// caller's policy.
    pub fn predict(&self, text: &str) -> Sentiment {
        let cleaned = clean_text(text);
        let features = self.vectorizer.transform(&cleaned);
        self.classifier.decide(&features)
    }
}

impl SentimentPredictor for SentimentModel {
    fn predict(&self, text: &str) -> Sentiment {
        SentimentModel::predict(self, text)
    }
}

/// Classify a batch of extracted lines, one record per line, in input order.
pub fn predict_lines<P>(predictor: &P, lines: Vec<String>) -> Vec<Prediction>
where
    P: SentimentPredictor + ?Sized,
{
    lines
        .into_iter()
        .map(|text| {
            let sentiment = predictor.predict(&text);
            Prediction { text, sentiment }
        })
        .collect()
}

fn read_artifact<T: DeserializeOwned>(path: &Path, name: &'static str) -> ModelResult<T> {
    let data = fs::read_to_string(path).map_err(|source| ModelError::ArtifactRead { name, source })?;
    serde_json::from_str(&data).map_err(|source| ModelError::ArtifactParse { name, source })
}

#[cfg(test)]
mod tests;
