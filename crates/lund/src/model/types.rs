//! Types for the model module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the frozen model artifacts.
///
/// All of these are startup configuration errors: the process cannot serve any
/// prediction without a valid vectorizer/classifier pair, so callers should
/// treat them as fatal rather than per-request failures.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Model directory does not exist.
    #[error("model directory not found: {0}")]
    DirNotFound(String),

    /// An artifact file could not be read.
    #[error("failed to read {name}: {source}")]
    ArtifactRead {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file is not valid JSON for its schema.
    #[error("failed to parse {name}: {source}")]
    ArtifactParse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact was written by an incompatible version of the trainer.
    #[error("{name} has artifact version {found}, expected {expected}")]
    VersionMismatch {
        name: &'static str,
        found: u32,
        expected: u32,
    },

    /// The artifact content is internally inconsistent.
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    /// Vectorizer and classifier were not fit together.
    #[error("vectorizer dimension {vectorizer} does not match classifier dimension {classifier}")]
    DimensionMismatch { vectorizer: usize, classifier: usize },

    /// A class label outside the known set.
    #[error("unknown class label '{0}' (expected 'happy' or 'sad')")]
    UnknownLabel(String),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// One of the two sentiment classes. No other value is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Happy,
    Sad,
}

impl Sentiment {
    /// Lowercase wire name, as stored in classifier artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Happy => "happy",
            Sentiment::Sad => "sad",
        }
    }

    /// Uppercase display form for user-facing output.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Happy => "HAPPY",
            Sentiment::Sad => "SAD",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Sentiment::Happy),
            "sad" => Ok(Sentiment::Sad),
            other => Err(ModelError::UnknownLabel(other.to_string())),
        }
    }
}

/// One classified text line from a batch input, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The original extracted line, untouched by cleaning.
    pub text: String,

    /// The predicted class.
    pub sentiment: Sentiment,
}
