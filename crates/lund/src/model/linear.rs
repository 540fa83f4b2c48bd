//! Binary linear decision function loaded from a frozen artifact.

use ndarray::Array1;
use serde::Deserialize;

use super::types::{ModelError, ModelResult, Sentiment};
use super::vectorizer::FeatureVector;
use super::ARTIFACT_VERSION;

/// On-disk schema of `classifier.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct ClassifierArtifact {
    pub format_version: u32,

    /// Dense weight vector over the vectorizer's feature space.
    pub weights: Vec<f32>,

    /// Decision function intercept.
    pub intercept: f32,

    /// Output classes in decision order: a non-negative score selects
    /// `classes[1]`, a negative score selects `classes[0]`.
    pub classes: Vec<String>,
}

/// Pre-fit binary decision function over [`FeatureVector`]s.
#[derive(Debug)]
pub struct LinearClassifier {
    weights: Array1<f32>,
    intercept: f32,
    classes: [Sentiment; 2],
}

impl LinearClassifier {
    pub(crate) fn from_artifact(artifact: ClassifierArtifact) -> ModelResult<Self> {
        const NAME: &str = super::CLASSIFIER_FILE;

        if artifact.format_version != ARTIFACT_VERSION {
            return Err(ModelError::VersionMismatch {
                name: NAME,
                found: artifact.format_version,
                expected: ARTIFACT_VERSION,
            });
        }
        if artifact.classes.len() != 2 {
            return Err(ModelError::Invalid {
                name: NAME,
                reason: format!("expected 2 classes, got {}", artifact.classes.len()),
            });
        }

        let classes = [
            artifact.classes[0].parse::<Sentiment>()?,
            artifact.classes[1].parse::<Sentiment>()?,
        ];
        if classes[0] == classes[1] {
            return Err(ModelError::Invalid {
                name: NAME,
                reason: format!("duplicate class label '{}'", classes[0]),
            });
        }
        if artifact.weights.is_empty() {
            return Err(ModelError::Invalid {
                name: NAME,
                reason: "empty weight vector".to_string(),
            });
        }

        Ok(Self {
            weights: Array1::from(artifact.weights),
            intercept: artifact.intercept,
            classes,
        })
    }

    /// Feature space dimensionality the weights were fit against.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Apply the decision function. No thresholding, no fallback: the sign of
    /// the score picks the class, exactly as the frozen model defines it.
    pub fn decide(&self, features: &FeatureVector) -> Sentiment {
        let score = features.dot(&self.weights) + self.intercept;
        if score >= 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}
