//! Bag-of-words vectorizer loaded from a frozen artifact.

use std::collections::{BTreeMap, HashMap};

use ndarray::Array1;
use serde::Deserialize;

use super::types::{ModelError, ModelResult};
use super::ARTIFACT_VERSION;

/// On-disk schema of `vectorizer.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct VectorizerArtifact {
    pub format_version: u32,

    /// Token -> feature index, fixed when the model was fit.
    pub vocabulary: HashMap<String, usize>,

    /// Feature space dimensionality.
    pub dim: usize,

    /// Optional per-feature idf weights (tf-idf models). Plain count models
    /// omit this.
    #[serde(default)]
    pub idf: Option<Vec<f32>>,
}

/// A sparse feature vector over the vectorizer's fixed feature space.
///
/// Indices are strictly increasing; only non-zero features are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    indices: Vec<usize>,
    values: Vec<f32>,
    dim: usize,
}

impl FeatureVector {
    /// Feature space dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero features.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Sparse dot product against a dense weight vector of the same dimension.
    pub fn dot(&self, weights: &Array1<f32>) -> f32 {
        self.indices
            .iter()
            .zip(self.values.iter())
            .map(|(&i, &v)| v * weights[i])
            .sum()
    }
}

/// Pre-fit bag-of-words transform from cleaned text to a [`FeatureVector`].
///
/// The vocabulary and dimensionality are fixed at load time and never change
/// for the lifetime of the process.
#[derive(Debug)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    dim: usize,
    idf: Option<Vec<f32>>,
}

impl CountVectorizer {
    pub(crate) fn from_artifact(artifact: VectorizerArtifact) -> ModelResult<Self> {
        const NAME: &str = super::VECTORIZER_FILE;

        if artifact.format_version != ARTIFACT_VERSION {
            return Err(ModelError::VersionMismatch {
                name: NAME,
                found: artifact.format_version,
                expected: ARTIFACT_VERSION,
            });
        }
        if artifact.vocabulary.is_empty() {
            return Err(ModelError::Invalid {
                name: NAME,
                reason: "empty vocabulary".to_string(),
            });
        }
        if let Some((token, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= artifact.dim)
        {
            return Err(ModelError::Invalid {
                name: NAME,
                reason: format!("token '{token}' has index {index}, dimension is {}", artifact.dim),
            });
        }
        if let Some(idf) = &artifact.idf {
            if idf.len() != artifact.dim {
                return Err(ModelError::Invalid {
                    name: NAME,
                    reason: format!("idf has {} entries, dimension is {}", idf.len(), artifact.dim),
                });
            }
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            dim: artifact.dim,
            idf: artifact.idf,
        })
    }

    /// Feature space dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Map cleaned text to a sparse feature vector.
    ///
    /// Tokenization is whitespace splitting; the input is expected to already
    /// be cleaned, so no further normalization happens here. Out-of-vocabulary
    /// tokens are ignored. Empty input yields an all-zero vector.
    pub fn transform(&self, cleaned: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in cleaned.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let (indices, mut values): (Vec<usize>, Vec<f32>) = counts.into_iter().unzip();
        if let Some(idf) = &self.idf {
            for (value, &index) in values.iter_mut().zip(indices.iter()) {
                *value *= idf[index];
            }
        }

        FeatureVector {
            indices,
            values,
            dim: self.dim,
        }
    }
}
