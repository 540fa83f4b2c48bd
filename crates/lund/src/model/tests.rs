use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use super::*;

/// Write a small but real model to disk: posts containing "happy" or "great"
/// score positive, "sad" or "awful" score negative, everything else falls to
/// the (negative) intercept.
fn write_test_model(dir: &Path) {
    let vectorizer = json!({
        "format_version": ARTIFACT_VERSION,
        "vocabulary": { "happy": 0, "great": 1, "sad": 2, "awful": 3 },
        "dim": 4,
    });
    let classifier = json!({
        "format_version": ARTIFACT_VERSION,
        "weights": [2.0, 1.5, -2.0, -1.5],
        "intercept": -0.5,
        "classes": ["sad", "happy"],
    });
    fs::write(
        dir.join(VECTORIZER_FILE),
        serde_json::to_string_pretty(&vectorizer).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(CLASSIFIER_FILE),
        serde_json::to_string_pretty(&classifier).unwrap(),
    )
    .unwrap();
}

fn load_test_model() -> (TempDir, SentimentModel) {
    let dir = TempDir::new().unwrap();
    write_test_model(dir.path());
    let model = SentimentModel::load(dir.path()).unwrap();
    (dir, model)
}

/// Keyword test double: any text whose cleaned form contains "happy" is happy.
struct KeywordPredictor;

impl SentimentPredictor for KeywordPredictor {
    fn predict(&self, text: &str) -> Sentiment {
        if clean_text(text).contains("happy") {
            Sentiment::Happy
        } else {
            Sentiment::Sad
        }
    }
}

#[test]
fn test_predict_happy_and_sad() {
    let (_dir, model) = load_test_model();

    assert_eq!(model.predict("what a great day"), Sentiment::Happy);
    assert_eq!(model.predict("this is awful"), Sentiment::Sad);
}

#[test]
fn test_predict_cleans_before_vectorizing() {
    let (_dir, model) = load_test_model();

    // "#happy" survives cleaning as nothing (hashtags are stripped), so only
    // the plain word counts.
    assert_eq!(model.predict("HAPPY!!! 🎉"), Sentiment::Happy);
    assert_eq!(model.predict("#happy"), Sentiment::Sad);
}

#[test]
fn test_predict_deterministic() {
    let (_dir, model) = load_test_model();

    for text in ["I am SO happy!!", "nothing here", ""] {
        assert_eq!(model.predict(text), model.predict(text));
    }
}

#[test]
fn test_predict_empty_input_falls_to_intercept() {
    let (_dir, model) = load_test_model();

    // Negative intercept, all-zero vector.
    assert_eq!(model.predict(""), Sentiment::Sad);
    assert_eq!(model.predict("   \t "), Sentiment::Sad);
}

#[test]
fn test_keyword_double_matches_contract() {
    assert_eq!(KeywordPredictor.predict("I am SO happy!!"), Sentiment::Happy);
    assert_eq!(KeywordPredictor.predict("nothing here"), Sentiment::Sad);
}

#[test]
fn test_predict_lines_preserves_order() {
    let lines = vec![
        "happy days".to_string(),
        "gloomy".to_string(),
        "so happy".to_string(),
    ];
    let predictions = predict_lines(&KeywordPredictor, lines);

    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[0].text, "happy days");
    assert_eq!(predictions[0].sentiment, Sentiment::Happy);
    assert_eq!(predictions[1].text, "gloomy");
    assert_eq!(predictions[1].sentiment, Sentiment::Sad);
    assert_eq!(predictions[2].sentiment, Sentiment::Happy);
}

#[test]
fn test_predict_lines_empty() {
    assert!(predict_lines(&KeywordPredictor, vec![]).is_empty());
}

#[test]
fn test_load_missing_directory() {
    let err = SentimentModel::load(Path::new("/nonexistent/model/dir")).unwrap_err();
    assert!(matches!(err, ModelError::DirNotFound(_)));
}

#[test]
fn test_load_missing_artifact() {
    let dir = TempDir::new().unwrap();
    write_test_model(dir.path());
    fs::remove_file(dir.path().join(CLASSIFIER_FILE)).unwrap();

    match SentimentModel::load(dir.path()).unwrap_err() {
        ModelError::ArtifactRead { name, .. } => assert_eq!(name, CLASSIFIER_FILE),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_corrupt_artifact() {
    let dir = TempDir::new().unwrap();
    write_test_model(dir.path());
    fs::write(dir.path().join(VECTORIZER_FILE), "not json {").unwrap();

    match SentimentModel::load(dir.path()).unwrap_err() {
        ModelError::ArtifactParse { name, .. } => assert_eq!(name, VECTORIZER_FILE),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_dimension_mismatch() {
    let dir = TempDir::new().unwrap();
    write_test_model(dir.path());
    let classifier = json!({
        "format_version": ARTIFACT_VERSION,
        "weights": [1.0, -1.0],
        "intercept": 0.0,
        "classes": ["sad", "happy"],
    });
    fs::write(
        dir.path().join(CLASSIFIER_FILE),
        classifier.to_string(),
    )
    .unwrap();

    let err = SentimentModel::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ModelError::DimensionMismatch { vectorizer: 4, classifier: 2 }
    ));
}

#[test]
fn test_load_rejects_foreign_labels() {
    let dir = TempDir::new().unwrap();
    write_test_model(dir.path());
    let classifier = json!({
        "format_version": ARTIFACT_VERSION,
        "weights": [1.0, 1.0, 1.0, 1.0],
        "intercept": 0.0,
        "classes": ["negative", "positive"],
    });
    fs::write(
        dir.path().join(CLASSIFIER_FILE),
        classifier.to_string(),
    )
    .unwrap();

    let err = SentimentModel::load(dir.path()).unwrap_err();
    assert!(matches!(err, ModelError::UnknownLabel(_)));
}
