//! Sentence-level emotion and sentiment analysis
//!
//! The analyzer is built once at startup over two pre-trained
//! text-classification models and is read-only afterwards. Analysis is
//! pure request/response: split the text into sentences, classify each
//! sentence for emotion (full label distribution) and sentiment (top
//! label), and return the results in original sentence order.

pub mod inference;
pub mod segment;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

pub use inference::{InferenceClient, InferenceError, LabelScore, DEFAULT_API_BASE};
pub use segment::split_sentences;

/// Emotion model: full distribution over seven emotion labels
pub const EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Sentiment model: binary positive/negative with confidence
pub const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Fixed payload message when the models could not be loaded
pub const MODELS_UNAVAILABLE: &str = "NLP models are not available.";

/// Inference connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct NlpConfig {
    /// Inference API base URL
    pub api_base: String,
    /// Optional API token (anonymous access is rate limited)
    pub api_token: Option<String>,
}

/// Analysis result for one sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceResult {
    pub sentence: String,
    /// Full emotion distribution, sorted by descending score
    pub emotion: Vec<LabelScore>,
    /// Best sentiment label with confidence
    pub sentiment: LabelScore,
}

/// Outcome of an analysis call
#[derive(Debug)]
pub enum Analysis {
    /// Classifiers failed to load at startup; fixed error payload
    Unavailable,
    /// One result per non-blank sentence, in original order
    Sentences(Vec<SentenceResult>),
}

struct Classifiers {
    inference: InferenceClient,
}

impl Classifiers {
    /// Build the inference client and warm both models
    ///
    /// Warming at startup mirrors local model loading: it surfaces
    /// missing models or bad credentials before the first request, and
    /// leaves the hosted models resident for subsequent calls.
    async fn load(config: &NlpConfig) -> Result<Self, InferenceError> {
        let inference = InferenceClient::new(&config.api_base, config.api_token.clone())?;

        inference.classify(EMOTION_MODEL, "hello").await?;
        inference.classify(SENTIMENT_MODEL, "hello").await?;

        Ok(Self { inference })
    }
}

/// Sentence-level text analyzer over pre-loaded classification models
pub struct Analyzer {
    classifiers: Option<Classifiers>,
}

impl Analyzer {
    /// Initialize the analyzer, warming both classification models
    ///
    /// A load failure does not abort startup; it leaves the analyzer
    /// unavailable and every analyze call short-circuits to the fixed
    /// unavailability payload.
    pub async fn initialize(config: &NlpConfig) -> Self {
        match Classifiers::load(config).await {
            Ok(classifiers) => {
                info!("NLP models ready (emotion + sentiment)");
                Self {
                    classifiers: Some(classifiers),
                }
            }
            Err(e) => {
                error!("Error loading NLP models: {}", e);
                Self { classifiers: None }
            }
        }
    }

    /// Whether both classification models loaded at startup
    pub fn is_available(&self) -> bool {
        self.classifiers.is_some()
    }

    /// Analyze text sentence by sentence
    ///
    /// Every non-blank sentence produces exactly one result, in
    /// original order. Empty or whitespace-only input yields an empty
    /// list. A mid-request inference failure is terminal: the error
    /// propagates and no partial result is returned.
    pub async fn analyze(&self, text: &str) -> Result<Analysis, InferenceError> {
        let Some(classifiers) = &self.classifiers else {
            return Ok(Analysis::Unavailable);
        };

        let mut results = Vec::new();

        for sentence in split_sentences(text) {
            let emotion = classifiers
                .inference
                .classify(EMOTION_MODEL, &sentence)
                .await?;
            let sentiment = classifiers
                .inference
                .classify_top(SENTIMENT_MODEL, &sentence)
                .await?;

            results.push(SentenceResult {
                sentence,
                emotion,
                sentiment,
            });
        }

        Ok(Analysis::Sentences(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_analyzer_short_circuits() {
        let analyzer = Analyzer { classifiers: None };
        assert!(!analyzer.is_available());

        let outcome = analyzer.analyze("I am happy. This is sad.").await.unwrap();
        assert!(matches!(outcome, Analysis::Unavailable));
    }

    #[test]
    fn sentence_result_serializes_expected_shape() {
        let result = SentenceResult {
            sentence: "I am happy.".to_string(),
            emotion: vec![LabelScore {
                label: "joy".to_string(),
                score: 0.95,
            }],
            sentiment: LabelScore {
                label: "POSITIVE".to_string(),
                score: 0.99,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentence"], "I am happy.");
        assert_eq!(json["emotion"][0]["label"], "joy");
        assert_eq!(json["sentiment"]["label"], "POSITIVE");
    }
}
