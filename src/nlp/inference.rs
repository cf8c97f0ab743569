//! Hosted text-classification inference client
//!
//! Thin reqwest client for the Hugging Face Inference API. Each call
//! classifies a single sentence against one pre-trained model; the API
//! responds with one list of `{label, score}` pairs per input, sorted
//! by descending score.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Inference client errors
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Inference API returned an error response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse classification response
    #[error("Parse error: {0}")]
    Parse(String),

    /// API returned no classification for the input
    #[error("Empty classification response from model {0}")]
    Empty(String),
}

/// One classification label with its confidence score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Client for hosted text-classification models
pub struct InferenceClient {
    http_client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl InferenceClient {
    /// Create new inference client
    ///
    /// `api_token` is optional; anonymous access works but is rate
    /// limited by the hosted service.
    pub fn new(base_url: &str, api_token: Option<String>) -> Result<Self, InferenceError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    /// Classify text, returning the full label distribution
    ///
    /// `wait_for_model` blocks while the hosted model loads instead of
    /// returning 503, which makes the startup warmup deterministic.
    pub async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        let url = format!("{}/models/{}", self.base_url, model);

        tracing::debug!(model = %model, "Classifying sentence");

        let mut request = self.http_client.post(&url).json(&InferenceRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: true,
            },
        });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api(status.as_u16(), error_text));
        }

        // One inner list per input; we always send exactly one input
        let mut batches: Vec<Vec<LabelScore>> = response
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        let scores = batches
            .pop()
            .filter(|scores| !scores.is_empty())
            .ok_or_else(|| InferenceError::Empty(model.to_string()))?;

        Ok(scores)
    }

    /// Classify text, returning only the best-scoring label
    pub async fn classify_top(&self, model: &str, text: &str) -> Result<LabelScore, InferenceError> {
        let scores = self.classify(model, text).await?;
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| InferenceError::Empty(model.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InferenceClient::new(DEFAULT_API_BASE, None);
        assert!(client.is_ok());
    }

    #[test]
    fn label_scores_parse_api_response() {
        let json = r#"[[
            {"label": "joy", "score": 0.93},
            {"label": "sadness", "score": 0.02},
            {"label": "anger", "score": 0.01}
        ]]"#;

        let batches: Vec<Vec<LabelScore>> = serde_json::from_str(json).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(batches[0][0].label, "joy");
        assert!((batches[0][0].score - 0.93).abs() < f64::EPSILON);
    }
}
