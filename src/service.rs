//! Identification service abstraction and implementations
//!
//! Provides the IdentifyService trait and two implementations:
//! - HttpIdentifyService: the real HTTP backend (emits `tracing` events for
//!   request dispatch and failures)
//! - MockIdentifyService: canned responses for demo mode and tests
//!
//! ## Wire format
//!
//! The request body is the raw input text (`text/plain`), not a JSON object.
//! The response is JSON:
//!
//! ```text
//! { "languages": [ { "language": "fr", "similarity": 0.87 }, ... ],
//!   "articles":  [ { "language": "ArticleX", "similarity": 0.6 }, ... ] }
//! ```
//!
//! The `articles` entries reuse the key `language` for the article title; that
//! inconsistency is confined to this module and normalized to `name` at decode
//! time.

use crate::{IdentificationResult, LensError, RankedMatch};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Trait for text-identification backends
///
/// Implementations must be thread-safe (Send + Sync) for use across tasks.
/// The trait is object-safe to allow dynamic dispatch via Arc<dyn IdentifyService>.
#[async_trait]
pub trait IdentifyService: Send + Sync {
    /// Identify the given text
    ///
    /// `text` is unconstrained, including the empty string; the service
    /// decides what constitutes valid input. Produces exactly one outcome.
    async fn identify(&self, text: &str) -> Result<IdentificationResult, LensError>;
}

/// One entry of the wire response. `language` carries the label for both
/// sequences, article titles included.
#[derive(Debug, Deserialize)]
struct WireMatch {
    language: String,
    similarity: f64,
}

/// Wire shape of the identify response.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    languages: Vec<WireMatch>,
    #[serde(default)]
    articles: Vec<WireMatch>,
}

impl From<WireMatch> for RankedMatch {
    fn from(w: WireMatch) -> Self {
        RankedMatch {
            name: w.language,
            similarity: w.similarity,
        }
    }
}

/// Decodes a raw response body into an [`IdentificationResult`].
///
/// Entry order is preserved; the service is trusted to pre-sort by descending
/// similarity.
///
/// # Errors
///
/// Returns [`LensError::Decode`] if the body is not valid JSON or does not
/// match the expected shape. Never panics on malformed payloads.
pub fn decode_response(body: &str) -> Result<IdentificationResult, LensError> {
    let wire: WireResponse = serde_json::from_str(body)
        .map_err(|e| LensError::Decode(format!("invalid identify response: {e}")))?;

    Ok(IdentificationResult {
        languages: wire.languages.into_iter().map(RankedMatch::from).collect(),
        articles: wire.articles.into_iter().map(RankedMatch::from).collect(),
    })
}

// ============================================================================
// HTTP backend
// ============================================================================

/// HTTP identification service client
///
/// POSTs the raw input text to the configured endpoint and decodes the JSON
/// response.
///
/// ## Example
///
/// ```no_run
/// use lingualens::HttpIdentifyService;
/// use std::time::Duration;
///
/// let service = HttpIdentifyService::new("http://127.0.0.1:8000/identify")
///     .with_timeout(Duration::from_secs(10));
/// ```
pub struct HttpIdentifyService {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpIdentifyService {
    /// Create a new HTTP service client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdentifyService for HttpIdentifyService {
    async fn identify(&self, text: &str) -> Result<IdentificationResult, LensError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            chars = text.chars().count(),
            "dispatching identify request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/plain; charset=utf-8")
            .timeout(self.timeout)
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "identify request failed");
                LensError::Transport(format!("identify request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(endpoint = %self.endpoint, %status, "identify service error");
            return Err(LensError::Transport(format!(
                "identify service error {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LensError::Transport(format!("failed to read response body: {e}")))?;

        let result = decode_response(&body);
        if let Err(e) = &result {
            tracing::warn!(endpoint = %self.endpoint, error = %e, "identify response rejected");
        }
        result
    }
}

// ============================================================================
// Mock backend (demo mode, tests)
// ============================================================================

/// Mock identification service with canned responses
///
/// Returns a fixed [`IdentificationResult`] after a simulated delay,
/// regardless of the input text. Useful for demo mode and pipeline tests
/// without a running service.
pub struct MockIdentifyService {
    /// Simulated service delay
    delay_ms: u64,
    /// The canned result returned on every call.
    result: IdentificationResult,
}

impl MockIdentifyService {
    /// Create a mock service with a plausible sample result.
    pub fn new() -> Self {
        Self {
            delay_ms: 120,
            result: sample_result(),
        }
    }

    /// Replace the canned result.
    pub fn with_result(mut self, result: IdentificationResult) -> Self {
        self.result = result;
        self
    }

    /// Set the simulated delay in milliseconds.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl Default for MockIdentifyService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentifyService for MockIdentifyService {
    async fn identify(&self, _text: &str) -> Result<IdentificationResult, LensError> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(self.result.clone())
    }
}

/// A plausible sample result for demo mode.
fn sample_result() -> IdentificationResult {
    IdentificationResult {
        languages: vec![
            RankedMatch::new("French", 0.87),
            RankedMatch::new("English", 0.05),
            RankedMatch::new("Italian", 0.04),
            RankedMatch::new("Spanish", 0.03),
            RankedMatch::new("Catalan", 0.01),
        ],
        articles: vec![
            RankedMatch::new("Claude Monet", 0.61),
            RankedMatch::new("Paris", 0.22),
            RankedMatch::new("Normandie", 0.09),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "languages": [
                {"language": "fr", "similarity": 0.87},
                {"language": "en", "similarity": 0.05}
            ],
            "articles": [
                {"language": "ArticleX", "similarity": 0.6}
            ]
        }"#;
        let result = decode_response(body).unwrap();
        assert_eq!(result.languages.len(), 2);
        assert_eq!(result.languages[0].name, "fr");
        assert!((result.languages[0].similarity - 0.87).abs() < 1e-9);
        // Article labels arrive under the `language` key but come out as `name`
        assert_eq!(result.articles[0].name, "ArticleX");
        assert!((result.articles[0].similarity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = r#"{
            "languages": [
                {"language": "a", "similarity": 0.5},
                {"language": "b", "similarity": 0.3},
                {"language": "c", "similarity": 0.2}
            ],
            "articles": []
        }"#;
        let result = decode_response(body).unwrap();
        let names: Vec<&str> = result.languages.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_missing_sequences_default_empty() {
        let result = decode_response("{}").unwrap();
        assert!(result.languages.is_empty());
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_decode_invalid_json_is_decode_error() {
        let err = decode_response("not json").unwrap_err();
        assert!(matches!(err, LensError::Decode(_)));
    }

    #[test]
    fn test_decode_wrong_shape_is_decode_error() {
        let err = decode_response(r#"{"languages": [{"similarity": "high"}]}"#).unwrap_err();
        assert!(matches!(err, LensError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_body_is_decode_error() {
        let err = decode_response("").unwrap_err();
        assert!(matches!(err, LensError::Decode(_)));
    }

    #[test]
    fn test_http_service_builder() {
        let service = HttpIdentifyService::new("http://localhost:8000/identify")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(service.endpoint(), "http://localhost:8000/identify");
        assert_eq!(service.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_mock_service_returns_canned_result() {
        let canned = IdentificationResult {
            languages: vec![RankedMatch::new("eo", 0.99)],
            articles: vec![],
        };
        let service = MockIdentifyService::new()
            .with_delay(1)
            .with_result(canned.clone());
        let result = service.identify("saluton").await.unwrap();
        assert_eq!(result, canned);
    }

    #[tokio::test]
    async fn test_mock_service_ignores_input() {
        let service = MockIdentifyService::new().with_delay(1);
        let a = service.identify("").await.unwrap();
        let b = service.identify("anything at all").await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_result_is_rank_ordered() {
        let sample = sample_result();
        for pair in sample.languages.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        for pair in sample.articles.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }
}
