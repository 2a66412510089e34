//! # lingualens
//!
//! A terminal client for a text language-identification service. The user
//! types free-form text, the client POSTs it to the service, and the ranked
//! similarity response is rendered as two horizontal bar charts: candidate
//! languages and candidate source articles.
//!
//! ## Architecture
//!
//! ```text
//! input text → IdentifyService (HTTP) → IdentificationResult
//!            → reshape → ChartDataset ×2 → chart panels (create-or-update)
//! ```
//!
//! All UI state lives in [`tui::app::App`] on a single thread; identify calls
//! run as spawned tokio tasks and report back over a channel.

// ── Lint policy (aerospace-grade) ─────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod dataset;
pub mod service;
pub mod tui;

// Re-exports for convenience
pub use dataset::{reshape, ChartDataset};
pub use service::{HttpIdentifyService, IdentifyService, MockIdentifyService};

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` — structured JSON output for log aggregators
/// - anything else (including unset) — human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=lingualens=debug`);
/// with `RUST_LOG` unset, nothing is emitted.
///
/// Events go to stderr: stdout belongs to the terminal renderer, so run with
/// `RUST_LOG=debug lingualens 2> lens.log` to capture a trace alongside the
/// in-app log tail.
///
/// # Errors
///
/// Returns [`LensError::Other`] if the global subscriber has already been set
/// (e.g. by a previous call or a test harness).
pub fn init_tracing() -> Result<(), LensError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| LensError::Other(format!("tracing init failed: {e}")))
}

/// Top-level client errors.
///
/// Every failure surface is mapped to a variant here. All variants implement
/// `std::error::Error` via [`thiserror`].
#[derive(Error, Debug)]
pub enum LensError {
    /// The identify request could not complete: network error or a
    /// non-success HTTP status from the service.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not valid JSON or did not match the expected
    /// shape. Handled identically to [`LensError::Transport`] at the UI
    /// (diagnostic sink only), but kept distinct for log readability.
    #[error("decode failure: {0}")]
    Decode(String),

    /// A configuration value is missing or invalid (e.g., unparseable
    /// endpoint URL). Returned before the UI starts so misconfiguration
    /// surfaces immediately rather than at the first identify call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}

/// One (name, similarity) pair from the identification service.
///
/// `similarity` is a fraction in `[0, 1]`. Sequence position is rank: the
/// service returns matches pre-sorted by descending similarity and the client
/// never re-sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    /// Display label: a language name in the `languages` sequence, an
    /// article title in the `articles` sequence. (The wire format reuses
    /// the key `language` for both; the label is normalized at decode time.)
    pub name: String,
    /// Similarity fraction in `[0, 1]`.
    pub similarity: f64,
}

impl RankedMatch {
    /// Create a new [`RankedMatch`] from any string-like label.
    pub fn new(name: impl Into<String>, similarity: f64) -> Self {
        Self {
            name: name.into(),
            similarity,
        }
    }
}

/// Decoded response from one identify call.
///
/// Owned transiently by the rendering step; not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentificationResult {
    /// Candidate languages, best match first.
    pub languages: Vec<RankedMatch>,
    /// Candidate source articles, best match first.
    pub articles: Vec<RankedMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_match_new() {
        let m = RankedMatch::new("fr", 0.87);
        assert_eq!(m.name, "fr");
        assert!((m.similarity - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identification_result_default_empty() {
        let result = IdentificationResult::default();
        assert!(result.languages.is_empty());
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_transport_error_display_includes_message() {
        let err = LensError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_decode_error_display_includes_message() {
        let err = LensError::Decode("expected object".to_string());
        assert!(err.to_string().contains("expected object"));
    }

    #[test]
    fn test_config_error_display_includes_message() {
        let err = LensError::Config("endpoint must not be empty".to_string());
        assert!(err.to_string().contains("endpoint must not be empty"));
    }

    #[test]
    fn test_init_tracing_sets_global_subscriber_once() {
        // First call installs the global subscriber; the second must report
        // that it is already set rather than silently replacing it.
        assert!(init_tracing().is_ok());
        let err = init_tracing().unwrap_err();
        assert!(matches!(err, LensError::Other(_)));
    }
}
