//! # Module: Chart Datasets
//!
//! ## Responsibility
//! Pure reshaping of ranked matches into chart-ready data: parallel label and
//! percentage sequences, plus percentage display formatting. No side effects,
//! no UI types.
//!
//! ## Guarantees
//! - `reshape` preserves input order exactly (rank order = bar order)
//! - Output sequences always have equal length, index-aligned with the input
//! - Empty input produces empty output, never an error

use crate::RankedMatch;

/// Presentation-only projection of a ranked-match sequence.
///
/// `labels[i]` and `values[i]` describe the same match; `values` are
/// percentages (`similarity × 100`), not fractions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    /// Match labels in rank order.
    pub labels: Vec<String>,
    /// Similarity percentages in rank order.
    pub values: Vec<f64>,
}

impl ChartDataset {
    /// Number of bars in this dataset.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no bars.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Reshapes ranked matches into a [`ChartDataset`].
///
/// For each match in order, emits `labels[i] = name` and
/// `values[i] = similarity × 100`.
///
/// # Arguments
/// * `matches` - Ranked matches, best first.
///
/// # Returns
/// A dataset with `labels.len() == values.len() == matches.len()`.
pub fn reshape(matches: &[RankedMatch]) -> ChartDataset {
    let mut labels = Vec::with_capacity(matches.len());
    let mut values = Vec::with_capacity(matches.len());
    for m in matches {
        labels.push(m.name.clone());
        values.push(m.similarity * 100.0);
    }
    ChartDataset { labels, values }
}

/// Formats a percentage with three significant digits.
///
/// Mirrors the display rule used for the top-language readout:
/// `87.345 → "87.3"`, `5.0 → "5.00"`, `100.0 → "100"`.
///
/// # Arguments
/// * `percent` - Percentage value, expected in `[0, 100]`.
///
/// # Returns
/// The formatted string; values at or above 100 render with no decimals,
/// negatives are clamped to `"0.00"`.
pub fn percent_label(percent: f64) -> String {
    if percent <= 0.0 {
        return "0.00".to_string();
    }
    if percent >= 100.0 {
        return format!("{:.0}", percent);
    }
    if percent >= 10.0 {
        return format!("{:.1}", percent);
    }
    format!("{:.2}", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_preserves_order_and_length() {
        let matches = vec![
            RankedMatch::new("fr", 0.87),
            RankedMatch::new("en", 0.05),
            RankedMatch::new("de", 0.03),
        ];
        let ds = reshape(&matches);
        assert_eq!(ds.labels, vec!["fr", "en", "de"]);
        assert_eq!(ds.values.len(), 3);
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(ds.labels[i], m.name);
            assert!((ds.values[i] - m.similarity * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reshape_percentage_conversion() {
        let ds = reshape(&[RankedMatch::new("en", 0.4523)]);
        assert_eq!(ds.labels, vec!["en"]);
        assert!((ds.values[0] - 45.23).abs() < 1e-9);
    }

    #[test]
    fn test_reshape_empty_input() {
        let ds = reshape(&[]);
        assert!(ds.labels.is_empty());
        assert!(ds.values.is_empty());
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
    }

    #[test]
    fn test_reshape_single_match() {
        let ds = reshape(&[RankedMatch::new("eo", 1.0)]);
        assert_eq!(ds.len(), 1);
        assert!((ds.values[0] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reshape_zero_similarity() {
        let ds = reshape(&[RankedMatch::new("xx", 0.0)]);
        assert_eq!(ds.values[0], 0.0);
    }

    #[test]
    fn test_reshape_does_not_sort() {
        // The service is trusted to pre-sort; a mis-sorted input must pass
        // through unchanged.
        let ds = reshape(&[RankedMatch::new("low", 0.1), RankedMatch::new("high", 0.9)]);
        assert_eq!(ds.labels, vec!["low", "high"]);
        assert!((ds.values[0] - 10.0).abs() < 1e-9);
        assert!((ds.values[1] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_label_large() {
        assert_eq!(percent_label(87.345), "87.3");
    }

    #[test]
    fn test_percent_label_small() {
        assert_eq!(percent_label(5.0), "5.00");
    }

    #[test]
    fn test_percent_label_full() {
        assert_eq!(percent_label(100.0), "100");
    }

    #[test]
    fn test_percent_label_zero() {
        assert_eq!(percent_label(0.0), "0.00");
    }

    #[test]
    fn test_percent_label_negative_clamped() {
        assert_eq!(percent_label(-3.0), "0.00");
    }

    #[test]
    fn test_percent_label_boundary_ten() {
        assert_eq!(percent_label(10.0), "10.0");
    }
}
