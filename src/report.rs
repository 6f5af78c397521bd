use serde::Serialize;

use crate::data::extract::extract_column_pair;
use crate::data::model::StatDataset;
use crate::stats::pearson;

// ---------------------------------------------------------------------------
// Pair specification
// ---------------------------------------------------------------------------

/// One correlation to evaluate: two column names and a display label.
#[derive(Debug, Clone)]
pub struct PairSpec {
    pub col_a: String,
    pub col_b: String,
    pub label: String,
}

impl PairSpec {
    pub fn new(col_a: &str, col_b: &str, label: &str) -> Self {
        PairSpec {
            col_a: col_a.to_string(),
            col_b: col_b.to_string(),
            label: label.to_string(),
        }
    }
}

/// The default stat pairs the report evaluates.
pub fn default_pairs() -> Vec<PairSpec> {
    vec![
        PairSpec::new("3P%", "PPG", "3P% and PPG"),
        PairSpec::new("AGE", "MPG", "Age and MPG"),
        PairSpec::new("FTA", "FT%", "FTA and FT%"),
    ]
}

// ---------------------------------------------------------------------------
// Report evaluation
// ---------------------------------------------------------------------------

/// The outcome of one pair evaluation.
///
/// `coefficient` is `None` when extraction produced no usable rows; the
/// calculator is never invoked in that case.
#[derive(Debug, Serialize)]
pub struct PairReport {
    pub label: String,
    pub col_a: String,
    pub col_b: String,
    /// Rows that contributed a numeric pair.
    pub samples: usize,
    pub coefficient: Option<f64>,
}

impl PairReport {
    /// One report line, matching the text report format.
    pub fn render(&self) -> String {
        match self.coefficient {
            Some(r) => format!("Correlation between {}: {:.4}", self.label, r),
            None => format!("Not enough data for {} correlation.", self.label),
        }
    }
}

/// Evaluate every requested pair against the dataset.
pub fn evaluate_pairs(dataset: &StatDataset, pairs: &[PairSpec]) -> Vec<PairReport> {
    pairs
        .iter()
        .map(|pair| {
            let (x, y) = extract_column_pair(dataset, &pair.col_a, &pair.col_b);
            let coefficient = if x.is_empty() {
                None
            } else {
                Some(pearson(&x, &y))
            };
            PairReport {
                label: pair.label.clone(),
                col_a: pair.col_a.clone(),
                col_b: pair.col_b.clone(),
                samples: x.len(),
                coefficient,
            }
        })
        .collect()
}
