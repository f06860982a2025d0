// ==============================================================================
// Similarity Errors
// ==============================================================================
//
// One error type for the whole crate. The scoring functions only fail on the
// empty/empty substring ratio; the name-lookup variants come from parsing
// metric and backend names (used by the CLI).

use std::fmt;

/// Errors produced while selecting or running a similarity metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Both inputs were empty, so the score would divide by zero.
    DegenerateInput {
        /// Name of the metric that was asked to score the inputs.
        metric: &'static str,
    },
    /// The metric name did not match any known metric.
    UnknownMetric {
        name: String,
        suggestion: Option<&'static str>,
    },
    /// The edit-distance backend name did not match any known backend.
    UnknownBackend {
        name: String,
        suggestion: Option<&'static str>,
    },
}

impl fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityError::DegenerateInput { metric } => {
                write!(f, "{metric} is undefined for two empty strings")
            }
            SimilarityError::UnknownMetric { name, .. } => {
                write!(f, "unknown metric `{name}`")
            }
            SimilarityError::UnknownBackend { name, .. } => {
                write!(f, "unknown edit-distance backend `{name}`")
            }
        }
    }
}

impl std::error::Error for SimilarityError {}

impl miette::Diagnostic for SimilarityError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            SimilarityError::DegenerateInput { .. } => "textmatch::degenerate_input",
            SimilarityError::UnknownMetric { .. } => "textmatch::unknown_metric",
            SimilarityError::UnknownBackend { .. } => "textmatch::unknown_backend",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            SimilarityError::DegenerateInput { .. } => {
                "the ratio is divided by the longer input's length; pass at least one non-empty string"
                    .to_string()
            }
            SimilarityError::UnknownMetric {
                suggestion: Some(s),
                ..
            }
            | SimilarityError::UnknownBackend {
                suggestion: Some(s),
                ..
            } => format!("did you mean `{s}`?"),
            SimilarityError::UnknownMetric {
                suggestion: None, ..
            } => "expected one of: substring, edit".to_string(),
            SimilarityError::UnknownBackend {
                suggestion: None, ..
            } => "expected one of: dp, strsim".to_string(),
        };
        Some(Box::new(help))
    }
}
