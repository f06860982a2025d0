// ==============================================================================
// Similarity Algorithms
// ==============================================================================
//
// The capability every scoring backend implements, plus the named selectors
// (`Metric`, `EditBackend`) used to pick one at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::SimilarityError;
use crate::levenshtein::{Levenshtein, StrsimLevenshtein, closest_name};
use crate::substring::LongestCommonSubstring;

/// A string similarity score in `[0.0, 1.0]`.
///
/// Implementations are stateless, so one instance can be shared freely across
/// threads.
pub trait SimilarityAlgorithm: Send + Sync {
    /// Short, stable identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Score how similar `a` and `b` are.
    ///
    /// # Errors
    ///
    /// Fails when the score is undefined for the given inputs.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError>;
}

/// The similarity metrics exposed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Longest common substring over the longer input's length.
    Substring,
    /// Normalized Levenshtein similarity.
    Edit,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Substring, Metric::Edit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Substring => "substring",
            Metric::Edit => "edit",
        }
    }

    /// The algorithm that computes this metric. `backend` only affects
    /// [`Metric::Edit`].
    #[must_use]
    pub fn algorithm(self, backend: EditBackend) -> Box<dyn SimilarityAlgorithm> {
        match (self, backend) {
            (Metric::Substring, _) => Box::new(LongestCommonSubstring),
            (Metric::Edit, EditBackend::Dp) => Box::new(Levenshtein),
            (Metric::Edit, EditBackend::Strsim) => Box::new(StrsimLevenshtein),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SimilarityError::UnknownMetric {
                name: s.to_string(),
                suggestion: closest_name(s, &Metric::ALL.map(|m| m.as_str())),
            })
    }
}

/// Which implementation computes the normalized edit similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditBackend {
    /// The crate's own two-row dynamic programming.
    #[default]
    Dp,
    /// The `strsim` crate.
    Strsim,
}

impl EditBackend {
    pub const ALL: [EditBackend; 2] = [EditBackend::Dp, EditBackend::Strsim];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditBackend::Dp => "dp",
            EditBackend::Strsim => "strsim",
        }
    }
}

impl FromStr for EditBackend {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditBackend::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| SimilarityError::UnknownBackend {
                name: s.to_string(),
                suggestion: closest_name(s, &EditBackend::ALL.map(|b| b.as_str())),
            })
    }
}
