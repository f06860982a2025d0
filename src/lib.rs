//! String similarity scores for short texts.
//!
//! This crate provides two scores, each in `[0.0, 1.0]`:
//!
//! - [`longest_common_substring_ratio`]: the length of the longest run of
//!   characters shared by both strings, over the longer string's length.
//! - [`normalized_edit_similarity`]: `1 - levenshtein / max(len(a), len(b))`.
//!
//! Both compare exact characters: no case folding, no whitespace
//! normalization, no tokenization. Lengths count `char`s, not bytes.
//!
//! # Scoring two strings
//!
//! ```
//! use textmatch::{longest_common_substring_ratio, normalized_edit_similarity};
//!
//! let ratio = longest_common_substring_ratio("software engineering", "building engineering")?;
//! assert_eq!(ratio, 0.6);
//!
//! let score = normalized_edit_similarity("kitten", "sitting");
//! assert!(score > 0.5 && score < 0.6);
//! # Ok::<(), textmatch::SimilarityError>(())
//! ```
//!
//! # Swapping the algorithm
//!
//! Each metric is backed by a [`SimilarityAlgorithm`], so callers that want to
//! pick one at runtime can go through [`Metric`]:
//!
//! ```
//! use textmatch::{EditBackend, Metric};
//!
//! let algorithm = Metric::Edit.algorithm(EditBackend::Strsim);
//! assert_eq!(algorithm.similarity("", "")?, 1.0);
//! # Ok::<(), textmatch::SimilarityError>(())
//! ```
//!
//! # Error handling
//!
//! The substring ratio of two empty strings has no denominator and fails with
//! [`SimilarityError::DegenerateInput`]. [`SimilarityError`] implements
//! [`miette::Diagnostic`], so it renders with a code and help text.

pub mod algorithm;
pub mod error;
pub mod levenshtein;
pub mod substring;

pub use algorithm::{EditBackend, Metric, SimilarityAlgorithm};
pub use error::SimilarityError;
pub use levenshtein::levenshtein;
pub use substring::{Match, find_longest_match};

/// Length of the longest common substring of `a` and `b`, divided by the
/// length of the longer input.
///
/// One empty input scores `0.0`.
///
/// # Errors
///
/// Returns [`SimilarityError::DegenerateInput`] when both inputs are empty.
pub fn longest_common_substring_ratio(a: &str, b: &str) -> Result<f64, SimilarityError> {
    substring::ratio(a, b)
}

/// Levenshtein distance between `a` and `b`, rescaled to a similarity as
/// `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical and score `1.0`.
#[must_use]
pub fn normalized_edit_similarity(a: &str, b: &str) -> f64 {
    levenshtein::normalized_similarity(a, b)
}
