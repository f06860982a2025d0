// ==============================================================================
// Levenshtein Edit Distance
// ==============================================================================
//
// Raw edit distance, the normalized similarity built on it, and the two
// interchangeable `SimilarityAlgorithm` backends for that similarity. The
// `max_edit_distance` threshold also drives "did you mean?" suggestions for
// metric and backend names.

use crate::algorithm::SimilarityAlgorithm;
use crate::error::SimilarityError;

/// Compute the Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost one. Strings are compared
/// char by char, so the distance between `"café"` and `"cafe"` is 1 even though
/// their UTF-8 encodings differ in length.
///
/// Uses the standard dynamic programming algorithm with a two-row buffer
/// (O(len(b)) space).
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_len]
}

/// Edit distance rescaled into `[0.0, 1.0]` as
/// `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical and score `1.0`.
#[must_use]
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    let score = 1.0 - distance as f64 / longest as f64;
    tracing::debug!(distance, longest, score, "normalized edit similarity");
    score
}

/// Maximum edit distance for a suggestion to be considered "close enough."
///
/// For short names (length <= 4), we require distance <= 1 to avoid noisy
/// suggestions. For longer names, we allow distance <= 2.
#[must_use]
pub fn max_edit_distance(name_len: usize) -> usize {
    if name_len <= 4 { 1 } else { 2 }
}

/// Pick the candidate closest to `name`, if any is within
/// [`max_edit_distance`]. Ties go to the earliest candidate.
pub(crate) fn closest_name(name: &str, candidates: &[&'static str]) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(name, candidate);
        let threshold = max_edit_distance(name.chars().count().min(candidate.len()));
        if dist <= threshold && best.is_none_or(|(_, d)| dist < d) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(candidate, _)| candidate)
}

// ==============================================================================
// Backends
// ==============================================================================

/// Normalized Levenshtein similarity computed with the built-in DP.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SimilarityAlgorithm for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        Ok(normalized_similarity(a, b))
    }
}

/// Normalized Levenshtein similarity delegated to the `strsim` crate.
///
/// Produces the same scores as [`Levenshtein`]; `strsim` also counts chars and
/// treats two empty strings as identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimLevenshtein;

impl SimilarityAlgorithm for StrsimLevenshtein {
    fn name(&self) -> &'static str {
        "strsim-levenshtein"
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        let score = strsim::normalized_levenshtein(a, b);
        tracing::debug!(score, "normalized edit similarity (strsim)");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Levenshtein edit distance
    // =========================================================================

    #[test]
    fn identical_strings() {
        assert_eq!(levenshtein("engineering", "engineering"), 0);
        assert_eq!(levenshtein("project", "project"), 0);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "xyz"), 3);
    }

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(levenshtein("string", "strang"), 1);
        assert_eq!(levenshtein("sting", "string"), 1);
        assert_eq!(levenshtein("string", "sting"), 1);
    }

    #[test]
    fn transposition_counts_as_two_edits() {
        assert_eq!(levenshtein("recrod", "record"), 2);
    }

    #[test]
    fn case_difference() {
        assert_eq!(levenshtein("Software", "software"), 1);
        assert_eq!(levenshtein("INT", "int"), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
        assert_eq!(levenshtein("", "ñandú"), 5);
    }

    // =========================================================================
    // Normalized similarity
    // =========================================================================

    #[test]
    fn normalized_identical_is_one() {
        assert_eq!(normalized_similarity("software", "software"), 1.0);
    }

    #[test]
    fn normalized_both_empty_is_one() {
        assert_eq!(normalized_similarity("", ""), 1.0);
    }

    #[test]
    fn normalized_one_empty_is_zero() {
        assert_eq!(normalized_similarity("", "abc"), 0.0);
        assert_eq!(normalized_similarity("abc", ""), 0.0);
    }

    #[test]
    fn normalized_divides_by_longer_length() {
        // 3 edits over 7 chars, not over the 13-char sum.
        let score = normalized_similarity("kitten", "sitting");
        assert!((score - 4.0 / 7.0).abs() < 1e-12, "got {score}");
        assert_eq!(normalized_similarity("café", "cafe"), 0.75);
    }

    #[test]
    fn strsim_backend_agrees() {
        let pairs = [
            ("", ""),
            ("", "abc"),
            ("kitten", "sitting"),
            ("café", "cafe"),
            ("software engineering", "building engineering"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                Levenshtein.similarity(a, b),
                StrsimLevenshtein.similarity(a, b),
                "backends disagree on ({a:?}, {b:?})"
            );
        }
    }

    // =========================================================================
    // Suggestion threshold
    // =========================================================================

    #[test]
    fn short_names_allow_distance_one() {
        assert_eq!(max_edit_distance(1), 1);
        assert_eq!(max_edit_distance(4), 1);
    }

    #[test]
    fn longer_names_allow_distance_two() {
        assert_eq!(max_edit_distance(5), 2);
        assert_eq!(max_edit_distance(10), 2);
    }

    #[test]
    fn closest_name_finds_typos() {
        let candidates = ["substring", "edit"];
        assert_eq!(closest_name("substirng", &candidates), Some("substring"));
        assert_eq!(closest_name("edt", &candidates), Some("edit"));
        assert_eq!(closest_name("cosine", &candidates), None);
    }
}
