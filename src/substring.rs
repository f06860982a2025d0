// ==============================================================================
// Longest Common Substring
// ==============================================================================
//
// Finds the longest contiguous run of chars shared by two strings and scores
// it against the longer input. Positions and sizes are in chars, not bytes.

use crate::algorithm::SimilarityAlgorithm;
use crate::error::SimilarityError;

/// A common substring located in both inputs.
///
/// `a` and `b` are char offsets into the first and second input. When the
/// inputs share nothing, the match is `Match { a: 0, b: 0, size: 0 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    /// The matched text, sliced out of the first input.
    ///
    /// `a` must be the same string that was passed as the first argument to
    /// [`find_longest_match`]; offsets past its end yield an empty slice.
    #[must_use]
    pub fn text<'s>(&self, a: &'s str) -> &'s str {
        let mut offsets = a
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(a.len()));
        let Some(start) = offsets.nth(self.a) else {
            return "";
        };
        if self.size == 0 {
            return "";
        }
        let end = offsets.nth(self.size - 1).unwrap_or(a.len());
        &a[start..end]
    }
}

/// Find a longest common substring of `a` and `b`.
///
/// Among equally long matches, the one starting earliest in `a` wins, and
/// among those the one starting earliest in `b`.
///
/// Runs a DP over a rolling row: `row[j + 1]` holds the length of the common
/// run ending at the current char of `a` and at `b[j]`. O(len(a)·len(b))
/// time, O(len(b)) space.
#[must_use]
pub fn find_longest_match(a: &str, b: &str) -> Match {
    let b_chars: Vec<char> = b.chars().collect();
    let mut best = Match::default();
    if b_chars.is_empty() {
        return best;
    }

    let mut row = vec![0usize; b_chars.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        // Walk right to left so `row[j]` still holds the previous row's value.
        for j in (0..b_chars.len()).rev() {
            if ca == b_chars[j] {
                row[j + 1] = row[j] + 1;
            } else {
                row[j + 1] = 0;
            }
        }
        // Scan left to right so the earliest position in `b` wins ties.
        for (j, &run) in row[1..].iter().enumerate() {
            if run > best.size {
                best = Match {
                    a: i + 1 - run,
                    b: j + 1 - run,
                    size: run,
                };
            }
        }
    }

    tracing::trace!(a = best.a, b = best.b, size = best.size, "longest match");
    best
}

/// Ratio of the longest common substring's length to the longer input's
/// length.
///
/// # Errors
///
/// Returns [`SimilarityError::DegenerateInput`] when both inputs are empty,
/// since the ratio has no denominator.
pub fn ratio(a: &str, b: &str) -> Result<f64, SimilarityError> {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return Err(SimilarityError::DegenerateInput {
            metric: LongestCommonSubstring.name(),
        });
    }
    let matched = find_longest_match(a, b);
    let score = matched.size as f64 / longest as f64;
    tracing::debug!(size = matched.size, longest, score, "longest common substring ratio");
    Ok(score)
}

/// Longest-common-substring ratio as a [`SimilarityAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestCommonSubstring;

impl SimilarityAlgorithm for LongestCommonSubstring {
    fn name(&self) -> &'static str {
        "longest-common-substring"
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        ratio(a, b)
    }
}
