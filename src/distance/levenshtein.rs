use crate::details::common::char_len;

/// Minimum number of insertions, deletions and substitutions required to
/// turn `s1` into `s2`.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("kitten", "sitting"));
/// ```
pub fn distance(s1: &str, s2: &str) -> usize {
    strsim::levenshtein(s1, s2)
}

/// Largest possible Levenshtein distance for strings of these lengths,
/// the length of the longer string.
pub fn upper_bound(s1: &str, s2: &str) -> usize {
    char_len(s1).max(char_len(s2))
}

/// Smallest possible Levenshtein distance for strings of these lengths,
/// the difference in length.
pub fn lower_bound(s1: &str, s2: &str) -> usize {
    char_len(s1).abs_diff(char_len(s2))
}

/// Levenshtein distance shifted by the [`lower_bound`], so the result is the
/// number of edits beyond the ones the length difference already forces.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::levenshtein;
///
/// // 3 edits, 1 of which is required by the length difference
/// assert_eq!(2, levenshtein::normalized_distance("kitten", "sitting"));
/// ```
pub fn normalized_distance(s1: &str, s2: &str) -> usize {
    distance(s1, s2) - lower_bound(s1, s2)
}
