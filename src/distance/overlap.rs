use crate::details::common::SetCounts;

/// Overlap coefficient of the character sets of `s1` and `s2`,
/// `|A ∩ B| / min(|A|, |B|)`.
///
/// Returns `None` when either string is empty.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::overlap;
///
/// // every character of "ab" occurs in "abcd"
/// assert_eq!(Some(1.0), overlap::coefficient("ab", "abcd"));
/// assert_eq!(None, overlap::coefficient("", "abcd"));
/// ```
pub fn coefficient(s1: &str, s2: &str) -> Option<f64> {
    let counts = SetCounts::new(s1, s2);
    let smaller = counts.len1.min(counts.len2);
    if smaller == 0 {
        return None;
    }

    Some(counts.intersection as f64 / smaller as f64)
}
