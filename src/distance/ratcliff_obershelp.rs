use std::ops::Range;

use crate::distance::lcs_str::longest_common_block;

/// Number of characters matched by the Ratcliff-Obershelp procedure: the
/// longest common substring is matched first, then the unmatched parts left
/// and right of it are matched the same way until no common character is
/// left.
pub fn matching_characters(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    let mut matches = 0;
    let mut pending: Vec<(Range<usize>, Range<usize>)> = vec![(0..s1.len(), 0..s2.len())];
    while let Some((r1, r2)) = pending.pop() {
        let block = longest_common_block(&s1[r1.clone()], &s2[r2.clone()]);
        if block.len == 0 {
            continue;
        }

        matches += block.len;
        let start1 = r1.start + block.start1;
        let start2 = r2.start + block.start2;
        pending.push((r1.start..start1, r2.start..start2));
        pending.push((start1 + block.len..r1.end, start2 + block.len..r2.end));
    }
    matches
}

/// Ratcliff-Obershelp similarity, `2 * matches / (len1 + len2)`.
///
/// Returns `None` when both strings are empty.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::ratcliff_obershelp;
///
/// // "WIKIM" and "IA" are matched: 2 * 7 / 18
/// let sim = ratcliff_obershelp::similarity("WIKIMEDIA", "WIKIMANIA").unwrap();
/// assert!((sim - 0.777).abs() < 0.001);
/// ```
pub fn similarity(s1: &str, s2: &str) -> Option<f64> {
    let total = s1.chars().count() + s2.chars().count();
    if total == 0 {
        return None;
    }

    Some(2.0 * matching_characters(s1, s2) as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratcliff_obershelp_pennsylvania() {
        // "LVAN", "PEN", "A" out of 12 + 12
        assert_eq!(8, matching_characters("PENNSYLVANIA", "PENCILVANEYA"));
    }

    #[test]
    fn ratcliff_obershelp_identical() {
        assert_eq!(Some(1.0), similarity("gestalt", "gestalt"));
    }

    #[test]
    fn ratcliff_obershelp_disjoint() {
        assert_eq!(Some(0.0), similarity("abc", "xyz"));
        assert_eq!(Some(0.0), similarity("abc", ""));
        assert_eq!(None, similarity("", ""));
    }

    #[test]
    fn ratcliff_obershelp_symmetric_on_unique_blocks() {
        assert_eq!(
            matching_characters("WIKIMEDIA", "WIKIMANIA"),
            matching_characters("WIKIMANIA", "WIKIMEDIA")
        );
    }
}
