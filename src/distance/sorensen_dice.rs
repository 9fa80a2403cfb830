use crate::details::common::SetCounts;

/// Sørensen-Dice coefficient of the character sets of `s1` and `s2`,
/// `2 |A ∩ B| / (|A| + |B|)`. `None` when both strings are empty.
pub fn similarity(s1: &str, s2: &str) -> Option<f64> {
    let counts = SetCounts::new(s1, s2);
    let total = counts.len1 + counts.len2;
    if total == 0 {
        return None;
    }

    Some(2.0 * counts.intersection as f64 / total as f64)
}

/// `1 - similarity`, see [`similarity`].
///
/// # Example
/// ```
/// use fuzzy_equals::distance::sorensen_dice;
///
/// assert_eq!(Some(0.0), sorensen_dice::distance("night", "thing"));
/// assert_eq!(Some(1.0), sorensen_dice::distance("abc", "xyz"));
/// ```
pub fn distance(s1: &str, s2: &str) -> Option<f64> {
    similarity(s1, s2).map(|sim| 1.0 - sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_partial_overlap() {
        // {h,e,l,o} vs {y,e,l,o,w}: 2 * 3 / 9
        let sim = similarity("hello", "yellow").unwrap();
        assert!((sim - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn dice_empty() {
        assert_eq!(None, distance("", ""));
        assert_eq!(Some(1.0), distance("abc", ""));
    }
}
