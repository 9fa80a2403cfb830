use crate::details::common::SetCounts;

/// Jaccard index of the character sets of `s1` and `s2`,
/// `|A ∩ B| / |A ∪ B|`.
///
/// Returns `None` when both strings are empty, since the index is undefined
/// for two empty sets.
pub fn similarity(s1: &str, s2: &str) -> Option<f64> {
    let counts = SetCounts::new(s1, s2);
    let union = counts.union();
    if union == 0 {
        return None;
    }

    Some(counts.intersection as f64 / union as f64)
}

/// Jaccard distance of the character sets of `s1` and `s2`,
/// `1 - similarity`.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::jaccard;
///
/// assert_eq!(Some(0.0), jaccard::distance("abc", "cab"));
/// assert_eq!(Some(1.0), jaccard::distance("abc", "xyz"));
/// assert_eq!(None, jaccard::distance("", ""));
/// ```
pub fn distance(s1: &str, s2: &str) -> Option<f64> {
    similarity(s1, s2).map(|sim| 1.0 - sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            assert_delta!($x, $y, 1e-6)
        };
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{} != {}", $x, $y);
            }
        };
    }

    #[test]
    fn jaccard_partial_overlap() {
        // {h,e,l,o} vs {y,e,l,o,w}: 3 shared out of 6
        assert_delta!(0.5, similarity("hello", "yellow").unwrap());
        assert_delta!(0.5, distance("hello", "yellow").unwrap());
    }

    #[test]
    fn jaccard_one_empty() {
        assert_eq!(Some(1.0), distance("", "abc"));
    }

    #[test]
    fn jaccard_repeated_chars() {
        assert_eq!(Some(0.0), distance("aaab", "ab"));
    }
}
