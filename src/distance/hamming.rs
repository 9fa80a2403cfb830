use crate::details::common::char_len;
use crate::error::{Error, Result};

/// Number of positions at which the characters of `s1` and `s2` differ.
///
/// Fails with [`Error::DifferentLength`] when the strings do not have the
/// same number of characters.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::hamming;
///
/// assert_eq!(Ok(3), hamming::distance("hamming", "hammers"));
/// assert!(hamming::distance("ham", "hamming").is_err());
/// ```
pub fn distance(s1: &str, s2: &str) -> Result<usize> {
    strsim::hamming(s1, s2).map_err(|_| Error::DifferentLength {
        len1: char_len(s1),
        len2: char_len(s2),
    })
}

/// Number of positions at which the characters of `s1` and `s2` agree.
pub fn similarity(s1: &str, s2: &str) -> Result<usize> {
    let dist = distance(s1, s2)?;
    Ok(char_len(s1) - dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hamming_dist(dist: usize, str1: &str, str2: &str) {
        assert_eq!(Ok(dist), distance(str1, str2));
    }

    #[test]
    fn hamming_empty() {
        assert_hamming_dist(0, "", "")
    }

    #[test]
    fn hamming_same() {
        assert_hamming_dist(0, "hamming", "hamming")
    }

    #[test]
    fn hamming_diff() {
        assert_hamming_dist(3, "hamming", "hammers")
    }

    #[test]
    fn hamming_diff_multibyte() {
        assert_hamming_dist(2, "hamming", "h香mmüng");
    }

    #[test]
    fn hamming_unequal_length() {
        assert_eq!(
            Err(Error::DifferentLength { len1: 3, len2: 7 }),
            distance("ham", "hamming")
        );
    }

    #[test]
    fn hamming_names() {
        assert_hamming_dist(14, "Friedrich Nietzs", "Jean-Paul Sartre")
    }

    #[test]
    fn hamming_similarity() {
        assert_eq!(Ok(4), similarity("hamming", "hammers"));
    }
}
