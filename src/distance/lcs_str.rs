/// A run of characters shared by two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub start1: usize,
    pub start2: usize,
    pub len: usize,
}

/// Finds the longest contiguous run shared by `s1` and `s2`. Ties are
/// resolved towards the earliest end position in `s1`, then in `s2`.
pub(crate) fn longest_common_block(s1: &[char], s2: &[char]) -> Block {
    let mut best = Block {
        start1: 0,
        start2: 0,
        len: 0,
    };

    let mut row = vec![0usize; s2.len() + 1];
    for (i, &ch1) in s1.iter().enumerate() {
        let mut diag = 0;
        for (j, &ch2) in s2.iter().enumerate() {
            let above = row[j + 1];
            let len = if ch1 == ch2 { diag + 1 } else { 0 };
            row[j + 1] = len;
            if len > best.len {
                best = Block {
                    start1: i + 1 - len,
                    start2: j + 1 - len,
                    len,
                };
            }
            diag = above;
        }
    }
    best
}

/// Length of the longest common substring of `s1` and `s2`.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::lcs_str;
///
/// assert_eq!(5, lcs_str::similarity("kitten", "written"));
/// assert_eq!("itten", lcs_str::substring("kitten", "written"));
/// ```
pub fn similarity(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    longest_common_block(&s1, &s2).len
}

/// The longest common substring of `s1` and `s2`, the first one in `s1`
/// when several share the maximum length.
pub fn substring(s1: &str, s2: &str) -> String {
    let chars: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let block = longest_common_block(&chars, &s2);
    chars[block.start1..block.start1 + block.len].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_empty() {
        assert_eq!(0, similarity("", "abc"));
        assert_eq!("", substring("abc", ""));
    }

    #[test]
    fn substring_disjoint() {
        assert_eq!(0, similarity("abc", "xyz"));
    }

    #[test]
    fn substring_is_contiguous() {
        // the subsequence "GTAB" is not contiguous in the second string
        assert_eq!(1, similarity("AGGTAB", "GXTXAYB"));
        assert_eq!(4, similarity("xxabcdyy", "zabcdz"));
        assert_eq!("abcd", substring("xxabcdyy", "zabcdz"));
    }

    #[test]
    fn substring_first_in_source_wins() {
        assert_eq!("ab", substring("abxcd", "cdyab"));
    }

    #[test]
    fn block_positions() {
        let s1: Vec<char> = "xxabcdyy".chars().collect();
        let s2: Vec<char> = "zabcdz".chars().collect();
        assert_eq!(
            Block {
                start1: 2,
                start2: 1,
                len: 4
            },
            longest_common_block(&s1, &s2)
        );
    }

    #[test]
    fn substring_multibyte() {
        assert_eq!("mmüng", substring("xmmüngx", "h香mmüng"));
    }
}
