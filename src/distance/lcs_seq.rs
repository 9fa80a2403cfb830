use crate::details::common::remove_common_affix;
use crate::details::matrix::Matrix;

/// Length of the longest common subsequence of `s1` and `s2`.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::lcs_seq;
///
/// assert_eq!(4, lcs_seq::similarity("kitten", "sitting"));
/// assert_eq!("ittn", lcs_seq::subsequence("kitten", "sitting"));
/// ```
pub fn similarity(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    // the common prefix and suffix are always part of a longest subsequence
    let (s1, s2, affix_len) = remove_common_affix(&s1, &s2);
    affix_len + lcs_len(s1, s2)
}

/// The longest common subsequence of `s1` and `s2` itself. When several
/// subsequences share the maximum length one of them is returned.
pub fn subsequence(s1: &str, s2: &str) -> String {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    let rows = s1.len() + 1;
    let cols = s2.len() + 1;
    let mut table = Matrix::<usize>::new(rows, cols);
    for i in 1..rows {
        for j in 1..cols {
            let len = if s1[i - 1] == s2[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, len);
        }
    }

    let mut result = Vec::with_capacity(table.get(rows - 1, cols - 1));
    let (mut i, mut j) = (s1.len(), s2.len());
    while i > 0 && j > 0 {
        if s1[i - 1] == s2[j - 1] {
            result.push(s1[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.iter().rev().collect()
}

/// single row dynamic programming, `O(len1 * len2)` time and `O(len2)` memory
fn lcs_len(s1: &[char], s2: &[char]) -> usize {
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; s2.len() + 1];
    for &ch1 in s1 {
        let mut diag = 0;
        for (j, &ch2) in s2.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ch1 == ch2 {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[s2.len()]
}
