use std::collections::HashSet;

/// length in unicode scalar values, which is the unit every metric works in
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn find_common_prefix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator<Item = Elem1>,
    Iter2: Iterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.zip(s2)
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: DoubleEndedIterator<Item = Elem1>,
    Iter2: DoubleEndedIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.rev()
        .zip(s2.rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

/// Removes the common prefix and suffix of two char slices and returns the
/// remaining middle parts together with the number of removed characters.
pub(crate) fn remove_common_affix<'a, 'b>(
    s1: &'a [char],
    s2: &'b [char],
) -> (&'a [char], &'b [char], usize) {
    let prefix_len = find_common_prefix(s1.iter(), s2.iter());
    let (s1, s2) = (&s1[prefix_len..], &s2[prefix_len..]);

    let suffix_len = find_common_suffix(s1.iter(), s2.iter());
    (
        &s1[..s1.len() - suffix_len],
        &s2[..s2.len() - suffix_len],
        prefix_len + suffix_len,
    )
}

/// sizes of the distinct character sets of two strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SetCounts {
    pub len1: usize,
    pub len2: usize,
    pub intersection: usize,
}

impl SetCounts {
    pub fn new(s1: &str, s2: &str) -> Self {
        let set1: HashSet<char> = s1.chars().collect();
        let set2: HashSet<char> = s2.chars().collect();

        Self {
            len1: set1.len(),
            len2: set2.len(),
            intersection: set1.intersection(&set2).count(),
        }
    }

    pub fn union(&self) -> usize {
        self.len1 + self.len2 - self.intersection
    }
}
