/// Jaro-Winkler similarity: Jaro with a bonus for a common prefix of up to
/// four characters, scaled by `0.1`.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    strsim::jaro_winkler(s1, s2)
}

/// Jaro-Winkler distance, `1 - similarity`.
pub fn distance(s1: &str, s2: &str) -> f64 {
    1.0 - similarity(s1, s2)
}
