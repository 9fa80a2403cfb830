/// Jaro similarity in the range `0.0 - 1.0`, where `1.0` means identical.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    strsim::jaro(s1, s2)
}

/// Jaro distance, `1 - similarity`. Identical strings have a distance of `0.0`.
///
/// # Example
/// ```
/// use fuzzy_equals::distance::jaro;
///
/// assert_eq!(0.0, jaro::distance("martha", "martha"));
/// assert!(jaro::distance("martha", "marhta") < 0.06);
/// ```
pub fn distance(s1: &str, s2: &str) -> f64 {
    1.0 - similarity(s1, s2)
}
