use log::debug;

use crate::common::Tolerance;
use crate::normalize::{average, evaluate_resolved, MetricScore};
use crate::options::{ComparisonOption, Options, Resolved};

/// Outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    pub matched: bool,
    /// mean of the normalized values of all applicable metrics, `0.0` when
    /// no metric was applicable
    pub average_score: f64,
}

impl ComparisonResult {
    /// result of a comparison in which no metric produced a value
    pub const NO_MATCH: ComparisonResult = ComparisonResult {
        matched: false,
        average_score: 0.0,
    };

    fn classify(average_score: Option<f64>, tolerance: Tolerance) -> Self {
        match average_score {
            Some(average_score) => ComparisonResult {
                matched: tolerance.matches(average_score),
                average_score,
            },
            None => ComparisonResult::NO_MATCH,
        }
    }
}

/// Compares `source` and `target` with the metrics selected in `options`
/// and classifies their average dissimilarity under `tolerance`.
///
/// Both strings are case folded unless `options` contains
/// [`ComparisonOption::CaseSensitive`]. When no selected metric is applicable
/// the result is [`ComparisonResult::NO_MATCH`].
///
/// # Example
/// ```
/// use fuzzy_equals::fuzz;
/// use fuzzy_equals::{ComparisonOption, Tolerance};
///
/// let result = fuzz::compare(
///     "Hello",
///     "Hallo",
///     Tolerance::Normal,
///     [ComparisonOption::UseLevenshteinDistance],
/// );
/// assert!(result.matched);
/// assert!((result.average_score - 0.2).abs() < 1e-9);
/// ```
pub fn compare<Opts>(
    source: &str,
    target: &str,
    tolerance: Tolerance,
    options: Opts,
) -> ComparisonResult
where
    Opts: IntoIterator<Item = ComparisonOption>,
{
    let resolved = options.into_iter().collect::<Options>().resolve();
    compare_resolved(
        &resolved,
        &resolved.prepare(source),
        &resolved.prepare(target),
        tolerance,
    )
}

/// Same as [`compare`], returning only whether the strings matched.
///
/// # Example
/// ```
/// use fuzzy_equals::fuzz;
/// use fuzzy_equals::{ComparisonOption, Tolerance};
///
/// assert!(fuzz::approximately_equals(
///     "Abc",
///     "abc",
///     Tolerance::Strong,
///     [ComparisonOption::UseHammingDistance],
/// ));
/// ```
pub fn approximately_equals<Opts>(
    source: &str,
    target: &str,
    tolerance: Tolerance,
    options: Opts,
) -> bool
where
    Opts: IntoIterator<Item = ComparisonOption>,
{
    compare(source, target, tolerance, options).matched
}

fn compare_resolved(
    resolved: &Resolved,
    source: &str,
    target: &str,
    tolerance: Tolerance,
) -> ComparisonResult {
    let scores = evaluate_resolved(resolved, source, target);
    let result = ComparisonResult::classify(
        average(scores.iter().map(|score| score.value)),
        tolerance,
    );

    debug!(
        "{} of {} metrics applicable, average {:.4}, {tolerance}: {}",
        scores.len(),
        resolved.metrics.len(),
        result.average_score,
        if result.matched { "match" } else { "no match" }
    );
    result
}

/// Compares one source string against many targets.
///
/// The options are resolved and the source is case folded once, on
/// construction. Results are the same as the ones of the free functions.
///
/// # Example
/// ```
/// use fuzzy_equals::fuzz::BatchComparator;
/// use fuzzy_equals::{ComparisonOption, Tolerance};
///
/// let scorer = BatchComparator::new(
///     "kitten",
///     [
///         ComparisonOption::UseLevenshteinDistance,
///         ComparisonOption::UseJaroWinklerDistance,
///     ],
/// );
/// assert!(scorer.approximately_equals("Kitten", Tolerance::Strong));
/// assert!(!scorer.approximately_equals("puppy", Tolerance::Normal));
/// ```
#[derive(Debug, Clone)]
pub struct BatchComparator {
    source: String,
    resolved: Resolved,
}

impl BatchComparator {
    pub fn new<Opts>(source: &str, options: Opts) -> Self
    where
        Opts: IntoIterator<Item = ComparisonOption>,
    {
        let resolved = options.into_iter().collect::<Options>().resolve();
        Self {
            source: resolved.prepare(source).into_owned(),
            resolved,
        }
    }

    /// normalized values of the applicable metrics for this target
    pub fn evaluate(&self, target: &str) -> Vec<MetricScore> {
        evaluate_resolved(&self.resolved, &self.source, &self.resolved.prepare(target))
    }

    pub fn compare(&self, target: &str, tolerance: Tolerance) -> ComparisonResult {
        compare_resolved(
            &self.resolved,
            &self.source,
            &self.resolved.prepare(target),
            tolerance,
        )
    }

    pub fn approximately_equals(&self, target: &str, tolerance: Tolerance) -> bool {
        self.compare(target, tolerance).matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use ComparisonOption::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            if ($x - $y).abs() > 1e-9 {
                panic!("{} != {}", $x, $y);
            }
        };
    }

    #[test]
    fn empty_selection() {
        assert_eq!(
            ComparisonResult::NO_MATCH,
            compare("x", "y", Tolerance::Normal, Options::new())
        );
        // not even manual matches when nothing was measured
        assert!(!approximately_equals("x", "y", Tolerance::Manual, [CaseSensitive]));
    }

    #[test]
    fn inapplicable_metric_is_skipped() {
        let result = compare("Hi", "Hello", Tolerance::Normal, [UseHammingDistance]);
        assert_eq!(ComparisonResult::NO_MATCH, result);
    }

    #[test]
    fn levenshtein_hello_hallo() {
        let result = compare("Hello", "Hallo", Tolerance::Normal, [UseLevenshteinDistance]);
        assert!(result.matched);
        assert_delta!(0.2, result.average_score);
    }

    #[test]
    fn levenshtein_precedence_contributes_once() {
        // raw: 3 / 7, normalized: 2 / 6. A mean over both would differ.
        let result = compare(
            "kitten",
            "sitting",
            Tolerance::Normal,
            [UseLevenshteinDistance, UseNormalizedLevenshteinDistance],
        );
        assert_delta!(2.0 / 6.0, result.average_score);
    }

    #[test]
    fn average_over_applicable_metrics_only() {
        // hamming is skipped, so the score is the one of levenshtein alone
        let result = compare(
            "Hi",
            "Hello",
            Tolerance::Weak,
            [UseHammingDistance, UseLevenshteinDistance],
        );
        let alone = compare("Hi", "Hello", Tolerance::Weak, [UseLevenshteinDistance]);
        assert_eq!(alone, result);
    }

    #[test]
    fn case_insensitive_by_default() {
        for metric in Metric::ALL {
            let option = ComparisonOption::from(metric);
            for tolerance in Tolerance::ALL {
                assert_eq!(
                    compare("abc", "abc", tolerance, [option]),
                    compare("Abc", "abc", tolerance, [option]),
                    "{metric} / {tolerance}"
                );
            }
        }
    }

    #[test]
    fn case_sensitive_option() {
        let result = compare(
            "ABC",
            "abc",
            Tolerance::Strong,
            [CaseSensitive, UseHammingDistance],
        );
        assert!(!result.matched);
        assert_eq!(1.0, result.average_score);
    }

    #[test]
    fn manual_matches_high_dissimilarity() {
        let options = [UseLevenshteinDistance];
        assert!(approximately_equals("abc", "xyz", Tolerance::Manual, options));
        assert!(!approximately_equals("abc", "xyz", Tolerance::Weak, options));
        assert!(!approximately_equals("abc", "abc", Tolerance::Manual, options));
    }

    #[test]
    fn options_by_reference() {
        let options = Options::from([UseJaroDistance, UseJaroWinklerDistance]);
        let by_ref = compare("martha", "marhta", Tolerance::Strong, &options);
        let by_val = compare("martha", "marhta", Tolerance::Strong, options);
        assert_eq!(by_ref, by_val);
        assert!(by_val.matched);
    }

    #[test]
    fn batch_comparator_agrees_with_compare() {
        let options = Options::all_metrics();
        let scorer = BatchComparator::new("Pennsylvania", options);
        for target in ["pencilvaneya", "Pennsylvania", "", "Transylvania", "PA"] {
            for tolerance in Tolerance::ALL {
                assert_eq!(
                    compare("Pennsylvania", target, tolerance, options),
                    scorer.compare(target, tolerance),
                    "{target} / {tolerance}"
                );
            }
            assert_eq!(
                crate::normalize::evaluate("Pennsylvania", target, options),
                scorer.evaluate(target)
            );
        }
    }

    #[test]
    fn every_metric_alone_yields_valid_score() {
        for metric in Metric::ALL {
            let result = compare("Straße", "strasse", Tolerance::Weak, [ComparisonOption::from(metric)]);
            assert!(
                (0.0..=1.0).contains(&result.average_score),
                "{metric}: {}",
                result.average_score
            );
        }
    }
}
