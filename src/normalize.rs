//! Rescaling of raw metric values onto a shared dissimilarity axis.
//!
//! Every metric is mapped onto `0.0 - 1.0`, where `0.0` means identical and
//! `1.0` maximally dissimilar. A metric that is not defined for an input pair
//! (Hamming on strings of different length, a ratio with an empty
//! denominator, ...) produces no value at all and is left out of the average.

use log::trace;

use crate::details::common::char_len;
use crate::distance::{
    hamming, jaccard, jaro, jaro_winkler, lcs_seq, lcs_str, levenshtein, overlap,
    ratcliff_obershelp, sorensen_dice, Metric,
};
use crate::options::{ComparisonOption, Options, Resolved};

/// A metric reduced to a normalized dissimilarity.
///
/// Implemented by [`Metric`]; custom metrics can implement it to take part in
/// [`mean_distance`].
pub trait MetricEvaluator {
    /// Dissimilarity of `s1` and `s2` in `0.0 - 1.0`, or `None` when the
    /// metric is not applicable to this pair.
    fn normalized_distance(&self, s1: &str, s2: &str) -> Option<f64>;
}

/// `numerator / denominator`, `None` for an empty denominator
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

impl MetricEvaluator for Metric {
    fn normalized_distance(&self, s1: &str, s2: &str) -> Option<f64> {
        let value = match self {
            Metric::Hamming => {
                let dist = hamming::distance(s1, s2).ok()?;
                ratio(dist, char_len(s2))
            }
            Metric::Jaccard => jaccard::distance(s1, s2),
            Metric::Jaro => Some(jaro::distance(s1, s2)),
            Metric::JaroWinkler => Some(jaro_winkler::distance(s1, s2)),
            Metric::Levenshtein => ratio(
                levenshtein::distance(s1, s2),
                levenshtein::upper_bound(s1, s2),
            ),
            Metric::NormalizedLevenshtein => {
                let longest = char_len(s1).max(char_len(s2));
                ratio(
                    levenshtein::normalized_distance(s1, s2),
                    longest - levenshtein::lower_bound(s1, s2),
                )
            }
            Metric::LongestCommonSubsequence => {
                let shortest = char_len(s1).min(char_len(s2));
                ratio(lcs_seq::similarity(s1, s2), shortest).map(|sim| 1.0 - sim)
            }
            Metric::LongestCommonSubstring => {
                let shortest = char_len(s1).min(char_len(s2));
                ratio(lcs_str::similarity(s1, s2), shortest).map(|sim| 1.0 - sim)
            }
            Metric::SorensenDice => sorensen_dice::distance(s1, s2),
            Metric::OverlapCoefficient => overlap::coefficient(s1, s2).map(|sim| 1.0 - sim),
            Metric::RatcliffObershelp => {
                ratcliff_obershelp::similarity(s1, s2).map(|sim| 1.0 - sim)
            }
        };

        // absorb rounding, e.g. 1.0 - 0.1 * 10.0
        value.map(|val| val.clamp(0.0, 1.0))
    }
}

/// One normalized value together with the metric that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricScore {
    pub metric: Metric,
    pub value: f64,
}

/// Normalized values of every selected metric that is applicable to the pair.
///
/// Case folding is applied according to `options` before any metric runs.
///
/// # Example
/// ```
/// use fuzzy_equals::normalize::evaluate;
/// use fuzzy_equals::{ComparisonOption, Metric};
///
/// let scores = evaluate(
///     "Hello",
///     "Hallo",
///     [
///         ComparisonOption::UseLevenshteinDistance,
///         ComparisonOption::UseHammingDistance,
///     ],
/// );
/// assert_eq!(2, scores.len());
/// assert_eq!(Metric::Hamming, scores[0].metric);
/// assert!((scores[1].value - 0.2).abs() < 1e-9);
/// ```
pub fn evaluate<Opts>(s1: &str, s2: &str, options: Opts) -> Vec<MetricScore>
where
    Opts: IntoIterator<Item = ComparisonOption>,
{
    let resolved = options.into_iter().collect::<Options>().resolve();
    evaluate_resolved(&resolved, &resolved.prepare(s1), &resolved.prepare(s2))
}

/// [`evaluate`] for inputs that already went through [`Resolved::prepare`]
pub(crate) fn evaluate_resolved(resolved: &Resolved, s1: &str, s2: &str) -> Vec<MetricScore> {
    resolved
        .metrics
        .iter()
        .filter_map(|&metric| match metric.normalized_distance(s1, s2) {
            Some(value) => {
                trace!("{metric}: {value:.4}");
                Some(MetricScore { metric, value })
            }
            None => {
                trace!("{metric}: not applicable, skipped");
                None
            }
        })
        .collect()
}

/// Unweighted arithmetic mean, `None` for an empty sequence.
///
/// # Example
/// ```
/// use fuzzy_equals::normalize::average;
///
/// assert_eq!(Some(0.5), average([0.25, 0.75]));
/// assert_eq!(None, average([]));
/// ```
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), val| (sum + val, count + 1));

    (count != 0).then(|| sum / count as f64)
}

/// Average normalized distance over an arbitrary set of evaluators. Only the
/// evaluators applicable to the pair contribute.
///
/// The strings are used as given, no case folding is applied.
pub fn mean_distance<'e, E, I>(evaluators: I, s1: &str, s2: &str) -> Option<f64>
where
    I: IntoIterator<Item = &'e E>,
    E: MetricEvaluator + ?Sized + 'e,
{
    average(
        evaluators
            .into_iter()
            .filter_map(|evaluator| evaluator.normalized_distance(s1, s2)),
    )
}
