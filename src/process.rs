use crate::common::Tolerance;
use crate::fuzz::BatchComparator;
use crate::normalize::average;
use crate::options::ComparisonOption;

/// A choice picked by [`extract`] or [`extract_one`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extracted<'a> {
    pub choice: &'a str,
    /// position of the choice in the input
    pub index: usize,
    pub average_score: f64,
}

/// Returns every choice that approximately equals `query` under `tolerance`,
/// best (lowest average score) first. Choices with the same score keep their
/// input order.
///
/// # Example
/// ```
/// use fuzzy_equals::process::extract;
/// use fuzzy_equals::{ComparisonOption, Tolerance};
///
/// let choices = ["apple", "Apply", "maple", "banana"];
/// let found = extract(
///     "apple",
///     &choices,
///     Tolerance::Normal,
///     [ComparisonOption::UseLevenshteinDistance],
/// );
/// let names: Vec<&str> = found.iter().map(|m| m.choice).collect();
/// assert_eq!(vec!["apple", "Apply", "maple"], names);
/// ```
pub fn extract<'a, S, Opts>(
    query: &str,
    choices: &'a [S],
    tolerance: Tolerance,
    options: Opts,
) -> Vec<Extracted<'a>>
where
    S: AsRef<str>,
    Opts: IntoIterator<Item = ComparisonOption>,
{
    let scorer = BatchComparator::new(query, options);
    let mut result: Vec<Extracted<'a>> = choices
        .iter()
        .enumerate()
        .filter_map(|(index, choice)| {
            let choice = choice.as_ref();
            let res = scorer.compare(choice, tolerance);
            res.matched.then_some(Extracted {
                choice,
                index,
                average_score: res.average_score,
            })
        })
        .collect();

    result.sort_by(|a, b| a.average_score.total_cmp(&b.average_score));
    result
}

/// Returns the choice with the lowest average score, independent of any
/// tolerance. Choices for which no selected metric is applicable are never
/// picked; on a tie the earlier choice wins.
pub fn extract_one<'a, S, Opts>(
    query: &str,
    choices: &'a [S],
    options: Opts,
) -> Option<Extracted<'a>>
where
    S: AsRef<str>,
    Opts: IntoIterator<Item = ComparisonOption>,
{
    let scorer = BatchComparator::new(query, options);
    let mut best: Option<Extracted<'a>> = None;

    for (index, choice) in choices.iter().enumerate() {
        let choice = choice.as_ref();
        let scores = scorer.evaluate(choice);
        let Some(average_score) = average(scores.iter().map(|score| score.value)) else {
            continue;
        };

        if best.map_or(true, |best| average_score < best.average_score) {
            best = Some(Extracted {
                choice,
                index,
                average_score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use ComparisonOption::*;

    #[test]
    fn extract_sorted_best_first() {
        let choices = vec!["banana".to_owned(), "Hallo".to_owned(), "hello".to_owned()];
        let found = extract("Hello", &choices, Tolerance::Normal, [UseLevenshteinDistance]);
        assert_eq!(2, found.len());
        assert_eq!("hello", found[0].choice);
        assert_eq!(2, found[0].index);
        assert_eq!(0.0, found[0].average_score);
        assert_eq!("Hallo", found[1].choice);
    }

    #[test]
    fn extract_ties_keep_input_order() {
        let choices = ["Hallo", "Hullo", "Hello"];
        let found = extract("Hello", &choices, Tolerance::Normal, [UseLevenshteinDistance]);
        let order: Vec<usize> = found.iter().map(|m| m.index).collect();
        assert_eq!(vec![2, 0, 1], order);
    }

    #[test]
    fn extract_empty_selection_finds_nothing() {
        let choices = ["Hello"];
        assert!(extract("Hello", &choices, Tolerance::Weak, Options::new()).is_empty());
    }

    #[test]
    fn extract_manual_tolerance() {
        let choices = ["Hello", "xyz"];
        let found = extract("Hello", &choices, Tolerance::Manual, [UseLevenshteinDistance]);
        assert_eq!(1, found.len());
        assert_eq!("xyz", found[0].choice);
    }

    #[test]
    fn extract_one_best() {
        let choices = ["kitten", "sitting", "mitten"];
        let best = extract_one("sitten", &choices, [UseLevenshteinDistance]).unwrap();
        // "kitten" and "mitten" are both one edit away, the first one wins
        assert_eq!("kitten", best.choice);
        assert_eq!(0, best.index);
    }

    #[test]
    fn extract_one_skips_inapplicable() {
        let choices = ["Hi", "Hallo"];
        let best = extract_one("Hello", &choices, [UseHammingDistance]).unwrap();
        assert_eq!("Hallo", best.choice);

        let choices = ["Hi"];
        assert_eq!(None, extract_one("Hello", &choices, [UseHammingDistance]));
    }
}
