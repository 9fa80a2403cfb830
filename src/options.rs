//! Selection of the metrics used by a comparison.
//!
//! A comparison is configured with a set of [`ComparisonOption`]s: one
//! `Use*` option per [`Metric`] and the [`CaseSensitive`] modifier. The set is
//! resolved into the metrics to run and whether both strings are case folded.
//!
//! [`CaseSensitive`]: ComparisonOption::CaseSensitive

use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::distance::Metric;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ComparisonOption {
    /// compare the strings as given instead of case folding both
    CaseSensitive,
    UseHammingDistance,
    UseJaccardDistance,
    UseJaroDistance,
    UseJaroWinklerDistance,
    UseLevenshteinDistance,
    /// takes precedence over `UseLevenshteinDistance` when both are selected
    UseNormalizedLevenshteinDistance,
    UseLongestCommonSubsequence,
    UseLongestCommonSubstring,
    UseSorensenDiceDistance,
    UseOverlapCoefficient,
    UseRatcliffObershelpSimilarity,
}

impl ComparisonOption {
    pub const ALL: [ComparisonOption; 12] = [
        ComparisonOption::CaseSensitive,
        ComparisonOption::UseHammingDistance,
        ComparisonOption::UseJaccardDistance,
        ComparisonOption::UseJaroDistance,
        ComparisonOption::UseJaroWinklerDistance,
        ComparisonOption::UseLevenshteinDistance,
        ComparisonOption::UseNormalizedLevenshteinDistance,
        ComparisonOption::UseLongestCommonSubsequence,
        ComparisonOption::UseLongestCommonSubstring,
        ComparisonOption::UseSorensenDiceDistance,
        ComparisonOption::UseOverlapCoefficient,
        ComparisonOption::UseRatcliffObershelpSimilarity,
    ];

    /// The metric enabled by this option, `None` for `CaseSensitive`.
    pub const fn metric(self) -> Option<Metric> {
        match self {
            ComparisonOption::CaseSensitive => None,
            ComparisonOption::UseHammingDistance => Some(Metric::Hamming),
            ComparisonOption::UseJaccardDistance => Some(Metric::Jaccard),
            ComparisonOption::UseJaroDistance => Some(Metric::Jaro),
            ComparisonOption::UseJaroWinklerDistance => Some(Metric::JaroWinkler),
            ComparisonOption::UseLevenshteinDistance => Some(Metric::Levenshtein),
            ComparisonOption::UseNormalizedLevenshteinDistance => {
                Some(Metric::NormalizedLevenshtein)
            }
            ComparisonOption::UseLongestCommonSubsequence => {
                Some(Metric::LongestCommonSubsequence)
            }
            ComparisonOption::UseLongestCommonSubstring => Some(Metric::LongestCommonSubstring),
            ComparisonOption::UseSorensenDiceDistance => Some(Metric::SorensenDice),
            ComparisonOption::UseOverlapCoefficient => Some(Metric::OverlapCoefficient),
            ComparisonOption::UseRatcliffObershelpSimilarity => Some(Metric::RatcliffObershelp),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ComparisonOption::CaseSensitive => "case_sensitive",
            ComparisonOption::UseHammingDistance => "use_hamming_distance",
            ComparisonOption::UseJaccardDistance => "use_jaccard_distance",
            ComparisonOption::UseJaroDistance => "use_jaro_distance",
            ComparisonOption::UseJaroWinklerDistance => "use_jaro_winkler_distance",
            ComparisonOption::UseLevenshteinDistance => "use_levenshtein_distance",
            ComparisonOption::UseNormalizedLevenshteinDistance => {
                "use_normalized_levenshtein_distance"
            }
            ComparisonOption::UseLongestCommonSubsequence => "use_longest_common_subsequence",
            ComparisonOption::UseLongestCommonSubstring => "use_longest_common_substring",
            ComparisonOption::UseSorensenDiceDistance => "use_sorensen_dice_distance",
            ComparisonOption::UseOverlapCoefficient => "use_overlap_coefficient",
            ComparisonOption::UseRatcliffObershelpSimilarity => {
                "use_ratcliff_obershelp_similarity"
            }
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl From<Metric> for ComparisonOption {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Hamming => ComparisonOption::UseHammingDistance,
            Metric::Jaccard => ComparisonOption::UseJaccardDistance,
            Metric::Jaro => ComparisonOption::UseJaroDistance,
            Metric::JaroWinkler => ComparisonOption::UseJaroWinklerDistance,
            Metric::Levenshtein => ComparisonOption::UseLevenshteinDistance,
            Metric::NormalizedLevenshtein => ComparisonOption::UseNormalizedLevenshteinDistance,
            Metric::LongestCommonSubsequence => ComparisonOption::UseLongestCommonSubsequence,
            Metric::LongestCommonSubstring => ComparisonOption::UseLongestCommonSubstring,
            Metric::SorensenDice => ComparisonOption::UseSorensenDiceDistance,
            Metric::OverlapCoefficient => ComparisonOption::UseOverlapCoefficient,
            Metric::RatcliffObershelp => ComparisonOption::UseRatcliffObershelpSimilarity,
        }
    }
}

impl Display for ComparisonOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// lowercase alphanumerics only, so `UseJaroDistance`, `use_jaro_distance`
/// and `use-jaro-distance` compare equal
fn canonical(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

impl FromStr for ComparisonOption {
    type Err = Error;

    /// Accepts the option name in any case and separator style, and for the
    /// metric options also the bare metric name (`"jaro_winkler"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = canonical(s);
        ComparisonOption::ALL
            .into_iter()
            .find(|option| {
                canonical(option.name()) == wanted
                    || option
                        .metric()
                        .is_some_and(|metric| canonical(metric.name()) == wanted)
            })
            .ok_or_else(|| Error::UnknownOption(s.trim().to_owned()))
    }
}

/// A set of [`ComparisonOption`]s.
///
/// Duplicates are ignored and iteration always follows the declaration order
/// of [`ComparisonOption`], independent of insertion order.
///
/// # Example
/// ```
/// use fuzzy_equals::{ComparisonOption, Options};
///
/// let options = Options::new()
///     .with(ComparisonOption::UseJaroWinklerDistance)
///     .with(ComparisonOption::UseLevenshteinDistance);
/// assert_eq!(2, options.len());
///
/// let parsed: Options = "levenshtein, jaro_winkler".parse().unwrap();
/// assert_eq!(options, parsed);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<ComparisonOption>", from = "Vec<ComparisonOption>")
)]
pub struct Options {
    bits: u16,
}

impl Options {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// every metric, compared case insensitive
    pub fn all_metrics() -> Self {
        Metric::ALL.into_iter().map(ComparisonOption::from).collect()
    }

    #[must_use]
    pub const fn with(mut self, option: ComparisonOption) -> Self {
        self.bits |= option.bit();
        self
    }

    /// Adds `option`, returns whether it was newly added.
    pub fn insert(&mut self, option: ComparisonOption) -> bool {
        let added = !self.contains(option);
        self.bits |= option.bit();
        added
    }

    /// Removes `option`, returns whether it was present.
    pub fn remove(&mut self, option: ComparisonOption) -> bool {
        let present = self.contains(option);
        self.bits &= !option.bit();
        present
    }

    pub const fn contains(self, option: ComparisonOption) -> bool {
        self.bits & option.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn case_sensitive(self) -> bool {
        self.contains(ComparisonOption::CaseSensitive)
    }

    pub fn iter(self) -> Iter {
        Iter {
            options: self,
            pos: 0,
        }
    }

    /// Resolves the set into the metrics to evaluate.
    ///
    /// Metrics are listed in [`Metric::ALL`] order. When both Levenshtein
    /// options are selected only the normalized variant is kept.
    pub fn resolve(self) -> Resolved {
        let metrics = self
            .iter()
            .filter_map(ComparisonOption::metric)
            .filter(|&metric| {
                metric != Metric::Levenshtein
                    || !self.contains(ComparisonOption::UseNormalizedLevenshteinDistance)
            })
            .collect();

        Resolved {
            fold_case: !self.case_sensitive(),
            metrics,
        }
    }
}

impl Debug for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, option) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(option.name())?;
        }
        Ok(())
    }
}

impl FromStr for Options {
    type Err = Error;

    /// Parses a comma separated list of options, see [`ComparisonOption`]'s
    /// `FromStr` for the accepted names. An empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<ComparisonOption>)
            .collect()
    }
}

impl From<ComparisonOption> for Options {
    fn from(option: ComparisonOption) -> Self {
        Options::new().with(option)
    }
}

impl<const N: usize> From<[ComparisonOption; N]> for Options {
    fn from(options: [ComparisonOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl From<Vec<ComparisonOption>> for Options {
    fn from(options: Vec<ComparisonOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<Options> for Vec<ComparisonOption> {
    fn from(options: Options) -> Self {
        options.iter().collect()
    }
}

impl FromIterator<ComparisonOption> for Options {
    fn from_iter<T: IntoIterator<Item = ComparisonOption>>(iter: T) -> Self {
        let mut options = Options::new();
        options.extend(iter);
        options
    }
}

impl Extend<ComparisonOption> for Options {
    fn extend<T: IntoIterator<Item = ComparisonOption>>(&mut self, iter: T) {
        for option in iter {
            self.insert(option);
        }
    }
}

impl IntoIterator for Options {
    type Item = ComparisonOption;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Options {
    type Item = ComparisonOption;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the options contained in an [`Options`] set.
#[derive(Clone, Debug)]
pub struct Iter {
    options: Options,
    pos: usize,
}

impl Iterator for Iter {
    type Item = ComparisonOption;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&option) = ComparisonOption::ALL.get(self.pos) {
            self.pos += 1;
            if self.options.contains(option) {
                return Some(option);
            }
        }
        None
    }
}

/// The outcome of [`Options::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub fold_case: bool,
    pub metrics: Vec<Metric>,
}

impl Resolved {
    /// Applies the case folding to one input. Both inputs of a comparison
    /// have to go through this before any metric runs.
    pub fn prepare<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.fold_case {
            Cow::Owned(s.to_uppercase())
        } else {
            Cow::Borrowed(s)
        }
    }
}
