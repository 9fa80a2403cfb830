//! Raw string metrics.
//!
//! Every module computes one metric on two `&str` and returns its raw value,
//! either a distance or a similarity depending on the metric. Rescaling onto
//! the common dissimilarity axis happens in [`normalize`](crate::normalize).

use std::fmt::{self, Display, Formatter};

pub mod hamming;
pub mod jaccard;
pub mod jaro;
pub mod jaro_winkler;
pub mod lcs_seq;
pub mod lcs_str;
pub mod levenshtein;
pub mod overlap;
pub mod ratcliff_obershelp;
pub mod sorensen_dice;

/// The metrics a comparison can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Metric {
    Hamming,
    Jaccard,
    Jaro,
    JaroWinkler,
    Levenshtein,
    NormalizedLevenshtein,
    LongestCommonSubsequence,
    LongestCommonSubstring,
    SorensenDice,
    OverlapCoefficient,
    RatcliffObershelp,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::Hamming,
        Metric::Jaccard,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Levenshtein,
        Metric::NormalizedLevenshtein,
        Metric::LongestCommonSubsequence,
        Metric::LongestCommonSubstring,
        Metric::SorensenDice,
        Metric::OverlapCoefficient,
        Metric::RatcliffObershelp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Metric::Hamming => "hamming",
            Metric::Jaccard => "jaccard",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro_winkler",
            Metric::Levenshtein => "levenshtein",
            Metric::NormalizedLevenshtein => "normalized_levenshtein",
            Metric::LongestCommonSubsequence => "longest_common_subsequence",
            Metric::LongestCommonSubstring => "longest_common_substring",
            Metric::SorensenDice => "sorensen_dice",
            Metric::OverlapCoefficient => "overlap_coefficient",
            Metric::RatcliffObershelp => "ratcliff_obershelp",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
