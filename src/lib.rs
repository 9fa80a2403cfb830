//! `fuzzy-equals` decides whether two strings are approximately equal by
//! blending several string metrics into a single score.
//!
//! ## How it works
//!
//! - **Select metrics**: the caller picks any combination of Hamming, Jaccard,
//!   Jaro, Jaro-Winkler, Levenshtein, normalized Levenshtein, longest common
//!   subsequence/substring, Sørensen-Dice, overlap coefficient and
//!   Ratcliff-Obershelp via [`ComparisonOption`]s.
//! - **Normalize**: every selected metric is rescaled onto `0.0 - 1.0`, where
//!   `0.0` means identical. Metrics that are not defined for the input (e.g.
//!   Hamming on strings of different length) are skipped.
//! - **Average and classify**: the mean of the produced values is compared
//!   against a [`Tolerance`].
//!
//! Both strings are case folded before comparison unless
//! [`ComparisonOption::CaseSensitive`] is selected.
//!
//! ## Usage
//!
//! ```rust
//! use fuzzy_equals::fuzz;
//! use fuzzy_equals::{ComparisonOption, Options, Tolerance};
//!
//! // one edit out of five characters gives an average score of 0.2
//! let result = fuzz::compare(
//!     "Hello",
//!     "Hallo",
//!     Tolerance::Normal,
//!     [ComparisonOption::UseLevenshteinDistance],
//! );
//! assert!(result.matched);
//! assert!((result.average_score - 0.2).abs() < 1e-9);
//!
//! // if only the decision is of interest
//! let options = Options::new()
//!     .with(ComparisonOption::UseJaroWinklerDistance)
//!     .with(ComparisonOption::UseLongestCommonSubsequence);
//! assert!(fuzz::approximately_equals("Martha", "marhta", Tolerance::Strong, options));
//!
//! // metrics that cannot be applied are skipped. When nothing is left the
//! // comparison never matches and reports a score of 0
//! let result = fuzz::compare(
//!     "Hi",
//!     "Hello",
//!     Tolerance::Normal,
//!     [ComparisonOption::UseHammingDistance],
//! );
//! assert!(!result.matched);
//! assert_eq!(0.0, result.average_score);
//!
//! // options can be parsed, e.g. from a configuration value
//! let options: Options = "levenshtein, jaro_winkler, case_sensitive".parse().unwrap();
//! assert!(options.case_sensitive());
//! ```
//!
//! The raw metrics are available in the [`distance`] module, the
//! normalization in [`normalize`] and matching against a list of choices in
//! [`process`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: every
//! comparison emits a `debug` record with its outcome and each metric a
//! `trace` record with its normalized value.
//!
//! [`distance`]: distance/index.html
//! [`normalize`]: normalize/index.html
//! [`process`]: process/index.html

#![forbid(unsafe_code)]
#![allow(
    // lengths are converted to f64 for the normalized scores
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]

pub(crate) mod details;
pub mod common;
pub mod distance;
pub mod error;
pub mod fuzz;
pub mod normalize;
pub mod options;
pub mod process;

pub use common::Tolerance;
pub use distance::Metric;
pub use error::{Error, Result};
pub use fuzz::{approximately_equals, compare, BatchComparator, ComparisonResult};
pub use normalize::{MetricEvaluator, MetricScore};
pub use options::{ComparisonOption, Options};
