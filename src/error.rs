use thiserror::Error;

/// Errors reported by the fallible parts of the API.
///
/// Comparisons themselves never fail: a metric that cannot be evaluated for
/// an input pair is left out of the average instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("differing length arguments provided ({len1} vs {len2})")]
    DifferentLength { len1: usize, len2: usize },

    #[error("unknown tolerance `{0}`, expected one of strong, normal, weak, manual")]
    UnknownTolerance(String),

    #[error("unknown comparison option `{0}`")]
    UnknownOption(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
