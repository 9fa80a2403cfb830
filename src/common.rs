use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Decision policy applied to the average dissimilarity of a comparison.
///
/// `Strong`, `Normal` and `Weak` accept scores *below* their threshold and are
/// nested: whatever `Strong` accepts, `Normal` and `Weak` accept as well.
/// `Manual` is inverted and accepts scores *above* its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Tolerance {
    Strong,
    Normal,
    Weak,
    Manual,
}

impl Tolerance {
    pub const ALL: [Tolerance; 4] = [
        Tolerance::Strong,
        Tolerance::Normal,
        Tolerance::Weak,
        Tolerance::Manual,
    ];

    pub const fn threshold(self) -> f64 {
        match self {
            Tolerance::Strong => 0.25,
            Tolerance::Normal => 0.5,
            Tolerance::Weak => 0.75,
            Tolerance::Manual => 0.6,
        }
    }

    /// Classifies an average dissimilarity score.
    ///
    /// # Example
    /// ```
    /// use fuzzy_equals::Tolerance;
    ///
    /// assert!(Tolerance::Normal.matches(0.2));
    /// assert!(!Tolerance::Strong.matches(0.3));
    /// // manual matches on high dissimilarity
    /// assert!(Tolerance::Manual.matches(0.9));
    /// ```
    pub fn matches(self, average_score: f64) -> bool {
        match self {
            Tolerance::Strong | Tolerance::Normal | Tolerance::Weak => {
                average_score < self.threshold()
            }
            Tolerance::Manual => average_score > self.threshold(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tolerance::Strong => "strong",
            Tolerance::Normal => "normal",
            Tolerance::Weak => "weak",
            Tolerance::Manual => "manual",
        }
    }
}

impl Display for Tolerance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tolerance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tolerance::ALL
            .into_iter()
            .find(|tolerance| tolerance.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownTolerance(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: [f64; 11] = [0.0, 0.1, 0.2, 0.25, 0.3, 0.5, 0.6, 0.7, 0.75, 0.9, 1.0];

    #[test]
    fn thresholds_are_nested() {
        for score in SCORES {
            if Tolerance::Strong.matches(score) {
                assert!(Tolerance::Normal.matches(score), "{score}");
            }
            if Tolerance::Normal.matches(score) {
                assert!(Tolerance::Weak.matches(score), "{score}");
            }
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!Tolerance::Strong.matches(0.25));
        assert!(!Tolerance::Normal.matches(0.5));
        assert!(!Tolerance::Weak.matches(0.75));
        assert!(!Tolerance::Manual.matches(0.6));
    }

    #[test]
    fn manual_is_inverted() {
        assert!(Tolerance::Manual.matches(0.9));
        assert!(!Tolerance::Strong.matches(0.9));
        assert!(!Tolerance::Normal.matches(0.9));
        assert!(!Tolerance::Weak.matches(0.9));

        assert!(!Tolerance::Manual.matches(0.0));
        assert!(Tolerance::Strong.matches(0.0));
    }

    #[test]
    fn parse_tolerance() {
        for tolerance in Tolerance::ALL {
            assert_eq!(Ok(tolerance), tolerance.to_string().parse());
        }
        assert_eq!(Ok(Tolerance::Weak), " WEAK ".parse());
        assert_eq!(
            Err(Error::UnknownTolerance("loose".to_owned())),
            "loose".parse::<Tolerance>()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tolerance() {
        assert_eq!(r#""manual""#, serde_json::to_string(&Tolerance::Manual).unwrap());
        assert_eq!(
            Tolerance::Weak,
            serde_json::from_str::<Tolerance>(r#""weak""#).unwrap()
        );
    }
}
