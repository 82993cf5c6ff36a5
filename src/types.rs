//! Evaluation result types and the derived display mappings.

/// Maximum score a password can reach.
pub const MAX_SCORE: f64 = 4.0;

/// Why a password was rejected before any rule check ran.
///
/// The human-readable feedback line carries the same information; this enum
/// exists so callers can branch on the failure kind without matching on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Password matches an entry of the common-password list.
    CommonPassword,
    /// Input was not a valid string (only reachable via the byte-slice entry
    /// point, see [`crate::evaluate_bytes`]).
    InvalidInput,
}

/// Strength classification derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// Classifies a raw score in `[0, 4]`.
    ///
    /// Thresholds: `>= 3.5` is strong, `>= 2.5` is moderate, anything below
    /// is weak.
    pub fn from_score(score: f64) -> Self {
        if score >= 3.5 {
            StrengthTier::Strong
        } else if score >= 2.5 {
            StrengthTier::Moderate
        } else {
            StrengthTier::Weak
        }
    }
}

/// Progress-bar color derived from the percentage.
///
/// The percentage thresholds (40 / 70) and the tier thresholds on the raw
/// score are independent sets and do not agree exactly at the boundaries.
/// Both are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Red,
    Orange,
    Green,
}

impl BarColor {
    /// Maps a percentage in `[0, 100]` to a color.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < 40 {
            BarColor::Red
        } else if percentage < 70 {
            BarColor::Orange
        } else {
            BarColor::Green
        }
    }

    /// CSS hex code for rendering.
    pub fn hex(&self) -> &'static str {
        match self {
            BarColor::Red => "#F44336",
            BarColor::Orange => "#FF9800",
            BarColor::Green => "#4CAF50",
        }
    }
}

/// Result of a password strength evaluation.
///
/// `score` is in `[0, 4]`: the count of passed rule checks, or its average
/// with the heuristic estimate when an estimator is available. `feedback`
/// lists actionable messages in a fixed order: failed rule checks first
/// (length, case, digit, special), then the estimator warning, then the
/// estimator suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    pub feedback: Vec<String>,
    pub rejection: Option<Rejection>,
}

impl Evaluation {
    /// Builds a rejection result: score 0 and a single feedback line.
    pub(crate) fn rejected(rejection: Rejection, message: &str) -> Self {
        Evaluation {
            score: 0.0,
            feedback: vec![message.to_string()],
            rejection: Some(rejection),
        }
    }

    /// Strength tier for this score.
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score)
    }

    /// Score rendered as a percentage: `min(round(score / 4 * 100), 100)`,
    /// clamped to `[0, 100]`.
    pub fn percentage(&self) -> u8 {
        (self.score / MAX_SCORE * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Progress-bar color for this evaluation.
    pub fn color(&self) -> BarColor {
        BarColor::from_percentage(self.percentage())
    }
}
