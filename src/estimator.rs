//! Heuristic strength estimator - optional capability.
//!
//! The estimator is pluggable: any [`StrengthEstimator`] implementation can
//! be injected, and the crate ships one backed by the `zxcvbn` crate behind
//! the `zxcvbn` feature. When no estimator is compiled in, evaluation
//! silently degrades to rule-only scoring.

use secrecy::SecretString;
use std::sync::OnceLock;

#[cfg(feature = "zxcvbn")]
use secrecy::ExposeSecret;

/// Output of a heuristic estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Strength estimate on the same 0-4 scale as the basic score.
    pub score: f64,
    /// Single warning about the worst problem found, if any.
    pub warning: Option<String>,
    /// Ordered improvement suggestions.
    pub suggestions: Vec<String>,
}

/// A pluggable heuristic strength estimator.
///
/// No constraints are placed on the internal algorithm; implementations only
/// have to report a score in `[0, 4]` plus optional warning and suggestions.
pub trait StrengthEstimator: Send + Sync {
    fn estimate(&self, password: &SecretString) -> Estimate;
}

/// Whether a heuristic estimator is available to the evaluator.
pub enum EstimatorCapability {
    Available(Box<dyn StrengthEstimator>),
    Unavailable,
}

impl EstimatorCapability {
    /// Resolves the capability from compiled features.
    pub fn detect() -> Self {
        #[cfg(feature = "zxcvbn")]
        {
            EstimatorCapability::Available(Box::new(ZxcvbnEstimator))
        }
        #[cfg(not(feature = "zxcvbn"))]
        {
            EstimatorCapability::Unavailable
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, EstimatorCapability::Available(_))
    }
}

static CAPABILITY: OnceLock<EstimatorCapability> = OnceLock::new();

/// Process-wide estimator capability, detected once on first use and
/// read-only thereafter.
pub fn capability() -> &'static EstimatorCapability {
    CAPABILITY.get_or_init(|| {
        let detected = EstimatorCapability::detect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Heuristic estimator capability: {}",
            if detected.is_available() { "available" } else { "unavailable" }
        );

        detected
    })
}

/// Estimator backed by the `zxcvbn` crate.
#[cfg(feature = "zxcvbn")]
pub struct ZxcvbnEstimator;

#[cfg(feature = "zxcvbn")]
impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &SecretString) -> Estimate {
        let entropy = zxcvbn::zxcvbn(password.expose_secret(), &[]);

        let score = match entropy.score() {
            zxcvbn::Score::One => 1.0,
            zxcvbn::Score::Two => 2.0,
            zxcvbn::Score::Three => 3.0,
            zxcvbn::Score::Four => 4.0,
            _ => 0.0,
        };

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Estimate {
            score,
            warning,
            suggestions,
        }
    }
}
