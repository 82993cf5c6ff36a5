//! Password strength meter library
//!
//! This library scores passwords against deterministic rule checks,
//! optionally combines the result with a heuristic estimator, and offers a
//! random strong-password generator.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `zxcvbn` (default): Ships a heuristic estimator backed by the zxcvbn
//!   crate; without it scoring degrades to rule-only
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_COMMON_PATH`: Custom path to a common-password list file
//!   (default: `./assets/common-passwords.txt`); without initialization a
//!   built-in default set is used
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate, generate};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate(&password);
//!
//! println!("Score: {}", evaluation.score);
//! println!("Tier: {:?}", evaluation.tier());
//! for tip in &evaluation.feedback {
//!     println!("- {}", tip);
//! }
//!
//! // Generate a strong password
//! let suggested = generate(12);
//! println!("Suggested: {}", suggested);
//! ```

// Internal modules
mod checks;
mod common;
mod estimator;
mod evaluator;
mod generator;
mod types;

// Public API
pub use common::{
    get_common_list, init_common_list, init_common_list_from_path, is_common, CommonListError,
};
pub use estimator::{capability, Estimate, EstimatorCapability, StrengthEstimator};
pub use evaluator::{evaluate, evaluate_bytes, evaluate_with};
pub use generator::{
    generate, CHAR_POOL, DEFAULT_LENGTH, DOWNLOAD_FILE_NAME, MAX_LENGTH, MIN_LENGTH,
};
pub use types::{BarColor, Evaluation, Rejection, StrengthTier, MAX_SCORE};

#[cfg(feature = "zxcvbn")]
pub use estimator::ZxcvbnEstimator;

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
