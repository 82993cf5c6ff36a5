//! Rule checks
//!
//! Each check verifies one deterministic criterion and contributes one point
//! to the basic score when it passes.

mod case;
mod digit;
mod length;
mod special;

pub use case::case_check;
pub use digit::digit_check;
pub use length::length_check;
pub use special::special_check;

use secrecy::SecretString;

/// Result of a single rule check.
/// - `Some(feedback)` - Check failed, with actionable feedback
/// - `None` - Check passed
pub type CheckResult = Option<&'static str>;

/// All rule checks in their fixed reporting order.
pub const CHECKS: [(&str, fn(&SecretString) -> CheckResult); 4] = [
    ("length", length_check),
    ("case", case_check),
    ("digit", digit_check),
    ("special", special_check),
];
