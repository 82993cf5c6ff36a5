//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::CHECKS;
use crate::common::is_common;
use crate::estimator::{capability, EstimatorCapability};
use crate::types::{Evaluation, Rejection};

const COMMON_PASSWORD_FEEDBACK: &str =
    "This password is too common. Please choose a different one.";
const INVALID_INPUT_FEEDBACK: &str = "Invalid input: password must be a string.";

/// Evaluates password strength using the process-wide estimator capability.
///
/// # Returns
/// An [`Evaluation`] containing the combined score and feedback.
pub fn evaluate(password: &SecretString) -> Evaluation {
    evaluate_with(password, capability())
}

/// Evaluates password strength with an explicit estimator capability.
///
/// A common password short-circuits to score 0 before any check or estimator
/// runs. Otherwise all four rule checks run, each passed check contributing
/// one point; with an available estimator the final score is the unweighted
/// average of the basic score and the heuristic estimate.
pub fn evaluate_with(password: &SecretString, capability: &EstimatorCapability) -> Evaluation {
    if is_common(password.expose_secret()) {
        return Evaluation::rejected(Rejection::CommonPassword, COMMON_PASSWORD_FEEDBACK);
    }

    let mut feedback = Vec::new();
    let mut basic_score: u8 = 0;

    // All checks always run; failures are reported in the fixed table order
    for (_name, check_fn) in CHECKS {
        match check_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Rule check failed: {}", _name);
                feedback.push(reason.to_string());
            }
            None => basic_score += 1,
        }
    }

    let mut score = basic_score as f64;

    if let EstimatorCapability::Available(estimator) = capability {
        let estimate = estimator.estimate(password);
        score = (basic_score as f64 + estimate.score) / 2.0;

        if let Some(warning) = estimate.warning {
            if !warning.is_empty() {
                feedback.push(warning);
            }
        }
        feedback.extend(estimate.suggestions);
    }

    Evaluation {
        score,
        feedback,
        rejection: None,
    }
}

/// Evaluates raw bytes that may or may not be a valid string.
///
/// Boundary adapter for untyped input: bytes that are not valid UTF-8 yield
/// score 0 with an explanatory feedback line instead of an error.
pub fn evaluate_bytes(raw: &[u8]) -> Evaluation {
    match std::str::from_utf8(raw) {
        Ok(pwd) => evaluate(&SecretString::new(pwd.to_string().into())),
        Err(_) => Evaluation::rejected(Rejection::InvalidInput, INVALID_INPUT_FEEDBACK),
    }
}

/// Async version that sends the evaluation result via channel.
///
/// A token cancelled before evaluation starts suppresses the send.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
