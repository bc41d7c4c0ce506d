//! Per-trial identity and outcome types, plus the assertion bridge.

use std::fmt;

/// Identity record for exactly one execution of a property.
///
/// A test case is created fresh for every trial and is immutable once
/// created; `seed` and `size` alone are enough to reproduce the execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based trial index within the run.
    pub index: usize,
    /// Seed for the trial's random engine.
    pub seed: u64,
    /// Target size bound for the trial.
    pub size: u64,
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "case #{} (seed: {}, size: {})",
            self.index, self.seed, self.size
        )
    }
}

/// The outcome of one property execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    /// The property held for this input.
    Success,
    /// The input was rejected by a precondition; not a failure.
    Discard,
    /// The property was falsified, with a human-readable description.
    Failure(String),
}

impl CaseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CaseResult::Success)
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, CaseResult::Discard)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CaseResult::Failure(_))
    }

    /// The failure description, if this is a failure.
    pub fn failure_description(&self) -> Option<&str> {
        match self {
            CaseResult::Failure(description) => Some(description),
            _ => None,
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseResult::Success => write!(f, "success"),
            CaseResult::Discard => write!(f, "discard"),
            CaseResult::Failure(description) => write!(f, "failure: {}", description),
        }
    }
}

/// A failed checked assertion, carrying `"<file>:<line>: <description>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailed {
    description: String,
}

impl AssertionFailed {
    /// The full description, including the source location prefix.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for AssertionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertion failed: {}", self.description)
    }
}

impl std::error::Error for AssertionFailed {}

/// Check a condition inside a property body.
///
/// Returns `Err` when the condition is false, so `?` short-circuits the rest
/// of the body at the first failing assertion; the `Result` converts into a
/// [`CaseResult`] at the property boundary.
///
/// ```
/// use attest::{AssertionFailed, CaseResult, assert_true};
///
/// let result: CaseResult = (|| -> Result<(), AssertionFailed> {
///     assert_true(1 + 1 == 2, "arithmetic works", file!(), line!())?;
///     Ok(())
/// })()
/// .into();
/// assert!(result.is_success());
/// ```
pub fn assert_true(
    condition: bool,
    description: &str,
    file: &str,
    line: u32,
) -> Result<(), AssertionFailed> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailed {
            description: format!("{}:{}: {}", file, line, description),
        })
    }
}

impl From<Result<(), AssertionFailed>> for CaseResult {
    fn from(result: Result<(), AssertionFailed>) -> Self {
        match result {
            Ok(()) => CaseResult::Success,
            Err(failed) => CaseResult::Failure(failed.description),
        }
    }
}
