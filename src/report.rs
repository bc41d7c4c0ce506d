//! Aggregate result of a check run, handed to external reporters.

use std::fmt;

use crate::case::TestCase;

/// Terminal outcome of one full check run.
///
/// Rendering is left to the caller; the `Display` impl gives a plain
/// human-readable summary for convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Every trial passed (or was discarded).
    Success {
        /// Number of trials executed.
        num_tests: usize,
    },
    /// A trial was falsified and the counterexample was shrunk.
    Failure {
        /// Identity of the trial that first falsified the property.
        failing_case: TestCase,
        /// Description of the minimal failure.
        description: String,
        /// Number of successful shrink steps taken.
        num_shrinks: usize,
        /// Representations of the minimal failing inputs.
        counterexample: Vec<String>,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Success { num_tests } => {
                write!(f, "OK, passed {} tests", num_tests)
            }
            TestResult::Failure {
                failing_case,
                description,
                num_shrinks,
                counterexample,
            } => {
                write!(
                    f,
                    "falsified {} after {} shrinks: {}",
                    failing_case, num_shrinks, description
                )?;
                for input in counterexample {
                    write!(f, "\n  counterexample: {}", input)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_display() {
        let result = TestResult::Success { num_tests: 100 };
        assert_eq!(result.to_string(), "OK, passed 100 tests");
        assert!(result.is_success());
        assert!(!result.is_failure());
    }

    #[test]
    fn failure_display_lists_counterexample() {
        let result = TestResult::Failure {
            failing_case: TestCase {
                index: 52,
                seed: 1,
                size: 51,
            },
            description: "value exceeds 50".to_string(),
            num_shrinks: 3,
            counterexample: vec!["51".to_string()],
        };

        let rendered = result.to_string();
        assert!(rendered.contains("case #52"));
        assert!(rendered.contains("after 3 shrinks"));
        assert!(rendered.contains("value exceeds 50"));
        assert!(rendered.contains("counterexample: 51"));
        assert!(result.is_failure());
    }
}
