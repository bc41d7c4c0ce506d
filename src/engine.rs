//! The main check loop: trial scheduling, execution scoping, shrink entry.

use std::cmp;

use crate::case::{CaseResult, TestCase};
use crate::config::CheckConfig;
use crate::context::{NO_SHRINK, RANDOM_ENGINE, SIZE};
use crate::property::Property;
use crate::report::TestResult;
use crate::rng::RandomEngine;
use crate::shrink;

/// Run `f` under a fresh execution scope for the given test case.
///
/// Binds a random engine seeded with the case's seed, the case's size, and
/// the shrink-enable flag, and restores all three when `f` returns or
/// unwinds. Running the same closure twice for the same case reproduces the
/// same draws.
pub fn with_test_case<R>(case: &TestCase, f: impl FnOnce() -> R) -> R {
    let mut engine = RandomEngine::new();
    engine.seed(case.seed);

    let _engine = RANDOM_ENGINE.bind(engine);
    let _size = SIZE.bind(case.size);
    let _no_shrink = NO_SHRINK.bind(false);
    f()
}

/// Drives the main loop: draws test cases, executes the property under each,
/// and on the first failure hands the trial over to the shrink search.
#[derive(Debug, Clone, Default)]
pub struct CheckEngine {
    config: CheckConfig,
}

impl CheckEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check a property.
    ///
    /// Trials run with size starting at 0 and growing by one per trial up to
    /// `max_size`. Per-trial seeds come from a top-level seed engine, never
    /// from the trial's own engine, so cases are independent while each
    /// case's internal draws stay deterministic.
    ///
    /// A `Discard` consumes a trial slot and advances size exactly like a
    /// `Success`; there is no separate discard budget.
    pub fn run<P: Property>(&self, property: &P) -> TestResult {
        let mut seed_engine = RandomEngine::new();
        let mut size: u64 = 0;

        for index in 1..=self.config.max_success {
            let case = TestCase {
                index,
                seed: seed_engine.next_atom(),
                size,
            };

            let result = with_test_case(&case, || property.evaluate().value().result.clone());

            if let CaseResult::Failure(_) = result {
                return self.shrink_failing_case(property, &case);
            }

            size = cmp::min(self.config.max_size, size + 1);
        }

        TestResult::Success {
            num_tests: self.config.max_success,
        }
    }

    /// Regenerate the failing case under its own seed and size and search its
    /// value tree for a minimal counterexample.
    fn shrink_failing_case<P: Property>(&self, property: &P, case: &TestCase) -> TestResult {
        with_test_case(case, || {
            let tree = property.evaluate();
            let outcome = shrink::minimize(tree);

            let description = outcome
                .minimal
                .result
                .failure_description()
                .unwrap_or_default()
                .to_string();

            TestResult::Failure {
                failing_case: case.clone(),
                description,
                num_shrinks: outcome.num_shrinks,
                counterexample: outcome.minimal.example,
            }
        })
    }
}

/// Check a property with the default configuration.
pub fn check<P: Property>(property: &P) -> TestResult {
    CheckEngine::new().run(property)
}

/// Check a property with a custom configuration.
pub fn check_with_config<P: Property>(property: &P, config: CheckConfig) -> TestResult {
    CheckEngine::with_config(config).run(property)
}
