//! # Attest - A Property-Based Testing Engine
//!
//! Attest checks properties against randomly generated inputs: it repeatedly
//! generates values, executes the property, and on the first falsifying
//! input walks the value's shrink tree looking for a minimal counterexample.
//! Generation runs under a scoped ambient context (random engine, target
//! size, shrink directive), so every trial is reproducible from its seed and
//! size alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{CaseResult, IntGenerator, check, for_all};
//!
//! // Addition never decreases a non-negative number.
//! let property = for_all(IntGenerator::new(0i64, 1000), |&n| {
//!     if n + 1 > n {
//!         CaseResult::Success
//!     } else {
//!         CaseResult::Failure(format!("{} + 1 is not greater", n))
//!     }
//! });
//!
//! let result = check(&property);
//! assert!(result.is_success());
//! ```
//!
//! A failing check reports the shrunk counterexample:
//!
//! ```rust
//! use attest::{CaseResult, IntGenerator, TestResult, check, for_all};
//!
//! let property = for_all(IntGenerator::new(0i64, 1000), |&n| {
//!     if n < 10 {
//!         CaseResult::Success
//!     } else {
//!         CaseResult::Failure(format!("{} is out of bounds", n))
//!     }
//! });
//!
//! let result = check(&property);
//! if let TestResult::Failure { counterexample, .. } = result {
//!     // The counterexample is a local minimum: it still fails, but none of
//!     // its own shrink candidates do.
//!     let minimal: i64 = counterexample[0].parse().unwrap();
//!     assert!(minimal >= 10);
//! } else {
//!     panic!("property should have been falsified");
//! }
//! ```

pub mod case;
pub mod config;
pub mod context;
pub mod engine;
pub mod generator;
pub mod primitives;
pub mod property;
pub mod report;
pub mod rng;
pub mod shrink;
pub mod tree;

// Re-export the main public API
pub use case::{AssertionFailed, CaseResult, TestCase, assert_true};
pub use config::{CheckConfig, ConfigError};
pub use engine::{CheckEngine, check, check_with_config, with_test_case};
pub use generator::{ConstantGenerator, Generator, Map, constant, shrinkable};
pub use primitives::{BoolGenerator, IntGenerator, SizeGenerator};
pub use property::{ForAll, Property, Trial, for_all};
pub use report::TestResult;
pub use rng::RandomEngine;
pub use shrink::{ShrinkOutcome, minimize};
pub use tree::{ShrinkFn, ShrinkIter, ValueTree};
