//! Property definitions: the seam between user test bodies and the engine.

use std::fmt;
use std::rc::Rc;

use crate::case::CaseResult;
use crate::generator::Generator;
use crate::tree::ValueTree;

/// One evaluated execution of a property: the inputs it saw (as display
/// strings, for counterexample reporting) and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    /// Representations of the generated inputs for this execution.
    pub example: Vec<String>,
    /// Outcome of the execution.
    pub result: CaseResult,
}

/// A checkable property.
///
/// Evaluating a property executes it once under the current execution
/// context and returns the trial embedded in a value tree: the root carries
/// this execution's outcome, and each shrink-candidate child re-executes the
/// property against a smaller input. The engine walks that tree during the
/// shrink search.
pub trait Property {
    fn evaluate(&self) -> ValueTree<Trial>;
}

/// Zero-argument callables are properties.
///
/// The body may draw from the ambient random engine, but with no generator
/// attached there is nothing to shrink, so the trial is a leaf.
impl<F> Property for F
where
    F: Fn() -> CaseResult,
{
    fn evaluate(&self) -> ValueTree<Trial> {
        ValueTree::leaf(Trial {
            example: Vec::new(),
            result: self(),
        })
    }
}

/// A property quantified over a generator's values.
pub struct ForAll<G, F> {
    generator: G,
    body: F,
}

/// Quantify `body` over the values of `generator`.
///
/// The body runs against the generated root value; during the shrink search
/// it is re-run against each shrink candidate in turn.
pub fn for_all<G, F>(generator: G, body: F) -> ForAll<G, F>
where
    G: Generator,
    G::Value: fmt::Debug + 'static,
    F: Fn(&G::Value) -> CaseResult + Clone + 'static,
{
    ForAll { generator, body }
}

impl<G, F> Property for ForAll<G, F>
where
    G: Generator,
    G::Value: fmt::Debug + 'static,
    F: Fn(&G::Value) -> CaseResult + Clone + 'static,
{
    fn evaluate(&self) -> ValueTree<Trial> {
        let body = self.body.clone();
        self.generator.generate().map(Rc::new(move |input| Trial {
            example: vec![format!("{:?}", input)],
            result: body(input),
        }))
    }
}
