//! Greedy search for a minimal failing input over a trial's value tree.

use crate::context::NO_SHRINK;
use crate::property::Trial;
use crate::tree::ValueTree;

/// Result of the shrink search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkOutcome {
    /// The locally minimal failing trial.
    pub minimal: Trial,
    /// Number of successful shrink steps taken to reach it.
    pub num_shrinks: usize,
}

/// Walk a failing trial's value tree towards a local minimum.
///
/// Greedy depth-first descent with restart: scan the current node's shrink
/// candidates in order, adopt the first one that still fails, and restart
/// the scan from the adopted candidate's own children. A node none of whose
/// candidates reproduce the failure is locally minimal. Earlier candidates
/// win; once a shrink succeeds the remaining siblings are never revisited,
/// so the result is a local minimum under the generator's shrink ordering,
/// not a global one.
///
/// Candidate executions run with the no-shrink directive bound, so nested
/// generation inside the property cannot start recursive shrink attempts.
pub fn minimize(tree: ValueTree<Trial>) -> ShrinkOutcome {
    let _no_shrink = NO_SHRINK.bind(true);

    let mut current = tree;
    let mut num_shrinks = 0usize;

    'descend: loop {
        for candidate in current.shrinks() {
            if candidate.value().result.is_failure() {
                current = candidate;
                num_shrinks += 1;
                continue 'descend;
            }
        }
        // No candidate reproduces the failure: locally minimal.
        break;
    }

    ShrinkOutcome {
        minimal: current.into_value(),
        num_shrinks,
    }
}
