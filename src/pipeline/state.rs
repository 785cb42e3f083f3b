//! The two-state decision process driving a pipeline run.

use crate::core::{Outcome, Rejection, Verdict};

/// Position of a run in its rule list.
///
/// A run starts in `Evaluating(0)` and ends in exactly one of the two
/// terminal states. Terminal states never change.
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    /// About to evaluate the rule at this index
    Evaluating(usize),
    /// Every rule passed
    Accepted,
    /// A rule failed; no later rule is evaluated
    Rejected(Rejection),
}

impl RunState {
    /// Initial state for a pipeline with `count` rules.
    ///
    /// An empty pipeline is accepted without evaluating anything.
    pub fn start(count: usize) -> Self {
        if count == 0 {
            Self::Accepted
        } else {
            Self::Evaluating(0)
        }
    }

    /// Next state after the current rule produced `verdict` (pure).
    pub fn advance(self, verdict: Verdict, rule: &str, count: usize) -> Self {
        match self {
            Self::Evaluating(index) => match verdict {
                Verdict::Pass if index + 1 < count => Self::Evaluating(index + 1),
                Verdict::Pass => Self::Accepted,
                Verdict::Fail(violation) => Self::Rejected(Rejection {
                    rule: rule.to_string(),
                    position: index,
                    violation,
                }),
            },
            terminal => terminal,
        }
    }

    /// The outcome once terminal, or the index of the next rule to evaluate.
    pub fn into_outcome(self) -> Result<Outcome, usize> {
        match self {
            Self::Evaluating(index) => Err(index),
            Self::Accepted => Ok(Outcome::Accepted),
            Self::Rejected(rejection) => Ok(Outcome::Rejected(rejection)),
        }
    }
}
