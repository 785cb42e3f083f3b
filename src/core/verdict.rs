//! Results of evaluating rules and whole pipelines.

use super::violation::RuleViolation;
use serde::Serialize;

/// Result of evaluating a single rule against a record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Verdict {
    /// The record satisfies the rule
    Pass,
    /// The record violates the rule
    Fail(RuleViolation),
}

impl Verdict {
    /// Whether the rule passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Human-readable failure reason, `None` on pass.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Pass => None,
            Self::Fail(violation) => Some(violation.to_string()),
        }
    }
}

/// The rule that stopped a pipeline run, and why.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rejection {
    /// Name of the failing rule
    pub rule: String,
    /// Zero-based position of the failing rule in the pipeline
    pub position: usize,
    /// What the rule found wrong
    pub violation: RuleViolation,
}

/// Terminal result of a pipeline run.
///
/// # Example
///
/// ```rust
/// use rulegate::core::Outcome;
///
/// let outcome = Outcome::Accepted;
/// assert!(outcome.is_accepted());
/// assert_eq!(outcome.reason(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Outcome {
    /// Every rule passed
    Accepted,
    /// The first failing rule, in pipeline order
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Reason text of the rejecting rule, `None` when accepted.
    pub fn reason(&self) -> Option<String> {
        self.rejection().map(|r| r.violation.to_string())
    }
}
