//! Rule requiring a boolean attribute of a record to be set.

use crate::core::{Record, Rule, Verdict};
use crate::core::RuleViolation;

/// Accessor extracting a boolean flag from a record
pub type Flag<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Passes iff the flag read from the record is `true`.
pub struct FlagRule<R: Record> {
    name: String,
    precondition: String,
    flag: Flag<R>,
}

impl<R: Record> FlagRule<R> {
    /// Create a flag rule.
    ///
    /// `precondition` describes what the flag stands for and is quoted in
    /// the violation when the flag is unset.
    pub fn new<F>(name: impl Into<String>, precondition: impl Into<String>, flag: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            precondition: precondition.into(),
            flag: Box::new(flag),
        }
    }

    pub fn precondition(&self) -> &str {
        &self.precondition
    }
}

impl<R: Record> Rule<R> for FlagRule<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, record: &R) -> Verdict {
        if (self.flag)(record) {
            Verdict::Pass
        } else {
            Verdict::Fail(RuleViolation::PreconditionUnmet {
                subject: record.subject().to_string(),
                precondition: self.precondition.clone(),
            })
        }
    }
}
