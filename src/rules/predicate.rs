//! Rule built from an arbitrary predicate closure.

use crate::core::{Record, Rule, Verdict};
use crate::core::RuleViolation;

/// Predicate checked by a [`PredicateRule`]
pub type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Passes iff the predicate holds; otherwise fails with a fixed message.
pub struct PredicateRule<R: Record> {
    name: String,
    message: String,
    predicate: Predicate<R>,
}

impl<R: Record> PredicateRule<R> {
    /// Create a rule from a pure predicate.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<R: Record> Rule<R> for PredicateRule<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, record: &R) -> Verdict {
        if (self.predicate)(record) {
            Verdict::Pass
        } else {
            Verdict::Fail(RuleViolation::CheckFailed {
                subject: record.subject().to_string(),
                message: self.message.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Word(String);

    impl Record for Word {
        fn subject(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn predicate_controls_verdict() {
        let rule = PredicateRule::new(
            "short",
            |w: &Word| w.0.len() <= 4,
            "word longer than four letters",
        );

        assert!(rule.evaluate(&Word("kopi".to_string())).passed());
        assert_eq!(
            rule.evaluate(&Word("kelapa".to_string())).reason().as_deref(),
            Some("kelapa: word longer than four letters")
        );
    }

    #[test]
    fn predicate_can_combine_fields() {
        let rule = PredicateRule::new(
            "palindrome-ish",
            |w: &Word| w.0.chars().next() == w.0.chars().last(),
            "first and last letters differ",
        );

        assert!(rule.evaluate(&Word("kasak".to_string())).passed());
        assert!(!rule.evaluate(&Word("meja".to_string())).passed());
    }
}
