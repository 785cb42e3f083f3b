//! Rule that always passes.
//!
//! Stands in for a check whose real logic lives elsewhere, so the check
//! keeps its slot and name in the pipeline.

use crate::core::{Record, Rule, Verdict};

/// Passes for every record.
#[derive(Clone, Debug)]
pub struct AlwaysPass {
    name: String,
}

impl AlwaysPass {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: Record> Rule<R> for AlwaysPass {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, _record: &R) -> Verdict {
        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Anything(String);

    impl Record for Anything {
        fn subject(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn passes_without_reason() {
        let rule = AlwaysPass::new("schedule-conflict");
        let verdict = rule.evaluate(&Anything(String::new()));

        assert!(verdict.passed());
        assert_eq!(verdict.reason(), None);
        assert_eq!(Rule::<Anything>::name(&rule), "schedule-conflict");
    }
}
