//! Pipeline runner evaluating an ordered rule list against a record.

use crate::core::{Outcome, Record, Rule, Verdict};
use crate::pipeline::events::Reporter;
use crate::pipeline::state::RunState;

/// Ordered list of rules with first-failure short-circuit.
///
/// The pipeline holds no per-run state: `run` only borrows it, so one
/// pipeline can serve any number of runs, including concurrent ones.
pub struct Pipeline<R: Record> {
    rules: Vec<Box<dyn Rule<R>>>,
    reporter: Reporter,
}

impl<R: Record> Pipeline<R> {
    pub fn new(rules: Vec<Box<dyn Rule<R>>>, reporter: Reporter) -> Self {
        Self { rules, reporter }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Evaluate the rules in order and decide the record's outcome.
    ///
    /// Emits one event per evaluated rule (info on pass, warning on fail)
    /// and one final event (info when accepted, error when rejected).
    /// Rules after the first failure are never evaluated.
    pub fn run(&self, record: &R) -> Outcome {
        let count = self.rules.len();
        tracing::debug!(subject = record.subject(), rules = count, "pipeline run started");

        let mut state = RunState::start(count);
        let outcome = loop {
            match state.into_outcome() {
                Ok(outcome) => break outcome,
                Err(index) => {
                    let rule = &self.rules[index];
                    let verdict = rule.evaluate(record);
                    self.report_verdict(rule.name(), record, &verdict);
                    state = RunState::Evaluating(index).advance(verdict, rule.name(), count);
                }
            }
        };

        match &outcome {
            Outcome::Accepted => self.reporter.info(format!(
                "{} accepted: all {} checks passed",
                record.subject(),
                count
            )),
            Outcome::Rejected(rejection) => self.reporter.error(format!(
                "{} rejected by {}: {}",
                record.subject(),
                rejection.rule,
                rejection.violation
            )),
        }

        outcome
    }

    fn report_verdict(&self, rule: &str, record: &R, verdict: &Verdict) {
        match verdict {
            Verdict::Pass => self
                .reporter
                .info(format!("{} check passed for {}", rule, record.subject())),
            Verdict::Fail(violation) => self
                .reporter
                .warn(format!("{} check failed: {}", rule, violation)),
        }
    }
}
