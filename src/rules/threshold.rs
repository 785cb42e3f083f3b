//! Upper-limit rule over a numeric quantity of a record.

use crate::core::{Record, Rule, Verdict};
use crate::core::RuleViolation;

/// Accessor extracting the measured quantity from a record
pub type Measure<R> = Box<dyn Fn(&R) -> u32 + Send + Sync>;

/// Passes iff the measured quantity is at most `limit`.
///
/// The limit itself is a valid value; `limit + 1` fails.
///
/// # Example
///
/// ```rust
/// use rulegate::core::{Record, Rule};
/// use rulegate::rules::ThresholdRule;
///
/// #[derive(Debug)]
/// struct Cart { owner: String, items: u32 }
///
/// impl Record for Cart {
///     fn subject(&self) -> &str { &self.owner }
/// }
///
/// let rule = ThresholdRule::new("item-limit", 10, |c: &Cart| c.items);
///
/// assert!(rule.evaluate(&Cart { owner: "a".into(), items: 10 }).passed());
/// assert!(!rule.evaluate(&Cart { owner: "b".into(), items: 11 }).passed());
/// ```
pub struct ThresholdRule<R: Record> {
    name: String,
    limit: u32,
    measure: Measure<R>,
}

impl<R: Record> ThresholdRule<R> {
    pub fn new<F>(name: impl Into<String>, limit: u32, measure: F) -> Self
    where
        F: Fn(&R) -> u32 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            limit,
            measure: Box::new(measure),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl<R: Record> Rule<R> for ThresholdRule<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, record: &R) -> Verdict {
        let quantity = (self.measure)(record);
        if quantity <= self.limit {
            Verdict::Pass
        } else {
            Verdict::Fail(RuleViolation::QuantityExceeded {
                subject: record.subject().to_string(),
                quantity,
                limit: self.limit,
            })
        }
    }
}
