//! The rule capability evaluated by pipelines.
//!
//! Rules are stateless predicates over a record. They receive the record by
//! shared reference, so evaluation can never mutate it.

use super::record::Record;
use super::verdict::Verdict;

/// A single check run by a pipeline.
///
/// Implementations must be total over well-formed records: every input
/// yields a [`Verdict`], never a panic.
///
/// # Example
///
/// ```rust
/// use rulegate::core::{Record, Rule, Verdict};
/// use rulegate::rules::RuleViolation;
///
/// #[derive(Debug)]
/// struct Ticket {
///     holder: String,
///     seats: u32,
/// }
///
/// impl Record for Ticket {
///     fn subject(&self) -> &str {
///         &self.holder
///     }
/// }
///
/// struct SingleSeat;
///
/// impl Rule<Ticket> for SingleSeat {
///     fn name(&self) -> &str {
///         "single-seat"
///     }
///
///     fn evaluate(&self, ticket: &Ticket) -> Verdict {
///         if ticket.seats <= 1 {
///             Verdict::Pass
///         } else {
///             Verdict::Fail(RuleViolation::CheckFailed {
///                 subject: ticket.holder.clone(),
///                 message: "only one seat per ticket".to_string(),
///             })
///         }
///     }
/// }
///
/// let ticket = Ticket { holder: "Dewi".to_string(), seats: 1 };
/// assert!(SingleSeat.evaluate(&ticket).passed());
/// ```
pub trait Rule<R: Record>: Send + Sync {
    /// Short name used in events and rejections.
    fn name(&self) -> &str;

    /// Evaluate the rule against a record.
    fn evaluate(&self, record: &R) -> Verdict;
}

impl<R: Record, T: Rule<R> + ?Sized> Rule<R> for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, record: &R) -> Verdict {
        (**self).evaluate(record)
    }
}
