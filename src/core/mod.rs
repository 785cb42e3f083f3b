//! Core validation types.
//!
//! This module contains the pure building blocks of a pipeline:
//! - Validation subjects via the `Record` trait
//! - The `Rule` capability evaluated against records
//! - `Verdict` and `Outcome` values describing results
//! - `RuleViolation` describing why a rule failed
//!
//! Nothing in this module performs I/O or emits events.

mod record;
mod rule;
mod verdict;
mod violation;

pub use record::Record;
pub use rule::Rule;
pub use verdict::{Outcome, Rejection, Verdict};
pub use violation::RuleViolation;
