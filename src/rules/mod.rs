//! Concrete rule implementations.
//!
//! Every rule here is stateless apart from its construction-time
//! configuration, so a single instance can be shared across threads and
//! reused for any number of runs.
//!
//! # Example
//!
//! ```rust
//! use rulegate::core::{Record, Rule};
//! use rulegate::rules::{AlwaysPass, FlagRule, ThresholdRule};
//!
//! #[derive(Debug)]
//! struct Student { name: String, credits: u32, prerequisites_met: bool }
//!
//! impl Record for Student {
//!     fn subject(&self) -> &str { &self.name }
//! }
//!
//! let rules: Vec<Box<dyn Rule<Student>>> = vec![
//!     Box::new(ThresholdRule::new("credit-limit", 24, |s: &Student| s.credits)),
//!     Box::new(FlagRule::new("prerequisites", "prerequisites completed", |s: &Student| s.prerequisites_met)),
//!     Box::new(AlwaysPass::new("schedule-conflict")),
//! ];
//!
//! let budi = Student { name: "Budi".into(), credits: 20, prerequisites_met: true };
//! assert!(rules.iter().all(|r| r.evaluate(&budi).passed()));
//! ```

pub mod flag;
pub mod placeholder;
pub mod predicate;
pub mod threshold;

pub use flag::FlagRule;
pub use placeholder::AlwaysPass;
pub use predicate::PredicateRule;
pub use threshold::ThresholdRule;
pub use crate::core::RuleViolation;
