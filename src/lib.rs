//! Rulegate: ordered rule-validation pipelines with injected dependencies
//!
//! Every collaborator is handed in explicitly: rule lists, payment and
//! notification capabilities, and the event sink that receives progress
//! signals. Nothing is wired through global state.
//!
//! # Core Concepts
//!
//! - **Record**: The subject being validated, via the `Record` trait
//! - **Rule**: A stateless check returning a `Verdict`
//! - **Pipeline**: Ordered rules with first-failure short-circuit,
//!   producing an `Outcome`
//! - **EventSink**: Injected destination for info/warning/error events
//!
//! # Example
//!
//! ```rust
//! use rulegate::pipeline::{MemorySink, Severity};
//! use rulegate::registration::{RegistrationService, Student};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let service = RegistrationService::with_standard_rules(sink.clone());
//!
//! let outcome = service.register(&Student::new("Siti", 25, true));
//!
//! assert!(!outcome.is_accepted());
//! assert_eq!(outcome.reason().unwrap(), "Siti: quantity 25 exceeds limit 24");
//! assert_eq!(
//!     sink.severities(),
//!     vec![Severity::Info, Severity::Warning, Severity::Error]
//! );
//! ```

pub mod checkout;
pub mod config;
pub mod core;
pub mod logging;
pub mod pipeline;
pub mod registration;
pub mod rules;

// Re-export commonly used types
pub use self::core::{Outcome, Record, Rejection, Rule, Verdict};
pub use pipeline::{EventSink, Pipeline, PipelineBuilder, Severity};
