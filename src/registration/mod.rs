//! Student registration validated by an injected, ordered rule list.
//!
//! The standard registration runs three checks in order:
//!
//! 1. Credit limit: at most [`CREDIT_LIMIT`] credits
//! 2. Prerequisites: prerequisite courses completed
//! 3. Schedule conflict: always passes
//!
//! # Example
//!
//! ```rust
//! use rulegate::pipeline::MemorySink;
//! use rulegate::registration::{RegistrationService, Student};
//! use std::sync::Arc;
//!
//! let service = RegistrationService::with_standard_rules(Arc::new(MemorySink::new()));
//!
//! assert!(service.register(&Student::new("Budi", 20, true)).is_accepted());
//! assert!(!service.register(&Student::new("Siti", 25, true)).is_accepted());
//! ```

pub mod rules;
pub mod service;
pub mod student;

pub use rules::{credit_limit, prerequisites, schedule_conflict, standard_rules, CREDIT_LIMIT};
pub use service::{RegistrationService, REGISTRATION_SOURCE};
pub use student::Student;
