//! Sequential rule-validation pipelines.
//!
//! A pipeline evaluates an ordered list of rules against one record and
//! stops at the first failure. Progress is reported through an injected
//! [`EventSink`], never through global logger state.
//!
//! # Example
//!
//! ```rust
//! use rulegate::core::Record;
//! use rulegate::pipeline::{MemorySink, PipelineBuilder, Severity};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Student { name: String, credits: u32, prerequisites_met: bool }
//!
//! impl Record for Student {
//!     fn subject(&self) -> &str { &self.name }
//! }
//!
//! let sink = Arc::new(MemorySink::new());
//! let pipeline = PipelineBuilder::<Student>::new()
//!     .source("RegistrationSystem")
//!     .sink(sink.clone())
//!     .max("credit-limit", 24, |s| s.credits)
//!     .require_flag("prerequisites", "prerequisites completed", |s| s.prerequisites_met)
//!     .build();
//!
//! let siti = Student { name: "Siti".into(), credits: 25, prerequisites_met: true };
//! let outcome = pipeline.run(&siti);
//!
//! assert!(!outcome.is_accepted());
//! assert_eq!(sink.severities(), vec![Severity::Warning, Severity::Error]);
//! ```

pub mod builder;
pub mod events;
pub mod runner;
pub mod state;

pub use builder::PipelineBuilder;
pub use events::{Event, EventSink, MemorySink, Reporter, Severity, TracingSink};
pub use runner::Pipeline;
pub use state::RunState;
