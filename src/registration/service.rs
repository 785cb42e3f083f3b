//! Registration coordinator.

use crate::core::{Outcome, Rule};
use crate::pipeline::{EventSink, Pipeline, Reporter};
use crate::registration::rules::{standard_rules, CREDIT_LIMIT};
use crate::registration::student::Student;
use std::sync::Arc;

/// Source named in registration events
pub const REGISTRATION_SOURCE: &str = "RegistrationSystem";

/// Registers students by running them through an injected rule list.
pub struct RegistrationService {
    pipeline: Pipeline<Student>,
}

impl RegistrationService {
    /// Create a service with the given rules, evaluated in order.
    pub fn new(rules: Vec<Box<dyn Rule<Student>>>, sink: Arc<dyn EventSink>) -> Self {
        Self::with_source(rules, REGISTRATION_SOURCE, sink)
    }

    pub fn with_source(
        rules: Vec<Box<dyn Rule<Student>>>,
        source: impl Into<String>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            pipeline: Pipeline::new(rules, Reporter::new(source, sink)),
        }
    }

    /// Create a service with [`standard_rules`] at [`CREDIT_LIMIT`].
    pub fn with_standard_rules(sink: Arc<dyn EventSink>) -> Self {
        Self::new(standard_rules(CREDIT_LIMIT), sink)
    }

    pub fn pipeline(&self) -> &Pipeline<Student> {
        &self.pipeline
    }

    /// Validate a student; the first failing rule rejects the registration.
    ///
    /// Reports an info event for the start of the registration, then the
    /// pipeline's per-rule and decision events.
    pub fn register(&self, student: &Student) -> Outcome {
        self.pipeline.reporter().info(format!(
            "Starting registration for {} ({} credits)",
            student.name, student.credits
        ));
        self.pipeline.run(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MemorySink, Severity};
    use crate::registration::rules::{PREREQUISITES_RULE, SCHEDULE_CONFLICT_RULE};

    fn service() -> (RegistrationService, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (RegistrationService::with_standard_rules(sink.clone()), sink)
    }

    #[test]
    fn eligible_student_is_accepted() {
        let (service, sink) = service();

        assert!(service.register(&Student::new("Budi", 20, true)).is_accepted());
        // start, three checks, decision
        assert_eq!(sink.severities(), vec![Severity::Info; 5]);
        assert!(sink.events()[0].message.contains("Starting registration for Budi"));
        assert!(sink
            .events()
            .iter()
            .all(|e| e.source == REGISTRATION_SOURCE));
    }

    #[test]
    fn overloaded_student_is_rejected_at_credit_limit() {
        let (service, sink) = service();

        let outcome = service.register(&Student::new("Siti", 25, true));

        assert!(outcome
            .reason()
            .is_some_and(|r| r.contains("quantity 25 exceeds limit 24")));
        assert_eq!(
            sink.severities(),
            vec![Severity::Info, Severity::Warning, Severity::Error]
        );
    }

    #[test]
    fn missing_prerequisites_reject_after_credit_check() {
        let (service, sink) = service();

        let outcome = service.register(&Student::new("Andi", 20, false));

        assert_eq!(
            outcome.rejection().map(|r| r.rule.as_str()),
            Some(PREREQUISITES_RULE)
        );
        assert_eq!(
            sink.severities(),
            vec![
                Severity::Info,
                Severity::Info,
                Severity::Warning,
                Severity::Error
            ]
        );
    }

    #[test]
    fn custom_rule_list_is_respected() {
        let sink = Arc::new(MemorySink::new());
        let service = RegistrationService::new(
            vec![Box::new(crate::registration::rules::schedule_conflict())],
            sink,
        );

        assert_eq!(service.pipeline().rule_names(), vec![SCHEDULE_CONFLICT_RULE]);
        assert!(service.register(&Student::new("Dewi", 40, false)).is_accepted());
    }
}
