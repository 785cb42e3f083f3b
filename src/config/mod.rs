//! Construction-time configuration for the registration pipeline.
//!
//! The rule list is the only configuration surface. It is read from JSON
//! and validated with Stillwater's `Validation`, so every problem in a
//! document is reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use rulegate::config::RegistrationConfig;
//!
//! let config = RegistrationConfig::from_json(r#"{
//!     "rules": [
//!         { "kind": "credit_limit", "limit": 24 },
//!         { "kind": "prerequisites" },
//!         { "kind": "schedule_conflict" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(config.rules.len(), 3);
//! assert!(config.validate().is_success());
//! ```

pub mod error;

pub use error::{ConfigError, ConfigIssue};

use crate::core::Rule;
use crate::pipeline::EventSink;
use crate::registration::{
    credit_limit, prerequisites, schedule_conflict, RegistrationService, Student, CREDIT_LIMIT,
    REGISTRATION_SOURCE,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One entry of the ordered rule list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    CreditLimit {
        #[serde(default = "default_limit")]
        limit: u32,
    },
    Prerequisites,
    ScheduleConflict,
}

fn default_limit() -> u32 {
    CREDIT_LIMIT
}

impl RuleConfig {
    fn to_rule(&self) -> Box<dyn Rule<Student>> {
        match self {
            Self::CreditLimit { limit } => Box::new(credit_limit(*limit)),
            Self::Prerequisites => Box::new(prerequisites()),
            Self::ScheduleConflict => Box::new(schedule_conflict()),
        }
    }
}

/// Registration pipeline configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default = "default_source")]
    pub source: String,
    /// Rules in evaluation order; an empty list accepts everyone
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

fn default_source() -> String {
    REGISTRATION_SOURCE.to_string()
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            rules: vec![
                RuleConfig::CreditLimit {
                    limit: CREDIT_LIMIT,
                },
                RuleConfig::Prerequisites,
                RuleConfig::ScheduleConflict,
            ],
        }
    }
}

impl RegistrationConfig {
    /// Parse a configuration from JSON (does not validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the configuration, accumulating ALL issues.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        if self.source.trim().is_empty() {
            checks.push(Validation::fail(ConfigIssue::EmptySource));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and build a registration service reporting to `sink`.
    pub fn into_service(self, sink: Arc<dyn EventSink>) -> Result<RegistrationService, ConfigError> {
        if let Validation::Failure(issues) = self.validate() {
            return Err(ConfigError::Invalid(issues.iter().cloned().collect()));
        }

        let rules = self.rules.iter().map(RuleConfig::to_rule).collect();
        Ok(RegistrationService::with_source(rules, self.source, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::MemorySink;

    #[test]
    fn default_config_matches_standard_rules() {
        let config = RegistrationConfig::default();
        assert!(config.validate().is_success());

        let service = config.into_service(Arc::new(MemorySink::new())).unwrap();
        assert_eq!(
            service.pipeline().rule_names(),
            vec!["credit-limit", "prerequisites", "schedule-conflict"]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = RegistrationConfig::from_json(r#"{"rules":[{"kind":"credit_limit"}]}"#).unwrap();

        assert_eq!(config.source, REGISTRATION_SOURCE);
        assert_eq!(
            config.rules,
            vec![RuleConfig::CreditLimit {
                limit: CREDIT_LIMIT
            }]
        );
    }

    #[test]
    fn empty_rule_list_is_valid_and_accepts() {
        let config = RegistrationConfig::from_json("{}").unwrap();
        assert!(config.validate().is_success());

        let service = config.into_service(Arc::new(MemorySink::new())).unwrap();
        assert!(service.register(&Student::new("Rina", 99, false)).is_accepted());
    }

    #[test]
    fn configured_limit_is_applied() {
        let config =
            RegistrationConfig::from_json(r#"{"rules":[{"kind":"credit_limit","limit":18}]}"#)
                .unwrap();
        let service = config.into_service(Arc::new(MemorySink::new())).unwrap();

        assert!(service.register(&Student::new("a", 18, true)).is_accepted());
        assert!(!service.register(&Student::new("a", 19, true)).is_accepted());
    }

    #[test]
    fn zero_limit_admits_only_empty_loads() {
        let config =
            RegistrationConfig::from_json(r#"{"rules":[{"kind":"credit_limit","limit":0}]}"#)
                .unwrap();
        assert!(config.validate().is_success());

        let service = config.into_service(Arc::new(MemorySink::new())).unwrap();
        assert!(service.register(&Student::new("a", 0, true)).is_accepted());
        assert!(!service.register(&Student::new("a", 1, true)).is_accepted());
    }

    #[test]
    fn repeated_rule_kinds_run_in_order() {
        let config = RegistrationConfig::from_json(
            r#"{"rules":[
                {"kind":"credit_limit","limit":30},
                {"kind":"credit_limit","limit":24}
            ]}"#,
        )
        .unwrap();
        let service = config.into_service(Arc::new(MemorySink::new())).unwrap();

        let outcome = service.register(&Student::new("Siti", 25, true));

        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection.position, 1);
        assert!(rejection
            .violation
            .to_string()
            .contains("quantity 25 exceeds limit 24"));
    }

    #[test]
    fn blank_source_is_reported() {
        let config = RegistrationConfig {
            source: "  ".to_string(),
            rules: vec![RuleConfig::Prerequisites],
        };

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 1);
                assert!(issues.iter().all(|i| matches!(i, ConfigIssue::EmptySource)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn invalid_config_does_not_build() {
        let config = RegistrationConfig {
            source: String::new(),
            rules: Vec::new(),
        };

        let err = config
            .into_service(Arc::new(MemorySink::new()))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid(ref issues) if issues == &vec![ConfigIssue::EmptySource]));
        assert!(err.to_string().contains("Event source must not be empty"));
    }

    #[test]
    fn unknown_rule_kind_is_a_parse_error() {
        let err = RegistrationConfig::from_json(r#"{"rules":[{"kind":"gpa_minimum"}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
