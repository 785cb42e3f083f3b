//! Violations reported by failing rules.

use serde::Serialize;
use thiserror::Error;

/// Why a record failed a rule
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
pub enum RuleViolation {
    #[error("{subject}: quantity {quantity} exceeds limit {limit}")]
    QuantityExceeded {
        subject: String,
        quantity: u32,
        limit: u32,
    },

    #[error("{subject}: precondition not met ({precondition})")]
    PreconditionUnmet {
        subject: String,
        precondition: String,
    },

    #[error("{subject}: {message}")]
    CheckFailed { subject: String, message: String },
}

impl RuleViolation {
    /// Identifier of the record that failed.
    pub fn subject(&self) -> &str {
        match self {
            Self::QuantityExceeded { subject, .. }
            | Self::PreconditionUnmet { subject, .. }
            | Self::CheckFailed { subject, .. } => subject,
        }
    }
}
