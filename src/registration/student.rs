//! Student record validated at registration time.

use crate::core::Record;
use serde::{Deserialize, Serialize};

/// A student applying to register for a term.
///
/// `credits` is unsigned, so a negative load cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Credit units requested for the term
    pub credits: u32,
    pub prerequisites_met: bool,
}

impl Student {
    pub fn new(name: impl Into<String>, credits: u32, prerequisites_met: bool) -> Self {
        Self {
            name: name.into(),
            credits,
            prerequisites_met,
        }
    }
}

impl Record for Student {
    fn subject(&self) -> &str {
        &self.name
    }
}
