//! Registration rule set.

use crate::core::Rule;
use crate::registration::student::Student;
use crate::rules::{AlwaysPass, FlagRule, ThresholdRule};

/// Maximum credit units a student may take in one term
pub const CREDIT_LIMIT: u32 = 24;

pub const CREDIT_LIMIT_RULE: &str = "credit-limit";
pub const PREREQUISITES_RULE: &str = "prerequisites";
pub const SCHEDULE_CONFLICT_RULE: &str = "schedule-conflict";

/// Rejects students taking more than `limit` credits.
pub fn credit_limit(limit: u32) -> ThresholdRule<Student> {
    ThresholdRule::new(CREDIT_LIMIT_RULE, limit, |s: &Student| s.credits)
}

/// Rejects students who have not completed prerequisite courses.
pub fn prerequisites() -> FlagRule<Student> {
    FlagRule::new(
        PREREQUISITES_RULE,
        "prerequisite courses completed",
        |s: &Student| s.prerequisites_met,
    )
}

/// Schedule conflict check.
///
/// No timetable is available to the registrar, so this always passes.
pub fn schedule_conflict() -> AlwaysPass {
    AlwaysPass::new(SCHEDULE_CONFLICT_RULE)
}

/// Credit limit, prerequisites, then schedule conflict.
pub fn standard_rules(limit: u32) -> Vec<Box<dyn Rule<Student>>> {
    vec![
        Box::new(credit_limit(limit)),
        Box::new(prerequisites()),
        Box::new(schedule_conflict()),
    ]
}
