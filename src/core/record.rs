//! Record trait for validation subjects.
//!
//! A record is the value a pipeline validates. Records are read-only for
//! the duration of a run; rules only ever see a shared reference.

use std::fmt::Debug;

/// Trait for values that can be validated by a pipeline.
///
/// # Required Traits
///
/// - `Debug`: Records must be debuggable for diagnostics
/// - `Send` + `Sync`: Records may be validated from any thread
///
/// # Example
///
/// ```rust
/// use rulegate::core::Record;
///
/// #[derive(Debug)]
/// struct Applicant {
///     name: String,
///     age: u32,
/// }
///
/// impl Record for Applicant {
///     fn subject(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let applicant = Applicant { name: "Rina".to_string(), age: 19 };
/// assert_eq!(applicant.subject(), "Rina");
/// ```
pub trait Record: Debug + Send + Sync {
    /// Identifier used when describing this record in messages.
    ///
    /// The identifier carries no meaning for rule evaluation.
    fn subject(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Parcel {
        label: String,
    }

    impl Record for Parcel {
        fn subject(&self) -> &str {
            &self.label
        }
    }

    #[test]
    fn subject_returns_identifier() {
        let parcel = Parcel {
            label: "PKG-7".to_string(),
        };
        assert_eq!(parcel.subject(), "PKG-7");
    }

    #[test]
    fn record_is_usable_as_trait_object() {
        let parcel = Parcel {
            label: "PKG-8".to_string(),
        };
        let record: &dyn Record = &parcel;
        assert_eq!(record.subject(), "PKG-8");
    }
}
