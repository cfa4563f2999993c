//! PLZ search form
//!
//! The logic behind the restaurant search form: a fixed validation rule
//! set for the postal code ("PLZ") input, the state of that input, and the
//! handler that runs when the form is submitted.
//!
//! ```
//! use plz_forms::{PlzField, SearchSubmission};
//!
//! let mut field = PlzField::new();
//! field.set_value("10115");
//! assert!(field.is_valid());
//!
//! let outcome = SearchSubmission::new().submit(&mut field);
//! assert!(outcome.is_accepted());
//! assert_eq!(field.value(), "");
//! ```

pub mod error;
pub mod field;
pub mod report;
pub mod rules;
pub mod submit;

pub use error::ValidationFailure;
pub use field::PlzField;
pub use report::{RecordingReporter, SubmitEvent, SubmitReporter, TracingReporter};
pub use rules::{
    error_message, validate, validate_plz, Plz, PlzCheck, PlzRule, PLZ_MAX_LENGTH, PLZ_MIN_LENGTH,
};
pub use submit::{SearchSubmission, SubmitOutcome, SubmitState};
