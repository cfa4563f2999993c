// File: src/submit.rs
// Purpose: Submit handling for the PLZ search form

use crate::error::ValidationFailure;
use crate::field::PlzField;
use crate::report::{SubmitEvent, SubmitReporter, TracingReporter};
use crate::rules::{validate_plz, Plz};

/// Where the submission handler is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Only observable from inside `submit`; the work is synchronous
    Submitting,
}

/// Result of one submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The PLZ passed validation. The field has already been cleared;
    /// the value is handed back so the caller can decide what to do with it.
    Accepted(Plz),
    /// The PLZ failed validation. The field has been cleared.
    Rejected(ValidationFailure),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// Message to show next to the input, if any
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Accepted(_) => None,
            SubmitOutcome::Rejected(failure) => Some(failure.message()),
        }
    }

    pub fn into_result(self) -> Result<Plz, ValidationFailure> {
        match self {
            SubmitOutcome::Accepted(plz) => Ok(plz),
            SubmitOutcome::Rejected(failure) => Err(failure),
        }
    }
}

/// Handles submit actions of the search form.
///
/// Whatever was entered, the field is empty once `submit` returns.
#[derive(Debug, Default)]
pub struct SearchSubmission<R = TracingReporter> {
    state: SubmitState,
    reporter: R,
}

impl SearchSubmission<TracingReporter> {
    pub fn new() -> Self {
        Self::with_reporter(TracingReporter)
    }
}

impl<R: SubmitReporter> SearchSubmission<R> {
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            state: SubmitState::Idle,
            reporter,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Submit the form holding `field`
    pub fn submit(&mut self, field: &mut PlzField) -> SubmitOutcome {
        self.state = SubmitState::Submitting;
        self.reporter.report(SubmitEvent::Started);

        // Cleared before anything else happens, whichever way it goes.
        let raw = field.take();
        let outcome = match validate_plz(raw) {
            Ok(plz) => {
                self.reporter.report(SubmitEvent::Accepted);
                SubmitOutcome::Accepted(plz)
            }
            Err(failure) => {
                self.reporter.report(SubmitEvent::Rejected {
                    rule: failure.rule(),
                });
                SubmitOutcome::Rejected(failure)
            }
        };

        self.state = SubmitState::Idle;
        outcome
    }
}
