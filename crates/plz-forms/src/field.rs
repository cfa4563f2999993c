// File: src/field.rs
// Purpose: State of the PLZ input: current value plus derived validity

use crate::rules::{self, PlzCheck};

/// The PLZ input of the search form.
///
/// Validity is derived from the stored value on every query, so it always
/// reflects the latest `set_value`/`reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlzField {
    value: String,
}

impl PlzField {
    /// Create an empty field, as the form is on mount
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `raw`
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }

    /// Replace the stored value (one keystroke or paste)
    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    /// Clear the stored value to the empty string
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Clear the field and hand back what it held
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Verdict of the rule set for the current value
    pub fn validity(&self) -> PlzCheck {
        rules::validate(&self.value)
    }

    pub fn is_valid(&self) -> bool {
        self.validity().is_ok()
    }

    /// Message for the current value, following the rule priority order
    pub fn current_error_message(&self) -> &'static str {
        rules::error_message(&self.value)
    }
}
