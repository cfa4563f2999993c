//! Validation error type

use thiserror::Error;

use crate::rules::PlzRule;

/// The PLZ failed a rule of the rule set.
///
/// Displayed as the message the user sees next to the input. Handled where
/// the form is submitted and never treated as a system error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .rule.message())]
pub struct ValidationFailure {
    rule: PlzRule,
}

impl ValidationFailure {
    pub fn new(rule: PlzRule) -> Self {
        Self { rule }
    }

    /// The rule that failed
    pub fn rule(&self) -> PlzRule {
        self.rule
    }

    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl From<PlzRule> for ValidationFailure {
    fn from(rule: PlzRule) -> Self {
        Self::new(rule)
    }
}
