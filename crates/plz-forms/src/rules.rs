//! PLZ validation rules
//!
//! The rule set is fixed and ordered: required, minimum length, maximum
//! length. The first failing rule decides the verdict and the message shown
//! next to the input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationFailure;

/// Shortest accepted PLZ, in characters.
///
/// Equal to the threshold already enforced by the required rule, so the
/// minimum-length rule can never fire on its own.
pub const PLZ_MIN_LENGTH: usize = 1;

/// Longest accepted PLZ, in characters.
pub const PLZ_MAX_LENGTH: usize = 23;

pub const REQUIRED_MESSAGE: &str = "Input required that is a number between 1 and 23.";
pub const TOO_SHORT_MESSAGE: &str = "The PLZ number is not allowed to be shorter than 1.";
pub const TOO_LONG_MESSAGE: &str =
    "The PLZ number is not allowed to be longer (including) than 23.";
pub const FALLBACK_MESSAGE: &str = "Some other issue.";

/// A single rule of the PLZ rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlzRule {
    Required,
    TooShort,
    TooLong,
    /// Anything the rule set does not name. Only reachable through
    /// message lookup on a value that passed every rule.
    Unknown,
}

impl PlzRule {
    /// User-facing message for this rule
    pub fn message(self) -> &'static str {
        match self {
            PlzRule::Required => REQUIRED_MESSAGE,
            PlzRule::TooShort => TOO_SHORT_MESSAGE,
            PlzRule::TooLong => TOO_LONG_MESSAGE,
            PlzRule::Unknown => FALLBACK_MESSAGE,
        }
    }

    /// Stable key, used in logs and in the data-rule attribute of the form
    pub fn key(self) -> &'static str {
        match self {
            PlzRule::Required => "required",
            PlzRule::TooShort => "min_length",
            PlzRule::TooLong => "max_length",
            PlzRule::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlzRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Verdict of running the rule set against a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlzCheck {
    Ok,
    Required,
    TooShort,
    TooLong,
}

impl PlzCheck {
    pub fn is_ok(self) -> bool {
        matches!(self, PlzCheck::Ok)
    }

    /// The rule that failed, if any
    pub fn failed_rule(self) -> Option<PlzRule> {
        match self {
            PlzCheck::Ok => None,
            PlzCheck::Required => Some(PlzRule::Required),
            PlzCheck::TooShort => Some(PlzRule::TooShort),
            PlzCheck::TooLong => Some(PlzRule::TooLong),
        }
    }

    /// Message for this verdict. A passing value falls through to the
    /// fallback message, same as asking a valid input for its error.
    pub fn message(self) -> &'static str {
        self.failed_rule().unwrap_or(PlzRule::Unknown).message()
    }
}

fn validate_required(raw: &str) -> Result<(), PlzCheck> {
    if raw.is_empty() {
        Err(PlzCheck::Required)
    } else {
        Ok(())
    }
}

fn validate_min_length(raw: &str, min: usize) -> Result<(), PlzCheck> {
    if raw.chars().count() >= min {
        Ok(())
    } else {
        Err(PlzCheck::TooShort)
    }
}

fn validate_max_length(raw: &str, max: usize) -> Result<(), PlzCheck> {
    if raw.chars().count() <= max {
        Ok(())
    } else {
        Err(PlzCheck::TooLong)
    }
}

/// Run the rule set against `raw`. First failing rule wins.
pub fn validate(raw: &str) -> PlzCheck {
    validate_required(raw)
        .and_then(|()| validate_min_length(raw, PLZ_MIN_LENGTH))
        .and_then(|()| validate_max_length(raw, PLZ_MAX_LENGTH))
        .err()
        .unwrap_or(PlzCheck::Ok)
}

/// Message shown for `raw` under the rule set's priority order
pub fn error_message(raw: &str) -> &'static str {
    validate(raw).message()
}

/// A postal code that passed every rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plz(String);

impl Plz {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validate `raw` and wrap it as a [`Plz`]
pub fn validate_plz(raw: impl Into<String>) -> Result<Plz, ValidationFailure> {
    let raw = raw.into();
    match validate(&raw).failed_rule() {
        None => Ok(Plz(raw)),
        Some(rule) => Err(ValidationFailure::new(rule)),
    }
}

impl TryFrom<String> for Plz {
    type Error = ValidationFailure;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_plz(value)
    }
}

impl From<Plz> for String {
    fn from(plz: Plz) -> Self {
        plz.0
    }
}

impl AsRef<str> for Plz {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1")]
    #[case("12345")]
    #[case("80331 München")]
    #[case("12345678901234567890123")]
    fn test_accepts_lengths_in_range(#[case] raw: &str) {
        assert_eq!(validate(raw), PlzCheck::Ok);
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(validate(""), PlzCheck::Required);
        assert_eq!(error_message(""), REQUIRED_MESSAGE);
    }

    #[test]
    fn test_too_long() {
        let raw = "1".repeat(24);
        assert_eq!(validate(&raw), PlzCheck::TooLong);
        assert_eq!(error_message(&raw), TOO_LONG_MESSAGE);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 23 two-byte characters
        let raw = "ü".repeat(23);
        assert_eq!(raw.len(), 46);
        assert_eq!(validate(&raw), PlzCheck::Ok);
    }

    #[test]
    fn test_min_length_rule_is_shadowed_by_required() {
        // Every value short enough to break the minimum is also empty.
        assert_eq!(validate_min_length("", PLZ_MIN_LENGTH), Err(PlzCheck::TooShort));
        assert_eq!(validate(""), PlzCheck::Required);
    }

    #[test]
    fn test_message_mapping() {
        assert_eq!(PlzRule::Required.message(), REQUIRED_MESSAGE);
        assert_eq!(PlzRule::TooShort.message(), TOO_SHORT_MESSAGE);
        assert_eq!(PlzRule::TooLong.message(), TOO_LONG_MESSAGE);
        assert_eq!(PlzRule::Unknown.message(), FALLBACK_MESSAGE);
        assert_eq!(error_message("12345"), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_validate_plz() {
        let plz = validate_plz("10115").unwrap();
        assert_eq!(plz.as_str(), "10115");

        let err = validate_plz("").unwrap_err();
        assert_eq!(err.rule(), PlzRule::Required);
    }

    #[test]
    fn test_plz_deserialize_runs_rules() {
        let plz: Plz = serde_json::from_str("\"10115\"").unwrap();
        assert_eq!(plz.as_str(), "10115");
        assert!(serde_json::from_str::<Plz>("\"\"").is_err());
    }
}
