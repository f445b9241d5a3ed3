//! Composition policy checks for passwords.
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{MIN_LENGTH, SPECIAL};

/// Message for a password that satisfies every rule.
const STRONG: &str = "Password is strong.";

/// Composition rule a password must satisfy.
///
/// Variants are declared in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Minimum number of characters.
    Length,
    /// At least one uppercase letter.
    Uppercase,
    /// At least one lowercase letter.
    Lowercase,
    /// At least one digit.
    Digit,
    /// At least one character from [SPECIAL].
    Special,
}

impl Rule {
    /// Message describing the rule violation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Length => "Password must be at least 8 characters long.",
            Self::Uppercase => {
                "Password must contain at least one uppercase letter."
            }
            Self::Lowercase => {
                "Password must contain at least one lowercase letter."
            }
            Self::Digit => "Password must contain at least one digit.",
            Self::Special => {
                "Password must contain at least one special character (!@#$%^&*())."
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Outcome of validating a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Password satisfies every rule.
    Valid,
    /// Password violates the rule.
    Invalid(Rule),
}

impl Validation {
    /// Determine if the password passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Message for the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => STRONG,
            Self::Invalid(rule) => rule.message(),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Check a password against the composition rules.
///
/// Rules are checked in the order declared by [Rule] and
/// the first rule that fails is reported.
///
/// Length is measured in characters rather than bytes. Letter and
/// digit classes use the Unicode general categories `Lu`, `Ll` and
/// `Nd` so `É` counts as uppercase and `٣` as a digit while `½`
/// or `Ⅻ` count as neither.
pub fn validate(password: &str) -> Validation {
    let outcome = check(password);
    if let Validation::Invalid(rule) = &outcome {
        tracing::debug!(rule = ?rule, "validator::invalid");
    }
    outcome
}

fn check(password: &str) -> Validation {
    if password.chars().count() < MIN_LENGTH {
        return Validation::Invalid(Rule::Length);
    }
    if !has_category(password, GeneralCategory::UppercaseLetter) {
        return Validation::Invalid(Rule::Uppercase);
    }
    if !has_category(password, GeneralCategory::LowercaseLetter) {
        return Validation::Invalid(Rule::Lowercase);
    }
    if !has_category(password, GeneralCategory::DecimalNumber) {
        return Validation::Invalid(Rule::Digit);
    }
    if !password.chars().any(|c| SPECIAL.contains(c)) {
        return Validation::Invalid(Rule::Special);
    }
    Validation::Valid
}

fn has_category(password: &str, category: GeneralCategory) -> bool {
    password.chars().any(|c| get_general_category(c) == category)
}
