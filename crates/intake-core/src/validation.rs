//! # Validation Module
//!
//! Typed validators for user input.
//!
//! ## Two Reporting Styles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Predicates              is_price_in_range, is_valid_username → bool    │
//! │  Single-rule checks      can_drive → Result<bool, ValidationError>      │
//! │  Accumulating checks     validate_user_input → ValidationReport         │
//! │                                                                         │
//! │  None of them panic. Bad input is a value the caller inspects.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input that arrives untyped (JSON, form payloads) goes through
//! [`crate::boundary`] first; the functions here assume the shape is right.
//!
//! ## Usage
//! ```rust
//! use intake_core::validation::{can_drive, validate_user_input};
//!
//! assert!(validate_user_input("abc", 18).is_success());
//! assert_eq!(can_drive(16, "US"), Ok(true));
//! assert!(can_drive(18, "ES").is_err());
//! ```

use std::fmt;
use tracing::{debug, warn};

use crate::config::RulesConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::types::CountryCode;

// =============================================================================
// Validation Report
// =============================================================================

/// Outcome of a validator that checks several fields at once.
///
/// Every rule runs; the report keeps every violation in field order. An empty
/// report means the input passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the error from `result`, if any.
    pub fn check(&mut self, result: ValidationResult<()>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// True when some violation concerns `field`.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field() == field)
    }

    /// Emits the rejection event shared by every user-input entry point.
    pub(crate) fn logged(self) -> Self {
        if !self.is_success() {
            debug!(violations = self.errors.len(), report = %self, "User input rejected");
        }
        self
    }

    /// Converts to a `Result`, keeping every violation on failure.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// `Validation successful`, or every violation joined with `, `.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("Validation successful");
        }

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Checks `min <= price <= max`.
///
/// Bounds are taken literally: with `min > max` nothing is in range.
///
/// ## Example
/// ```rust
/// use intake_core::money::Money;
/// use intake_core::validation::is_price_in_range;
///
/// let min = Money::zero();
/// let max = Money::from_dollars(100);
/// assert!(is_price_in_range(Money::from_dollars(100), min, max));
/// assert!(!is_price_in_range(Money::from_dollars(101), min, max));
/// ```
pub fn is_price_in_range<T: PartialOrd>(price: T, min: T, max: T) -> bool {
    price >= min && price <= max
}

/// Checks a login name against the default bounds (5 to 15 characters).
pub fn is_valid_username(username: &str) -> bool {
    is_valid_username_with(&RulesConfig::DEFAULT, username)
}

/// Checks a login name against `rules.username`. Empty names are never valid.
pub fn is_valid_username_with(rules: &RulesConfig, username: &str) -> bool {
    if username.is_empty() {
        return false;
    }

    rules.username.allows(username.chars().count())
}

// =============================================================================
// Field Checks
// =============================================================================

/// Username check used by [`validate_user_input`].
///
/// An empty username is reported as missing rather than too short.
pub fn check_profile_username(rules: &RulesConfig, username: &str) -> ValidationResult<()> {
    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    let rule = rules.profile_username;
    if !rule.allows(username.chars().count()) {
        return Err(ValidationError::LengthOutOfRange {
            field: "username".to_string(),
            min: rule.min,
            max: rule.max,
        });
    }

    Ok(())
}

/// Age range check used by [`validate_user_input`].
pub fn check_age(rules: &RulesConfig, age: i64) -> ValidationResult<()> {
    let rule = rules.age;
    if !rule.allows(age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: rule.min,
            max: rule.max,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validation
// =============================================================================

/// Validates a username (3 to 255 characters) and an age (18 to 100).
///
/// Both fields are always checked so the caller learns about every problem in
/// one round trip.
///
/// ## Example
/// ```rust
/// use intake_core::validation::validate_user_input;
///
/// let report = validate_user_input("", 0);
/// assert!(report.to_string().contains("Invalid username"));
/// assert!(report.to_string().contains("Invalid age"));
/// ```
pub fn validate_user_input(username: &str, age: i64) -> ValidationReport {
    validate_user_input_with(&RulesConfig::DEFAULT, username, age)
}

/// [`validate_user_input`] with custom bounds.
pub fn validate_user_input_with(
    rules: &RulesConfig,
    username: &str,
    age: i64,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.check(check_profile_username(rules, username));
    report.check(check_age(rules, age));

    report.logged()
}

// =============================================================================
// Driving Eligibility
// =============================================================================

/// Checks whether someone of `age` may drive in `country_code`.
///
/// ## Returns
/// - `Ok(true)` / `Ok(false)` for a supported country
/// - `Err(ValidationError::NotAllowed)` for any other code
pub fn can_drive(age: i64, country_code: &str) -> ValidationResult<bool> {
    let country = country_code
        .parse::<CountryCode>()
        .inspect_err(|_| warn!(%country_code, "Unknown country code"))?;

    Ok(age >= country.min_driving_age())
}

// =============================================================================
// Unit Tests
// =============================================================================
