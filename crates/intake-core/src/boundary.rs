//! # Dynamic Input Boundary
//!
//! Entry points for payloads that arrive untyped, e.g. JSON from a web form
//! or an IPC bridge.
//!
//! ## Shape First, Rules Second
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  serde_json::Value                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shape check (this module)                                             │
//! │       ├── wrong type → ValidationError::WrongType                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  typed rule (validation / discount)                                    │
//! │       └── out of range, unknown code, ...                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `"18"` string is not an age and `10` is not a coupon code, even though a
//! lenient parser could coerce them. Coercion hides client bugs.

use serde_json::Value;

use crate::config::RulesConfig;
use crate::discount::calculate_discount;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{
    can_drive, check_age, check_profile_username, is_valid_username_with, ValidationReport,
};

fn wrong_type(field: &str, expected: &'static str) -> ValidationError {
    ValidationError::WrongType {
        field: field.to_string(),
        expected,
    }
}

fn too_large(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: i64::MIN,
        max: i64::MAX,
    }
}

/// Reads a whole number. Fractional or non-numeric values are rejected; whole
/// numbers that don't fit in an `i64` are out of range.
fn as_whole_number(value: &Value, field: &str) -> ValidationResult<i64> {
    let Value::Number(number) = value else {
        return Err(wrong_type(field, "a number"));
    };

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.is_u64() {
        return Err(too_large(field));
    }

    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            // -2^63 and 2^63 are exact; i64::MAX as f64 would round up to 2^63.
            if (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&f) {
                Ok(f as i64)
            } else {
                Err(too_large(field))
            }
        }
        _ => Err(wrong_type(field, "a whole number")),
    }
}

fn as_text<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| wrong_type(field, "a string"))
}

// =============================================================================
// Username
// =============================================================================

/// [`is_valid_username`](crate::validation::is_valid_username) for untyped
/// input.
///
/// `null`, `false`, `0`, `""` and every other non-string are not usernames.
pub fn is_valid_username_value(username: &Value) -> bool {
    is_valid_username_value_with(&RulesConfig::DEFAULT, username)
}

pub fn is_valid_username_value_with(rules: &RulesConfig, username: &Value) -> bool {
    match username {
        Value::String(name) => is_valid_username_with(rules, name),
        _ => false,
    }
}

// =============================================================================
// User Input
// =============================================================================

/// [`validate_user_input`](crate::validation::validate_user_input) for
/// untyped input. Shape and range violations of both fields are collected.
///
/// ## Example
/// ```rust
/// use intake_core::boundary::validate_user_input_value;
/// use serde_json::json;
///
/// assert!(validate_user_input_value(&json!("abc"), &json!(18)).is_success());
/// assert!(!validate_user_input_value(&json!(1), &json!(18)).is_success());
/// assert!(!validate_user_input_value(&json!("abc"), &json!("18")).is_success());
/// ```
pub fn validate_user_input_value(username: &Value, age: &Value) -> ValidationReport {
    validate_user_input_value_with(&RulesConfig::DEFAULT, username, age)
}

pub fn validate_user_input_value_with(
    rules: &RulesConfig,
    username: &Value,
    age: &Value,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    report.check(
        as_text(username, "username").and_then(|name| check_profile_username(rules, name)),
    );
    report.check(as_whole_number(age, "age").and_then(|age| check_age(rules, age)));

    report.logged()
}

// =============================================================================
// Discount
// =============================================================================

/// [`calculate_discount`] for untyped input.
///
/// `price` is in major units (`10` means $10.00); the code must be a string.
pub fn calculate_discount_value(price: &Value, discount_code: &Value) -> ValidationResult<Money> {
    let amount = price.as_f64().ok_or_else(|| wrong_type("price", "a number"))?;

    // Checked before rounding so -0.004 is not mistaken for a free item.
    if amount < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    let price = Money::from_major_f64(amount).ok_or_else(|| wrong_type("price", "a number"))?;

    let code = as_text(discount_code, "discount code")?;
    calculate_discount(price, code)
}

// =============================================================================
// Driving Eligibility
// =============================================================================

/// [`can_drive`] for untyped input.
pub fn can_drive_value(age: &Value, country_code: &Value) -> ValidationResult<bool> {
    let age = as_whole_number(age, "age")?;
    let country_code = as_text(country_code, "country code")?;
    can_drive(age, country_code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_invalid(message: String) -> bool {
        message.to_lowercase().contains("invalid")
    }

    #[test]
    fn test_is_valid_username_value_falsy() {
        assert!(!is_valid_username_value(&Value::Null));
        assert!(!is_valid_username_value(&json!(0)));
        assert!(!is_valid_username_value(&json!("")));
        assert!(!is_valid_username_value(&json!(false)));
        assert!(!is_valid_username_value(&json!(12345)));
    }

    #[test]
    fn test_is_valid_username_value_strings() {
        assert!(is_valid_username_value(&json!("a".repeat(5))));
        assert!(is_valid_username_value(&json!("a".repeat(15))));
        assert!(!is_valid_username_value(&json!("a".repeat(16))));
    }

    #[test]
    fn test_validate_user_input_value_success() {
        let report = validate_user_input_value(&json!("abc"), &json!(18));
        assert!(report.to_string().to_lowercase().contains("success"));
    }

    #[test]
    fn test_validate_user_input_value_invalid_cases() {
        let cases = [
            (json!(1), json!(18)),
            (json!("ab"), json!(18)),
            (json!("a".repeat(256)), json!(18)),
            (json!("abc"), json!("18")),
            (json!("abc"), json!(17)),
            (json!("abc"), json!(101)),
            (json!("abc"), json!(18.5)),
            (Value::Null, json!(18)),
        ];

        for (username, age) in cases {
            let report = validate_user_input_value(&username, &age);
            assert!(is_invalid(report.to_string()), "{username} / {age}");
        }
    }

    #[test]
    fn test_validate_user_input_value_both_invalid() {
        let report = validate_user_input_value(&json!(""), &json!(0));
        let message = report.to_string().to_lowercase();
        assert!(message.contains("invalid username"));
        assert!(message.contains("invalid age"));
    }

    #[test]
    fn test_validate_user_input_value_wrong_types_accumulate() {
        let report = validate_user_input_value(&json!(1), &json!("18"));
        assert_eq!(
            report.errors(),
            &[wrong_type("username", "a string"), wrong_type("age", "a number")]
        );
    }

    #[test]
    fn test_validate_user_input_value_logs_rejection() {
        let rejected = crate::test_support::count_events(|| {
            validate_user_input_value(&json!(1), &json!("18"));
        });
        assert_eq!(rejected, 1);

        let accepted = crate::test_support::count_events(|| {
            validate_user_input_value(&json!("abc"), &json!(18));
        });
        assert_eq!(accepted, 0);
    }

    #[test]
    fn test_validate_user_input_value_integral_float_age() {
        assert!(validate_user_input_value(&json!("abc"), &json!(18.0)).is_success());
    }

    #[test]
    fn test_whole_number_beyond_i64_is_out_of_range() {
        let cases = [json!(u64::MAX), json!(9_223_372_036_854_775_808.0), json!(-1e19)];
        for age in cases {
            let err = can_drive_value(&age, &json!("US")).unwrap_err();
            assert_eq!(err, too_large("age"), "{age}");
        }

        assert_eq!(can_drive_value(&json!(i64::MAX), &json!("US")), Ok(true));
        assert_eq!(
            can_drive_value(&json!(-9_223_372_036_854_775_808.0), &json!("US")),
            Ok(false)
        );
        assert_eq!(
            can_drive_value(&json!(18.5), &json!("US")),
            Err(wrong_type("age", "a whole number"))
        );
    }

    #[test]
    fn test_calculate_discount_value() {
        assert_eq!(
            calculate_discount_value(&json!(10), &json!("SAVE10")),
            Ok(Money::from_dollars(9))
        );
        assert_eq!(
            calculate_discount_value(&json!(10), &json!("SAVE20")),
            Ok(Money::from_dollars(8))
        );
        assert_eq!(
            calculate_discount_value(&json!(10), &json!("INVALID")),
            Ok(Money::from_dollars(10))
        );
        assert_eq!(
            calculate_discount_value(&json!(9.99), &json!("SAVE10")),
            Ok(Money::from_cents(899))
        );
    }

    #[test]
    fn test_calculate_discount_value_rejects_bad_input() {
        let cases = [
            (json!("10"), json!("SAVE10")),
            (json!(-10), json!("SAVE10")),
            (json!(10), json!(10)),
            (Value::Null, json!("SAVE10")),
        ];

        for (price, code) in cases {
            let err = calculate_discount_value(&price, &code).unwrap_err();
            assert!(is_invalid(err.to_string()), "{price} / {code}");
        }
    }

    #[test]
    fn test_calculate_discount_value_rejects_sub_cent_negative() {
        let negative = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(calculate_discount_value(&json!(-0.004), &json!("SAVE10")), Err(negative));
        assert_eq!(
            calculate_discount_value(&json!(0.004), &json!("SAVE10")),
            Ok(Money::zero())
        );
    }

    #[test]
    fn test_calculate_discount_value_names_failing_field() {
        let err = calculate_discount_value(&json!("10"), &json!("SAVE10")).unwrap_err();
        assert_eq!(err.field(), "price");

        let err = calculate_discount_value(&json!(10), &json!(10)).unwrap_err();
        assert_eq!(err.field(), "discount code");
    }

    #[test]
    fn test_can_drive_value() {
        assert_eq!(can_drive_value(&json!(16), &json!("US")), Ok(true));
        assert_eq!(can_drive_value(&json!(16), &json!("UK")), Ok(false));
        assert!(is_invalid(
            can_drive_value(&json!(18), &json!("ES")).unwrap_err().to_string()
        ));
        assert!(can_drive_value(&json!("18"), &json!("US")).is_err());
        assert!(can_drive_value(&json!(18), &json!(1)).is_err());
    }
}
