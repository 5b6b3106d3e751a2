//! # Error Types
//!
//! Domain-specific error types for intake-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - Expected bad input (reported by value)             │
//! │  StackError       - Programmer error: reading an empty stack           │
//! │  ConfigError      - Rules file / environment could not be used         │
//! │                                                                         │
//! │  ValidationError and StackError never meet: a caller that sees a       │
//! │  StackError has a bug, a caller that sees a ValidationError has a user │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! Every `ValidationError` renders as `Invalid <field>: <reason>`. Callers that
//! only see text (UI bridges, older scripts) match on `invalid` and on the
//! field name, so the prefix is part of the public surface.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They are returned, never raised, so every validator stays a total function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Invalid {field}: value is required")]
    Required { field: String },

    /// The value has the wrong shape (e.g., a number where text was expected).
    #[error("Invalid {field}: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// Text length is outside the allowed range (inclusive, in characters).
    #[error("Invalid {field}: length must be between {min} and {max} characters")]
    LengthOutOfRange {
        field: String,
        min: usize,
        max: usize,
    },

    /// Numeric value is out of range (inclusive).
    #[error("Invalid {field}: must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("Invalid {field}: must not be negative")]
    Negative { field: String },

    /// Value is not in allowed set.
    #[error("Invalid {field}: must be one of {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`Stack`](crate::stack::Stack) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called on an empty stack.
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading [`RulesConfig`](crate::config::RulesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnvValue { name: String, value: String },

    /// A rule has its lower bound above its upper bound.
    #[error("Invalid rule {rule}: min {min} is greater than max {max}")]
    InvertedBounds { rule: &'static str, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::LengthOutOfRange {
            field: "username".to_string(),
            min: 3,
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "Invalid username: length must be between 3 and 255 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 18,
            max: 100,
        };
        assert_eq!(err.to_string(), "Invalid age: must be between 18 and 100");
    }

    #[test]
    fn test_every_validation_message_starts_with_invalid_field() {
        let errors = vec![
            ValidationError::Required {
                field: "code".to_string(),
            },
            ValidationError::WrongType {
                field: "price".to_string(),
                expected: "a number",
            },
            ValidationError::Negative {
                field: "price".to_string(),
            },
            ValidationError::NotAllowed {
                field: "country code".to_string(),
                allowed: vec!["US".to_string()],
            },
        ];

        for err in errors {
            let prefix = format!("Invalid {}", err.field());
            assert!(err.to_string().starts_with(&prefix), "{err}");
        }
    }

    #[test]
    fn test_stack_error_message() {
        assert_eq!(StackError::Empty.to_string(), "Stack is empty");
    }

    #[test]
    fn test_inverted_bounds_message() {
        let err = ConfigError::InvertedBounds {
            rule: "age",
            min: 30,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "Invalid rule age: min 30 is greater than max 20"
        );
    }
}
