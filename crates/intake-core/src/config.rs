//! # Rules Configuration
//!
//! Length and range bounds used by the validators.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INTAKE_USERNAME_MIN=6                                              │
//! │     INTAKE_AGE_MAX=120                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     passed explicitly to RulesConfig::load                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     RulesConfig::DEFAULT                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rules.toml
//! [username]          # is_valid_username
//! min = 5
//! max = 15
//!
//! [profile_username]  # validate_user_input
//! min = 3
//! max = 255
//!
//! [age]
//! min = 18
//! max = 100
//! ```
//!
//! Missing tables fall back to the defaults; a table that is present needs
//! both keys.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Length Rule
// =============================================================================

/// Inclusive character-count bounds for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
}

impl LengthRule {
    pub const fn new(min: usize, max: usize) -> Self {
        LengthRule { min, max }
    }

    /// True when `len` lies within `[min, max]`.
    #[inline]
    pub const fn allows(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

// =============================================================================
// Range Rule
// =============================================================================

/// Inclusive bounds for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRule {
    pub min: i64,
    pub max: i64,
}

impl RangeRule {
    pub const fn new(min: i64, max: i64) -> Self {
        RangeRule { min, max }
    }

    #[inline]
    pub const fn allows(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

// =============================================================================
// Rules Config
// =============================================================================

/// All configurable validation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Bounds for `is_valid_username` (login names).
    #[serde(default = "default_username")]
    pub username: LengthRule,

    /// Bounds for the username checked by `validate_user_input`.
    #[serde(default = "default_profile_username")]
    pub profile_username: LengthRule,

    /// Bounds for the age checked by `validate_user_input`.
    #[serde(default = "default_age")]
    pub age: RangeRule,
}

fn default_username() -> LengthRule {
    RulesConfig::DEFAULT.username
}

fn default_profile_username() -> LengthRule {
    RulesConfig::DEFAULT.profile_username
}

fn default_age() -> RangeRule {
    RulesConfig::DEFAULT.age
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig::DEFAULT
    }
}

impl RulesConfig {
    /// Built-in bounds used by the free validator functions.
    pub const DEFAULT: RulesConfig = RulesConfig {
        username: LengthRule::new(5, 15),
        profile_username: LengthRule::new(3, 255),
        age: RangeRule::new(18, 100),
    };

    /// Parses a TOML document and checks the resulting bounds.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: RulesConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads rules from a TOML file, then applies environment overrides.
    ///
    /// ## Example
    /// ```rust,no_run
    /// use intake_core::config::RulesConfig;
    ///
    /// let rules = RulesConfig::load("rules.toml").unwrap();
    /// assert!(rules.age.min <= rules.age.max);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let mut config: RulesConfig = toml::from_str(&source)?;
        info!(path = %path.display(), "Loaded validation rules");

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for hosts without a rules file.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = RulesConfig::DEFAULT;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `INTAKE_*` overrides read through `lookup`.
    ///
    /// Taking the lookup as a closure keeps tests away from the process
    /// environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_value(&lookup, "INTAKE_USERNAME_MIN", &mut self.username.min)?;
        override_value(&lookup, "INTAKE_USERNAME_MAX", &mut self.username.max)?;
        override_value(
            &lookup,
            "INTAKE_PROFILE_USERNAME_MIN",
            &mut self.profile_username.min,
        )?;
        override_value(
            &lookup,
            "INTAKE_PROFILE_USERNAME_MAX",
            &mut self.profile_username.max,
        )?;
        override_value(&lookup, "INTAKE_AGE_MIN", &mut self.age.min)?;
        override_value(&lookup, "INTAKE_AGE_MAX", &mut self.age.max)?;
        Ok(())
    }

    /// Rejects rules whose lower bound is above the upper bound.
    pub fn validate(&self) -> ConfigResult<()> {
        check_order("username", self.username.min as i64, self.username.max as i64)?;
        check_order(
            "profile_username",
            self.profile_username.min as i64,
            self.profile_username.max as i64,
        )?;
        check_order("age", self.age.min, self.age.max)?;
        Ok(())
    }
}

fn override_value<F, T>(lookup: &F, name: &str, target: &mut T) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(());
    };

    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            name: name.to_string(),
            value: raw.clone(),
        })?;

    debug!(%name, %value, "Applied environment override");
    *target = value;
    Ok(())
}

fn check_order(rule: &'static str, min: i64, max: i64) -> ConfigResult<()> {
    if min > max {
        return Err(ConfigError::InvertedBounds { rule, min, max });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.username, LengthRule::new(5, 15));
        assert_eq!(config.profile_username, LengthRule::new(3, 255));
        assert_eq!(config.age, RangeRule::new(18, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RulesConfig::from_toml_str(
            r#"
            [age]
            min = 21
            max = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.age, RangeRule::new(21, 99));
        assert_eq!(config.username, RulesConfig::DEFAULT.username);
        assert_eq!(config.profile_username, RulesConfig::DEFAULT.profile_username);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RulesConfig::from_toml_str("").unwrap(), RulesConfig::DEFAULT);
    }

    #[test]
    fn test_toml_rejects_inverted_bounds() {
        let err = RulesConfig::from_toml_str(
            r#"
            [username]
            min = 20
            max = 10
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvertedBounds {
                rule: "username",
                min: 20,
                max: 10
            }
        ));
    }

    #[test]
    fn test_toml_parse_error() {
        let err = RulesConfig::from_toml_str("[age]\nmin = \"old\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RulesConfig::DEFAULT;
        config
            .apply_env_overrides(env(&[
                ("INTAKE_USERNAME_MIN", "6"),
                ("INTAKE_AGE_MAX", " 120 "),
            ]))
            .unwrap();

        assert_eq!(config.username, LengthRule::new(6, 15));
        assert_eq!(config.age, RangeRule::new(18, 120));
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = RulesConfig::DEFAULT;
        let err = config
            .apply_env_overrides(env(&[("INTAKE_AGE_MIN", "eighteen")]))
            .unwrap_err();

        match err {
            ConfigError::InvalidEnvValue { name, value } => {
                assert_eq!(name, "INTAKE_AGE_MIN");
                assert_eq!(value, "eighteen");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(config.age, RulesConfig::DEFAULT.age);
    }

    #[test]
    fn test_rules_allow() {
        let rule = LengthRule::new(3, 5);
        assert!(!rule.allows(2));
        assert!(rule.allows(3));
        assert!(rule.allows(5));
        assert!(!rule.allows(6));

        let range = RangeRule::new(-1, 1);
        assert!(range.allows(-1));
        assert!(!range.allows(2));
    }
}
