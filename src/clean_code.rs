//! Clean-code rules, one small illustration per rule: naming, small
//! single-purpose functions, magic numbers, parameter counts, explicit
//! error returns, and nesting depth.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanCodeError {
    #[error("empty data")]
    EmptyData,
    #[error("divisor cannot be zero")]
    ZeroDivisor,
}

// ============================================================================
// Rule 1: Meaningful names
// ============================================================================

/// The well-named version of `calc(x, y)`.
pub fn percentage_of(value: f64, percent: f64) -> f64 {
    (value * percent) / 100.0
}

// ============================================================================
// Rule 2: Small functions with a single responsibility
// ============================================================================

/// Reject empty input, then keep only the numeric elements.
pub fn validate(data: &[Value]) -> Result<Vec<f64>, CleanCodeError> {
    if data.is_empty() {
        return Err(CleanCodeError::EmptyData);
    }
    Ok(data.iter().filter_map(Value::as_f64).collect())
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn format_sum(total: f64) -> String {
    format!("The sum is: {}", total)
}

// ============================================================================
// Rule 3: No magic numbers
// ============================================================================

pub const SENIOR_AGE_DEFAULT: u32 = 65;

/// Threshold above which a person counts as a senior. The environment
/// variable `SENIOR_AGE_THRESHOLD` overrides the default; unparseable
/// values fall back to it.
pub fn senior_age_threshold() -> u32 {
    std::env::var("SENIOR_AGE_THRESHOLD")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(SENIOR_AGE_DEFAULT)
}

pub fn is_senior(age: u32) -> bool {
    age > senior_age_threshold()
}

// ============================================================================
// Rule 4: Comments that add information
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionAttempts(pub u32);

impl ConnectionAttempts {
    pub fn record_retry(&mut self) {
        // Counts the upcoming connection attempt, not the completed one.
        self.0 += 1;
    }
}

// ============================================================================
// Rule 5: Avoid long parameter lists
// ============================================================================

/// Grouping five loose constructor parameters into one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub address: String,
    pub phone: String,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

#[derive(Default)]
pub struct UserBuilder {
    first_name: String,
    last_name: String,
    age: u32,
    address: String,
    phone: String,
}

impl UserBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn build(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            address: self.address,
            phone: self.phone,
        }
    }
}

/// Mapping an untyped JSON blob into a typed record, instead of plucking
/// fields by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    pub make: String,
    pub model: String,
    pub year: u32,
}

pub fn parse_car_listing(json: &str) -> Result<CarListing, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Rule 6: Explicit error handling
// ============================================================================

pub fn divide(a: f64, b: f64) -> Result<f64, CleanCodeError> {
    if b == 0.0 {
        return Err(CleanCodeError::ZeroDivisor);
    }
    Ok(a / b)
}

// ============================================================================
// Rule 7: Avoid deep nesting
// ============================================================================

/// Guard clauses instead of a four-level `if` pyramid. Style illustration
/// only; the original "good" and "bad" snippets test different conditions,
/// so no shared behavior is implied.
pub fn greeting(logged_in: bool, suspended: bool, wants_greeting: bool) -> Option<&'static str> {
    if !logged_in {
        return None;
    }
    if suspended {
        return None;
    }
    if !wants_greeting {
        return None;
    }
    Some("Hola")
}
