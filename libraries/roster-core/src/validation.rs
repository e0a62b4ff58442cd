//! Input validation for user fields.
//!
//! Every value that reaches [`UserStore`](crate::store::UserStore) passes
//! through one of these functions first.

use crate::types::{Age, UserId, Username};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Addressable user ids
pub const USER_ID_RANGE: RangeInclusive<i64> = 1..=100;

/// Allowed username length, in characters
pub const USERNAME_LENGTH: RangeInclusive<usize> = 5..=20;

/// Allowed age, in years
pub const AGE_RANGE: RangeInclusive<i64> = 12..=120;

/// Input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserId,
    Username,
    Age,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::UserId => "user_id",
            Field::Username => "username",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input outside its declared range or length
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: Field,
    value: String,
    message: String,
}

impl ValidationError {
    pub fn new(field: Field, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// The rejected input, as received
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validate a user id supplied by a caller
pub fn validate_user_id(raw: i64) -> Result<UserId, ValidationError> {
    if !USER_ID_RANGE.contains(&raw) {
        return Err(ValidationError::new(
            Field::UserId,
            raw.to_string(),
            format!(
                "user_id must be between {} and {}",
                USER_ID_RANGE.start(),
                USER_ID_RANGE.end()
            ),
        ));
    }

    let id = u32::try_from(raw).map_err(|_| {
        ValidationError::new(Field::UserId, raw.to_string(), "user_id is out of range")
    })?;
    Ok(UserId::new(id))
}

/// Validate a username
///
/// Length is counted in characters, not bytes.
pub fn validate_username(raw: &str) -> Result<Username, ValidationError> {
    let len = raw.chars().count();
    if !USERNAME_LENGTH.contains(&len) {
        return Err(ValidationError::new(
            Field::Username,
            raw,
            format!(
                "username must be between {} and {} characters, got {}",
                USERNAME_LENGTH.start(),
                USERNAME_LENGTH.end(),
                len
            ),
        ));
    }

    Ok(Username::new_unchecked(raw.to_string()))
}

/// Validate an age in years
pub fn validate_age(raw: i64) -> Result<Age, ValidationError> {
    if !AGE_RANGE.contains(&raw) {
        return Err(ValidationError::new(
            Field::Age,
            raw.to_string(),
            format!(
                "age must be between {} and {}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
        ));
    }

    let years = u8::try_from(raw)
        .map_err(|_| ValidationError::new(Field::Age, raw.to_string(), "age is out of range"))?;
    Ok(Age::new_unchecked(years))
}
