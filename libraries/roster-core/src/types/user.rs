/// User domain type
use crate::types::UserId;
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[schema(value_type = u32, minimum = 1, example = 1)]
    pub id: UserId,

    /// Login name, 5 to 20 characters
    #[schema(value_type = String, min_length = 5, max_length = 20, example = "UrbanUser")]
    pub username: Username,

    /// Age in years, 12 to 120
    #[schema(value_type = u8, minimum = 12, maximum = 120, example = 24)]
    pub age: Age,
}

impl User {
    /// Build a user record from already validated parts
    pub fn new(id: UserId, username: Username, age: Age) -> Self {
        Self { id, username, age }
    }
}

/// Validated username
///
/// Only constructible through [`validation::validate_username`] (or `TryFrom`),
/// so a `Username` always satisfies the length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub(crate) fn new_unchecked(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validation::validate_username(&value)
    }
}

impl TryFrom<&str> for Username {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validation::validate_username(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Age(u8);

impl Age {
    pub(crate) const fn new_unchecked(years: u8) -> Self {
        Self(years)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validation::validate_age(value)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_json_shape() {
        let user = User::new(
            UserId::new(1),
            Username::try_from("UrbanUser").unwrap(),
            Age::try_from(24).unwrap(),
        );

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "id": 1, "username": "UrbanUser", "age": 24 }));
    }

    #[test]
    fn test_deserialize_rejects_invalid_fields() {
        let short_name = json!({ "id": 1, "username": "abcd", "age": 24 });
        assert!(serde_json::from_value::<User>(short_name).is_err());

        let too_old = json!({ "id": 1, "username": "UrbanUser", "age": 121 });
        assert!(serde_json::from_value::<User>(too_old).is_err());
    }
}
