/// ID types for roster entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Assigned by [`UserStore`](crate::store::UserStore) on creation and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Create a new user ID
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position this id addresses in an ordered listing
    pub(crate) fn position(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_zero_based() {
        assert_eq!(UserId::new(1).position(), 0);
        assert_eq!(UserId::new(42).position(), 41);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
