/// In-memory user store
use crate::error::{Result, RosterError};
use crate::types::{Age, User, UserId, Username};

/// Ordered collection of user records
///
/// Records keep insertion order. New ids are `max(held ids) + 1`, so ids are
/// unique among live records but may be reused once the highest one is deleted.
///
/// The store does no locking of its own; callers that share it across tasks
/// wrap it (the server uses a `RwLock`).
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users, in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up the user at position `user_id - 1`
    ///
    /// This is positional: it indexes the current listing and does not compare
    /// against the `id` field.
    ///
    /// # Errors
    /// Returns `NotFound` when the position is past the end of the listing
    pub fn get_by_position(&self, user_id: UserId) -> Result<&User> {
        self.users.get(user_id.position()).ok_or_else(|| {
            tracing::debug!(%user_id, len = self.users.len(), "position out of range");
            RosterError::NotFound(user_id)
        })
    }

    /// Append a new user with the next id
    pub fn create(&mut self, username: Username, age: Age) -> User {
        let user = User::new(self.next_id(), username, age);
        self.users.push(user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        user
    }

    /// Overwrite username and age of the user whose id is `user_id`
    ///
    /// # Errors
    /// Returns `NotFound` if no user has that id; the store is left unchanged
    pub fn update(&mut self, user_id: UserId, username: Username, age: Age) -> Result<User> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| {
                tracing::debug!(%user_id, "update target not found");
                RosterError::NotFound(user_id)
            })?;

        user.username = username;
        user.age = age;

        tracing::info!(%user_id, username = %user.username, "user updated");
        Ok(user.clone())
    }

    /// Remove the user whose id is `user_id` and return it
    ///
    /// # Errors
    /// Returns `NotFound` if no user has that id; the store is left unchanged
    pub fn delete(&mut self, user_id: UserId) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == user_id)
            .ok_or_else(|| {
                tracing::debug!(%user_id, "delete target not found");
                RosterError::NotFound(user_id)
            })?;

        let user = self.users.remove(index);
        tracing::info!(%user_id, "user deleted");
        Ok(user)
    }

    fn next_id(&self) -> UserId {
        let max = self.users.iter().map(|user| user.id.get()).max().unwrap_or(0);
        UserId::new(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_age, validate_username};

    fn name(raw: &str) -> Username {
        validate_username(raw).unwrap()
    }

    fn age(raw: i64) -> Age {
        validate_age(raw).unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = UserStore::new();

        let first = store.create(name("UrbanUser"), age(24));
        let second = store.create(name("RuralUser"), age(40));

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
        assert_eq!(store.list(), &[first, second]);
    }

    #[test]
    fn test_create_uses_max_held_id() {
        let mut store = UserStore::new();
        store.create(name("first"), age(20));
        store.create(name("second"), age(20));
        store.create(name("third"), age(20));

        store.delete(UserId::new(1)).unwrap();
        let next = store.create(name("fourth"), age(20));
        assert_eq!(next.id, UserId::new(4));

        // Dropping the current maximum makes its id available again
        store.delete(UserId::new(4)).unwrap();
        let reused = store.create(name("fifth"), age(20));
        assert_eq!(reused.id, UserId::new(4));
    }

    #[test]
    fn test_ids_reset_after_store_is_emptied() {
        let mut store = UserStore::new();
        let user = store.create(name("UrbanUser"), age(24));
        store.delete(user.id).unwrap();
        assert!(store.is_empty());

        let again = store.create(name("UrbanUser"), age(24));
        assert_eq!(again.id, UserId::new(1));
    }

    #[test]
    fn test_get_by_position_ignores_id_field() {
        let mut store = UserStore::new();
        store.create(name("first"), age(20));
        store.create(name("second"), age(21));
        store.create(name("third"), age(22));
        store.delete(UserId::new(1)).unwrap();

        // Position 1 now holds the record whose id is 2
        let user = store.get_by_position(UserId::new(1)).unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert_eq!(user.username.as_str(), "second");
    }

    #[test]
    fn test_get_by_position_out_of_range_is_not_found() {
        let mut store = UserStore::new();
        assert!(store.get_by_position(UserId::new(1)).unwrap_err().is_not_found());

        store.create(name("first"), age(20));
        assert!(store.get_by_position(UserId::new(1)).is_ok());
        assert_eq!(
            store.get_by_position(UserId::new(2)).unwrap_err(),
            RosterError::NotFound(UserId::new(2))
        );
    }

    #[test]
    fn test_update_in_place() {
        let mut store = UserStore::new();
        store.create(name("UrbanUser"), age(24));
        store.create(name("RuralUser"), age(33));

        let updated = store.update(UserId::new(1), name("UrbanUser2"), age(30)).unwrap();
        assert_eq!(updated.id, UserId::new(1));
        assert_eq!(updated.username.as_str(), "UrbanUser2");
        assert_eq!(updated.age.get(), 30);

        // Order is preserved
        assert_eq!(store.list()[0], updated);
        assert_eq!(store.list()[1].username.as_str(), "RuralUser");
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let mut store = UserStore::new();
        store.create(name("UrbanUser"), age(24));
        let before = store.list().to_vec();

        let err = store.update(UserId::new(9), name("Someone"), age(50)).unwrap_err();
        assert_eq!(err, RosterError::NotFound(UserId::new(9)));
        assert_eq!(err.to_string(), "User was not found");
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let mut store = UserStore::new();
        store.create(name("first"), age(20));
        let second = store.create(name("second"), age(21));
        store.create(name("third"), age(22));

        let removed = store.delete(UserId::new(2)).unwrap();
        assert_eq!(removed, second);

        let remaining: Vec<u32> = store.list().iter().map(|u| u.id.get()).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let mut store = UserStore::new();
        store.create(name("UrbanUser"), age(24));
        store.delete(UserId::new(1)).unwrap();

        assert!(store.delete(UserId::new(1)).unwrap_err().is_not_found());
        assert!(store.is_empty());
    }
}
