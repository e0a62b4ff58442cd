/// User service - shares one `UserStore` across request handlers
use roster_core::{Age, Result, User, UserId, UserStore, Username};
use tokio::sync::RwLock;

/// Serializes access to the store
///
/// Reads share the lock. Each mutation holds the write lock for the whole
/// find-then-modify step, so concurrent creates never compute the same id.
#[derive(Debug, Default)]
pub struct UserService {
    store: RwLock<UserStore>,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub async fn list(&self) -> Vec<User> {
        self.store.read().await.list().to_vec()
    }

    /// Number of users currently held
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn get_by_position(&self, user_id: UserId) -> Result<User> {
        self.store.read().await.get_by_position(user_id).cloned()
    }

    pub async fn create(&self, username: Username, age: Age) -> User {
        self.store.write().await.create(username, age)
    }

    pub async fn update(&self, user_id: UserId, username: Username, age: Age) -> Result<User> {
        self.store.write().await.update(user_id, username, age)
    }

    pub async fn delete(&self, user_id: UserId) -> Result<User> {
        self.store.write().await.delete(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::validation::{validate_age, validate_username};
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let service = Arc::new(UserService::default());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let name = validate_username(&format!("user{:03}", i)).unwrap();
                    service.create(name, validate_age(30).unwrap()).await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id.get());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<u32>>());
        assert_eq!(service.count().await, 50);
    }

    #[tokio::test]
    async fn test_injected_store_is_used() {
        let mut store = UserStore::new();
        store.create(
            validate_username("Preloaded").unwrap(),
            validate_age(44).unwrap(),
        );

        let service = UserService::new(store);
        let users = service.list().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username.as_str(), "Preloaded");
    }
}
