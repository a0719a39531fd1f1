//! In-memory user store
//!
//! An ordered list of users plus the next id to hand out. All access goes
//! through a single `RwLock`: reads share it, create and delete hold it
//! exclusively so id allocation and removal are atomic with respect to every
//! other request.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{NewUser, User, UserId};

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: UserId,
}

impl Inner {
    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id.to_string() == id)
    }
}

/// Shared handle to the user collection; clones share the same data
#[derive(Debug, Clone)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    /// An empty store whose first id is 1
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// A store holding `users` in the given order
    ///
    /// The id counter starts one above the highest id present.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { users, next_id })),
        }
    }

    /// The store the service starts with: two sample users, next id 3
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new(
                1,
                NewUser {
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                },
            ),
            User::new(
                2,
                NewUser {
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                },
            ),
        ])
    }

    /// Snapshot of all users in insertion order
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Find a user whose decimal id equals `id` exactly
    ///
    /// Matching is textual, so `"01"` does not find user 1.
    pub async fn get(&self, id: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner.position(id).map(|index| inner.users[index].clone())
    }

    /// Append a new user under the next id and advance the counter
    pub async fn create(&self, fields: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let user = User::new(inner.next_id, fields);
        inner.users.push(user.clone());
        inner.next_id += 1;
        user
    }

    /// Remove the user matching `id`, keeping the others in order
    ///
    /// The id counter is never rewound, so removed ids are not reissued.
    pub async fn delete(&self, id: &str) -> Option<User> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        Some(inner.users.remove(index))
    }

    /// The id the next created user will receive
    pub async fn next_id(&self) -> UserId {
        self.inner.read().await.next_id
    }

    /// Number of users currently stored
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether the store holds no users
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|user| user.id).collect()
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = UserStore::seeded();
        let users = store.list().await;

        assert_eq!(ids(&users), vec![1, 2]);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].email, "jane@example.com");
        assert_eq!(store.next_id().await, 3);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_appends() {
        let store = UserStore::seeded();

        let ann = store.create(fields("Ann")).await;
        assert_eq!(ann.id, 3);
        assert_eq!(store.next_id().await, 4);

        let users = store.list().await;
        assert_eq!(ids(&users), vec![1, 2, 3]);
        assert_eq!(users[2], ann);
    }

    #[tokio::test]
    async fn test_get_matches_decimal_text() {
        let store = UserStore::seeded();

        assert_eq!(store.get("2").await.map(|u| u.name), Some("Jane Smith".to_string()));
        assert!(store.get("02").await.is_none());
        assert!(store.get("99").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_remaining() {
        let store = UserStore::seeded();
        store.create(fields("Ann")).await;
        store.create(fields("Bob")).await;

        let removed = store.delete("2").await.unwrap();
        assert_eq!(removed.name, "Jane Smith");
        assert_eq!(ids(&store.list().await), vec![1, 3, 4]);
        assert!(store.get("2").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_untouched() {
        let store = UserStore::seeded();
        assert!(store.delete("42").await.is_none());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_never_reused_after_delete() {
        let store = UserStore::seeded();
        let ann = store.create(fields("Ann")).await;
        store.delete(&ann.id.to_string()).await.unwrap();

        let bob = store.create(fields("Bob")).await;
        assert_eq!(bob.id, 4);
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store = UserStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.create(fields("Ann")).await.id, 1);
    }

    #[tokio::test]
    async fn test_with_users_counter_above_highest_id() {
        let store = UserStore::with_users(vec![
            User::new(10, fields("Ann")),
            User::new(4, fields("Bob")),
        ]);
        assert_eq!(store.next_id().await, 11);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = UserStore::seeded();

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(fields(&format!("user{i}"))).await.id })
            })
            .collect();

        let mut issued = Vec::new();
        for task in tasks {
            issued.push(task.await.unwrap());
        }
        issued.sort_unstable();

        assert_eq!(issued, (3..53).collect::<Vec<_>>());
        assert_eq!(store.len().await, 52);
        assert_eq!(store.next_id().await, 53);
    }
}
