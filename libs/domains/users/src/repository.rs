use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// A generic key-addressed record store. `save` is an upsert and is the
/// single write path for both creation and update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user (insert or overwrite by id)
    async fn save(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// List all users (order is store-defined)
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Check whether a user with the given ID exists
    async fn exists_by_id(&self, id: Uuid) -> UserResult<bool>;

    /// Delete a user by ID
    async fn delete_by_id(&self, id: Uuid) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Saved user");
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(result)
    }

    async fn exists_by_id(&self, id: Uuid) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: Uuid) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "test".to_string(),
            "test@example.com".to_string(),
            "secret".to_string(),
        )
    }

    #[tokio::test]
    async fn test_save_and_find_user() {
        let repo = InMemoryUserRepository::new();

        let user = sample_user();
        let saved = repo.save(user.clone()).await.unwrap();
        assert_eq!(saved.email, "test@example.com");

        let fetched = repo.find_by_id(saved.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().id, saved.id);
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let repo = InMemoryUserRepository::new();

        let mut user = sample_user();
        repo.save(user.clone()).await.unwrap();

        user.username = "renamed".to_string();
        repo.save(user.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].username, "renamed");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        let fetched = repo.find_by_id(Uuid::now_v7()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = InMemoryUserRepository::new();

        let user = sample_user();
        assert!(!repo.exists_by_id(user.id).await.unwrap());

        repo.save(user.clone()).await.unwrap();
        assert!(repo.exists_by_id(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryUserRepository::new();

        let user = sample_user();
        repo.save(user.clone()).await.unwrap();

        repo.delete_by_id(user.id).await.unwrap();
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());

        // Deleting again is harmless
        repo.delete_by_id(user.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_find_all_returns_every_record() {
        let repo = InMemoryUserRepository::new();

        for i in 0..3 {
            let user = User::new(
                format!("user{}", i),
                format!("user{}@example.com", i),
                "secret".to_string(),
            );
            repo.save(user).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
