use std::sync::Arc;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for user operations
///
/// Owns id parsing and the read-modify-write flow. Handlers stay thin and
/// hand raw path strings straight through.
#[derive(Debug, Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user and return its generated id.
    pub async fn create_user(&self, create: CreateUser) -> UserResult<Uuid> {
        let user = User::new(create.username, create.email, create.password);
        let saved = self.repository.save(user).await?;

        tracing::info!(user_id = %saved.id, "Created user");
        Ok(saved.id)
    }

    /// Fetch a single user. Returns `Ok(None)` when the id is unknown.
    pub async fn get_user(&self, id: &str) -> UserResult<Option<UserResponse>> {
        let id = Uuid::parse_str(id)?;
        let user = self.repository.find_by_id(id).await?;
        Ok(user.map(UserResponse::from))
    }

    /// List all users.
    pub async fn get_all_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Update username and/or password on an existing user.
    ///
    /// Silently does nothing when the id is unknown. Empty strings in the
    /// update are ignored, and email and timestamps never change here.
    pub async fn update_user(&self, id: &str, update: UpdateUser) -> UserResult<()> {
        let id = Uuid::parse_str(id)?;

        let Some(mut user) = self.repository.find_by_id(id).await? else {
            tracing::warn!(user_id = %id, "Update skipped, user not found");
            return Ok(());
        };

        user.apply_update(update);
        self.repository.save(user).await?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(())
    }

    /// Delete a user. Silently does nothing when the id is unknown.
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        let id = Uuid::parse_str(id)?;

        if !self.repository.exists_by_id(id).await? {
            tracing::warn!(user_id = %id, "Delete skipped, user not found");
            return Ok(());
        }

        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};

    fn create_request() -> CreateUser {
        CreateUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_create_then_get_user() {
        let service = service();

        let id = service.create_user(create_request()).await.unwrap();

        let user = service.get_user(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_get_user_rejects_malformed_id() {
        let service = service();

        let err = service.get_user("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_user_returns_none() {
        let service = service();

        let result = service.get_user(&Uuid::now_v7().to_string()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let service = service();

        assert!(service.get_all_users().await.unwrap().is_empty());

        service.create_user(create_request()).await.unwrap();
        service
            .create_user(CreateUser {
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(service.get_all_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_non_empty_fields() {
        let service = service();
        let id = service.create_user(create_request()).await.unwrap();

        service
            .update_user(
                &id.to_string(),
                UpdateUser {
                    username: Some("alice2".to_string()),
                    password: Some("".to_string()),
                },
            )
            .await
            .unwrap();

        let user = service.get_user(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(user.username, "alice2");
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_user_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().times(0);

        let service = UserService::new(Arc::new(repo));
        let result = service
            .update_user(
                &Uuid::now_v7().to_string(),
                UpdateUser {
                    username: Some("ghost".to_string()),
                    password: None,
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = service();
        let id = service.create_user(create_request()).await.unwrap();

        service.delete_user(&id.to_string()).await.unwrap();
        assert!(service.get_user(&id.to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_user_never_touches_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().times(0);

        let service = UserService::new(Arc::new(repo));
        let result = service.delete_user(&Uuid::now_v7().to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_rejects_malformed_id() {
        let service = service();

        let err = service.delete_user("42").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidId(_)));
    }
}
